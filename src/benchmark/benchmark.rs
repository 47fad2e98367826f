use std::time::Instant;

use crate::simulation::forces::{ForceSet, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::Body;
use crate::simulation::universe::Universe;
use crate::simulation::vector::Vector2D;

/// Universe of `n` bodies spread on a spiral, far enough apart that nothing
/// touches for a few ticks
fn spiral_universe(n: usize) -> Universe {
    let mut universe = Universe::new(1.0e4);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = Vector2D::from_polar(10.0 * (i_f + 1.0), i_f * 0.37);
        let velocity = Vector2D::from_polar(0.5, i_f * 0.13);
        universe.add_body(Body::new(format!("b{i}"), position, velocity, 1.0e3, 0.01, "b.gif"));
    }
    universe
}

pub fn bench_forces() {
    let ns = [100, 200, 400, 800, 1600];

    for n in ns {
        let universe = spiral_universe(n);
        let forces = ForceSet::standard(GRAVITATIONAL_CONSTANT);

        // warm up
        let _ = forces.net_force(0, universe.bodies());

        let t0 = Instant::now();
        let mut net = Vector2D::zeros();
        for i in 0..n {
            net += forces.net_force(i, universe.bodies());
        }
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, all net forces = {dt:8.6} s, |sum| = {:.3e}", net.magnitude());
    }
}

pub fn bench_update() {
    let ns = [100, 200, 400, 800];
    let steps = 5; // ticks per size

    for n in ns {
        let mut universe = spiral_universe(n);

        // warm up
        universe.update(0.01);

        let t0 = Instant::now();
        let mut completed = 0;
        for _ in 0..steps {
            if universe.update(0.01) {
                completed += 1;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, update = {per_step:8.6} s/step, completed {completed}/{steps}");
    }
}
