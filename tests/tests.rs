use std::f64::consts::TAU;
use std::path::PathBuf;

use nbsim::{Body, ForceSet, FrameRecorder, RunConfig, Scenario, Universe, Vector2D};
use nbsim::{list_scenarios, parse_universe, serialize_universe, GRAVITATIONAL_CONSTANT};

/// Body with radius 1 and a picture named after it
pub fn body(name: &str, x: f64, y: f64, m: f64) -> Body {
    Body::new(name, Vector2D::new(x, y), Vector2D::zeros(), m, 1.0, &format!("{name}.gif"))
}

/// Two equal bodies at (-d/2, 0) and (d/2, 0), at rest
pub fn symmetric_pair(dist: f64, m: f64) -> Universe {
    let mut u = Universe::new(10.0);
    u.add_body(body("a", -dist / 2.0, 0.0, m));
    u.add_body(body("b", dist / 2.0, 0.0, m));
    u
}

pub fn scenarios_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

pub fn sample_vectors() -> Vec<Vector2D> {
    vec![
        Vector2D::new(1.0, 0.0),
        Vector2D::new(0.0, -3.5),
        Vector2D::new(-2.0, -2.0),
        Vector2D::new(1.0e11, -4.0e10),
        Vector2D::new(-1.0e-6, 3.0e-7),
        Vector2D::new(-5.0, 0.0),
    ]
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn scaling_is_invertible() {
    for u in sample_vectors() {
        for s in [3.0, -0.25, 1.0e9] {
            let back = u.scale(s).scale(1.0 / s);
            assert!(back.distance(&u) <= 1e-12 * u.magnitude(), "{u} scaled by {s} came back as {back}");
        }
    }
}

#[test]
fn unit_vectors_have_length_one() {
    for v in sample_vectors() {
        assert!((v.unit_vector().magnitude() - 1.0).abs() < 1e-12);
    }
    assert_eq!(Vector2D::zeros().unit_vector(), Vector2D::zeros());
}

#[test]
fn phi_stays_in_range() {
    for v in sample_vectors() {
        let phi = v.phi();
        assert!((0.0..TAU).contains(&phi), "phi of {v} = {phi}");
    }
}

#[test]
fn distance_is_symmetric() {
    let vs = sample_vectors();
    for a in &vs {
        for b in &vs {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

// ==================================================================================
// Integration tests
// ==================================================================================

#[test]
fn integration_is_deterministic() {
    let start = Body::new("p", Vector2D::new(3.0, -1.0), Vector2D::new(0.2, 0.7), 2.5, 1.0, "p.gif");
    let steps = [
        (Vector2D::new(1.0, 0.0), 0.1),
        (Vector2D::new(-0.3, 2.2), 0.05),
        (Vector2D::zeros(), 0.2),
        (Vector2D::new(7.0, -7.0), 0.01),
    ];

    let mut first = start.clone();
    let mut second = start.clone();
    for (force, dt) in steps {
        first.update(force, dt);
        second.update(force, dt);
        assert_eq!(first.position, second.position);
        assert_eq!(first.velocity, second.velocity);
        assert_eq!(first.acceleration, second.acceleration);
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn symmetric_pair_feels_opposite_forces() {
    let u = symmetric_pair(4.0, 10.0);
    let forces = ForceSet::standard(GRAVITATIONAL_CONSTANT);

    let fa = forces.net_force(0, u.bodies());
    let fb = forces.net_force(1, u.bodies());

    assert_eq!(fa + fb, Vector2D::zeros());
    assert!(fa.x() > 0.0, "force on a is not toward b");
    // G * 10 * 10 / 16
    assert!((fa.magnitude() - GRAVITATIONAL_CONSTANT * 100.0 / 16.0).abs() < 1e-24);
}

#[test]
fn gravity_inverse_square_law() {
    let forces = ForceSet::standard(1.0);
    let near = forces.net_force(0, symmetric_pair(2.0, 1.0).bodies());
    let far = forces.net_force(0, symmetric_pair(4.0, 1.0).bodies());
    let ratio = near.magnitude() / far.magnitude();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected 4x, got {ratio}");
}

#[test]
fn pair_falls_together_symmetrically() {
    let mut u = symmetric_pair(4.0, 10.0);
    assert!(u.update(0.1));

    let a = u.get_by_name("a").unwrap();
    let b = u.get_by_name("b").unwrap();
    assert!(a.velocity.x() > 0.0);
    assert!(b.velocity.x() < 0.0);

    let (aa, ab) = (a.acceleration.magnitude(), b.acceleration.magnitude());
    assert!(((aa - ab) / aa).abs() < 1e-9);

    assert_eq!(u.len(), 2);
    assert!(a.position.distance(&b.position) < 4.0);
    assert!(!u.collision());
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn merge_conserves_mass_and_drops_one_body() {
    let text = "3\n200\n0 0 0 100 10 comet.gif\n0.5 0 0 0 1 rock.gif\n50 50 0 0 3 far.gif\n";
    let mut u = parse_universe(text).unwrap();
    let before = u.total_mass();

    assert!(u.update(1.0));

    assert_eq!(u.len(), 2);
    assert_eq!(u.total_mass(), before);
    assert_eq!(u.get_by_name("comet").unwrap().mass, 11.0);
    assert!(u.get_by_name("rock").is_none());
    assert!(u.get_by_name("far").is_some());
}

#[test]
fn aborted_tick_leaves_clock_and_renderer_alone() {
    let mut u = symmetric_pair(0.5, 1.0);
    u.set_max_time(1.0);
    let mut rec = FrameRecorder::new();

    assert!(!u.update_with(0.1, &mut rec));
    assert!(!u.update_with(0.1, &mut rec));
    assert_eq!(u.time(), 0.0);
    assert!(rec.frames.is_empty());
    assert_eq!(u.len(), 2);
    assert!(u.continue_simulation());
}

// ==================================================================================
// Driving loop tests
// ==================================================================================

#[test]
fn termination_is_monotonic() {
    let mut u = symmetric_pair(8.0, 1.0);
    u.set_max_time(1.0);

    let mut ticks = 0;
    while u.continue_simulation() {
        let t = u.time();
        assert!(u.update(0.25));
        assert!(u.time() >= t);
        ticks += 1;
    }
    assert_eq!(ticks, 4);
    assert!(u.time() >= 1.0);

    for _ in 0..3 {
        u.update(0.25);
        assert!(!u.continue_simulation());
    }
}

#[test]
fn one_frame_per_completed_tick() {
    let mut u = symmetric_pair(8.0, 1.0);
    let mut rec = FrameRecorder::new();
    for _ in 0..3 {
        assert!(u.update_with(0.5, &mut rec));
    }
    assert_eq!(rec.frames.len(), 3);

    let last = rec.last().unwrap();
    assert_eq!(last.sprites.len(), 2);
    assert_eq!(last.sprites[0].resource, "data/a.gif");
    let a = u.get_by_name("a").unwrap();
    assert_eq!(last.sprites[0].x, u.normalized(a.position.x()));
    assert_eq!(last.sprites[0].y, 0.5);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_round_trip() {
    let text = "3\n2.5e11\n1.496e11 0 0 29800 5.974e24 earth.gif\n\n0 0 0 0 1.989e30 sun.gif\n-5.79e10 1.5 -3 47900 3.302e23 mercury.gif\n";
    let original = parse_universe(text).unwrap();
    let reparsed = parse_universe(&serialize_universe(&original)).unwrap();

    assert_eq!(reparsed.len(), original.len());
    assert_eq!(reparsed.radius(), original.radius());
    for (a, b) in original.bodies().iter().zip(reparsed.bodies()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.mass, b.mass);
        assert_eq!(a.picture_path, b.picture_path);
    }
}

#[test]
fn bundled_scenarios_are_listed() {
    let found = list_scenarios(scenarios_dir()).unwrap();
    let names: Vec<_> = found
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_owned))
        .collect();
    assert_eq!(names, ["binary.txt", "impact.txt", "planets.txt"]);
}

#[test]
fn impact_config_runs_to_completion() {
    let cfg = RunConfig::from_reader(std::fs::File::open(scenarios_dir().join("impact.yaml")).unwrap()).unwrap();
    let mut scenario = Scenario::build_scenario(&cfg, &scenarios_dir()).unwrap();
    let mut rec = FrameRecorder::new();

    let summary = scenario.run(&mut rec);

    assert_eq!(summary.ticks, 3);
    assert_eq!(summary.aborted_ticks, 0);
    assert_eq!(summary.merges, 1);
    assert_eq!(summary.final_time, 3.0);
    assert!(!summary.stalled);
    assert_eq!(rec.frames.len(), 3);
    assert_eq!(scenario.universe.len(), 1);
    assert_eq!(scenario.universe.get_by_name("comet").unwrap().mass, 11.0);
}

#[test]
fn planets_orbit_without_collisions() {
    let cfg = RunConfig::new("planets.txt", 25000.0, 250000.0);
    let mut scenario = Scenario::build_scenario(&cfg, &scenarios_dir()).unwrap();
    let mut rec = FrameRecorder::new();

    let summary = scenario.run(&mut rec);

    assert_eq!(summary.ticks, 10);
    assert_eq!(summary.merges, 0);
    assert_eq!(scenario.universe.len(), 5);

    let sun = scenario.universe.get_by_name("sun").unwrap();
    assert!(sun.position.magnitude() < 1.0e6);
    let earth = scenario.universe.get_by_name("earth").unwrap();
    // moving counter-clockwise, pulled toward the sun
    assert!(earth.position.y() > 0.0);
    assert!(earth.velocity.x() < 0.0);
}
