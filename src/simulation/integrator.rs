//! Fixed-step time integration for a single body
//!
//! First-order semi-implicit Euler: the velocity is kicked by this step's
//! acceleration first, then the position drifts with the new velocity.
//! Local error is O(dt^2) per step, so it is only usable with small `dt`.

use crate::simulation::states::Body;
use crate::simulation::vector::Vector2D;

/// Advance `body` by one step of length `dt` under `net_force`
///
/// Each quantity is rebuilt as direction * magnitude. A driving vector that
/// is exactly zero therefore contributes exactly zero (its unit vector is zero)
/// rather than anything NaN-flavoured.
pub fn semi_implicit_euler(body: &mut Body, net_force: Vector2D, dt: f64) {
    // a = F / m
    body.acceleration = net_force.unit_vector() * (net_force.magnitude() / body.mass);

    // v_n+1 = v_n + a dt
    let a = body.acceleration;
    body.velocity += a.unit_vector() * (a.magnitude() * dt);

    // x_n+1 = x_n + v_n+1 dt
    let v = body.velocity;
    body.position += v.unit_vector() * (v.magnitude() * dt);
}
