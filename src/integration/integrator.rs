use crate::collision::AABB;
use crate::objects::body::Body;

/// Integrates a body's state forward by `elapsed` seconds using explicit (forward) Euler.
///
/// Position advances with the velocity from *before* this step's acceleration is applied.
pub fn integrate(body: &mut Body, elapsed: f64) {
    if body.fixed || body.destroyed {
        return;
    }

    // p = p + v*dt, using the old v
    body.position += body.velocity * elapsed;
    // v = v + a*dt
    body.velocity += body.acceleration * elapsed;
}

/// Bounces a body off the arena walls, each axis independently.
///
/// The velocity component is reversed and scaled by the body's restitution, and the
/// body is clamped so its edge rests on the wall. A corner hit reflects both axes.
pub fn reflect_off_walls(body: &mut Body, arena: &AABB) {
    if body.fixed || body.destroyed {
        return;
    }
    let radius = body.radius();
    let restitution = body.restitution();

    reflect_axis(
        &mut body.position.x,
        &mut body.velocity.x,
        radius,
        arena.min.x,
        arena.max.x,
        restitution,
    );
    reflect_axis(
        &mut body.position.y,
        &mut body.velocity.y,
        radius,
        arena.min.y,
        arena.max.y,
        restitution,
    );
}

fn reflect_axis(pos: &mut f64, vel: &mut f64, radius: f64, min: f64, max: f64, restitution: f64) {
    if *pos + radius > max {
        *vel = -*vel * restitution;
        *pos = max - radius;
    } else if *pos - radius < min {
        *vel = -*vel * restitution;
        *pos = min + radius;
    }
}
