//! Pairwise collision response: impulse exchange, overlap correction and merging.

use log::debug;

use super::detection::check_circle_circle;
use super::manifold::{Contact, Response};
use crate::objects::body::Body;
use crate::shapes::Circle;

/// Detects and resolves a collision between `a` and `b`.
///
/// Returns `true` if the bodies were in contact and a response was applied.
/// See [`resolve`] for the details.
pub fn collide(a: &mut Body, b: &mut Body, merge: bool) -> bool {
    resolve(a, b, merge).is_some()
}

/// Detects and resolves a collision between `a` and `b`, reporting how it was resolved.
///
/// - Either body destroyed, or circles not overlapping: `None`, nothing changes.
/// - Both bodies fixed: `None`, anchors never respond to each other.
/// - `merge` requested and neither body fixed: `b` is absorbed into `a`.
/// - Otherwise: velocities are exchanged along the contact normal using `a`'s
///   restitution, then the overlap is pushed apart.
pub fn resolve(a: &mut Body, b: &mut Body, merge: bool) -> Option<Response> {
    let contact = check_circle_circle(a, b)?;
    if a.fixed && b.fixed {
        return None;
    }

    if merge && !a.fixed && !b.fixed {
        absorb(a, b);
        return Some(Response::Merged);
    }

    apply_impulse(a, b, &contact);
    separate(a, b, &contact);
    Some(Response::Bounced)
}

/// Perfectly inelastic merge conserving momentum and area.
/// `a` survives and adopts the color of the larger body; `b` is tombstoned.
fn absorb(a: &mut Body, b: &mut Body) {
    let m1 = a.mass();
    let m2 = b.mass();
    let total = m1 + m2;
    let w1 = m1 / total;
    let w2 = m2 / total;

    a.velocity = a.velocity * w1 + b.velocity * w2;
    a.position = a.position * w1 + b.position * w2;
    if a.radius() < b.radius() {
        a.color = b.color;
    }
    a.circle = Circle::with_area(total);
    b.destroyed = true;

    debug!(
        "merged body (r={:.3}) into body at {:?}, new radius {:.3}",
        b.radius(),
        a.position,
        a.radius()
    );
}

/// One-dimensional restitution formula applied to the radial velocity components.
/// Tangential components pass through untouched (frictionless contact).
fn apply_impulse(a: &mut Body, b: &mut Body, contact: &Contact) {
    let mut m1 = a.mass();
    let mut m2 = b.mass();
    // An anchor has infinite mass; zeroing the movable side's own mass term
    // reduces the two-body formula to a reflection off the anchor.
    if b.fixed {
        m1 = 0.0;
    }
    if a.fixed {
        m2 = 0.0;
    }

    let e = a.restitution();
    let n = contact.normal;

    let u1 = a.velocity.dot(n);
    let u2 = b.velocity.dot(n);
    let tangent1 = a.velocity - n * u1;
    let tangent2 = b.velocity - n * u2;

    let w1 = (u1 * (m1 - m2 * e) + (1.0 + e) * m2 * u2) / (m1 + m2);
    let w2 = (u2 * (m2 - m1 * e) + (1.0 + e) * m1 * u1) / (m1 + m2);

    if !a.fixed {
        a.velocity = tangent1 + n * w1;
    }
    if !b.fixed {
        b.velocity = tangent2 + n * w2;
    }
}

/// Pushes the circles apart along the normal until they just touch, half each,
/// or all of it on the movable one when the other is fixed.
fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let push = contact.normal * contact.depth;
    if a.fixed {
        b.position += push;
    } else if b.fixed {
        a.position -= push;
    } else {
        a.position -= push * 0.5;
        b.position += push * 0.5;
    }
}
