use super::manifold::Contact;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

// Below this center distance the contact direction is numerically meaningless.
const COINCIDENT_DISTANCE: f64 = 1e-10;

/// Center distance divided by the sum of radii.
pub fn overlap_ratio(a: &Body, b: &Body) -> f64 {
    a.position.distance(b.position) / (a.radius() + b.radius())
}

/// Checks two circles for interpenetration.
/// Returns `None` if either body is destroyed or the circles do not overlap
/// (touching exactly, ratio `== 1`, is not a contact).
pub fn check_circle_circle(a: &Body, b: &Body) -> Option<Contact> {
    if a.destroyed || b.destroyed {
        return None;
    }

    let dist_vec = b.position - a.position;
    let distance = dist_vec.magnitude();
    let radii_sum = a.radius() + b.radius();
    let ratio = distance / radii_sum;
    if ratio >= 1.0 {
        return None;
    }

    let normal = if distance > COINCIDENT_DISTANCE {
        dist_vec * (1.0 / distance)
    } else {
        // Centers coincide, choose an arbitrary normal
        Vec2::DOWN
    };

    Some(Contact {
        normal,
        depth: radii_sum - distance,
        overlap_ratio: ratio,
    })
}
