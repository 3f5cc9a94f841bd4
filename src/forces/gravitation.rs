use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

pub const GRAVITATIONAL_CONSTANT: f64 = 100.0;

/// Newtonian gravitation between `a` and `b`, using the area-derived masses:
/// `F = G · m_a · m_b / d³ · (a.position - b.position)`.
///
/// The vector points from `b` towards `a`; the pull `b` exerts on `a` is its negation.
///
/// Returns a zero vector if either body is destroyed, and
/// [`PhysicsError::DegenerateGeometry`] if the centers coincide.
pub fn mutual_gravitation(a: &Body, b: &Body) -> Result<Vec2> {
    if a.destroyed || b.destroyed {
        return Ok(Vec2::ZERO);
    }
    let separation = a.position - b.position;
    let distance = separation.magnitude();
    if distance == 0.0 {
        return Err(PhysicsError::DegenerateGeometry(
            "gravitation between coincident centers",
        ));
    }
    Ok(separation * (GRAVITATIONAL_CONSTANT * a.mass() * b.mass() / distance.powi(3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn ball(x: f64, y: f64, r: f64) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, r, 1.0, false)
    }

    #[test]
    fn test_gravitation_magnitude_and_direction() {
        let a = ball(0.0, 0.0, 1.0);
        let b = ball(10.0, 0.0, 2.0);
        let f = mutual_gravitation(&a, &b).unwrap();
        // |F| = G m_a m_b / d², along a - b
        let expected = GRAVITATIONAL_CONSTANT * PI * (4.0 * PI) / 100.0;
        assert!((f.x + expected).abs() < EPSILON);
        assert!(f.y.abs() < EPSILON);
    }

    #[test]
    fn test_gravitation_is_antisymmetric() {
        let a = ball(1.0, 2.0, 1.5);
        let b = ball(-4.0, 7.0, 0.5);
        let fab = mutual_gravitation(&a, &b).unwrap();
        let fba = b.gravitation_from(&a).unwrap();
        assert!((fab + fba).magnitude() < EPSILON);
    }

    #[test]
    fn test_gravitation_coincident_is_error() {
        let a = ball(3.0, 3.0, 1.0);
        let b = ball(3.0, 3.0, 2.0);
        assert!(matches!(
            mutual_gravitation(&a, &b),
            Err(PhysicsError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_gravitation_destroyed_is_zero() {
        let a = ball(0.0, 0.0, 1.0);
        let mut b = ball(3.0, 3.0, 1.0);
        b.destroyed = true;
        assert_eq!(mutual_gravitation(&a, &b), Ok(Vec2::ZERO));
        assert_eq!(mutual_gravitation(&b, &a), Ok(Vec2::ZERO));
    }
}
