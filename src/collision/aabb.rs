// Defines an Axis-Aligned Bounding Box, used as the arena walls.

use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// The arena `[0, width] × [0, height]`. Both sizes must be finite and positive.
    pub fn arena(width: f64, height: f64) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "arena {name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(AABB::new(Vec2::ZERO, Vec2::new(width, height)))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks whether a circle lies fully inside the box.
    pub fn contains_circle(&self, center: Vec2, radius: f64) -> bool {
        center.x - radius >= self.min.x
            && center.x + radius <= self.max.x
            && center.y - radius >= self.min.y
            && center.y + radius <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new_orders_corners() {
        let b = AABB::new(Vec2::new(5.0, -1.0), Vec2::new(1.0, 3.0));
        assert_eq!(b.min, Vec2::new(1.0, -1.0));
        assert_eq!(b.max, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_arena_size() {
        let arena = AABB::arena(800.0, 600.0).unwrap();
        assert_eq!(arena.min, Vec2::ZERO);
        assert_eq!(arena.width(), 800.0);
        assert_eq!(arena.height(), 600.0);
    }

    #[test]
    fn test_arena_rejects_bad_sizes() {
        assert!(AABB::arena(0.0, 600.0).is_err());
        assert!(AABB::arena(800.0, -1.0).is_err());
        assert!(AABB::arena(f64::INFINITY, 600.0).is_err());
        assert!(AABB::arena(f64::NAN, 600.0).is_err());
    }

    #[test]
    fn test_contains_circle() {
        let arena = AABB::arena(100.0, 100.0).unwrap();
        assert!(arena.contains_circle(Vec2::new(50.0, 50.0), 10.0));
        assert!(arena.contains_circle(Vec2::new(90.0, 10.0), 10.0));
        assert!(!arena.contains_circle(Vec2::new(95.0, 50.0), 10.0));
    }
}
