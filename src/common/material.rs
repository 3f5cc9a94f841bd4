//! Defines physical material properties.

/// Represents the physical properties of a body affecting collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
}

impl Material {
    /// Creates a new material. A restitution outside `[0, 1]` (or NaN) is
    /// coerced to `1.0` rather than clamped to the nearest bound.
    pub fn new(restitution: f64) -> Self {
        Material {
            restitution: coerce_restitution(restitution),
        }
    }
}

impl Default for Material {
    /// Perfectly elastic.
    fn default() -> Self {
        Material { restitution: 1.0 }
    }
}

pub(crate) fn coerce_restitution(restitution: f64) -> f64 {
    if (0.0..=1.0).contains(&restitution) {
        restitution
    } else {
        1.0
    }
}
