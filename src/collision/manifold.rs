use crate::math::vec2::Vec2;

/// Stores information about a contact between two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector pointing from the first body's center towards the second's.
    pub normal: Vec2,
    /// How far the circles interpenetrate, `r_a + r_b - distance`.
    pub depth: f64,
    /// Center distance divided by the sum of radii, always `< 1` for a contact.
    pub overlap_ratio: f64,
}

/// How a contact was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Impulse exchange along the contact normal followed by positional correction.
    Bounced,
    /// The second body was absorbed into the first.
    Merged,
}
