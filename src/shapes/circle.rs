use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        assert!(radius > 0.0, "Circle radius must be positive");
        Self { radius }
    }

    /// Recovers the circle whose area equals `area`.
    pub fn with_area(area: f64) -> Self {
        Self::new((area / PI).sqrt())
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
