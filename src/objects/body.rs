use crate::collision::{self, AABB};
use crate::common::{Color, Material};
use crate::error::Result;
use crate::forces::gravitation;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::shapes::Circle;

/// Downward gravity applied to movable bodies unless overridden (units/s², y grows downward).
pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 980.0 };

/// A circular particle in the arena.
///
/// Mass is derived from the area of the circle. A fixed body never moves and
/// acts as an infinite-mass anchor in collisions. A destroyed body has been
/// absorbed by a merge and no longer takes part in anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) circle: Circle,
    pub(crate) material: Material,
    pub(crate) color: Color,

    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) acceleration: Vec2,

    pub(crate) fixed: bool,
    pub(crate) destroyed: bool,
    /// Timestamp (ms) of the last `update`, `None` until the first one.
    pub(crate) last_update: Option<f64>,
}

impl Body {
    /// Creates a body at `position`. A fixed body ignores `velocity` and gets no
    /// acceleration; a movable one starts with [`DEFAULT_GRAVITY`].
    /// `restitution` outside `[0, 1]` becomes `1.0`.
    ///
    /// Panics if `radius` is not positive.
    pub fn new(position: Vec2, velocity: Vec2, radius: f64, restitution: f64, fixed: bool) -> Self {
        let (velocity, acceleration) = if fixed {
            (Vec2::ZERO, Vec2::ZERO)
        } else {
            (velocity, DEFAULT_GRAVITY)
        };
        Self {
            circle: Circle::new(radius),
            material: Material::new(restitution),
            color: Color::default(),
            position,
            velocity,
            acceleration,
            fixed,
            destroyed: false,
            last_update: None,
        }
    }

    /// Creates a fixed anchor body.
    pub fn new_fixed(position: Vec2, radius: f64, restitution: f64) -> Self {
        Self::new(position, Vec2::ZERO, radius, restitution, true)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.set_acceleration(acceleration);
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }

    /// Area-proportional mass, `π·r²`.
    pub fn mass(&self) -> f64 {
        self.circle.area()
    }

    pub fn restitution(&self) -> f64 {
        self.material.restitution
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn last_update(&self) -> Option<f64> {
        self.last_update
    }

    pub fn set_position(&mut self, position: Vec2) {
        if !self.fixed {
            self.position = position;
        }
    }

    /// No-op on fixed bodies.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if !self.fixed {
            self.velocity = velocity;
        }
    }

    /// No-op on fixed bodies.
    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        if !self.fixed {
            self.acceleration = acceleration;
        }
    }

    /// Forgets the last timestamp; the next `update` only re-establishes the baseline.
    pub fn reset_clock(&mut self) {
        self.last_update = None;
    }

    /// Advances the body to `now` (milliseconds) and bounces it off the arena walls.
    ///
    /// The first call after construction or [`reset_clock`](Self::reset_clock)
    /// records the baseline and moves nothing.
    pub fn update(&mut self, now: f64, arena: &AABB) {
        if self.destroyed {
            return;
        }
        let last = self.last_update.replace(now).unwrap_or(now);
        let elapsed = (now - last) / 1000.0;

        if self.fixed {
            return;
        }
        integrator::integrate(self, elapsed);
        integrator::reflect_off_walls(self, arena);
    }

    /// Center distance divided by the sum of radii; `< 1` means the circles overlap.
    /// Returns `f64::MAX` if this body is destroyed.
    pub fn overlap_ratio(&self, other: &Body) -> f64 {
        if self.destroyed {
            return f64::MAX;
        }
        collision::overlap_ratio(self, other)
    }

    /// Detects and resolves a collision with `other`. See [`collision::collide`].
    pub fn collide(&mut self, other: &mut Body, merge: bool) -> bool {
        collision::collide(self, other, merge)
    }

    /// Attractive force exerted on this body by `other`. See [`gravitation::mutual_gravitation`].
    pub fn gravitation_from(&self, other: &Body) -> Result<Vec2> {
        gravitation::mutual_gravitation(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn arena() -> AABB {
        AABB::arena(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_body_new_movable() {
        let b = Body::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, -1.0), 2.0, 0.5, false);
        assert_eq!(b.position(), Vec2::new(10.0, 20.0));
        assert_eq!(b.velocity(), Vec2::new(1.0, -1.0));
        assert_eq!(b.acceleration(), DEFAULT_GRAVITY);
        assert_eq!(b.radius(), 2.0);
        assert_eq!(b.restitution(), 0.5);
        assert!((b.mass() - 4.0 * PI).abs() < EPSILON);
        assert!(!b.is_fixed());
        assert!(!b.is_destroyed());
        assert_eq!(b.last_update(), None);
    }

    #[test]
    fn test_body_new_fixed_ignores_velocity() {
        let b = Body::new(Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0), 2.0, 1.0, true);
        assert_eq!(b.velocity(), Vec2::ZERO);
        assert_eq!(b.acceleration(), Vec2::ZERO);
        assert!(b.is_fixed());
    }

    #[test]
    fn test_body_restitution_coerced() {
        let high = Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, 1.5, false);
        let low = Body::new(Vec2::ZERO, Vec2::ZERO, 1.0, -0.2, false);
        assert_eq!(high.restitution(), 1.0);
        assert_eq!(low.restitution(), 1.0);
    }

    #[test]
    fn test_fixed_body_setters_are_noops() {
        let mut b = Body::new_fixed(Vec2::new(5.0, 5.0), 1.0, 1.0);
        b.set_velocity(Vec2::new(3.0, 3.0));
        b.set_acceleration(Vec2::new(0.0, 10.0));
        b.set_position(Vec2::new(1.0, 1.0));
        assert_eq!(b.velocity(), Vec2::ZERO);
        assert_eq!(b.acceleration(), Vec2::ZERO);
        assert_eq!(b.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_first_update_sets_baseline_only() {
        let mut b = Body::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 0.0), 5.0, 1.0, false);
        b.update(12_345.0, &arena());
        assert_eq!(b.position(), Vec2::new(50.0, 50.0));
        assert_eq!(b.velocity(), Vec2::new(100.0, 0.0));
        assert_eq!(b.last_update(), Some(12_345.0));
    }

    #[test]
    fn test_update_at_rest_stays_put() {
        let mut b = Body::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 5.0, 1.0, false)
            .with_acceleration(Vec2::ZERO);
        b.update(0.0, &arena());
        b.update(1000.0, &arena());
        assert_eq!(b.position(), Vec2::new(50.0, 50.0));
        assert_eq!(b.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_update_uses_old_velocity_for_position() {
        let mut b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 20.0), 5.0, 1.0, false);
        b.update(0.0, &arena());
        b.update(1000.0, &arena());
        // p = p0 + v0 * 1s, v = v0 + a * 1s
        assert!((b.position().x - 110.0).abs() < EPSILON);
        assert!((b.position().y - 120.0).abs() < EPSILON);
        assert!((b.velocity().x - 10.0).abs() < EPSILON);
        assert!((b.velocity().y - 1000.0).abs() < EPSILON);
    }

    #[test]
    fn test_reset_clock_restarts_baseline() {
        let mut b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 5.0, 1.0, false)
            .with_acceleration(Vec2::ZERO);
        b.update(0.0, &arena());
        b.reset_clock();
        b.update(5000.0, &arena());
        assert_eq!(b.position(), Vec2::new(100.0, 100.0));
        b.update(5500.0, &arena());
        assert!((b.position().x - 105.0).abs() < EPSILON);
    }

    #[test]
    fn test_fixed_body_never_moves() {
        // Poking out of the arena on purpose; anchors are not pushed back in.
        let mut b = Body::new_fixed(Vec2::new(799.0, 300.0), 10.0, 1.0);
        b.update(0.0, &arena());
        b.update(2000.0, &arena());
        assert_eq!(b.position(), Vec2::new(799.0, 300.0));
        assert_eq!(b.velocity(), Vec2::ZERO);
        assert_eq!(b.last_update(), Some(2000.0));
    }

    #[test]
    fn test_destroyed_body_update_is_noop() {
        let mut b = Body::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 5.0, 1.0, false);
        b.destroyed = true;
        let before = b.clone();
        b.update(0.0, &arena());
        b.update(1000.0, &arena());
        assert_eq!(b, before);
    }

    #[test]
    fn test_overlap_ratio() {
        let a = Body::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0, 1.0, false);
        let mut b = Body::new(Vec2::new(3.0, 4.0), Vec2::ZERO, 4.0, 1.0, false);
        assert!((a.overlap_ratio(&b) - 1.0).abs() < EPSILON);
        b.destroyed = true;
        assert!((a.overlap_ratio(&b) - 1.0).abs() < EPSILON);
        assert_eq!(b.overlap_ratio(&a), f64::MAX);
    }
}
