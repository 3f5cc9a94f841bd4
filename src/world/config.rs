//! Construction parameters for a [`Simulation`](super::Simulation).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::common::material::coerce_restitution;
use crate::error::{PhysicsError, Result};
use crate::math::{Vec2, Vector};
use crate::objects::DEFAULT_GRAVITY;

/// Parameters for the randomized initial population and the engine loop.
///
/// Missing fields fall back to [`Default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of bodies spawned at construction.
    pub body_count: usize,
    pub width: f64,
    pub height: f64,
    pub mean_radius: f64,
    /// Radii are drawn uniformly from `mean_radius ± radius_spread`.
    pub radius_spread: f64,
    /// Horizontal velocities are drawn uniformly from `±max_horizontal_speed`.
    pub max_horizontal_speed: f64,
    /// Vertical velocities are drawn uniformly from `±max_vertical_speed`.
    pub max_vertical_speed: f64,
    /// Restitution given to every spawned body. Outside `[0, 1]` becomes `1`.
    pub restitution: f64,
    /// Probability that a spawned body is fixed. Outside `[0, 1]` becomes `0`.
    pub fixed_fraction: f64,
    pub merge_on_collision: bool,
    /// Acceleration of movable bodies. Must be two-dimensional.
    pub gravity: Vector,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            body_count: 100,
            width: 800.0,
            height: 600.0,
            mean_radius: 20.0,
            radius_spread: 10.0,
            max_horizontal_speed: 800.0,
            max_vertical_speed: 800.0,
            restitution: 1.0,
            fixed_fraction: 0.0,
            merge_on_collision: false,
            gravity: DEFAULT_GRAVITY.into(),
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Applies the leniency policy: out-of-range restitution and fixed fraction
    /// are replaced by safe defaults instead of being rejected.
    pub fn sanitized(mut self) -> Self {
        let restitution = coerce_restitution(self.restitution);
        if restitution != self.restitution {
            warn!("restitution {} outside [0, 1], using {}", self.restitution, restitution);
            self.restitution = restitution;
        }
        if !(0.0..=1.0).contains(&self.fixed_fraction) {
            warn!("fixed fraction {} outside [0, 1], all bodies movable", self.fixed_fraction);
            self.fixed_fraction = 0.0;
        }
        self
    }

    /// Rejects values no simulation can be built from.
    pub fn validate(&self) -> Result<()> {
        self.arena()?;
        self.gravity()?;
        for (name, value) in [
            ("mean_radius", self.mean_radius),
            ("radius_spread", self.radius_spread),
            ("max_horizontal_speed", self.max_horizontal_speed),
            ("max_vertical_speed", self.max_vertical_speed),
        ] {
            if !value.is_finite() {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn arena(&self) -> Result<AABB> {
        AABB::arena(self.width, self.height)
    }

    pub fn gravity(&self) -> Result<Vec2> {
        Vec2::try_from(&self.gravity)
    }
}
