use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::SimulationConfig;
use crate::collision::{self, Response, AABB};
use crate::common::Color;
use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::objects::body::{Body, DEFAULT_GRAVITY};

/// Sampled radii below this are raised to it.
pub const MIN_RADIUS: f64 = 1.0;

/// Owns the bodies and drives them through one tick per host frame.
///
/// Bodies keep their insertion index for their whole life, which is also the
/// draw order. Merged-away bodies stay in place as tombstones until [`compact`]
/// is called.
///
/// [`compact`]: Simulation::compact
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    arena: AABB,
    merge_on_collision: bool,
    gravity: Vec2,
}

impl Simulation {
    /// Creates an empty simulation for hand-built scenes.
    pub fn empty(arena: AABB, merge_on_collision: bool) -> Self {
        Self {
            bodies: Vec::new(),
            arena,
            merge_on_collision,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Creates a simulation populated from `config`, seeded with `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Creates a simulation populated from `config`, drawing from `rng`.
    pub fn with_rng<R: Rng>(config: SimulationConfig, rng: &mut R) -> Result<Self> {
        let config = config.sanitized();
        config.validate()?;

        let mut sim = Self::empty(config.arena()?, config.merge_on_collision);
        sim.gravity = config.gravity()?;
        sim.bodies.reserve(config.body_count);
        for _ in 0..config.body_count {
            let body = sim.spawn_body(&config, rng);
            sim.bodies.push(body);
        }

        debug!(
            "simulation created: {} bodies in {}x{} arena, merge={}",
            sim.bodies.len(),
            sim.arena.width(),
            sim.arena.height(),
            sim.merge_on_collision
        );
        Ok(sim)
    }

    fn spawn_body<R: Rng>(&self, config: &SimulationConfig, rng: &mut R) -> Body {
        let x = rng.random::<f64>() * self.arena.width() + self.arena.min.x;
        let y = rng.random::<f64>() * self.arena.height() + self.arena.min.y;
        let vx = symmetric(rng, config.max_horizontal_speed);
        let vy = symmetric(rng, config.max_vertical_speed);

        let mut radius = config.mean_radius + symmetric(rng, config.radius_spread);
        if radius < MIN_RADIUS {
            warn!("sampled radius {radius} below minimum, using {MIN_RADIUS}");
            radius = MIN_RADIUS;
        }
        let color = Color::random(rng);
        let fixed = rng.random::<f64>() < config.fixed_fraction;

        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, config.restitution, fixed)
            .with_acceleration(self.gravity)
            .with_color(color)
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// All bodies in insertion order, tombstones included.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Bodies a renderer should draw, in draw order (last on top).
    pub fn live_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(|b| !b.is_destroyed())
    }

    pub fn arena(&self) -> &AABB {
        &self.arena
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn merge_on_collision(&self) -> bool {
        self.merge_on_collision
    }

    pub fn set_merge_on_collision(&mut self, merge: bool) {
        self.merge_on_collision = merge;
    }

    /// Advances the world to `now` (milliseconds, non-decreasing between calls):
    /// integrates every body, then resolves every unordered pair once in index order.
    /// When this returns the state is ready to render.
    pub fn tick(&mut self, now: f64) {
        for body in self.bodies.iter_mut() {
            body.update(now, &self.arena);
        }
        let (contacts, merges) = self.resolve_collisions();
        trace!("tick {now}: {contacts} contacts, {merges} merges");
    }

    /// Tests each pair `(i, j)`, `i < j`, exactly once. A body absorbed by an
    /// earlier pair is skipped by every later one.
    fn resolve_collisions(&mut self) -> (usize, usize) {
        let mut contacts = 0;
        let mut merges = 0;
        for i in 0..self.bodies.len() {
            // Get mutable references using split_at_mut to satisfy the borrow checker
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let body_a = &mut head[i];
            for (k, body_b) in tail.iter_mut().enumerate() {
                match collision::resolve(body_a, body_b, self.merge_on_collision) {
                    Some(Response::Bounced) => contacts += 1,
                    Some(Response::Merged) => {
                        debug!("body {} absorbed into body {i}", i + 1 + k);
                        contacts += 1;
                        merges += 1;
                    }
                    None => {}
                }
            }
        }
        (contacts, merges)
    }

    /// Sets each live movable body's acceleration to the world gravity plus the
    /// pull of every other live body. Pairs with coincident centers contribute nothing.
    ///
    /// Not part of [`tick`](Self::tick); call it before a tick to enable mutual attraction.
    pub fn accumulate_gravitation(&mut self) {
        let accelerations: Vec<Option<Vec2>> = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                if body.is_fixed() || body.is_destroyed() {
                    return None;
                }
                let mut pull = Vec2::ZERO;
                for (j, other) in self.bodies.iter().enumerate() {
                    if i == j || other.is_destroyed() {
                        continue;
                    }
                    match body.gravitation_from(other) {
                        Ok(force) => pull -= force,
                        Err(e) => debug!("skipping pair ({i}, {j}): {e}"),
                    }
                }
                Some(self.gravity + pull * (1.0 / body.mass()))
            })
            .collect();

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            if let Some(acceleration) = acceleration {
                body.set_acceleration(acceleration);
            }
        }
    }

    /// Makes the next tick a baseline tick for every body, e.g. after the host paused.
    pub fn reset_clock(&mut self) {
        for body in self.bodies.iter_mut() {
            body.reset_clock();
        }
    }

    /// Drops tombstoned bodies, keeping the survivors in order. Indices shift.
    /// Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| !b.is_destroyed());
        before - self.bodies.len()
    }
}

/// Uniform in `[-max, max)`, also for `max <= 0`.
fn symmetric<R: Rng>(rng: &mut R, max: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * max
}
