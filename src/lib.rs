pub mod collision;
pub mod common;
pub mod error;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::AABB;
pub use common::{Color, Material};
pub use error::{PhysicsError, Result};
pub use math::{Vec2, Vector};
pub use objects::{Body, DEFAULT_GRAVITY};
pub use shapes::Circle;
pub use world::{Simulation, SimulationConfig};
