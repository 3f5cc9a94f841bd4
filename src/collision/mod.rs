pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use detection::{check_circle_circle, overlap_ratio};
pub use manifold::{Contact, Response};
pub use response::{collide, resolve};
