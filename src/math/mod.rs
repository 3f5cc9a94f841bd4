pub mod vec2;
pub mod vector;

pub use vec2::Vec2;
pub use vector::Vector;
