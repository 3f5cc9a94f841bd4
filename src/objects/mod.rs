pub mod body;

pub use body::{Body, DEFAULT_GRAVITY};
