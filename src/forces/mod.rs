pub mod gravitation;

pub use gravitation::{mutual_gravitation, GRAVITATIONAL_CONSTANT};
