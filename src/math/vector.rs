use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// A vector of arbitrary, fixed dimension.
///
/// Every operation returns a new `Vector`; inputs are never mutated.
/// Binary operations require both operands to have the same dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components. The dimension is `components.len()`.
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Creates a zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![0.0; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(PhysicsError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Returns the unit vector in the same direction.
    /// The zero vector normalizes to itself.
    pub fn normalized(&self) -> Vector {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::zeros(self.dimension())
        } else {
            self.scale(1.0 / mag)
        }
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f64) -> Vector {
        self.components.iter().map(|c| c * factor).collect()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
