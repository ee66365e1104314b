use rand::Rng;

use crate::errors::{NetworkError, NetworkResult};
use crate::math::matrix::Matrix;

/// Lower/upper bound of the uniform weight initialisation.
pub const INIT_LOWER: f64 = -1.0;
pub const INIT_UPPER: f64 = 1.0;

/// Fully connected layer computing `W·x + b`.
///
/// Parameters are not allocated at construction; [`Linear::reset`] fills
/// them, which the owning network does on its first forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    pub in_size: usize,
    pub out_size: usize,
    weights: Option<Matrix>,  // (out_size × in_size)
    biases: Option<Matrix>,   // (out_size × 1)
}

impl Linear {
    pub fn new(in_size: usize, out_size: usize) -> Linear {
        Linear {
            in_size,
            out_size,
            weights: None,
            biases: None,
        }
    }

    /// Draws fresh weights and biases uniformly from `[INIT_LOWER, INIT_UPPER)`.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.weights = Some(Matrix::random_uniform(
            self.out_size, self.in_size, INIT_LOWER, INIT_UPPER, rng,
        ));
        self.biases = Some(Matrix::random_uniform(
            self.out_size, 1, INIT_LOWER, INIT_UPPER, rng,
        ));
    }

    pub fn is_initialized(&self) -> bool {
        self.weights.is_some() && self.biases.is_some()
    }

    pub fn weights(&self) -> Option<&Matrix> {
        self.weights.as_ref()
    }

    pub fn biases(&self) -> Option<&Matrix> {
        self.biases.as_ref()
    }

    /// Replaces the parameters with explicit values.
    ///
    /// # Panics
    /// Panics if the shapes do not match `(out_size × in_size)` and `(out_size × 1)`.
    pub fn set_parameters(&mut self, weights: Matrix, biases: Matrix) {
        assert_eq!(weights.shape(), (self.out_size, self.in_size), "weight shape");
        assert_eq!(biases.shape(), (self.out_size, 1), "bias shape");
        self.weights = Some(weights);
        self.biases = Some(biases);
    }

    pub fn parameter_count(&self) -> usize {
        self.out_size * self.in_size + self.out_size
    }

    /// `index` is the layer position, used only for error reporting.
    pub fn forward(&self, index: usize, input: &Matrix) -> NetworkResult<Matrix> {
        if input.rows() != self.in_size {
            return Err(NetworkError::DimensionMismatch {
                layer: index,
                kind: "linear",
                expected: self.in_size,
                actual: input.rows(),
            });
        }
        match (&self.weights, &self.biases) {
            (Some(w), Some(b)) => Ok((w * input).add_column(b)),
            _ => Err(NetworkError::Uninitialized { layer: index }),
        }
    }
}
