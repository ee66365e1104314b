use crate::errors::{NetworkError, NetworkResult};
use crate::math::matrix::Matrix;

/// Negative log-likelihood over log-probability outputs.
pub struct NegativeLogLikelihood;

impl NegativeLogLikelihood {
    /// `log_probs` has one column per sample; `labels[c]` is the target row
    /// of column `c`. Returns `-Σ_c log_probs[labels[c], c]`.
    pub fn loss(log_probs: &Matrix, labels: &[usize]) -> NetworkResult<f64> {
        if labels.len() != log_probs.cols() {
            return Err(NetworkError::LabelCountMismatch {
                expected: log_probs.cols(),
                actual: labels.len(),
            });
        }

        let mut total = 0.0;
        for (col, &label) in labels.iter().enumerate() {
            if label >= log_probs.rows() {
                return Err(NetworkError::LabelOutOfRange { label, classes: log_probs.rows() });
            }
            total -= log_probs.get(label, col);
        }
        Ok(total)
    }
}
