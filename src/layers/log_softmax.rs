use crate::math::matrix::Matrix;

/// Column-wise log-softmax: `y = x - max(x) - ln(Σ exp(x - max(x)))`.
///
/// A matrix with zero rows passes through unchanged.
pub fn log_softmax(input: &Matrix) -> Matrix {
    let mut out = input.clone();
    if input.rows() == 0 {
        return out;
    }

    for c in 0..input.cols() {
        let max_val = (0..input.rows())
            .map(|r| input.get(r, c))
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = (0..input.rows())
            .map(|r| (input.get(r, c) - max_val).exp())
            .sum();
        let log_norm = max_val + sum.ln();
        for r in 0..input.rows() {
            out.set(r, c, input.get(r, c) - log_norm);
        }
    }

    out
}
