use thiserror::Error;

/// Errors raised while running a [`Network`](crate::Network).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A layer received an input whose row count does not match its fan-in.
    #[error("layer {layer} ({kind}) expects {expected} input rows, got {actual}")]
    DimensionMismatch {
        layer: usize,
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("layer {layer} has no parameters; reset the network first")]
    Uninitialized { layer: usize },

    #[error("network has no layers")]
    EmptyNetwork,

    /// `evaluate` was given a label count that does not match the batch.
    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("label {label} is out of range for {classes} classes")]
    LabelOutOfRange { label: usize, classes: usize },
}
