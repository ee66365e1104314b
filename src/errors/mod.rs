//! Error types for the network library and the benchmark harness.

mod bench_error;
mod network_error;
mod timer_error;

pub use bench_error::{BenchError, ConfigError};
pub use network_error::NetworkError;
pub use timer_error::TimerError;

/// Result type alias for network construction and inference.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;

/// Result type alias for timer operations.
pub type TimerResult<T> = std::result::Result<T, TimerError>;

/// Result type alias for a full benchmark run.
pub type BenchResult<T> = std::result::Result<T, BenchError>;
