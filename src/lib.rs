pub mod math;
pub mod activation;
pub mod layers;
pub mod loss;
pub mod network;
pub mod timing;
pub mod bench;
pub mod errors;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::layer::Layer;
pub use network::network::Network;
pub use network::spec::{NetworkSpec, LayerSpec};
pub use timing::timers::Timers;
pub use bench::{BenchConfig, BenchReport};
pub use errors::{BenchError, NetworkError, TimerError};
