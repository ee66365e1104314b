pub mod layer;
pub mod linear;
pub mod log_softmax;

pub use layer::Layer;
pub use linear::Linear;
