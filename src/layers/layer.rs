use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::errors::NetworkResult;
use crate::layers::{linear::Linear, log_softmax::log_softmax};
use crate::math::matrix::Matrix;

/// One stage of a feed-forward network.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Linear(Linear),
    Activation(ActivationFunction),
    LogSoftMax,
}

impl Layer {
    pub fn linear(in_size: usize, out_size: usize) -> Layer {
        Layer::Linear(Linear::new(in_size, out_size))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Linear(_) => "linear",
            Layer::Activation(f) => f.name(),
            Layer::LogSoftMax => "log_softmax",
        }
    }

    /// Re-draws trainable parameters; a no-op for parameterless layers.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        if let Layer::Linear(linear) = self {
            linear.reset(rng);
        }
    }

    pub fn parameter_count(&self) -> usize {
        match self {
            Layer::Linear(linear) => linear.parameter_count(),
            _ => 0,
        }
    }

    pub fn forward(&self, index: usize, input: &Matrix) -> NetworkResult<Matrix> {
        match self {
            Layer::Linear(linear) => linear.forward(index, input),
            Layer::Activation(f) => Ok(input.map(|x| f.function(x))),
            Layer::LogSoftMax => Ok(log_softmax(input)),
        }
    }
}
