use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::errors::{NetworkError, NetworkResult};
use crate::layers::layer::Layer;
use crate::loss::nll::NegativeLogLikelihood;
use crate::math::matrix::Matrix;
use crate::network::spec::{LayerSpec, NetworkSpec};

/// A feed-forward network: layers applied in insertion order.
///
/// Parameters are allocated lazily. The first call to [`Network::predict`]
/// (or an explicit [`Network::reset_parameters`]) draws them, so building a
/// network is cheap and the first forward pass is not steady-state.
#[derive(Debug, Clone, Default)]
pub struct Network {
    layers: Vec<Layer>,
    seed: Option<u64>,
    reset: bool,
}

impl Network {
    pub fn new() -> Network {
        Network::default()
    }

    /// Parameters will be drawn from an RNG seeded with `seed`, making
    /// outputs reproducible across runs.
    pub fn with_seed(seed: u64) -> Network {
        Network { seed: Some(seed), ..Network::default() }
    }

    pub fn from_spec(spec: &NetworkSpec, seed: Option<u64>) -> Network {
        let mut network = Network { seed, ..Network::default() };
        for layer in &spec.layers {
            network.add(layer.build());
        }
        network
    }

    pub fn spec(&self, name: &str) -> NetworkSpec {
        NetworkSpec {
            name: name.to_string(),
            layers: self.layers.iter().map(LayerSpec::of).collect(),
        }
    }

    /// Appends a layer. The network needs a parameter reset afterwards.
    pub fn add(&mut self, layer: Layer) {
        self.layers.push(layer);
        self.reset = false;
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }

    /// Draws fresh parameters for every layer.
    pub fn reset_parameters(&mut self) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for layer in &mut self.layers {
            layer.reset(&mut rng);
        }
        self.reset = true;
        info!(
            "initialized {} parameters across {} layers",
            self.parameter_count(),
            self.layers.len()
        );
    }

    /// Forward pass over every column of `input`. Parameters are
    /// initialised first if needed; otherwise they are left untouched.
    pub fn predict(&mut self, input: &Matrix) -> NetworkResult<Matrix> {
        if self.layers.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }
        if !self.reset {
            self.reset_parameters();
        }

        let mut current = input.clone();
        for (index, layer) in self.layers.iter().enumerate() {
            current = layer.forward(index, &current)?;
            debug!("layer {} ({}) -> {:?}", index, layer.name(), current.shape());
        }
        Ok(current)
    }

    /// Summed negative log-likelihood of `labels` (one per input column)
    /// under the network's log-probability output.
    pub fn evaluate(&mut self, input: &Matrix, labels: &[usize]) -> NetworkResult<f64> {
        let output = self.predict(input)?;
        NegativeLogLikelihood::loss(&output, labels)
    }

    /// One line per layer, e.g. `0: linear 784 -> 64`.
    pub fn summary(&self) -> String {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| match layer {
                Layer::Linear(l) => format!("{i}: linear {} -> {}", l.in_size, l.out_size),
                other => format!("{i}: {}", other.name()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
