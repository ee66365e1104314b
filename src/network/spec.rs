use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::layers::layer::Layer;

/// Describes one stage of a network, without parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSpec {
    Linear { in_size: usize, out_size: usize },
    Activation { function: ActivationFunction },
    LogSoftMax,
}

impl LayerSpec {
    pub fn build(&self) -> Layer {
        match self {
            LayerSpec::Linear { in_size, out_size } => Layer::linear(*in_size, *out_size),
            LayerSpec::Activation { function } => Layer::Activation(*function),
            LayerSpec::LogSoftMax => Layer::LogSoftMax,
        }
    }

    pub fn of(layer: &Layer) -> LayerSpec {
        match layer {
            Layer::Linear(l) => LayerSpec::Linear { in_size: l.in_size, out_size: l.out_size },
            Layer::Activation(f) => LayerSpec::Activation { function: *f },
            Layer::LogSoftMax => LayerSpec::LogSoftMax,
        }
    }
}

/// A serializable description of a network architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, echoed in reports.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// The benchmark topology: three sigmoid hidden layers of width
    /// `hidden_size` and a log-softmax output of width `output_size`.
    pub fn mlp(input_size: usize, hidden_size: usize, output_size: usize) -> NetworkSpec {
        let sigmoid = || LayerSpec::Activation { function: ActivationFunction::Sigmoid };
        NetworkSpec {
            name: "mlp".to_string(),
            layers: vec![
                LayerSpec::Linear { in_size: input_size, out_size: hidden_size },
                sigmoid(),
                LayerSpec::Linear { in_size: hidden_size, out_size: hidden_size },
                sigmoid(),
                LayerSpec::Linear { in_size: hidden_size, out_size: hidden_size },
                sigmoid(),
                LayerSpec::Linear { in_size: hidden_size, out_size: output_size },
                LayerSpec::LogSoftMax,
            ],
        }
    }

    /// Width of the last linear layer, or `None` without one.
    pub fn output_size(&self) -> Option<usize> {
        self.layers.iter().rev().find_map(|l| match l {
            LayerSpec::Linear { out_size, .. } => Some(*out_size),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlp_topology() {
        let spec = NetworkSpec::mlp(10000, 100, 10);
        assert_eq!(spec.layers.len(), 8);
        assert_eq!(spec.layers[0], LayerSpec::Linear { in_size: 10000, out_size: 100 });
        assert_eq!(spec.layers[6], LayerSpec::Linear { in_size: 100, out_size: 10 });
        assert_eq!(spec.layers[7], LayerSpec::LogSoftMax);
        for i in [1, 3, 5] {
            assert_eq!(
                spec.layers[i],
                LayerSpec::Activation { function: ActivationFunction::Sigmoid }
            );
        }
        assert_eq!(spec.output_size(), Some(10));
    }

    #[test]
    fn test_json_layout() {
        let spec = NetworkSpec::mlp(4, 3, 2);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["layers"][0]["type"], "linear");
        assert_eq!(json["layers"][1]["function"], "sigmoid");
        assert_eq!(json["layers"][7]["type"], "log_soft_max");
    }

    #[test]
    fn test_of_inverts_build() {
        for ls in NetworkSpec::mlp(5, 4, 3).layers {
            assert_eq!(LayerSpec::of(&ls.build()), ls);
        }
    }
}
