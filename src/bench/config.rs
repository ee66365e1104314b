//! Benchmark configuration, from defaults or a JSON file.
//!
//! # JSON format
//! ```json
//! { "input_size": 784, "hidden_size": 64, "output_size": 10, "seed": 7 }
//! ```
//! Every field is optional and falls back to [`BenchConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_INPUT_SIZE: usize = 10000;
pub const DEFAULT_HIDDEN_SIZE: usize = 100;
pub const DEFAULT_OUTPUT_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Seed for weight initialisation; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_size: DEFAULT_INPUT_SIZE,
            hidden_size: DEFAULT_HIDDEN_SIZE,
            output_size: DEFAULT_OUTPUT_SIZE,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = BenchConfig::default();
        assert_eq!((c.input_size, c.hidden_size, c.output_size), (10000, 100, 10));
        assert_eq!(c.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: BenchConfig = serde_json::from_str(r#"{ "hidden_size": 32, "seed": 7 }"#).unwrap();
        assert_eq!(c.input_size, 10000);
        assert_eq!(c.hidden_size, 32);
        assert_eq!(c.output_size, 10);
        assert_eq!(c.seed, Some(7));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("mlp-forward-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "input_size": 784, "output_size": 3 }"#).unwrap();
        let c = BenchConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(c.input_size, 784);
        assert_eq!(c.output_size, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = BenchConfig::from_file(Path::new("/nonexistent/mlp-forward.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_negative_size_rejected() {
        let r: Result<BenchConfig, _> = serde_json::from_str(r#"{ "input_size": -1 }"#);
        assert!(r.is_err());
    }
}
