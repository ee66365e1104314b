use std::path::PathBuf;

use thiserror::Error;

use super::{NetworkError, TimerError};

/// Failures while loading a benchmark configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any error that aborts a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
