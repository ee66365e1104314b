//! The forward-pass benchmark: configuration, run and report.

pub mod config;
pub mod report;
pub mod runner;

pub use config::BenchConfig;
pub use report::BenchReport;
pub use runner::{run, FORWARD, MODEL_BUILDING, TOTAL_TIME};
