use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::bench::config::BenchConfig;
use crate::network::spec::NetworkSpec;
use crate::timing::timers::Timers;

/// Everything a benchmark run measured.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub model: NetworkSpec,
    pub parameters: usize,
    /// `(rows, cols)` of the timed forward output.
    pub output_shape: (usize, usize),
    /// Timer name → seconds.
    pub timers: BTreeMap<String, f64>,
}

impl BenchReport {
    pub fn new(
        config: BenchConfig,
        model: NetworkSpec,
        parameters: usize,
        output_shape: (usize, usize),
        timers: &Timers,
    ) -> Self {
        Self {
            config,
            model,
            parameters,
            output_shape,
            timers: timers
                .iter()
                .map(|(name, d)| (name.to_string(), d.as_secs_f64()))
                .collect(),
        }
    }

    pub fn timer(&self, name: &str) -> Option<f64> {
        self.timers.get(name).copied()
    }

    /// Plain-text timer listing, one line per timer.
    pub fn render(&self) -> String {
        let mut out = String::from("Program timers:\n");
        for (name, secs) in &self.timers {
            let _ = writeln!(out, "  {name}: {secs:.6}s");
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
