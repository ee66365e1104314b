//! # mlp-forward
//!
//! Times the forward pass of a feed-forward network
//! (`linear → sigmoid` ×3, `linear → log-softmax`) on an all-ones input.
//!
//! ```bash
//! mlp-forward                       # -i 10000 -d 100 -o 10
//! mlp-forward -i 784 -d 64 -o 10 --seed 1 -v
//! mlp-forward --config bench.json --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use mlp_forward::bench::{self, BenchConfig};

#[derive(Parser, Debug)]
#[command(
    name = "mlp-forward",
    about = "Simple program to benchmark a feed-forward network forward pass",
    version
)]
struct Cli {
    /// The input size [default: 10000].
    #[arg(short = 'i', long = "input_size")]
    input_size: Option<usize>,

    /// The hidden size [default: 100].
    #[arg(short = 'd', long = "hidden_size")]
    hidden_size: Option<usize>,

    /// The output size [default: 10].
    #[arg(short = 'o', long = "output_size")]
    output_size: Option<usize>,

    /// Seed for weight initialisation (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with benchmark settings; flags given here take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Resolves flag > config file > default.
    fn resolve(&self) -> anyhow::Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };
        if let Some(v) = self.input_size {
            config.input_size = v;
        }
        if let Some(v) = self.hidden_size {
            config.hidden_size = v;
        }
        if let Some(v) = self.output_size {
            config.output_size = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve()?;
    let report = bench::run(&config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mlp-forward"]).unwrap();
        let explicit = Cli::try_parse_from(["mlp-forward", "-i", "10000", "-d", "100", "-o", "10"]).unwrap();
        assert_eq!(cli.resolve().unwrap(), explicit.resolve().unwrap());
        assert_eq!(cli.resolve().unwrap(), BenchConfig::default());
    }

    #[test]
    fn test_long_names() {
        let cli = Cli::try_parse_from([
            "mlp-forward", "--input_size", "5", "--hidden_size", "4", "--output_size", "3", "--seed", "9",
        ])
        .unwrap();
        let c = cli.resolve().unwrap();
        assert_eq!((c.input_size, c.hidden_size, c.output_size, c.seed), (5, 4, 3, Some(9)));
    }

    #[test]
    fn test_malformed_values_rejected() {
        assert!(Cli::try_parse_from(["mlp-forward", "-i", "ten"]).is_err());
        assert!(Cli::try_parse_from(["mlp-forward", "-i", "-5"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("mlp-forward-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "input_size": 20, "hidden_size": 8, "seed": 1 }"#).unwrap();
        let cli = Cli::try_parse_from([
            "mlp-forward", "--config", path.to_str().unwrap(), "-d", "16",
        ])
        .unwrap();
        let c = cli.resolve().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((c.input_size, c.hidden_size, c.output_size, c.seed), (20, 16, 10, Some(1)));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["mlp-forward", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }
}
