use log::info;

use crate::bench::config::BenchConfig;
use crate::bench::report::BenchReport;
use crate::errors::BenchResult;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::spec::NetworkSpec;
use crate::timing::timers::Timers;

pub const MODEL_BUILDING: &str = "model_building";
pub const FORWARD: &str = "forward";
pub const TOTAL_TIME: &str = "total_time";

/// Builds the benchmark network, runs one untimed warm-up forward pass
/// (which initialises the weights) and one timed forward pass.
///
/// Both passes see the same all-ones `(input_size × 1)` input.
pub fn run(config: &BenchConfig) -> BenchResult<BenchReport> {
    let mut timers = Timers::new();
    timers.start(TOTAL_TIME)?;

    timers.start(MODEL_BUILDING)?;
    let spec = NetworkSpec::mlp(config.input_size, config.hidden_size, config.output_size);
    let mut model = Network::from_spec(&spec, config.seed);
    timers.stop(MODEL_BUILDING)?;
    info!("built {} layers:\n{}", model.layers().len(), model.summary());

    let input = Matrix::ones(config.input_size, 1);

    // Warm-up: allocates parameters; output discarded.
    model.predict(&input)?;

    timers.start(FORWARD)?;
    let output = model.predict(&input)?;
    let elapsed = timers.stop(FORWARD)?;
    info!("forward pass produced {:?} in {elapsed:?}", output.shape());

    timers.stop(TOTAL_TIME)?;

    Ok(BenchReport::new(
        *config,
        spec,
        model.parameter_count(),
        output.shape(),
        &timers,
    ))
}
