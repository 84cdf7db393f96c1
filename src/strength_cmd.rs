use anyhow::{Context, Result};
use tracing::info;

use nereus_bootstrap::{BootstrapParams, strength_ci};
use nereus_io::write_strength_risk;
use nereus_risk::risk_by_strength;
use nereus_unseen::{DistributionOptions, build_distribution};

use crate::analysis;
use crate::cli::StrengthArgs;

/// Run the strength-risk estimator with its bootstrap interval.
pub fn run(args: StrengthArgs) -> Result<()> {
    let mut config = analysis::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let data = analysis::load_inputs(&config)?;

    let opts = DistributionOptions::new(config.analysis.window_days, data.pivot_year);
    let (distribution, _) = build_distribution(&data.model, &data.trend, &opts)
        .context("building the extreme-event distribution failed")?;
    info!(
        sample_size = distribution.sample_size(),
        "distribution built"
    );

    let point = risk_by_strength(
        &distribution,
        &data.focus,
        config.strength.max_increment,
        config.strength.step,
    )?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let params = BootstrapParams::new(config.bootstrap.n_iterations, seed);
    let (low, high) = strength_ci(
        &distribution,
        &data.focus,
        config.strength.max_increment,
        config.strength.step,
        &params,
    )?;

    let output = args.output.unwrap_or_else(|| config.io.strength_output.clone());
    write_strength_risk(&output, &point, &low, &high)?;
    info!(path = %output.display(), seed, "strength risk written");
    Ok(())
}
