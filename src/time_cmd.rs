use anyhow::{Result, bail};
use tracing::info;

use nereus_bootstrap::{BootstrapParams, time_ci};
use nereus_io::write_time_risk;
use nereus_risk::risk_by_time;

use crate::analysis;
use crate::cli::TimeArgs;

/// Run the time-risk estimator with its bootstrap interval, hindcast
/// pass plus the optional extrapolated pass.
pub fn run(args: TimeArgs) -> Result<()> {
    let mut config = analysis::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let data = analysis::load_inputs(&config)?;

    let first_pivot = config.time.first_pivot.unwrap_or(config.analysis.first_year);
    let last_pivot = config.time.last_pivot.unwrap_or(config.analysis.last_year);
    if first_pivot > last_pivot {
        bail!("first_pivot {first_pivot} is after last_pivot {last_pivot}");
    }
    let pivots: Vec<i32> = (first_pivot..=last_pivot).collect();

    let extrapolate: Option<Vec<i32>> =
        match (config.time.extrapolate_first, config.time.extrapolate_last) {
            (Some(first), Some(last)) => {
                if config.analysis.trend_source != "model" {
                    bail!("the extrapolated pass needs trend_source = \"model\"");
                }
                if first > last {
                    bail!("extrapolate_first {first} is after extrapolate_last {last}");
                }
                Some((first..=last).collect())
            }
            (None, None) => None,
            _ => bail!("set both extrapolate_first and extrapolate_last, or neither"),
        };

    let (point, ext_point) = risk_by_time(
        &data.model,
        &data.trend,
        config.analysis.window_days,
        &data.focus,
        &pivots,
        extrapolate.as_deref(),
    )?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let params = BootstrapParams::new(config.bootstrap.n_iterations, seed);
    let ((low, high), ext_ci) = time_ci(
        &data.model,
        &data.trend,
        config.analysis.window_days,
        &data.focus,
        &pivots,
        extrapolate.as_deref(),
        &params,
    )?;

    let output = args.output.unwrap_or_else(|| config.io.time_output.clone());
    write_time_risk(&output, &point, &low, &high)?;
    info!(path = %output.display(), seed, "time risk written");

    if let (Some(ext_point), Some((ext_low, ext_high))) = (ext_point, ext_ci) {
        let path = &config.io.time_extrapolated_output;
        write_time_risk(path, &ext_point, &ext_low, &ext_high)?;
        info!(path = %path.display(), "extrapolated time risk written");
    }
    Ok(())
}
