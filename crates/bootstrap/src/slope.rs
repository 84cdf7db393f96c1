//! Stratified bootstrap of the ensemble trend slope.

use nereus_field::YearlyEnsemble;
use nereus_trend::LinearFit;
use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use crate::ci::{ci_bounds, unit_rng};
use crate::error::BootstrapError;
use crate::params::BootstrapParams;

/// Bootstrapped trend slopes of the seasonal-mean ensemble, one draw
/// set per region.
#[derive(Debug, Clone)]
pub struct SlopeSamples {
    regions: Vec<String>,
    n_iterations: usize,
    q_low: f64,
    q_high: f64,
    slopes: Vec<f64>,
}

impl SlopeSamples {
    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of bootstrap iterations per region.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// The slope draws of one region.
    pub fn slopes(&self, region_idx: usize) -> &[f64] {
        let n = self.n_iterations;
        &self.slopes[region_idx * n..(region_idx + 1) * n]
    }

    /// Interval bounds of one region's slope draws.
    pub fn ci(&self, region_idx: usize) -> (f64, f64) {
        ci_bounds(self.slopes(region_idx), self.q_low, self.q_high)
    }
}

/// Bootstraps the OLS slope of the yearly ensemble under the stratified
/// per-year regime.
///
/// Per iteration one realisation is drawn per year — the year axis is
/// never resampled, so every pseudo time-series spans the full hindcast
/// period and only the within-year ensemble spread enters the slope
/// uncertainty.
///
/// # Errors
///
/// Parameter errors via [`BootstrapError::InvalidParams`];
/// trend-fitting errors propagate (fewer than two years, for instance).
pub fn slope_distribution(
    yearly: &YearlyEnsemble,
    params: &BootstrapParams,
) -> Result<SlopeSamples, BootstrapError> {
    params.validate()?;
    let n_regions = yearly.regions().len();
    let n_iter = params.n_iterations();
    info!(
        regions = n_regions,
        iterations = n_iter,
        years = yearly.years().len(),
        "bootstrapping trend slope"
    );

    let x: Vec<f64> = yearly.years().iter().map(|&y| y as f64).collect();
    let slopes: Vec<f64> = (0..n_regions * n_iter)
        .into_par_iter()
        .map(|unit| -> Result<f64, BootstrapError> {
            let r = unit / n_iter;
            let mut rng = unit_rng(params.seed(), unit as u64);
            let mut drawn = Vec::with_capacity(yearly.years().len());
            for y in 0..yearly.years().len() {
                let pool = yearly.values(r, y);
                drawn.push(pool[rng.random_range(0..pool.len())]);
            }
            Ok(LinearFit::fit(&x, &drawn)?.slope())
        })
        .collect::<Result<_, _>>()?;

    Ok(SlopeSamples {
        regions: yearly.regions().to_vec(),
        n_iterations: n_iter,
        q_low: params.q_low(),
        q_high: params.q_high(),
        slopes,
    })
}
