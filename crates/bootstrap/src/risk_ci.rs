//! Confidence intervals for the strength and time risk grids.

use nereus_field::{EnsembleField, RegionValues, SeasonalMeans};
use nereus_risk::{StrengthRisk, TimeRisk};
use nereus_stats::exceedance;
use nereus_trend::{PivotMode, pivot_offsets};
use nereus_unseen::{UnseenDistribution, region_extremes};
use rayon::prelude::*;
use tracing::info;

use crate::ci::{ci_bounds, resample_into, unit_rng};
use crate::error::BootstrapError;
use crate::params::BootstrapParams;

/// Bootstrap interval around [`nereus_risk::risk_by_strength`].
///
/// Per (region, increment) grid point the pooled sample is resampled
/// with replacement at full size `n_iterations` times, the exceedance
/// recomputed per draw, and the interval taken from the finished draw
/// set. Grid points run rayon-parallel with per-unit seeds, so worker
/// completion order does not affect the result.
///
/// # Errors
///
/// [`BootstrapError::RegionMismatch`] on differing region axes;
/// parameter and grid errors via [`BootstrapError::InvalidParams`].
pub fn strength_ci(
    distribution: &UnseenDistribution,
    focus: &RegionValues,
    max_increment: f64,
    step: f64,
    params: &BootstrapParams,
) -> Result<(StrengthRisk, StrengthRisk), BootstrapError> {
    params.validate()?;
    if distribution.regions() != focus.regions() {
        return Err(BootstrapError::RegionMismatch {
            left: distribution.regions().join(", "),
            right: focus.regions().join(", "),
        });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(BootstrapError::InvalidParams {
            reason: format!("step must be finite and positive, got {step}"),
        });
    }

    let n_steps = (max_increment / step).round() as usize + 1;
    let increments: Vec<f64> = (0..n_steps).map(|i| i as f64 * step).collect();
    let n_regions = distribution.regions().len();
    info!(
        grid_points = n_regions * n_steps,
        iterations = params.n_iterations(),
        "bootstrapping strength risk"
    );

    let bounds: Vec<(f64, f64)> = (0..n_regions * n_steps)
        .into_par_iter()
        .map(|unit| {
            let r = unit / n_steps;
            let i = unit % n_steps;
            let sample = distribution.sample(r);
            let threshold = focus.value(r) + increments[i];
            let mut rng = unit_rng(params.seed(), unit as u64);
            let mut buf = Vec::with_capacity(sample.len());
            let mut draws = Vec::with_capacity(params.n_iterations());
            for _ in 0..params.n_iterations() {
                resample_into(&mut rng, sample, &mut buf);
                draws.push(exceedance(&buf, threshold));
            }
            ci_bounds(&draws, params.q_low(), params.q_high())
        })
        .collect();

    let (lows, highs): (Vec<f64>, Vec<f64>) = bounds.into_iter().unzip();
    Ok((
        StrengthRisk::new(distribution.regions().to_vec(), increments.clone(), lows),
        StrengthRisk::new(distribution.regions().to_vec(), increments, highs),
    ))
}

/// Bootstrap interval around [`nereus_risk::risk_by_time`], hindcast
/// pass plus an optional extrapolated pass.
///
/// # Errors
///
/// [`BootstrapError::RegionMismatch`] on differing region axes;
/// trend-fitting errors propagate.
#[allow(clippy::too_many_arguments)]
pub fn time_ci(
    model: &EnsembleField,
    trend: &SeasonalMeans,
    window_days: usize,
    focus: &RegionValues,
    pivot_years: &[i32],
    extrapolate_years: Option<&[i32]>,
    params: &BootstrapParams,
) -> Result<((TimeRisk, TimeRisk), Option<(TimeRisk, TimeRisk)>), BootstrapError> {
    params.validate()?;
    if model.regions() != focus.regions() {
        return Err(BootstrapError::RegionMismatch {
            left: model.regions().join(", "),
            right: focus.regions().join(", "),
        });
    }
    if model.regions() != trend.regions() {
        return Err(BootstrapError::RegionMismatch {
            left: model.regions().join(", "),
            right: trend.regions().join(", "),
        });
    }

    let hindcast = time_ci_pass(
        model,
        trend,
        window_days,
        focus,
        pivot_years,
        PivotMode::Hindcast,
        None,
        params,
    )?;
    let extrapolated = match extrapolate_years {
        Some(years) => Some(time_ci_pass(
            model,
            trend,
            window_days,
            focus,
            years,
            PivotMode::Extrapolated,
            Some(years),
            params,
        )?),
        None => None,
    };
    Ok((hindcast, extrapolated))
}

#[allow(clippy::too_many_arguments)]
fn time_ci_pass(
    model: &EnsembleField,
    trend: &SeasonalMeans,
    window_days: usize,
    focus: &RegionValues,
    pivot_years: &[i32],
    mode: PivotMode,
    extrapolate_years: Option<&[i32]>,
    params: &BootstrapParams,
) -> Result<(TimeRisk, TimeRisk), BootstrapError> {
    let n_regions = model.regions().len();
    let n_pivots = pivot_years.len();
    info!(
        grid_points = n_regions * n_pivots,
        iterations = params.n_iterations(),
        ?mode,
        "bootstrapping time risk"
    );
    let climatologies: Vec<Vec<f64>> = (0..n_regions).map(|r| model.climatology(r)).collect();

    // The extrapolated pass offsets the unit index so its seeds never
    // collide with the hindcast pass.
    let unit_base = match mode {
        PivotMode::Hindcast => 0u64,
        PivotMode::Extrapolated => (n_regions * n_pivots) as u64,
    };

    let bounds: Vec<(f64, f64)> = (0..n_regions * n_pivots)
        .into_par_iter()
        .map(|unit| -> Result<(f64, f64), BootstrapError> {
            let r = unit / n_pivots;
            let p = unit % n_pivots;
            let offsets = pivot_offsets(
                trend.years(),
                trend.values(r),
                pivot_years[p],
                model.years(),
                mode,
                extrapolate_years,
            )?;
            let extremes =
                region_extremes(model, r, &offsets, &climatologies[r], window_days);
            let threshold = focus.value(r);
            let mut rng = unit_rng(params.seed(), unit_base + unit as u64);
            let mut buf = Vec::with_capacity(extremes.len());
            let mut draws = Vec::with_capacity(params.n_iterations());
            for _ in 0..params.n_iterations() {
                resample_into(&mut rng, &extremes, &mut buf);
                draws.push(exceedance(&buf, threshold));
            }
            Ok(ci_bounds(&draws, params.q_low(), params.q_high()))
        })
        .collect::<Result<_, _>>()?;

    let (lows, highs): (Vec<f64>, Vec<f64>) = bounds.into_iter().unzip();
    Ok((
        TimeRisk::new(model.regions().to_vec(), pivot_years.to_vec(), lows),
        TimeRisk::new(model.regions().to_vec(), pivot_years.to_vec(), highs),
    ))
}
