//! Distribution building from a pooled ensemble.

use nereus_field::{EnsembleField, SeasonalMeans};
use nereus_stats::{nan_max, rolling_mean_centered};
use nereus_trend::pivot_offsets;
use tracing::{debug, info};

use crate::distribution::{DetrendOffsets, UnseenDistribution};
use crate::error::UnseenError;
use crate::options::DistributionOptions;

/// Builds the empirical distribution of seasonal extremes from a pooled
/// ensemble.
///
/// Per region: pivot-year detrending offsets are derived from the trend
/// reference (all zero when detrending is disabled), the per-year offset
/// and the realisation-and-year climatology are subtracted from every
/// daily series, a centered rolling mean of `window_days` is applied,
/// and the NaN-aware seasonal maximum of each (realisation, year) is
/// stacked realisation-outer, year-inner into one flat sample.
///
/// # Errors
///
/// [`UnseenError::RegionMismatch`] if the trend reference and the model
/// carry different region axes; option and trend-fitting errors
/// propagate.
pub fn build_distribution(
    model: &EnsembleField,
    trend: &SeasonalMeans,
    opts: &DistributionOptions,
) -> Result<(UnseenDistribution, DetrendOffsets), UnseenError> {
    opts.validate()?;
    if model.regions() != trend.regions() {
        return Err(UnseenError::RegionMismatch {
            model: model.regions().join(", "),
            trend: trend.regions().join(", "),
        });
    }

    info!(
        regions = model.regions().len(),
        realisations = model.n_realisations(),
        years = model.years().len(),
        window_days = opts.window_days(),
        pivot_year = opts.pivot_year(),
        detrend = opts.detrend(),
        "building extreme-event distribution"
    );

    let n_years = model.years().len();
    let mut samples = Vec::with_capacity(model.regions().len() * model.n_realisations() * n_years);
    let mut offset_data = Vec::with_capacity(model.regions().len() * n_years);

    for (r, region) in model.regions().iter().enumerate() {
        let offsets = if opts.detrend() {
            pivot_offsets(
                trend.years(),
                trend.values(r),
                opts.pivot_year(),
                model.years(),
                opts.mode(),
                opts.extrapolate_years(),
            )?
        } else {
            vec![0.0; n_years]
        };
        let climatology = model.climatology(r);
        let extremes = region_extremes(model, r, &offsets, &climatology, opts.window_days());
        debug!(region, n = extremes.len(), "region sample complete");
        samples.extend(extremes);
        offset_data.extend(offsets);
    }

    let distribution = UnseenDistribution::new(
        model.regions().to_vec(),
        model.n_realisations(),
        model.years().to_vec(),
        samples,
    )?;
    let offsets = DetrendOffsets::new(
        model.regions().to_vec(),
        model.years().to_vec(),
        offset_data,
    );
    Ok((distribution, offsets))
}

/// The single-region kernel: one seasonal extreme per (realisation,
/// year), realisation outer, year inner.
///
/// `offsets` carries one additive offset per hindcast year and
/// `climatology` one reference value per day-of-season; both are
/// subtracted before the rolling mean.
pub fn region_extremes(
    model: &EnsembleField,
    region_idx: usize,
    offsets: &[f64],
    climatology: &[f64],
    window_days: usize,
) -> Vec<f64> {
    let n_years = model.years().len();
    let mut out = Vec::with_capacity(model.n_realisations() * n_years);
    let mut anomaly = vec![0.0; model.n_time()];
    for k in 0..model.n_realisations() {
        for (y, &offset) in offsets.iter().enumerate().take(n_years) {
            let series = model.series(region_idx, k, y);
            for (t, a) in anomaly.iter_mut().enumerate() {
                *a = series[t] - offset - climatology[t];
            }
            let rolled = rolling_mean_centered(&anomaly, window_days);
            out.push(nan_max(&rolled));
        }
    }
    out
}
