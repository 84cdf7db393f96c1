//! Observed-series counterparts of the ensemble pipeline.

use nereus_field::{RegionSeries, RegionValues, SeasonalField, SeasonalMeans};
use nereus_stats::{nan_max, rolling_mean_centered};
use nereus_trend::pivot_offsets;

use crate::distribution::{DetrendOffsets, UnseenDistribution};
use crate::error::UnseenError;
use crate::options::DistributionOptions;

/// Applies the ensemble pipeline to an observed seasonal field: detrend
/// against the trend reference, subtract the across-year climatology,
/// roll with `window_days`, take the NaN-aware seasonal maximum.
///
/// The result is a distribution with a single realisation, one extreme
/// per (region, year), directly comparable to the model distribution's
/// moments.
///
/// # Errors
///
/// [`UnseenError::RegionMismatch`] on differing region axes; option and
/// trend-fitting errors propagate.
pub fn observed_extremes(
    obs: &SeasonalField,
    trend: &SeasonalMeans,
    opts: &DistributionOptions,
) -> Result<(UnseenDistribution, DetrendOffsets), UnseenError> {
    opts.validate()?;
    if obs.regions() != trend.regions() {
        return Err(UnseenError::RegionMismatch {
            model: obs.regions().join(", "),
            trend: trend.regions().join(", "),
        });
    }

    let n_years = obs.years().len();
    let nt = obs.n_time();
    let climatology = obs.climatology_over_years();
    let mut samples = Vec::with_capacity(obs.regions().len() * n_years);
    let mut offset_data = Vec::with_capacity(obs.regions().len() * n_years);
    let mut anomaly = vec![0.0; nt];

    for (r, _) in obs.regions().iter().enumerate() {
        let offsets = if opts.detrend() {
            pivot_offsets(
                trend.years(),
                trend.values(r),
                opts.pivot_year(),
                obs.years(),
                opts.mode(),
                opts.extrapolate_years(),
            )?
        } else {
            vec![0.0; n_years]
        };
        let clim = &climatology[r * nt..(r + 1) * nt];
        for (y, &offset) in offsets.iter().enumerate() {
            let series = obs.series(r, y);
            for (t, a) in anomaly.iter_mut().enumerate() {
                *a = series[t] - offset - clim[t];
            }
            let rolled = rolling_mean_centered(&anomaly, opts.window_days());
            samples.push(nan_max(&rolled));
        }
        offset_data.extend(offsets);
    }

    let distribution = UnseenDistribution::new(
        obs.regions().to_vec(),
        1,
        obs.years().to_vec(),
        samples,
    )?;
    let offsets = DetrendOffsets::new(obs.regions().to_vec(), obs.years().to_vec(), offset_data);
    Ok((distribution, offsets))
}

/// The peak anomaly of an observed event window against the
/// day-of-season climatology: per region, subtract the climatology value
/// of the matching (month, day), roll with `window_days`, take the
/// maximum.
///
/// This is the focus-event magnitude the risk estimators measure
/// exceedance against.
///
/// # Errors
///
/// [`UnseenError::RegionMismatch`] on differing region axes;
/// [`UnseenError::DayOutsideClimatology`] if an event date has no
/// (month, day) counterpart on the climatology time axis.
pub fn observed_event_peak(
    event: &RegionSeries,
    climatology: &SeasonalField,
    window_days: usize,
) -> Result<RegionValues, UnseenError> {
    if event.regions() != climatology.regions() {
        return Err(UnseenError::RegionMismatch {
            model: event.regions().join(", "),
            trend: climatology.regions().join(", "),
        });
    }

    // Map each event date onto the climatology's day-of-season axis.
    let clim_time = climatology.time();
    let time_map: Vec<usize> = event
        .dates()
        .iter()
        .map(|d| {
            clim_time
                .iter()
                .position(|c| c.month() == d.month() && c.day() == d.day())
                .ok_or(UnseenError::DayOutsideClimatology {
                    date: d.to_string(),
                })
        })
        .collect::<Result<_, _>>()?;

    let clim = climatology.climatology_over_years();
    let nt = climatology.n_time();
    let mut peaks = Vec::with_capacity(event.n_regions());
    for r in 0..event.n_regions() {
        let series = event.values(r);
        let ref_clim = &clim[r * nt..(r + 1) * nt];
        let anomaly: Vec<f64> = series
            .iter()
            .zip(&time_map)
            .map(|(&v, &t)| v - ref_clim[t])
            .collect();
        let rolled = rolling_mean_centered(&anomaly, window_days);
        peaks.push(nan_max(&rolled));
    }

    Ok(RegionValues::new(event.regions().to_vec(), peaks)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nereus_calendar::{Date, date_sequence};

    fn obs_field(values_by_year: &[f64], n_time: usize) -> SeasonalField {
        let years: Vec<i32> = (2000..2000 + values_by_year.len() as i32).collect();
        let mut data = Vec::new();
        for &v in values_by_year {
            data.extend(std::iter::repeat(v).take(n_time));
        }
        SeasonalField::new(
            vec!["a".into()],
            years,
            date_sequence(Date::new(2000, 6, 1).unwrap(), n_time),
            data,
        )
        .unwrap()
    }

    #[test]
    fn flat_observations_give_zero_extremes() {
        let obs = obs_field(&[3.0, 3.0, 3.0, 3.0], 15);
        let trend = SeasonalMeans::new(
            vec!["a".into()],
            vec![2000, 2001, 2002, 2003],
            vec![3.0; 4],
        )
        .unwrap();
        let opts = DistributionOptions::new(5, 2003);
        let (distr, _) = observed_extremes(&obs, &trend, &opts).unwrap();
        assert_eq!(distr.n_realisations(), 1);
        assert_eq!(distr.sample_size(), 4);
        for v in distr.sample(0) {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn event_peak_is_anomaly_against_climatology() {
        // Climatology is 1.0 everywhere; event sits 2.0 above it.
        let clim = obs_field(&[1.0, 1.0], 15);
        let event_dates = date_sequence(Date::new(2023, 6, 1).unwrap(), 15);
        let event = RegionSeries::new(vec!["a".into()], event_dates, vec![3.0; 15]).unwrap();
        let peak = observed_event_peak(&event, &clim, 5).unwrap();
        assert_relative_eq!(peak.value(0), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn event_outside_climatology_window_rejected() {
        let clim = obs_field(&[1.0, 1.0], 15);
        // September dates never appear on a June climatology axis.
        let event_dates = date_sequence(Date::new(2023, 9, 1).unwrap(), 5);
        let event = RegionSeries::new(vec!["a".into()], event_dates, vec![3.0; 5]).unwrap();
        let err = observed_event_peak(&event, &clim, 3).unwrap_err();
        assert!(matches!(err, UnseenError::DayOutsideClimatology { .. }));
    }
}
