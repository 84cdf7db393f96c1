//! Risk as a function of the pivot year.

use nereus_field::{EnsembleField, RegionValues, SeasonalMeans};
use nereus_stats::exceedance;
use nereus_trend::{PivotMode, pivot_offsets};
use nereus_unseen::region_extremes;
use tracing::info;

use crate::error::RiskError;
use crate::result::TimeRisk;

/// Exceedance risk of the focus event as the climate pivot moves
/// through time.
///
/// For every pivot year the detrending offsets are re-derived, the
/// regional extremes re-extracted, and the exceedance of the (fixed)
/// focus event re-evaluated: the same event becomes more likely as the
/// pivot advances along a warming trend. The first pass runs over
/// `pivot_years` in hindcast mode; when `extrapolate_years` is given a
/// second pass pivots on each of those years in extrapolated mode, and
/// the second return value carries its result (`None` otherwise).
///
/// # Errors
///
/// [`RiskError::RegionMismatch`] if the model and the focus event carry
/// different region axes, [`RiskError::TrendRegionMismatch`] if the
/// trend reference does not share the model's region axis;
/// trend-fitting errors propagate.
pub fn risk_by_time(
    model: &EnsembleField,
    trend: &SeasonalMeans,
    window_days: usize,
    focus: &RegionValues,
    pivot_years: &[i32],
    extrapolate_years: Option<&[i32]>,
) -> Result<(TimeRisk, Option<TimeRisk>), RiskError> {
    if model.regions() != focus.regions() {
        return Err(RiskError::RegionMismatch {
            distribution: model.regions().join(", "),
            focus: focus.regions().join(", "),
        });
    }
    if model.regions() != trend.regions() {
        return Err(RiskError::TrendRegionMismatch {
            model: model.regions().join(", "),
            trend: trend.regions().join(", "),
        });
    }

    let hindcast = time_risk_pass(
        model,
        trend,
        window_days,
        focus,
        pivot_years,
        PivotMode::Hindcast,
        None,
    )?;

    let extrapolated = match extrapolate_years {
        Some(years) => Some(time_risk_pass(
            model,
            trend,
            window_days,
            focus,
            years,
            PivotMode::Extrapolated,
            Some(years),
        )?),
        None => None,
    };

    Ok((hindcast, extrapolated))
}

/// One pass over a pivot-year grid. The climatology is fixed per
/// region; only the offsets move with the pivot.
fn time_risk_pass(
    model: &EnsembleField,
    trend: &SeasonalMeans,
    window_days: usize,
    focus: &RegionValues,
    pivot_years: &[i32],
    mode: PivotMode,
    extrapolate_years: Option<&[i32]>,
) -> Result<TimeRisk, RiskError> {
    info!(
        regions = model.regions().len(),
        pivots = pivot_years.len(),
        ?mode,
        "computing time risk"
    );
    let mut values = Vec::with_capacity(model.regions().len() * pivot_years.len());
    for r in 0..model.regions().len() {
        let climatology = model.climatology(r);
        let base = focus.value(r);
        for &pivot in pivot_years {
            let offsets = pivot_offsets(
                trend.years(),
                trend.values(r),
                pivot,
                model.years(),
                mode,
                extrapolate_years,
            )?;
            let extremes = region_extremes(model, r, &offsets, &climatology, window_days);
            values.push(exceedance(&extremes, base));
        }
    }
    Ok(TimeRisk::new(
        model.regions().to_vec(),
        pivot_years.to_vec(),
        values,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nereus_calendar::{Date, date_sequence};

    #[test]
    fn region_mismatch_rejected() {
        let model = EnsembleField::new(
            vec!["a".into()],
            1,
            vec![2000, 2001],
            date_sequence(Date::new(2000, 6, 1).unwrap(), 5),
            vec![1.0; 10],
        )
        .unwrap();
        let trend =
            SeasonalMeans::new(vec!["a".into()], vec![2000, 2001], vec![1.0, 2.0]).unwrap();
        let focus = RegionValues::new(vec!["b".into()], vec![0.5]).unwrap();
        let err = risk_by_time(&model, &trend, 3, &focus, &[2000], None).unwrap_err();
        assert!(matches!(err, RiskError::RegionMismatch { .. }));
    }
}
