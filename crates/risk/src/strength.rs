//! Risk as a function of event strength.

use nereus_field::RegionValues;
use nereus_stats::exceedance;
use nereus_unseen::UnseenDistribution;
use tracing::info;

use crate::error::RiskError;
use crate::result::StrengthRisk;

/// Exceedance risk of the focus event and stronger hypothetical events.
///
/// The increment grid runs `0, step, ..., max_increment` inclusive; per
/// region and increment the risk is the percentage of the pooled sample
/// strictly above `focus + increment`. With the right-closed exceedance
/// convention the curve is monotonically non-increasing in the
/// increment.
///
/// # Errors
///
/// [`RiskError::RegionMismatch`] if the distribution and the focus
/// event carry different region axes (checked before any computation);
/// [`RiskError::InvalidGrid`] for a non-positive step or a negative
/// maximum.
pub fn risk_by_strength(
    distribution: &UnseenDistribution,
    focus: &RegionValues,
    max_increment: f64,
    step: f64,
) -> Result<StrengthRisk, RiskError> {
    if distribution.regions() != focus.regions() {
        return Err(RiskError::RegionMismatch {
            distribution: distribution.regions().join(", "),
            focus: focus.regions().join(", "),
        });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(RiskError::InvalidGrid {
            reason: format!("step must be finite and positive, got {step}"),
        });
    }
    if !max_increment.is_finite() || max_increment < 0.0 {
        return Err(RiskError::InvalidGrid {
            reason: format!("max_increment must be finite and non-negative, got {max_increment}"),
        });
    }

    let n_steps = (max_increment / step).round() as usize + 1;
    let increments: Vec<f64> = (0..n_steps).map(|i| i as f64 * step).collect();
    info!(
        regions = distribution.regions().len(),
        increments = n_steps,
        "computing strength risk"
    );

    let mut values = Vec::with_capacity(distribution.regions().len() * n_steps);
    for r in 0..distribution.regions().len() {
        let sample = distribution.sample(r);
        let base = focus.value(r);
        for &inc in &increments {
            values.push(exceedance(sample, base + inc));
        }
    }

    Ok(StrengthRisk::new(
        distribution.regions().to_vec(),
        increments,
        values,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_must_be_positive() {
        let focus = RegionValues::new(vec![], vec![]).unwrap();
        let distr = empty_distribution();
        let err = risk_by_strength(&distr, &focus, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RiskError::InvalidGrid { .. }));
    }

    #[test]
    fn region_mismatch_checked_first() {
        let focus = RegionValues::new(vec!["b".into()], vec![1.0]).unwrap();
        let distr = empty_distribution();
        // Bad step too, but the region check runs first.
        let err = risk_by_strength(&distr, &focus, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RiskError::RegionMismatch { .. }));
    }

    fn empty_distribution() -> UnseenDistribution {
        // A distribution over no regions is valid and trivially empty.
        let field = nereus_field::EnsembleField::new(vec![], 1, vec![2000], vec![], vec![])
            .unwrap();
        let trend = nereus_field::SeasonalMeans::new(vec![], vec![2000], vec![]).unwrap();
        let opts = nereus_unseen::DistributionOptions::new(1, 2000).with_detrend(false);
        nereus_unseen::build_distribution(&field, &trend, &opts).unwrap().0
    }
}
