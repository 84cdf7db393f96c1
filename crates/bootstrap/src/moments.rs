//! Bootstrap distributions of the sample moments.

use nereus_stats::{kurtosis, mean, sd, skewness};
use nereus_unseen::UnseenDistribution;
use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use crate::ci::{ci_bounds, unit_rng};
use crate::error::BootstrapError;
use crate::params::BootstrapParams;

/// Bootstrapped mean, standard deviation, skewness, and kurtosis of the
/// pooled distribution, one draw set per region.
#[derive(Debug, Clone)]
pub struct MomentSamples {
    regions: Vec<String>,
    n_iterations: usize,
    q_low: f64,
    q_high: f64,
    means: Vec<f64>,
    sds: Vec<f64>,
    skews: Vec<f64>,
    kurts: Vec<f64>,
}

impl MomentSamples {
    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of bootstrap iterations per region.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// The mean draws of one region.
    pub fn means(&self, region_idx: usize) -> &[f64] {
        self.slice(&self.means, region_idx)
    }

    /// The standard-deviation draws of one region.
    pub fn sds(&self, region_idx: usize) -> &[f64] {
        self.slice(&self.sds, region_idx)
    }

    /// The skewness draws of one region.
    pub fn skews(&self, region_idx: usize) -> &[f64] {
        self.slice(&self.skews, region_idx)
    }

    /// The excess-kurtosis draws of one region.
    pub fn kurts(&self, region_idx: usize) -> &[f64] {
        self.slice(&self.kurts, region_idx)
    }

    /// Interval bounds of one region's mean draws.
    pub fn mean_ci(&self, region_idx: usize) -> (f64, f64) {
        ci_bounds(self.means(region_idx), self.q_low, self.q_high)
    }

    /// Interval bounds of one region's standard-deviation draws.
    pub fn sd_ci(&self, region_idx: usize) -> (f64, f64) {
        ci_bounds(self.sds(region_idx), self.q_low, self.q_high)
    }

    /// Interval bounds of one region's skewness draws.
    pub fn skewness_ci(&self, region_idx: usize) -> (f64, f64) {
        ci_bounds(self.skews(region_idx), self.q_low, self.q_high)
    }

    /// Interval bounds of one region's kurtosis draws.
    pub fn kurtosis_ci(&self, region_idx: usize) -> (f64, f64) {
        ci_bounds(self.kurts(region_idx), self.q_low, self.q_high)
    }

    fn slice<'a>(&self, data: &'a [f64], region_idx: usize) -> &'a [f64] {
        let n = self.n_iterations;
        &data[region_idx * n..(region_idx + 1) * n]
    }
}

/// Bootstraps the four sample moments at observed sample size.
///
/// Flat regime: per iteration `n_draw` values are drawn with
/// replacement from the region's pooled sample — `n_draw` is typically
/// the number of observed years, so the model moments become comparable
/// to what the short observed record can show.
///
/// # Errors
///
/// [`BootstrapError::InvalidParams`] for zero `n_draw` or invalid
/// parameters.
pub fn moment_distribution(
    distribution: &UnseenDistribution,
    n_draw: usize,
    params: &BootstrapParams,
) -> Result<MomentSamples, BootstrapError> {
    params.validate()?;
    if n_draw == 0 {
        return Err(BootstrapError::InvalidParams {
            reason: "n_draw must be >= 1".to_string(),
        });
    }
    let n_regions = distribution.regions().len();
    let n_iter = params.n_iterations();
    info!(
        regions = n_regions,
        iterations = n_iter,
        n_draw,
        "bootstrapping sample moments"
    );

    // One work unit per (region, iteration); each yields one row of the
    // four moment arrays.
    let rows: Vec<[f64; 4]> = (0..n_regions * n_iter)
        .into_par_iter()
        .map(|unit| {
            let r = unit / n_iter;
            let sample = distribution.sample(r);
            let mut rng = unit_rng(params.seed(), unit as u64);
            let mut buf = Vec::with_capacity(n_draw);
            for _ in 0..n_draw {
                buf.push(sample[rng.random_range(0..sample.len())]);
            }
            [mean(&buf), sd(&buf), skewness(&buf), kurtosis(&buf)]
        })
        .collect();

    let mut means = Vec::with_capacity(rows.len());
    let mut sds = Vec::with_capacity(rows.len());
    let mut skews = Vec::with_capacity(rows.len());
    let mut kurts = Vec::with_capacity(rows.len());
    for [m, s, g1, g2] in rows {
        means.push(m);
        sds.push(s);
        skews.push(g1);
        kurts.push(g2);
    }

    Ok(MomentSamples {
        regions: distribution.regions().to_vec(),
        n_iterations: n_iter,
        q_low: params.q_low(),
        q_high: params.q_high(),
        means,
        sds,
        skews,
        kurts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nereus_field::{EnsembleField, SeasonalMeans};
    use nereus_unseen::{DistributionOptions, build_distribution};

    fn distribution() -> UnseenDistribution {
        use nereus_calendar::{Date, date_sequence};
        let years: Vec<i32> = (2000..=2009).collect();
        let n_real = 5;
        let n_time = 20;
        let mut data = Vec::new();
        for k in 0..n_real {
            for _ in &years {
                data.extend(std::iter::repeat(k as f64 * 0.3).take(n_time));
            }
        }
        let model = EnsembleField::new(
            vec!["a".into()],
            n_real,
            years.clone(),
            date_sequence(Date::new(2000, 6, 1).unwrap(), n_time),
            data,
        )
        .unwrap();
        let trend = SeasonalMeans::new(vec!["a".into()], years, vec![1.0; 10]).unwrap();
        let opts = DistributionOptions::new(5, 2009).with_detrend(false);
        build_distribution(&model, &trend, &opts).unwrap().0
    }

    #[test]
    fn intervals_are_ordered() {
        let distr = distribution();
        let samples =
            moment_distribution(&distr, 10, &BootstrapParams::new(200, 42)).unwrap();
        for ci in [
            samples.mean_ci(0),
            samples.sd_ci(0),
            samples.skewness_ci(0),
            samples.kurtosis_ci(0),
        ] {
            assert!(ci.0 <= ci.1);
        }
    }

    #[test]
    fn single_iteration_collapses() {
        let distr = distribution();
        let samples = moment_distribution(&distr, 10, &BootstrapParams::new(1, 42)).unwrap();
        let (low, high) = samples.mean_ci(0);
        assert_relative_eq!(low, high);
    }

    #[test]
    fn seeded_runs_agree() {
        let distr = distribution();
        let a = moment_distribution(&distr, 10, &BootstrapParams::new(50, 7)).unwrap();
        let b = moment_distribution(&distr, 10, &BootstrapParams::new(50, 7)).unwrap();
        assert_eq!(a.means(0), b.means(0));
        assert_eq!(a.kurts(0), b.kurts(0));
    }

    #[test]
    fn zero_draw_rejected() {
        let distr = distribution();
        assert!(moment_distribution(&distr, 0, &BootstrapParams::new(10, 0)).is_err());
    }
}
