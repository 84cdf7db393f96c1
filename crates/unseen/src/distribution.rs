//! The pooled extreme-event distribution and its detrending offsets.

use crate::error::UnseenError;

/// The empirical distribution of seasonal extremes, one flat sample per
/// region.
///
/// Each sample stacks the per-(realisation, year) extremes with the
/// realisation axis outer and the year axis inner, so entry
/// `k * n_years + y` is realisation `k` in year index `y`. Consumers
/// only read the samples; exceedance probabilities, bootstrap draws and
/// moments all derive from this one container.
#[derive(Debug, Clone)]
pub struct UnseenDistribution {
    regions: Vec<String>,
    n_realisations: usize,
    years: Vec<i32>,
    samples: Vec<f64>,
}

impl UnseenDistribution {
    pub(crate) fn new(
        regions: Vec<String>,
        n_realisations: usize,
        years: Vec<i32>,
        samples: Vec<f64>,
    ) -> Result<Self, UnseenError> {
        let expected = regions.len() * n_realisations * years.len();
        if samples.len() != expected {
            return Err(UnseenError::InvalidOption {
                reason: format!(
                    "sample length {} does not match regions x realisations x years = {}",
                    samples.len(),
                    expected
                ),
            });
        }
        Ok(Self {
            regions,
            n_realisations,
            years,
            samples,
        })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Size of the pooled realisation axis.
    pub fn n_realisations(&self) -> usize {
        self.n_realisations
    }

    /// Hindcast year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Sample size per region (realisations x years).
    pub fn sample_size(&self) -> usize {
        self.n_realisations * self.years.len()
    }

    /// The flat sample of one region.
    pub fn sample(&self, region_idx: usize) -> &[f64] {
        let n = self.sample_size();
        &self.samples[region_idx * n..(region_idx + 1) * n]
    }
}

/// The additive detrending offset applied to every (region, year),
/// kept for inspection and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct DetrendOffsets {
    regions: Vec<String>,
    years: Vec<i32>,
    data: Vec<f64>,
}

impl DetrendOffsets {
    pub(crate) fn new(regions: Vec<String>, years: Vec<i32>, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), regions.len() * years.len());
        Self {
            regions,
            years,
            data,
        }
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Per-year offsets of one region.
    pub fn values(&self, region_idx: usize) -> &[f64] {
        let ny = self.years.len();
        &self.data[region_idx * ny..(region_idx + 1) * ny]
    }
}
