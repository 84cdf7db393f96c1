//! Statistical helper functions for the nereus UNSEEN analysis.
//!
//! Everything here is empirical: sample moments, order-statistic
//! quantiles, the percentile-rank exceedance probability, and the
//! centered rolling mean used for N-day seasonal maxima. No parametric
//! distributions.

mod rolling;

pub use rolling::{nan_max, nan_mean, rolling_mean_centered};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Central moment of order `k` (population denominator).
fn central_moment(data: &[f64], k: u32) -> f64 {
    let n = data.len() as f64;
    let m = data.iter().sum::<f64>() / n;
    data.iter().map(|&x| (x - m).powi(k as i32)).sum::<f64>() / n
}

/// Biased sample skewness, `g1 = m3 / m2^(3/2)` with population moments
/// (matching `scipy.stats.skew` defaults).
///
/// Returns 0.0 for fewer than 2 elements or (near-)constant data.
pub fn skewness(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m2 = central_moment(data, 2);
    if m2 < 1e-30 {
        return 0.0;
    }
    central_moment(data, 3) / m2.powf(1.5)
}

/// Biased excess kurtosis, `m4 / m2^2 - 3` with population moments
/// (matching `scipy.stats.kurtosis` defaults: Fisher definition).
///
/// Returns 0.0 for fewer than 2 elements or (near-)constant data.
pub fn kurtosis(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m2 = central_moment(data, 2);
    if m2 < 1e-30 {
        return 0.0;
    }
    central_moment(data, 4) / (m2 * m2) - 3.0
}

/// Quantile with linear interpolation between order statistics
/// (R type 7, the numpy default).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Exceedance probability of `x` in `sample`, in percent:
/// `100 - count(sample <= x) / n * 100`.
///
/// The comparison is right-closed: values exactly equal to `x` count as
/// *not* exceeding. The opposite tie-break is equally common in climate
/// statistics; this one is kept for bit-compatibility with the original
/// percentile-rank convention.
///
/// # Panics
///
/// Panics if `sample` is empty.
pub fn exceedance(sample: &[f64], x: f64) -> f64 {
    assert!(!sample.is_empty(), "exceedance: sample must not be empty");
    let le = sample.iter().filter(|&&v| v <= x).count();
    100.0 - (le as f64 / sample.len() as f64) * 100.0
}
