//! Centered rolling mean and NaN-aware reducers.

/// Centered rolling mean of window length `window`.
///
/// `out[i]` is the mean of `x[i - (window - 1 - window / 2) ..= i + window / 2]`
/// when that range lies fully inside the slice and every value in it is
/// finite; otherwise `out[i]` is NaN. For even windows the extra element
/// sits to the right of the label, matching the pandas/xarray
/// `rolling(center=True)` convention the original analysis used.
///
/// NaN padding introduced by the season extractor therefore knocks out
/// the rolled values whose window touches the padded timestep, and the
/// subsequent [`nan_max`] skips them.
pub fn rolling_mean_centered(x: &[f64], window: usize) -> Vec<f64> {
    let n = x.len();
    if window == 0 || window > n {
        return vec![f64::NAN; n];
    }
    let right = window / 2;
    let left = window - 1 - right;
    let mut out = vec![f64::NAN; n];
    for i in left..n.saturating_sub(right) {
        let slice = &x[i - left..=i + right];
        if slice.iter().all(|v| v.is_finite()) {
            out[i] = slice.iter().sum::<f64>() / window as f64;
        }
    }
    out
}

/// Maximum over the finite values of a slice. Returns NaN if no value is
/// finite.
pub fn nan_max(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NAN, f64::max)
}

/// Mean over the finite values of a slice. Returns NaN if no value is
/// finite.
pub fn nan_mean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in data {
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
