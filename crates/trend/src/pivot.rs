//! Pivot-year detrending offsets.

use crate::error::TrendError;
use crate::fit::LinearFit;

/// Where the pivot year is allowed to sit relative to the fitted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotMode {
    /// The pivot year lies within (or near) the hindcast period; the
    /// fitted line is evaluated directly.
    Hindcast,
    /// The pivot year lies beyond the fitted data and an explicit set
    /// of extrapolation years must contain it.
    Extrapolated,
}

/// Computes the additive detrending offset for every hindcast year.
///
/// A line is fitted to `(trend_years, trend_values)` and the offset for
/// hindcast year `y` is `trend(y) - trend(pivot_year)`. Subtracting the
/// offsets flattens the secular trend onto the pivot year's level; the
/// pivot year itself gets an offset of exactly zero.
///
/// In [`PivotMode::Extrapolated`] the caller must supply the years the
/// trend is being extrapolated over, and `pivot_year` must be one of
/// them. [`PivotMode::Hindcast`] ignores `extrapolate_years`.
///
/// # Errors
///
/// Fitting errors propagate from [`LinearFit::fit`]. Extrapolated mode
/// additionally raises [`TrendError::MissingExtrapolateYears`] or
/// [`TrendError::PivotOutsideExtrapolation`].
pub fn pivot_offsets(
    trend_years: &[i32],
    trend_values: &[f64],
    pivot_year: i32,
    hindcast_years: &[i32],
    mode: PivotMode,
    extrapolate_years: Option<&[i32]>,
) -> Result<Vec<f64>, TrendError> {
    if mode == PivotMode::Extrapolated {
        let ext = extrapolate_years.ok_or(TrendError::MissingExtrapolateYears)?;
        if !ext.contains(&pivot_year) {
            let first = ext.iter().copied().min().unwrap_or(pivot_year);
            let last = ext.iter().copied().max().unwrap_or(pivot_year);
            return Err(TrendError::PivotOutsideExtrapolation {
                pivot_year,
                first,
                last,
            });
        }
    }

    let x: Vec<f64> = trend_years.iter().map(|&y| y as f64).collect();
    let fit = LinearFit::fit(&x, trend_values)?;
    let y0 = fit.predict(pivot_year as f64);
    Ok(hindcast_years
        .iter()
        .map(|&y| fit.predict(y as f64) - y0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hindcast_mode_ignores_extrapolate_years() {
        let years = [2000, 2001, 2002];
        let values = [1.0, 2.0, 3.0];
        let offsets =
            pivot_offsets(&years, &values, 2002, &years, PivotMode::Hindcast, None).unwrap();
        assert_relative_eq!(offsets[0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(offsets[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn extrapolated_mode_requires_years() {
        let years = [2000, 2001, 2002];
        let values = [1.0, 2.0, 3.0];
        let err = pivot_offsets(&years, &values, 2030, &years, PivotMode::Extrapolated, None)
            .unwrap_err();
        assert_eq!(err, TrendError::MissingExtrapolateYears);
    }

    #[test]
    fn extrapolated_pivot_must_be_listed() {
        let years = [2000, 2001, 2002];
        let values = [1.0, 2.0, 3.0];
        let ext = [2020, 2021, 2022];
        let err = pivot_offsets(
            &years,
            &values,
            2030,
            &years,
            PivotMode::Extrapolated,
            Some(&ext),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrendError::PivotOutsideExtrapolation {
                pivot_year: 2030,
                first: 2020,
                last: 2022
            }
        );
    }
}
