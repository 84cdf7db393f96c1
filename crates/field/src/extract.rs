//! Season extraction with leap-year padding.
//!
//! For each requested season year the window yields a closed date
//! interval `[start, start + ndays - 1]`; the source series is sliced to
//! exactly those days. When February sits inside the window, non-leap
//! years come out one day shorter than leap years, so they are padded
//! with a single trailing NaN timestep and the common time coordinate is
//! taken from a leap year found in the requested range.

use nereus_calendar::{Date, SeasonWindow, date_sequence, days_in_month};

use crate::error::FieldError;
use crate::grid::{GriddedSeasonal, GriddedSeries};
use crate::seasonal::SeasonalField;
use crate::series::RegionSeries;

/// Per-year slice positions plus the harmonised time coordinate.
struct SeasonPlan {
    /// `(start index, day count)` into the source time axis, per year.
    slices: Vec<(usize, usize)>,
    /// Common day-of-season length after padding.
    target_len: usize,
    /// Day-of-season coordinate, sourced from a full-length year.
    time: Vec<Date>,
}

/// Day count of the window in a year whose covered February is leap.
fn leap_length(window: &SeasonWindow) -> Result<usize, FieldError> {
    let mut total = 0usize;
    for &m in window.months() {
        let d = if m == 2 {
            29
        } else {
            // Month lengths other than February do not depend on the year.
            days_in_month(2001, m)?
        };
        total += usize::from(d);
    }
    Ok(total)
}

fn plan_season(
    dates: &[Date],
    years: &[i32],
    window: &SeasonWindow,
) -> Result<SeasonPlan, FieldError> {
    if years.is_empty() {
        return Err(FieldError::Validation {
            details: "season extraction requires at least one year".into(),
        });
    }

    let mut spans = Vec::with_capacity(years.len());
    for &year in years {
        spans.push(window.span(year)?);
    }

    let target_len = if window.contains_february() {
        let full = leap_length(window)?;
        if !spans.iter().any(|&(_, ndays)| ndays as usize == full) {
            return Err(FieldError::NoLeapYearInRange {
                first: *years.iter().min().expect("years is non-empty"),
                last: *years.iter().max().expect("years is non-empty"),
            });
        }
        full
    } else {
        spans[0].1 as usize
    };

    let mut slices = Vec::with_capacity(years.len());
    for (&year, &(start, ndays)) in years.iter().zip(&spans) {
        let end = Date::from_days_since_epoch(start.days_since_epoch() + ndays as i32 - 1);
        let lo = dates.partition_point(|d| *d < start);
        let hi = dates.partition_point(|d| *d <= end);
        let got = (hi - lo) as u32;
        if got != ndays {
            return Err(FieldError::SeasonCoverage {
                year,
                expected: ndays,
                got,
            });
        }
        slices.push((lo, ndays as usize));
    }

    // Source the common time coordinate from any year with the full
    // (leap) length.
    let (full_year_idx, _) = spans
        .iter()
        .enumerate()
        .find(|(_, &(_, ndays))| ndays as usize == target_len)
        .expect("a full-length year exists by the checks above");
    let time = date_sequence(spans[full_year_idx].0, target_len);

    Ok(SeasonPlan {
        slices,
        target_len,
        time,
    })
}

/// Extracts the days of a season from a daily region series, one row per
/// `(region, year)`, padded to a common day-of-season length.
///
/// # Errors
///
/// - [`FieldError::Validation`] if `years` is empty.
/// - [`FieldError::SeasonCoverage`] if the source series does not contain
///   every day of some requested season.
/// - [`FieldError::NoLeapYearInRange`] if February is in the window but
///   no requested year covers a leap February.
pub fn extract_season(
    series: &RegionSeries,
    years: &[i32],
    window: &SeasonWindow,
) -> Result<SeasonalField, FieldError> {
    let plan = plan_season(series.dates(), years, window)?;

    let n_regions = series.n_regions();
    let mut data = Vec::with_capacity(n_regions * years.len() * plan.target_len);
    for r in 0..n_regions {
        let values = series.values(r);
        for &(lo, ndays) in &plan.slices {
            data.extend_from_slice(&values[lo..lo + ndays]);
            data.extend(std::iter::repeat(f64::NAN).take(plan.target_len - ndays));
        }
    }

    SeasonalField::new(
        series.regions().to_vec(),
        years.to_vec(),
        plan.time,
        data,
    )
}

/// Extracts the days of a season from a daily full-grid field, laid out
/// `(year, time, lat, lon)` with the same padding rules as
/// [`extract_season`].
///
/// Gridded input carries no realisation axis, so the unsupported
/// combination of map extraction with ensemble data cannot be expressed.
///
/// # Errors
///
/// Same conditions as [`extract_season`].
pub fn extract_season_grid(
    grid: &GriddedSeries,
    years: &[i32],
    window: &SeasonWindow,
) -> Result<GriddedSeasonal, FieldError> {
    let plan = plan_season(grid.dates(), years, window)?;

    let cells = grid.cells_per_step();
    let mut data = Vec::with_capacity(years.len() * plan.target_len * cells);
    for &(lo, ndays) in &plan.slices {
        for t in lo..lo + ndays {
            data.extend_from_slice(grid.step(t));
        }
        data.extend(std::iter::repeat(f64::NAN).take((plan.target_len - ndays) * cells));
    }

    GriddedSeasonal::from_parts(
        years.to_vec(),
        plan.time,
        grid.lats().to_vec(),
        grid.lons().to_vec(),
        data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nereus_calendar::date_sequence;

    /// Daily series over whole calendar years with value = day offset.
    fn daily_series(first_year: i32, n_years: usize) -> RegionSeries {
        let start = Date::new(first_year, 1, 1).unwrap();
        let end_epoch = Date::new(first_year + n_years as i32, 1, 1)
            .unwrap()
            .days_since_epoch();
        let n = (end_epoch - start.days_since_epoch()) as usize;
        let dates = date_sequence(start, n);
        let data: Vec<f64> = (0..n).map(|i| i as f64).collect();
        RegionSeries::new(vec!["a".into()], dates, data).unwrap()
    }

    #[test]
    fn jja_slices_92_days_every_year() {
        let series = daily_series(2000, 3);
        let jja = SeasonWindow::new(&[6, 7, 8]).unwrap();
        let field = extract_season(&series, &[2000, 2001, 2002], &jja).unwrap();
        assert_eq!(field.n_time(), 92);
        for y in 0..3 {
            assert!(field.series(0, y).iter().all(|v| v.is_finite()));
        }
        // First extracted day of 2000 is June 1 (day offset 152 in a leap year).
        assert_eq!(field.series(0, 0)[0], 152.0);
        assert_eq!(field.time()[0], Date::new(2000, 6, 1).unwrap());
    }

    #[test]
    fn djf_pads_non_leap_years_with_trailing_nan() {
        // Season years 2022 and 2023: Feb 2023 is not leap, Feb 2024 is.
        let series = daily_series(2022, 3);
        let djf = SeasonWindow::new(&[12, 1, 2]).unwrap();
        let field = extract_season(&series, &[2022, 2023], &djf).unwrap();
        assert_eq!(field.n_time(), 91);

        let short = field.series(0, 0); // covers Feb 2023
        assert_eq!(short.iter().filter(|v| v.is_finite()).count(), 90);
        assert!(short[90].is_nan());
        assert!(short[89].is_finite());

        let full = field.series(0, 1); // covers Feb 2024
        assert!(full.iter().all(|v| v.is_finite()));

        // Time coordinate comes from the leap season year and ends on Feb 29.
        assert_eq!(field.time()[0], Date::new(2023, 12, 1).unwrap());
        assert_eq!(field.time()[90], Date::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn no_leap_year_in_range_errors() {
        // Season years 2013 and 2014 cover Feb 2014 and Feb 2015, no leap.
        let series = daily_series(2013, 3);
        let djf = SeasonWindow::new(&[12, 1, 2]).unwrap();
        let err = extract_season(&series, &[2013, 2014], &djf).unwrap_err();
        assert_eq!(
            err,
            FieldError::NoLeapYearInRange {
                first: 2013,
                last: 2014,
            }
        );
    }

    #[test]
    fn incomplete_coverage_errors() {
        let series = daily_series(2000, 1);
        let jja = SeasonWindow::new(&[6, 7, 8]).unwrap();
        let err = extract_season(&series, &[2000, 2001], &jja).unwrap_err();
        assert_eq!(
            err,
            FieldError::SeasonCoverage {
                year: 2001,
                expected: 92,
                got: 0,
            }
        );
    }

    #[test]
    fn empty_years_errors() {
        let series = daily_series(2000, 1);
        let jja = SeasonWindow::new(&[6, 7, 8]).unwrap();
        assert!(matches!(
            extract_season(&series, &[], &jja).unwrap_err(),
            FieldError::Validation { .. }
        ));
    }

    #[test]
    fn grid_extraction_matches_region_layout() {
        // 2x1 grid over two whole years.
        let start = Date::new(2000, 1, 1).unwrap();
        let n = 731; // 2000 leap + 2001
        let dates = date_sequence(start, n);
        let mut data = Vec::with_capacity(n * 2);
        for t in 0..n {
            data.push(t as f64);
            data.push(t as f64 + 0.5);
        }
        let grid = GriddedSeries::new(dates, vec![0.0, 1.0], vec![10.0], data).unwrap();
        let jja = SeasonWindow::new(&[6, 7, 8]).unwrap();
        let field = extract_season_grid(&grid, &[2000, 2001], &jja).unwrap();
        assert_eq!(field.years(), &[2000, 2001]);
        assert_eq!(field.time().len(), 92);
        assert_eq!(field.step(0, 0), &[152.0, 152.5]);
    }
}
