//! Season windows with year rollover and per-year day counts.

use crate::date::Date;
use crate::error::CalendarError;
use crate::month::days_in_month;

/// An ordered set of calendar months defining a season.
///
/// A window is labeled by the calendar year of its *first* listed month.
/// Months whose number is less than or equal to the first month's roll
/// into the following calendar year, so DJF for season-year 1993 covers
/// December 1993 plus January and February 1994.
///
/// The day count of a window that includes February depends on whether
/// the (possibly rolled-over) year of that February is a leap year; this
/// is the source of the one-day length mismatch the season extractor has
/// to pad for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWindow {
    months: Vec<u8>,
}

impl SeasonWindow {
    /// Creates a season window from an ordered month list.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptySeasonWindow`] for an empty list,
    /// [`CalendarError::InvalidMonth`] for a month outside 1..=12, and
    /// [`CalendarError::DuplicateMonth`] if a month repeats.
    pub fn new(months: &[u8]) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::EmptySeasonWindow);
        }
        let mut seen = [false; 13];
        for &m in months {
            if !(1..=12).contains(&m) {
                return Err(CalendarError::InvalidMonth { month: m });
            }
            if seen[usize::from(m)] {
                return Err(CalendarError::DuplicateMonth { month: m });
            }
            seen[usize::from(m)] = true;
        }
        Ok(Self {
            months: months.to_vec(),
        })
    }

    /// The months of the window, in listed order.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns `true` if February is part of the window.
    pub fn contains_february(&self) -> bool {
        self.months.contains(&2)
    }

    /// Calendar year of each listed month for the given season year.
    ///
    /// The first month always belongs to `season_year`; later months keep
    /// `season_year` only while their number exceeds the first month's,
    /// otherwise they have wrapped past December and get `season_year + 1`.
    pub fn month_years(&self, season_year: i32) -> Vec<i32> {
        self.months
            .iter()
            .enumerate()
            .map(|(i, &m)| {
                if i == 0 || m > self.months[0] {
                    season_year
                } else {
                    season_year + 1
                }
            })
            .collect()
    }

    /// Total number of days in the window for the given season year,
    /// leap-year sensitive via the rolled-over per-month years.
    ///
    /// # Errors
    ///
    /// Never fails for a validated window; the `Result` mirrors
    /// [`days_in_month`].
    pub fn day_count(&self, season_year: i32) -> Result<u32, CalendarError> {
        let years = self.month_years(season_year);
        let mut total = 0u32;
        for (&m, &y) in self.months.iter().zip(&years) {
            total += u32::from(days_in_month(y, m)?);
        }
        Ok(total)
    }

    /// First calendar day of the window for the given season year.
    pub fn start_date(&self, season_year: i32) -> Result<Date, CalendarError> {
        Date::new(season_year, self.months[0], 1)
    }

    /// `(start date, day count)` for the given season year.
    ///
    /// This is the narrow interface the extraction and padding logic is
    /// built on: the closed interval `[start, start + ndays - 1]` is
    /// exactly the season.
    pub fn span(&self, season_year: i32) -> Result<(Date, u32), CalendarError> {
        Ok((self.start_date(season_year)?, self.day_count(season_year)?))
    }
}
