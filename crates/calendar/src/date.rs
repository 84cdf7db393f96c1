//! Validated Gregorian date with epoch-day conversion.

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A calendar date in the proleptic Gregorian calendar.
///
/// Ordering is chronological. The epoch-day conversions use the civil
/// calendar algorithms of Howard Hinnant and match Arrow's `Date32`
/// encoding (days since 1970-01-01).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is invalid or the day does
    /// not exist in that month of that year (for example February 29 in a
    /// non-leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the next calendar day, rolling over month and year
    /// boundaries (and February 29 in leap years).
    pub fn next(self) -> Self {
        let max_day = match days_in_month(self.year, self.month) {
            Ok(d) => d,
            // Unreachable: Date always holds a valid month.
            Err(_) => unreachable!("Date holds a validated month"),
        };
        if self.day < max_day {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Returns the number of days since 1970-01-01 (negative before the
    /// epoch). Matches Arrow `Date32`.
    pub fn days_since_epoch(self) -> i32 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400; // [0, 399]
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1; // [0, 365]
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
        (era * 146_097 + doe - 719_468) as i32
    }

    /// Builds a `Date` from days since 1970-01-01 (Arrow `Date32`).
    pub fn from_days_since_epoch(days: i32) -> Self {
        let z = i64::from(days) + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097; // [0, 146096]
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
        let mp = (5 * doy + 2) / 153; // [0, 11]
        let d = (doy - (153 * mp + 2) / 5 + 1) as u8; // [1, 31]
        let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8; // [1, 12]
        Self {
            year: (y + i64::from(m <= 2)) as i32,
            month: m,
            day: d,
        }
    }

    /// Number of days from `self` to `other` (positive when `other` is later).
    pub fn days_until(self, other: Self) -> i32 {
        other.days_since_epoch() - self.days_since_epoch()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Consecutive daily dates starting at `start`, `n` entries long.
pub fn date_sequence(start: Date, n: usize) -> Vec<Date> {
    let mut out = Vec::with_capacity(n);
    let mut d = start;
    for _ in 0..n {
        out.push(d);
        d = d.next();
    }
    out
}
