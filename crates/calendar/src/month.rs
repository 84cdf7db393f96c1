//! Leap-year test and per-month day counts.

use crate::error::CalendarError;

/// Day counts for a non-leap year, indexed by `month - 1`.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, except century years not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Equivalent to Python's `calendar.monthrange(year, month)[1]`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(MONTH_LENGTHS[usize::from(month - 1)])
    }
}
