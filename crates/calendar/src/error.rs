//! Error types for the nereus-calendar crate.

/// Error type for all fallible operations in the nereus-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values,
/// and season-window definitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid (February length depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a season window is constructed from an empty month list.
    #[error("season window must contain at least one month")]
    EmptySeasonWindow,

    /// Returned when a season window lists the same month twice.
    #[error("duplicate month {month} in season window")]
    DuplicateMonth {
        /// The month that appears more than once.
        month: u8,
    },
}
