//! Error types for the nereus-field crate.

use nereus_calendar::CalendarError;

/// Errors raised by container construction and season extraction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// A data vector does not match the product of its axis sizes.
    #[error("dimension mismatch for '{name}': expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the axis or data vector being validated.
        name: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A coordinate or cross-container consistency check failed.
    #[error("validation error: {details}")]
    Validation {
        /// Description of the failed check and the offending inputs.
        details: String,
    },

    /// The source series does not cover the full season of a year.
    #[error("season of year {year} expects {expected} days, source series provides {got}")]
    SeasonCoverage {
        /// The season year with incomplete coverage.
        year: i32,
        /// Days the season window requires.
        expected: u32,
        /// Days found in the source series.
        got: u32,
    },

    /// February is in the season window but no requested year covers a
    /// leap February, so there is no source for the padded time
    /// coordinate.
    #[error(
        "season window contains February but no leap year in {first}..={last} \
         can supply the padded time coordinate"
    )]
    NoLeapYearInRange {
        /// First requested season year.
        first: i32,
        /// Last requested season year.
        last: i32,
    },

    /// An invalid date or season window reached the extractor.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_display() {
        let err = FieldError::DimensionMismatch {
            name: "data".into(),
            expected: 12,
            got: 10,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch for 'data': expected 12, got 10"
        );
    }

    #[test]
    fn season_coverage_display() {
        let err = FieldError::SeasonCoverage {
            year: 1995,
            expected: 92,
            got: 61,
        };
        assert!(err.to_string().contains("1995"));
        assert!(err.to_string().contains("92"));
        assert!(err.to_string().contains("61"));
    }

    #[test]
    fn no_leap_year_display() {
        let err = FieldError::NoLeapYearInRange {
            first: 2013,
            last: 2015,
        };
        assert!(err.to_string().contains("2013..=2015"));
    }

    #[test]
    fn calendar_error_converts() {
        let err: FieldError = CalendarError::InvalidMonth { month: 13 }.into();
        assert!(matches!(err, FieldError::Calendar(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<FieldError>();
    }
}
