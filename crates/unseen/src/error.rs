//! Error types for the nereus-unseen crate.

use nereus_field::FieldError;
use nereus_trend::TrendError;

/// Errors raised while building the pooled extreme-event distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnseenError {
    /// Model and trend-reference region axes differ.
    #[error("region mismatch: model has [{model}], trend reference has [{trend}]")]
    RegionMismatch {
        /// Comma-joined model region names.
        model: String,
        /// Comma-joined trend-reference region names.
        trend: String,
    },

    /// An option failed validation.
    #[error("invalid option: {reason}")]
    InvalidOption {
        /// What was wrong.
        reason: String,
    },

    /// An event date has no counterpart on the climatology time axis.
    #[error("event date {date} has no matching (month, day) on the climatology axis")]
    DayOutsideClimatology {
        /// The offending event date, formatted YYYY-MM-DD.
        date: String,
    },

    /// Trend fitting or pivoting failed.
    #[error(transparent)]
    Trend(#[from] TrendError),

    /// A field container failed validation.
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_mismatch_display() {
        let err = UnseenError::RegionMismatch {
            model: "a, b".into(),
            trend: "a".into(),
        };
        assert!(err.to_string().contains("region mismatch"));
    }

    #[test]
    fn trend_error_converts() {
        let err: UnseenError = TrendError::MissingExtrapolateYears.into();
        assert!(matches!(err, UnseenError::Trend(_)));
    }
}
