//! Error types for the nereus-risk crate.

use nereus_trend::TrendError;
use nereus_unseen::UnseenError;

/// Errors raised by the risk estimators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
    /// Distribution and focus event carry different region axes.
    #[error("region mismatch: distribution has [{distribution}], focus event has [{focus}]")]
    RegionMismatch {
        /// Comma-joined distribution region names.
        distribution: String,
        /// Comma-joined focus-event region names.
        focus: String,
    },

    /// Model ensemble and trend reference carry different region axes.
    #[error("region mismatch: model has [{model}], trend reference has [{trend}]")]
    TrendRegionMismatch {
        /// Comma-joined model region names.
        model: String,
        /// Comma-joined trend-reference region names.
        trend: String,
    },

    /// The increment grid is malformed.
    #[error("invalid increment grid: {reason}")]
    InvalidGrid {
        /// What was wrong.
        reason: String,
    },

    /// Trend fitting or pivoting failed.
    #[error(transparent)]
    Trend(#[from] TrendError),

    /// Distribution building failed.
    #[error(transparent)]
    Unseen(#[from] UnseenError),
}
