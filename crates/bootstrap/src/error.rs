//! Error types for the nereus-bootstrap crate.

use nereus_trend::TrendError;

/// Errors raised while bootstrapping confidence intervals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BootstrapError {
    /// A parameter failed validation.
    #[error("invalid bootstrap parameter: {reason}")]
    InvalidParams {
        /// What was wrong.
        reason: String,
    },

    /// Two containers carry different region axes.
    #[error("region mismatch: [{left}] vs [{right}]")]
    RegionMismatch {
        /// Comma-joined region names of the first container.
        left: String,
        /// Comma-joined region names of the second container.
        right: String,
    },

    /// Trend fitting or pivoting failed.
    #[error(transparent)]
    Trend(#[from] TrendError),
}
