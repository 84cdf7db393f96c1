//! Error types for the nereus-trend crate.

/// Errors raised by trend fitting and pivot-offset computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrendError {
    /// Predictor and response differ in length.
    #[error("length mismatch: {x_len} x-values vs {y_len} y-values")]
    LengthMismatch {
        /// Length of the predictor vector.
        x_len: usize,
        /// Length of the response vector.
        y_len: usize,
    },

    /// Fewer than two points; a line is undetermined.
    #[error("cannot fit a trend to {n} point(s) (need at least 2)")]
    TooFewPoints {
        /// Number of points provided.
        n: usize,
    },

    /// All predictor values are identical; the slope is undefined.
    #[error("degenerate predictor: all {n} x-values equal {value}")]
    DegenerateAbscissa {
        /// Number of points provided.
        n: usize,
        /// The repeated predictor value.
        value: f64,
    },

    /// Extrapolated mode was requested without an extrapolation-year
    /// array.
    #[error("extrapolate_years must be provided when mode is Extrapolated")]
    MissingExtrapolateYears,

    /// The pivot year is not one of the supplied extrapolation years.
    #[error("pivot year {pivot_year} is not in the extrapolation years {first}..={last}")]
    PivotOutsideExtrapolation {
        /// The requested pivot year.
        pivot_year: i32,
        /// First extrapolation year.
        first: i32,
        /// Last extrapolation year.
        last: i32,
    },
}
