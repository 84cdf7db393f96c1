//! # nereus-trend
//!
//! Ordinary least-squares trend fitting and pivot-year detrending
//! offsets.
//!
//! Detrending in the UNSEEN pipeline pivots on a reference year: the
//! fitted line is evaluated at the pivot year to get `y0`, and every
//! hindcast year receives the additive offset `trend(year) - y0`.
//! Subtracting the offsets removes the secular trend while leaving the
//! pivot year's value untouched (its offset is exactly zero).
//!
//! ```
//! use nereus_trend::{PivotMode, pivot_offsets};
//!
//! let years = [2000, 2001, 2002, 2003];
//! let values = [10.0, 10.5, 11.0, 11.5]; // slope 0.5
//! let offsets = pivot_offsets(&years, &values, 2003, &years, PivotMode::Hindcast, None).unwrap();
//! assert!((offsets[0] - (-1.5)).abs() < 1e-12);
//! assert!(offsets[3].abs() < 1e-12); // pivot year is the zero point
//! ```

mod error;
mod fit;
mod pivot;

pub use error::TrendError;
pub use fit::LinearFit;
pub use pivot::{PivotMode, pivot_offsets};
