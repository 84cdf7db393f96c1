//! # nereus-unseen
//!
//! Builds the empirical distribution of extreme seasonal events from a
//! pooled hindcast ensemble.
//!
//! The pipeline per region: derive pivot-year detrending offsets from a
//! trend reference, subtract them together with the
//! realisation-and-year climatology from every daily series, apply a
//! centered rolling mean, and keep the seasonal maximum of each
//! (realisation, year). The stacked maxima form one flat sample per
//! region — the evidence base for exceedance risk and bootstrap
//! uncertainty.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `options` | Builder-style configuration |
//! | `build` | Distribution building and the per-region kernel |
//! | `observed` | Observed-series extremes and the focus-event peak |
//! | `distribution` | Result containers |
//! | `error` | Error types |

mod build;
mod distribution;
mod error;
mod observed;
mod options;

pub use build::{build_distribution, region_extremes};
pub use distribution::{DetrendOffsets, UnseenDistribution};
pub use error::UnseenError;
pub use observed::{observed_event_peak, observed_extremes};
pub use options::DistributionOptions;
