//! # nereus-bootstrap
//!
//! Bootstrap confidence intervals for the risk estimators and for the
//! moments of the pooled extreme-event distribution.
//!
//! Two resampling regimes:
//!
//! - **flat** — the pooled sample is treated as exchangeable and
//!   resampled with replacement as a whole ([`strength_ci`],
//!   [`time_ci`], [`moment_distribution`]);
//! - **stratified per year** — one realisation is drawn per year so the
//!   year axis survives into every pseudo series
//!   ([`slope_distribution`]).
//!
//! All grid points are embarrassingly parallel and carry seeds derived
//! from the base seed, so a run is reproducible regardless of rayon's
//! scheduling. Interval bounds are taken only after a grid point's draw
//! set is complete.

mod ci;
mod error;
mod moments;
mod params;
mod risk_ci;
mod slope;

pub use ci::ci_bounds;
pub use error::BootstrapError;
pub use moments::{MomentSamples, moment_distribution};
pub use params::BootstrapParams;
pub use risk_ci::{strength_ci, time_ci};
pub use slope::{SlopeSamples, slope_distribution};
