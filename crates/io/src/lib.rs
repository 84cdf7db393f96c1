//! # nereus-io
//!
//! Parquet readers for the daily regional SST series and the raw
//! hindcast ensemble, and writers for the risk grids and moment
//! summaries consumed by the plotting collaborators.
//!
//! All files are long format: one row per observation or grid point,
//! with labeled coordinate columns. Readers validate completeness and
//! shared axes; writers compress with snappy.

mod error;
mod parquet_util;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{read_ensemble, read_region_series};
pub use writer::{write_moment_summary, write_strength_risk, write_time_risk};
