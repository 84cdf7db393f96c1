//! # nereus-field
//!
//! Labeled array containers for the nereus UNSEEN analysis, plus the
//! calendar-aware season extractor.
//!
//! Each container is a dense row-major `Vec<f64>` with named, ordered
//! axes carried as coordinate vectors (`region` names, `year` integers,
//! `time` dates). Construction validates that the data length matches the
//! product of the axis sizes; operations that combine containers require
//! identical region coordinate sets in identical order and fail
//! explicitly otherwise.
//!
//! # Pipeline position
//!
//! ```text
//!  ┌───────────────┐     ┌────────────────┐     ┌─────────────────┐
//!  │ RegionSeries  │────▶│ extract_season │────▶│  SeasonalField  │
//!  │ (daily obs)   │     │ (leap padding) │     │ (region,yr,day) │
//!  └───────────────┘     └────────────────┘     └─────────────────┘
//!  ┌───────────────┐     ┌────────────────┐
//!  │  RawEnsemble  │────▶│    .pool()     │────▶ EnsembleField
//!  │ (h × s × m)   │     │ (realisation)  │      (region,real,yr,day)
//!  └───────────────┘     └────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | Daily region series and per-region scalar labels |
//! | `seasonal` | Season-sliced fields and seasonal means |
//! | `ensemble` | Raw and pooled model ensembles |
//! | `grid` | Full lat/lon fields for map extraction |
//! | `extract` | Season extraction with February NaN padding |
//! | `error` | Error types |

mod ensemble;
mod error;
mod extract;
mod grid;
mod seasonal;
mod series;

pub use ensemble::{EnsembleField, RawEnsemble, YearlyEnsemble};
pub use error::FieldError;
pub use extract::{extract_season, extract_season_grid};
pub use grid::{GriddedSeasonal, GriddedSeries};
pub use seasonal::{SeasonalField, SeasonalMeans};
pub use series::{RegionSeries, RegionValues};
