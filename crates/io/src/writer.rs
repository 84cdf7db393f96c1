//! Long-format Parquet writers for the analysis results.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int32Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use nereus_bootstrap::MomentSamples;
use nereus_risk::{StrengthRisk, TimeRisk};
use tracing::info;

use crate::error::IoError;
use crate::parquet_util::write_batches;

/// Writes a strength-risk grid with its interval, one row per
/// (region, increment): `region`, `increment`, `risk`, `ci_low`,
/// `ci_high`.
///
/// # Errors
///
/// [`IoError::Validation`] if the three grids disagree on their axes;
/// write failures via [`IoError::Parquet`].
pub fn write_strength_risk(
    path: &Path,
    point: &StrengthRisk,
    low: &StrengthRisk,
    high: &StrengthRisk,
) -> Result<(), IoError> {
    if point.regions() != low.regions()
        || point.regions() != high.regions()
        || point.increments() != low.increments()
        || point.increments() != high.increments()
    {
        return Err(IoError::Validation {
            details: "strength-risk grids disagree on region or increment axes".to_string(),
        });
    }

    let mut regions = Vec::new();
    let mut increments = Vec::new();
    let mut risks = Vec::new();
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    for (r, region) in point.regions().iter().enumerate() {
        for (i, &inc) in point.increments().iter().enumerate() {
            regions.push(region.clone());
            increments.push(inc);
            risks.push(point.value(r, i));
            lows.push(low.value(r, i));
            highs.push(high.value(r, i));
        }
    }

    let schema = Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("increment", DataType::Float64, false),
        Field::new("risk", DataType::Float64, false),
        Field::new("ci_low", DataType::Float64, false),
        Field::new("ci_high", DataType::Float64, false),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(regions)),
        Arc::new(Float64Array::from(increments)),
        Arc::new(Float64Array::from(risks)),
        Arc::new(Float64Array::from(lows)),
        Arc::new(Float64Array::from(highs)),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;
    info!(path = %path.display(), rows = batch.num_rows(), "writing strength risk");
    write_batches(path, &[batch], &schema)
}

/// Writes a time-risk grid with its interval, one row per
/// (region, pivot year): `region`, `pivot_year`, `risk`, `ci_low`,
/// `ci_high`.
///
/// # Errors
///
/// [`IoError::Validation`] if the three grids disagree on their axes;
/// write failures via [`IoError::Parquet`].
pub fn write_time_risk(
    path: &Path,
    point: &TimeRisk,
    low: &TimeRisk,
    high: &TimeRisk,
) -> Result<(), IoError> {
    if point.regions() != low.regions()
        || point.regions() != high.regions()
        || point.pivot_years() != low.pivot_years()
        || point.pivot_years() != high.pivot_years()
    {
        return Err(IoError::Validation {
            details: "time-risk grids disagree on region or pivot-year axes".to_string(),
        });
    }

    let mut regions = Vec::new();
    let mut pivots = Vec::new();
    let mut risks = Vec::new();
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    for (r, region) in point.regions().iter().enumerate() {
        for (p, &year) in point.pivot_years().iter().enumerate() {
            regions.push(region.clone());
            pivots.push(year);
            risks.push(point.value(r, p));
            lows.push(low.value(r, p));
            highs.push(high.value(r, p));
        }
    }

    let schema = Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("pivot_year", DataType::Int32, false),
        Field::new("risk", DataType::Float64, false),
        Field::new("ci_low", DataType::Float64, false),
        Field::new("ci_high", DataType::Float64, false),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(regions)),
        Arc::new(Int32Array::from(pivots)),
        Arc::new(Float64Array::from(risks)),
        Arc::new(Float64Array::from(lows)),
        Arc::new(Float64Array::from(highs)),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;
    info!(path = %path.display(), rows = batch.num_rows(), "writing time risk");
    write_batches(path, &[batch], &schema)
}

/// Writes bootstrapped moment intervals, one row per (region, moment):
/// `region`, `moment` (`mean`, `sd`, `skewness`, `kurtosis`), `ci_low`,
/// `ci_high`.
///
/// # Errors
///
/// Write failures via [`IoError::Parquet`].
pub fn write_moment_summary(path: &Path, samples: &MomentSamples) -> Result<(), IoError> {
    let mut regions = Vec::new();
    let mut moments = Vec::new();
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    for (r, region) in samples.regions().iter().enumerate() {
        let rows = [
            ("mean", samples.mean_ci(r)),
            ("sd", samples.sd_ci(r)),
            ("skewness", samples.skewness_ci(r)),
            ("kurtosis", samples.kurtosis_ci(r)),
        ];
        for (name, (lo, hi)) in rows {
            regions.push(region.clone());
            moments.push(name.to_string());
            lows.push(lo);
            highs.push(hi);
        }
    }

    let schema = Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("moment", DataType::Utf8, false),
        Field::new("ci_low", DataType::Float64, false),
        Field::new("ci_high", DataType::Float64, false),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(regions)),
        Arc::new(StringArray::from(moments)),
        Arc::new(Float64Array::from(lows)),
        Arc::new(Float64Array::from(highs)),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;
    info!(path = %path.display(), rows = batch.num_rows(), "writing moment summary");
    write_batches(path, &[batch], &schema)
}
