//! Readers for the long-format observation and ensemble files.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::AsArray;
use arrow::datatypes::{DataType, Date32Type, Float64Type, Int32Type};
use nereus_calendar::Date;
use nereus_field::{RawEnsemble, RegionSeries};
use tracing::info;

use crate::error::IoError;
use crate::parquet_util::{column, read_batches, string_column};

/// Reads a daily regional series from long-format Parquet with columns
/// `region` (utf8), `date` (Date32), `sst` (f64).
///
/// The requested regions are selected in request order; every region in
/// the file must share one common date axis. An optional closed date
/// range restricts the result.
///
/// # Errors
///
/// [`IoError::MissingRegion`] for an absent region,
/// [`IoError::Validation`] for diverging date axes, plus file and
/// format errors.
pub fn read_region_series(
    path: &Path,
    regions: &[String],
    time_range: Option<(Date, Date)>,
) -> Result<RegionSeries, IoError> {
    let batches = read_batches(path)?;
    let mut per_region: BTreeMap<String, (Vec<Date>, Vec<f64>)> = BTreeMap::new();

    for batch in &batches {
        let region_col = string_column(batch, "region")?;
        let date_col = column(batch, "date", &DataType::Date32)?.as_primitive::<Date32Type>();
        let sst_col = column(batch, "sst", &DataType::Float64)?.as_primitive::<Float64Type>();
        for row in 0..batch.num_rows() {
            let entry = per_region.entry(region_col[row].clone()).or_default();
            entry.0.push(Date::from_days_since_epoch(date_col.value(row)));
            entry.1.push(sst_col.value(row));
        }
    }

    let mut dates: Option<Vec<Date>> = None;
    let mut data = Vec::new();
    for region in regions {
        let (region_dates, values) =
            per_region.get(region).ok_or_else(|| IoError::MissingRegion {
                region: region.clone(),
                path: path.to_path_buf(),
            })?;
        match &dates {
            None => dates = Some(region_dates.clone()),
            Some(reference) if reference != region_dates => {
                return Err(IoError::Validation {
                    details: format!(
                        "region '{region}' does not share the common date axis \
                         ({} dates vs {})",
                        region_dates.len(),
                        reference.len()
                    ),
                });
            }
            Some(_) => {}
        }
        data.extend_from_slice(values);
    }

    let dates = dates.unwrap_or_default();
    info!(
        path = %path.display(),
        regions = regions.len(),
        days = dates.len(),
        "read region series"
    );
    let series = RegionSeries::new(regions.to_vec(), dates, data)?;
    match time_range {
        Some((start, end)) => Ok(series.select_range(start, end)?),
        None => Ok(series),
    }
}

/// Reads a raw hindcast ensemble from long-format Parquet with columns
/// `region` (utf8), `hindcast`, `startdate`, `member`, `year` (all
/// i32), `day` (Date32), `sst` (f64).
///
/// Axis sizes are inferred from the distinct coordinate values, in
/// ascending order; the file must be complete, one row per grid point
/// and requested region.
///
/// # Errors
///
/// [`IoError::MissingRegion`] for an absent region,
/// [`IoError::Validation`] for duplicate or missing grid points, plus
/// file and format errors.
pub fn read_ensemble(path: &Path, regions: &[String]) -> Result<RawEnsemble, IoError> {
    let batches = read_batches(path)?;

    // First pass: the coordinate sets.
    let mut hindcasts = BTreeMap::new();
    let mut startdates = BTreeMap::new();
    let mut members = BTreeMap::new();
    let mut years = BTreeMap::new();
    let mut days = BTreeMap::new();
    let mut file_regions = std::collections::BTreeSet::new();
    for batch in &batches {
        let region_col = string_column(batch, "region")?;
        let h = column(batch, "hindcast", &DataType::Int32)?.as_primitive::<Int32Type>();
        let s = column(batch, "startdate", &DataType::Int32)?.as_primitive::<Int32Type>();
        let m = column(batch, "member", &DataType::Int32)?.as_primitive::<Int32Type>();
        let y = column(batch, "year", &DataType::Int32)?.as_primitive::<Int32Type>();
        let d = column(batch, "day", &DataType::Date32)?.as_primitive::<Date32Type>();
        for row in 0..batch.num_rows() {
            file_regions.insert(region_col[row].clone());
            hindcasts.insert(h.value(row), 0usize);
            startdates.insert(s.value(row), 0usize);
            members.insert(m.value(row), 0usize);
            years.insert(y.value(row), 0usize);
            days.insert(d.value(row), 0usize);
        }
    }
    for region in regions {
        if !file_regions.contains(region) {
            return Err(IoError::MissingRegion {
                region: region.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    index_map(&mut hindcasts);
    index_map(&mut startdates);
    index_map(&mut members);
    index_map(&mut years);
    index_map(&mut days);

    let (nh, ns, nm) = (hindcasts.len(), startdates.len(), members.len());
    let (ny, nt) = (years.len(), days.len());
    let region_index: BTreeMap<&str, usize> = regions
        .iter()
        .enumerate()
        .map(|(i, r)| (r.as_str(), i))
        .collect();

    // Second pass: scatter rows into the dense (region, h, s, m, year,
    // time) layout.
    let cells_per_region = nh * ns * nm * ny * nt;
    let mut data = vec![f64::NAN; regions.len() * cells_per_region];
    let mut seen = vec![false; data.len()];
    let mut filled = 0usize;
    for batch in &batches {
        let region_col = string_column(batch, "region")?;
        let h = column(batch, "hindcast", &DataType::Int32)?.as_primitive::<Int32Type>();
        let s = column(batch, "startdate", &DataType::Int32)?.as_primitive::<Int32Type>();
        let m = column(batch, "member", &DataType::Int32)?.as_primitive::<Int32Type>();
        let y = column(batch, "year", &DataType::Int32)?.as_primitive::<Int32Type>();
        let d = column(batch, "day", &DataType::Date32)?.as_primitive::<Date32Type>();
        let sst = column(batch, "sst", &DataType::Float64)?.as_primitive::<Float64Type>();
        for row in 0..batch.num_rows() {
            let Some(&r) = region_index.get(region_col[row].as_str()) else {
                continue;
            };
            let idx = ((((r * nh + hindcasts[&h.value(row)]) * ns + startdates[&s.value(row)])
                * nm
                + members[&m.value(row)])
                * ny
                + years[&y.value(row)])
                * nt
                + days[&d.value(row)];
            if seen[idx] {
                return Err(IoError::Validation {
                    details: format!(
                        "duplicate grid point for region '{}' at row {row}",
                        region_col[row]
                    ),
                });
            }
            seen[idx] = true;
            filled += 1;
            data[idx] = sst.value(row);
        }
    }
    if filled != data.len() {
        return Err(IoError::Validation {
            details: format!(
                "incomplete ensemble: expected {} grid points over {} region(s), found {filled}",
                data.len(),
                regions.len()
            ),
        });
    }

    let time: Vec<Date> = days.keys().map(|&d| Date::from_days_since_epoch(d)).collect();
    info!(
        path = %path.display(),
        regions = regions.len(),
        hindcasts = nh,
        startdates = ns,
        members = nm,
        years = ny,
        days = nt,
        "read ensemble"
    );
    Ok(RawEnsemble::new(
        regions.to_vec(),
        nh,
        ns,
        nm,
        years.keys().copied().collect(),
        time,
        data,
    )?)
}

/// Replaces each map value with the rank of its key.
fn index_map<K: Ord>(map: &mut BTreeMap<K, usize>) {
    for (i, v) in map.values_mut().enumerate() {
        *v = i;
    }
}
