//! Round-trip tests for the Parquet readers and writers.

use std::path::Path;
use std::sync::Arc;

use approx::assert_relative_eq;
use arrow::array::{
    ArrayRef, Date32Array, Float64Array, Int32Array, RecordBatch, StringArray,
};
use arrow::datatypes::{DataType, Field, Schema};
use nereus_calendar::Date;
use nereus_io::{
    IoError, read_ensemble, read_region_series, write_strength_risk, write_time_risk,
};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

fn write_parquet(path: &Path, schema: Schema, columns: Vec<ArrayRef>) {
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns).unwrap();
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

fn series_schema() -> Schema {
    Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("date", DataType::Date32, false),
        Field::new("sst", DataType::Float64, false),
    ])
}

/// Two regions over `n` days starting at `start`, region block order
/// a then b.
fn write_series_file(path: &Path, n: usize) {
    let start = Date::new(2000, 6, 1).unwrap().days_since_epoch();
    let mut regions = Vec::new();
    let mut dates = Vec::new();
    let mut ssts = Vec::new();
    for (name, base) in [("a", 10.0), ("b", 20.0)] {
        for i in 0..n {
            regions.push(name);
            dates.push(start + i as i32);
            ssts.push(base + i as f64);
        }
    }
    write_parquet(
        path,
        series_schema(),
        vec![
            Arc::new(StringArray::from(regions)),
            Arc::new(Date32Array::from(dates)),
            Arc::new(Float64Array::from(ssts)),
        ],
    );
}

#[test]
fn region_series_selects_in_request_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.parquet");
    write_series_file(&path, 5);

    let series =
        read_region_series(&path, &["b".to_string(), "a".to_string()], None).unwrap();
    assert_eq!(series.regions(), &["b".to_string(), "a".to_string()]);
    assert_eq!(series.n_time(), 5);
    assert_relative_eq!(series.values(0)[0], 20.0);
    assert_relative_eq!(series.values(1)[0], 10.0);
}

#[test]
fn region_series_date_range_is_closed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.parquet");
    write_series_file(&path, 10);

    let start = Date::new(2000, 6, 3).unwrap();
    let end = Date::new(2000, 6, 6).unwrap();
    let series =
        read_region_series(&path, &["a".to_string()], Some((start, end))).unwrap();
    assert_eq!(series.n_time(), 4);
    assert_eq!(series.dates()[0], start);
    assert_eq!(series.dates()[3], end);
}

#[test]
fn missing_region_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.parquet");
    write_series_file(&path, 3);

    let err = read_region_series(&path, &["c".to_string()], None).unwrap_err();
    assert!(matches!(err, IoError::MissingRegion { .. }));
    assert!(err.to_string().contains("'c'"));
}

#[test]
fn diverging_date_axes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.parquet");
    let start = Date::new(2000, 6, 1).unwrap().days_since_epoch();
    // Region b has one date fewer than region a.
    write_parquet(
        &path,
        series_schema(),
        vec![
            Arc::new(StringArray::from(vec!["a", "a", "b"])),
            Arc::new(Date32Array::from(vec![start, start + 1, start])),
            Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
        ],
    );
    let err =
        read_region_series(&path, &["a".to_string(), "b".to_string()], None).unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
}

fn ensemble_schema() -> Schema {
    Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("hindcast", DataType::Int32, false),
        Field::new("startdate", DataType::Int32, false),
        Field::new("member", DataType::Int32, false),
        Field::new("year", DataType::Int32, false),
        Field::new("day", DataType::Date32, false),
        Field::new("sst", DataType::Float64, false),
    ])
}

/// One region, 2 hindcasts x 1 startdate x 2 members, 2 years, 3 days;
/// value encodes `(h, m, year_idx, day_idx)`.
fn ensemble_rows() -> (Vec<&'static str>, Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>, Vec<i32>, Vec<f64>)
{
    let day0 = Date::new(2000, 6, 1).unwrap().days_since_epoch();
    let mut rows = (
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    for h in 0..2 {
        for m in 0..2 {
            for (yi, year) in [2000, 2001].into_iter().enumerate() {
                for t in 0..3 {
                    rows.0.push("a");
                    rows.1.push(h);
                    rows.2.push(11); // single startdate, arbitrary label
                    rows.3.push(m);
                    rows.4.push(year);
                    rows.5.push(day0 + t);
                    rows.6
                        .push((h * 1000 + m * 100 + yi as i32 * 10 + t) as f64);
                }
            }
        }
    }
    rows
}

#[test]
fn ensemble_roundtrip_pools_member_fastest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.parquet");
    let rows = ensemble_rows();
    write_parquet(
        &path,
        ensemble_schema(),
        vec![
            Arc::new(StringArray::from(rows.0)),
            Arc::new(Int32Array::from(rows.1)),
            Arc::new(Int32Array::from(rows.2)),
            Arc::new(Int32Array::from(rows.3)),
            Arc::new(Int32Array::from(rows.4)),
            Arc::new(Date32Array::from(rows.5)),
            Arc::new(Float64Array::from(rows.6)),
        ],
    );

    let raw = read_ensemble(&path, &["a".to_string()]).unwrap();
    let pooled = raw.pool();
    assert_eq!(pooled.n_realisations(), 4);
    assert_eq!(pooled.years(), &[2000, 2001]);
    assert_eq!(pooled.n_time(), 3);
    // realisation 0 = (h0, m0), realisation 1 = (h0, m1), realisation
    // 2 = (h1, m0): member fastest.
    assert_relative_eq!(pooled.series(0, 0, 0)[2], 2.0);
    assert_relative_eq!(pooled.series(0, 1, 0)[0], 100.0);
    assert_relative_eq!(pooled.series(0, 2, 1)[1], 1011.0);
}

#[test]
fn incomplete_ensemble_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.parquet");
    let mut rows = ensemble_rows();
    // Drop the last row.
    rows.0.pop();
    rows.1.pop();
    rows.2.pop();
    rows.3.pop();
    rows.4.pop();
    rows.5.pop();
    rows.6.pop();
    write_parquet(
        &path,
        ensemble_schema(),
        vec![
            Arc::new(StringArray::from(rows.0)),
            Arc::new(Int32Array::from(rows.1)),
            Arc::new(Int32Array::from(rows.2)),
            Arc::new(Int32Array::from(rows.3)),
            Arc::new(Int32Array::from(rows.4)),
            Arc::new(Date32Array::from(rows.5)),
            Arc::new(Float64Array::from(rows.6)),
        ],
    );
    let err = read_ensemble(&path, &["a".to_string()]).unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
    assert!(err.to_string().contains("incomplete"));
}

#[test]
fn strength_risk_writer_emits_one_row_per_grid_point() {
    use nereus_risk::StrengthRisk;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strength.parquet");

    let point = StrengthRisk::new(
        vec!["a".into(), "b".into()],
        vec![0.0, 0.5],
        vec![40.0, 20.0, 80.0, 60.0],
    );
    let low = StrengthRisk::new(
        vec!["a".into(), "b".into()],
        vec![0.0, 0.5],
        vec![35.0, 15.0, 75.0, 55.0],
    );
    let high = StrengthRisk::new(
        vec!["a".into(), "b".into()],
        vec![0.0, 0.5],
        vec![45.0, 25.0, 85.0, 65.0],
    );
    write_strength_risk(&path, &point, &low, &high).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    let batches: Vec<RecordBatch> = reader.collect::<Result<_, _>>().unwrap();
    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(rows, 4);
    assert_eq!(batches[0].num_columns(), 5);
}

#[test]
fn time_risk_writer_validates_axes() {
    use nereus_risk::TimeRisk;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time.parquet");

    let point = TimeRisk::new(vec!["a".into()], vec![2000, 2001], vec![10.0, 30.0]);
    let other = TimeRisk::new(vec!["a".into()], vec![2000], vec![10.0]);
    let err = write_time_risk(&path, &point, &other, &point).unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
}
