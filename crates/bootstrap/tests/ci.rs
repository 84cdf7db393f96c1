//! Scenario tests for the bootstrap interval estimators.

use approx::assert_relative_eq;
use nereus_bootstrap::{BootstrapError, BootstrapParams, strength_ci, time_ci};
use nereus_calendar::{Date, date_sequence};
use nereus_field::{EnsembleField, RegionValues, SeasonalMeans};
use nereus_risk::risk_by_strength;
use nereus_unseen::{DistributionOptions, build_distribution};

/// Ensemble with realisation spread around a warming trend.
fn spread_ensemble(n_real: usize, years: &[i32]) -> EnsembleField {
    let n_time = 25;
    let mut data = Vec::new();
    for k in 0..n_real {
        for &y in years {
            let v = 11.0 + 0.04 * (y - years[0]) as f64 + 0.15 * k as f64;
            data.extend(std::iter::repeat(v).take(n_time));
        }
    }
    EnsembleField::new(
        vec!["Celtic Sea".into(), "Irish Shelf".into()],
        n_real,
        years.to_vec(),
        date_sequence(Date::new(2000, 6, 1).unwrap(), n_time),
        double(data),
    )
    .unwrap()
}

/// Duplicates the single-region block for the second region.
fn double(block: Vec<f64>) -> Vec<f64> {
    let mut data = block.clone();
    data.extend(block.iter().map(|v| v + 0.5));
    data
}

fn focus() -> RegionValues {
    RegionValues::new(
        vec!["Celtic Sea".into(), "Irish Shelf".into()],
        vec![0.2, 0.2],
    )
    .unwrap()
}

#[test]
fn strength_interval_brackets_and_orders() {
    let years: Vec<i32> = (1995..=2016).collect();
    let model = spread_ensemble(8, &years);
    let trend = model.realisation_mean_seasonal();
    let (distr, _) =
        build_distribution(&model, &trend, &DistributionOptions::new(7, 2016)).unwrap();

    let point = risk_by_strength(&distr, &focus(), 1.0, 0.5).unwrap();
    let (low, high) =
        strength_ci(&distr, &focus(), 1.0, 0.5, &BootstrapParams::new(300, 42)).unwrap();

    assert_eq!(low.increments(), point.increments());
    for r in 0..2 {
        for i in 0..point.increments().len() {
            assert!(low.value(r, i) <= high.value(r, i), "low must not exceed high");
            assert!((0.0..=100.0).contains(&low.value(r, i)));
            assert!((0.0..=100.0).contains(&high.value(r, i)));
        }
    }
}

#[test]
fn single_iteration_gives_degenerate_interval() {
    let years: Vec<i32> = (2000..=2009).collect();
    let model = spread_ensemble(4, &years);
    let trend = model.realisation_mean_seasonal();
    let (distr, _) =
        build_distribution(&model, &trend, &DistributionOptions::new(5, 2009)).unwrap();

    let (low, high) =
        strength_ci(&distr, &focus(), 0.5, 0.25, &BootstrapParams::new(1, 0)).unwrap();
    for r in 0..2 {
        for i in 0..low.increments().len() {
            assert_relative_eq!(low.value(r, i), high.value(r, i));
        }
    }
}

#[test]
fn same_seed_reproduces_the_interval() {
    let years: Vec<i32> = (2000..=2012).collect();
    let model = spread_ensemble(5, &years);
    let trend = model.realisation_mean_seasonal();
    let (distr, _) =
        build_distribution(&model, &trend, &DistributionOptions::new(5, 2012)).unwrap();

    let params = BootstrapParams::new(100, 1234);
    let (low_a, high_a) = strength_ci(&distr, &focus(), 1.0, 0.5, &params).unwrap();
    let (low_b, high_b) = strength_ci(&distr, &focus(), 1.0, 0.5, &params).unwrap();
    assert_eq!(low_a, low_b);
    assert_eq!(high_a, high_b);
}

#[test]
fn time_interval_rejects_misaligned_trend() {
    let years: Vec<i32> = (2000..=2009).collect();
    let model = spread_ensemble(3, &years);
    // One region short of the model's axis.
    let trend =
        SeasonalMeans::new(vec!["Celtic Sea".into()], years.clone(), vec![11.0; 10]).unwrap();
    let err = time_ci(
        &model,
        &trend,
        5,
        &focus(),
        &[2005],
        None,
        &BootstrapParams::new(10, 0),
    )
    .unwrap_err();
    assert!(matches!(err, BootstrapError::RegionMismatch { .. }));
}

#[test]
fn time_interval_covers_both_passes() {
    let years: Vec<i32> = (1995..=2016).collect();
    let model = spread_ensemble(6, &years);
    let trend = model.realisation_mean_seasonal();
    let pivots: Vec<i32> = (2005..=2016).collect();
    let ext: Vec<i32> = (2017..=2030).collect();

    let ((low, high), extrapolated) = time_ci(
        &model,
        &trend,
        7,
        &focus(),
        &pivots,
        Some(&ext),
        &BootstrapParams::new(200, 42),
    )
    .unwrap();

    assert_eq!(low.pivot_years(), &pivots[..]);
    for r in 0..2 {
        for p in 0..pivots.len() {
            assert!(low.value(r, p) <= high.value(r, p));
        }
    }

    let (elow, ehigh) = extrapolated.expect("extrapolated pass requested");
    assert_eq!(elow.pivot_years(), &ext[..]);
    for r in 0..2 {
        for p in 0..ext.len() {
            assert!(elow.value(r, p) <= ehigh.value(r, p));
        }
    }
}
