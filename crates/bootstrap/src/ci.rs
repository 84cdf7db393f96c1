//! Interval extraction and the resampling primitives.

use nereus_stats::quantile_type7;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Interval bounds from a finished set of bootstrap draws.
///
/// The draws are sorted and the type-7 quantiles taken; with a single
/// draw both bounds equal that draw, and `low <= high` always holds for
/// `q_low < q_high`.
pub fn ci_bounds(draws: &[f64], q_low: f64, q_high: f64) -> (f64, f64) {
    let mut sorted = draws.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    (
        quantile_type7(&sorted, q_low),
        quantile_type7(&sorted, q_high),
    )
}

/// A generator for one work unit, derived from the base seed so results
/// do not depend on worker scheduling.
pub(crate) fn unit_rng(base_seed: u64, unit: u64) -> StdRng {
    StdRng::seed_from_u64(base_seed ^ unit.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Fills `buf` with a with-replacement resample of `sample`.
pub(crate) fn resample_into(rng: &mut StdRng, sample: &[f64], buf: &mut Vec<f64>) {
    buf.clear();
    for _ in 0..sample.len() {
        buf.push(sample[rng.random_range(0..sample.len())]);
    }
}
