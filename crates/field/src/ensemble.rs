//! Raw and pooled model ensembles.

use nereus_calendar::Date;
use nereus_stats::nan_mean;

use crate::error::FieldError;
use crate::seasonal::SeasonalMeans;

/// A model ensemble before pooling, laid out
/// `(region, hindcast, startdate, member, year, time)` row-major.
///
/// The hindcast, start-date, and member axes carry no labels here on
/// purpose: pooling discards them, and the bootstrap treats pooled
/// realisations as exchangeable.
#[derive(Debug, Clone)]
pub struct RawEnsemble {
    regions: Vec<String>,
    n_hindcast: usize,
    n_startdate: usize,
    n_member: usize,
    years: Vec<i32>,
    time: Vec<Date>,
    data: Vec<f64>,
}

impl RawEnsemble {
    /// Creates a raw ensemble after validating the data length against
    /// the axis product.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] on a length mismatch and
    /// [`FieldError::Validation`] if any extra axis is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        regions: Vec<String>,
        n_hindcast: usize,
        n_startdate: usize,
        n_member: usize,
        years: Vec<i32>,
        time: Vec<Date>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        if n_hindcast == 0 || n_startdate == 0 || n_member == 0 {
            return Err(FieldError::Validation {
                details: format!(
                    "ensemble axes must be non-empty, got hindcast={n_hindcast} \
                     startdate={n_startdate} member={n_member}"
                ),
            });
        }
        let expected =
            regions.len() * n_hindcast * n_startdate * n_member * years.len() * time.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            regions,
            n_hindcast,
            n_startdate,
            n_member,
            years,
            time,
            data,
        })
    }

    /// Flattens the `(hindcast, startdate, member)` axes into one
    /// `realisation` axis with a fresh `0..K-1` index, `K = hindcast *
    /// startdate * member`, row-major (hindcast outer, member inner).
    ///
    /// The layout already stores those axes contiguously ahead of
    /// `(year, time)`, so pooling relabels without moving data.
    pub fn pool(self) -> EnsembleField {
        let n_realisations = self.n_hindcast * self.n_startdate * self.n_member;
        EnsembleField {
            regions: self.regions,
            n_realisations,
            years: self.years,
            time: self.time,
            data: self.data,
        }
    }
}

/// A pooled model ensemble, laid out
/// `(region, realisation, year, time)` row-major.
#[derive(Debug, Clone)]
pub struct EnsembleField {
    regions: Vec<String>,
    n_realisations: usize,
    years: Vec<i32>,
    time: Vec<Date>,
    data: Vec<f64>,
}

impl EnsembleField {
    /// Creates a pooled ensemble directly, for models that come with a
    /// single flat realisation axis.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] on a length mismatch.
    pub fn new(
        regions: Vec<String>,
        n_realisations: usize,
        years: Vec<i32>,
        time: Vec<Date>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        let expected = regions.len() * n_realisations * years.len() * time.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            regions,
            n_realisations,
            years,
            time,
            data,
        })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Size of the pooled realisation axis.
    pub fn n_realisations(&self) -> usize {
        self.n_realisations
    }

    /// Hindcast year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Day-of-season coordinate.
    pub fn time(&self) -> &[Date] {
        &self.time
    }

    /// Number of timesteps per season.
    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    /// The daily series of one (region, realisation, year).
    pub fn series(&self, region_idx: usize, realisation: usize, year_idx: usize) -> &[f64] {
        let nt = self.time.len();
        let start =
            ((region_idx * self.n_realisations + realisation) * self.years.len() + year_idx) * nt;
        &self.data[start..start + nt]
    }

    /// Climatology of one region: the mean over realisations and years,
    /// per day-of-season (the de-seasonalising reference).
    pub fn climatology(&self, region_idx: usize) -> Vec<f64> {
        let nt = self.time.len();
        let mut out = Vec::with_capacity(nt);
        let mut column = Vec::with_capacity(self.n_realisations * self.years.len());
        for t in 0..nt {
            column.clear();
            for k in 0..self.n_realisations {
                for y in 0..self.years.len() {
                    column.push(self.series(region_idx, k, y)[t]);
                }
            }
            out.push(nan_mean(&column));
        }
        out
    }

    /// Seasonal means averaged across realisations, per region and year:
    /// the model-system trend reference (mean over time within each
    /// realisation, then over realisations).
    pub fn realisation_mean_seasonal(&self) -> SeasonalMeans {
        let mut data = Vec::with_capacity(self.regions.len() * self.years.len());
        let mut per_real = Vec::with_capacity(self.n_realisations);
        for r in 0..self.regions.len() {
            for y in 0..self.years.len() {
                per_real.clear();
                for k in 0..self.n_realisations {
                    per_real.push(nan_mean(self.series(r, k, y)));
                }
                data.push(nan_mean(&per_real));
            }
        }
        SeasonalMeans::new(self.regions.clone(), self.years.clone(), data)
            .expect("axis product matches construction")
    }

    /// Seasonal-mean value per (region, year, realisation): the input of
    /// the stratified per-year bootstrap.
    pub fn time_mean(&self) -> YearlyEnsemble {
        let mut data = Vec::with_capacity(self.regions.len() * self.years.len() * self.n_realisations);
        for r in 0..self.regions.len() {
            for y in 0..self.years.len() {
                for k in 0..self.n_realisations {
                    data.push(nan_mean(self.series(r, k, y)));
                }
            }
        }
        YearlyEnsemble {
            regions: self.regions.clone(),
            years: self.years.clone(),
            n_realisations: self.n_realisations,
            data,
        }
    }
}

/// One seasonal-mean value per (region, year, realisation), laid out so
/// each year's across-realisation slice is contiguous.
#[derive(Debug, Clone)]
pub struct YearlyEnsemble {
    regions: Vec<String>,
    years: Vec<i32>,
    n_realisations: usize,
    data: Vec<f64>,
}

impl YearlyEnsemble {
    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Size of the realisation axis.
    pub fn n_realisations(&self) -> usize {
        self.n_realisations
    }

    /// The across-realisation slice of one (region, year).
    pub fn values(&self, region_idx: usize, year_idx: usize) -> &[f64] {
        let k = self.n_realisations;
        let start = (region_idx * self.years.len() + year_idx) * k;
        &self.data[start..start + k]
    }
}
