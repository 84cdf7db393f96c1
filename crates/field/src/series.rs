//! Daily region series and per-region scalar labels.

use nereus_calendar::Date;

use crate::error::FieldError;

/// A daily time series for a set of named regions, laid out
/// `(region, time)` row-major.
#[derive(Debug, Clone)]
pub struct RegionSeries {
    regions: Vec<String>,
    dates: Vec<Date>,
    data: Vec<f64>,
}

impl RegionSeries {
    /// Creates a region series after validating shapes and coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if `data.len()` is not
    /// `regions.len() * dates.len()`, and [`FieldError::Validation`] if
    /// the region list is empty, a region repeats, or the dates are not
    /// strictly increasing.
    pub fn new(regions: Vec<String>, dates: Vec<Date>, data: Vec<f64>) -> Result<Self, FieldError> {
        if regions.is_empty() {
            return Err(FieldError::Validation {
                details: "region list must not be empty".into(),
            });
        }
        for (i, r) in regions.iter().enumerate() {
            if regions[..i].contains(r) {
                return Err(FieldError::Validation {
                    details: format!("duplicate region '{r}'"),
                });
            }
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FieldError::Validation {
                details: "time coordinate must be strictly increasing".into(),
            });
        }
        let expected = regions.len() * dates.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            regions,
            dates,
            data,
        })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Time coordinate.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of regions.
    pub fn n_regions(&self) -> usize {
        self.regions.len()
    }

    /// Number of timesteps.
    pub fn n_time(&self) -> usize {
        self.dates.len()
    }

    /// Index of a region by name.
    pub fn region_index(&self, region: &str) -> Option<usize> {
        self.regions.iter().position(|r| r == region)
    }

    /// The full daily series of one region.
    pub fn values(&self, region_idx: usize) -> &[f64] {
        let n = self.n_time();
        &self.data[region_idx * n..(region_idx + 1) * n]
    }

    /// Restricts the series to the closed date interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Validation`] if the interval selects no
    /// timesteps.
    pub fn select_range(&self, start: Date, end: Date) -> Result<Self, FieldError> {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        if lo >= hi {
            return Err(FieldError::Validation {
                details: format!("date range {start}..={end} selects no timesteps"),
            });
        }
        let dates = self.dates[lo..hi].to_vec();
        let mut data = Vec::with_capacity(self.n_regions() * dates.len());
        for r in 0..self.n_regions() {
            data.extend_from_slice(&self.values(r)[lo..hi]);
        }
        Self::new(self.regions.clone(), dates, data)
    }

    /// The distinct calendar years covered by the time coordinate,
    /// ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.dates.iter().map(|d| d.year()).collect();
        years.dedup();
        years
    }
}

/// One scalar per region, e.g. the magnitude of the focus event.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionValues {
    regions: Vec<String>,
    values: Vec<f64>,
}

impl RegionValues {
    /// Creates per-region scalars.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] if the lengths differ.
    pub fn new(regions: Vec<String>, values: Vec<f64>) -> Result<Self, FieldError> {
        if regions.len() != values.len() {
            return Err(FieldError::DimensionMismatch {
                name: "values".into(),
                expected: regions.len(),
                got: values.len(),
            });
        }
        Ok(Self { regions, values })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// The scalar values, in region order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The scalar of one region by index.
    pub fn value(&self, region_idx: usize) -> f64 {
        self.values[region_idx]
    }
}
