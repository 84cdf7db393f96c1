//! Full lat/lon fields for map extraction.

use nereus_calendar::Date;

use crate::error::FieldError;

/// A daily full-grid field, laid out `(time, lat, lon)` row-major.
///
/// Gridded fields carry no region or realisation axis: map extraction of
/// ensemble data is unsupported by construction.
#[derive(Debug, Clone)]
pub struct GriddedSeries {
    dates: Vec<Date>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    data: Vec<f64>,
}

impl GriddedSeries {
    /// Creates a gridded series after validating shapes.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] on a length mismatch and
    /// [`FieldError::Validation`] for a non-increasing time coordinate.
    pub fn new(
        dates: Vec<Date>,
        lats: Vec<f64>,
        lons: Vec<f64>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FieldError::Validation {
                details: "time coordinate must be strictly increasing".into(),
            });
        }
        let expected = dates.len() * lats.len() * lons.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            dates,
            lats,
            lons,
            data,
        })
    }

    /// Time coordinate.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Latitude coordinate.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude coordinate.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Grid cells per timestep.
    pub fn cells_per_step(&self) -> usize {
        self.lats.len() * self.lons.len()
    }

    /// The flat `(lat, lon)` block of one timestep.
    pub fn step(&self, time_idx: usize) -> &[f64] {
        let n = self.cells_per_step();
        &self.data[time_idx * n..(time_idx + 1) * n]
    }
}

/// A season-sliced full-grid field, laid out `(year, time, lat, lon)`
/// row-major, with the same NaN padding rules as the region variant.
#[derive(Debug, Clone)]
pub struct GriddedSeasonal {
    years: Vec<i32>,
    time: Vec<Date>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    data: Vec<f64>,
}

impl GriddedSeasonal {
    pub(crate) fn from_parts(
        years: Vec<i32>,
        time: Vec<Date>,
        lats: Vec<f64>,
        lons: Vec<f64>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        let expected = years.len() * time.len() * lats.len() * lons.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            years,
            time,
            lats,
            lons,
            data,
        })
    }

    /// Season-year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Day-of-season coordinate.
    pub fn time(&self) -> &[Date] {
        &self.time
    }

    /// Latitude coordinate.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude coordinate.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// The flat `(lat, lon)` block of one (year, day-of-season).
    pub fn step(&self, year_idx: usize, time_idx: usize) -> &[f64] {
        let n = self.lats.len() * self.lons.len();
        let start = (year_idx * self.time.len() + time_idx) * n;
        &self.data[start..start + n]
    }
}
