//! Season-sliced fields and seasonal means.

use nereus_calendar::Date;
use nereus_stats::nan_mean;

use crate::error::FieldError;

/// Daily values within one season, per region and year, laid out
/// `(region, year, time)` row-major.
///
/// The time coordinate is the day-of-season sequence of a representative
/// year (a leap year when February is inside the window); padded
/// timesteps of shorter years hold NaN.
#[derive(Debug, Clone)]
pub struct SeasonalField {
    regions: Vec<String>,
    years: Vec<i32>,
    time: Vec<Date>,
    data: Vec<f64>,
}

impl SeasonalField {
    /// Creates a seasonal field after validating the data length against
    /// the axis product.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] on a length mismatch.
    pub fn new(
        regions: Vec<String>,
        years: Vec<i32>,
        time: Vec<Date>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        let expected = regions.len() * years.len() * time.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            regions,
            years,
            time,
            data,
        })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Season-year coordinate.
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

    /// The daily series of one region and year.
    pub fn series(&self, region_idx: usize, year_idx: usize) -> &[f64] {
        let nt = self.time.len();
        let start = (region_idx * self.years.len() + year_idx) * nt;
        &self.data[start..start + nt]
    }

    /// Seasonal mean per region and year (NaN-skipping, so padded
    /// timesteps do not bias the mean).
    pub fn mean_over_time(&self) -> SeasonalMeans {
        let mut data = Vec::with_capacity(self.regions.len() * self.years.len());
        for r in 0..self.regions.len() {
            for y in 0..self.years.len() {
                data.push(nan_mean(self.series(r, y)));
            }
        }
        SeasonalMeans {
            regions: self.regions.clone(),
            years: self.years.clone(),
            data,
        }
    }

    /// Climatology per region and day-of-season: the NaN-skipping mean
    /// over the year axis, laid out `(region, time)` row-major.
    pub fn climatology_over_years(&self) -> Vec<f64> {
        let nt = self.time.len();
        let mut out = Vec::with_capacity(self.regions.len() * nt);
        let mut column = Vec::with_capacity(self.years.len());
        for r in 0..self.regions.len() {
            for t in 0..nt {
                column.clear();
                for y in 0..self.years.len() {
                    column.push(self.series(r, y)[t]);
                }
                out.push(nan_mean(&column));
            }
        }
        out
    }
}

/// Seasonal-mean magnitude per region and year, laid out
/// `(region, year)` row-major. The trend reference consumed by the
/// pivot-detrending step.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalMeans {
    regions: Vec<String>,
    years: Vec<i32>,
    data: Vec<f64>,
}

impl SeasonalMeans {
    /// Creates seasonal means after validating the data length.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DimensionMismatch`] on a length mismatch.
    pub fn new(regions: Vec<String>, years: Vec<i32>, data: Vec<f64>) -> Result<Self, FieldError> {
        let expected = regions.len() * years.len();
        if data.len() != expected {
            return Err(FieldError::DimensionMismatch {
                name: "data".into(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            regions,
            years,
            data,
        })
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The year series of one region.
    pub fn values(&self, region_idx: usize) -> &[f64] {
        let ny = self.years.len();
        &self.data[region_idx * ny..(region_idx + 1) * ny]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nereus_calendar::date_sequence;

    fn field_2r_2y_3t() -> SeasonalField {
        // region a: year0 [1,2,3], year1 [4,5,6]; region b: year0 [10,20,30], year1 [40,50,NaN]
        SeasonalField::new(
            vec!["a".into(), "b".into()],
            vec![2000, 2001],
            date_sequence(Date::new(2000, 6, 1).unwrap(), 3),
            vec![
                1.0,
                2.0,
                3.0,
                4.0,
                5.0,
                6.0,
                10.0,
                20.0,
                30.0,
                40.0,
                50.0,
                f64::NAN,
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_validates_product() {
        let err = SeasonalField::new(
            vec!["a".into()],
            vec![2000],
            date_sequence(Date::new(2000, 6, 1).unwrap(), 3),
            vec![0.0; 2],
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::DimensionMismatch { .. }));
    }

    #[test]
    fn series_indexing() {
        let f = field_2r_2y_3t();
        assert_eq!(f.series(0, 1), &[4.0, 5.0, 6.0]);
        assert_eq!(f.series(1, 0), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn mean_over_time_skips_nan() {
        let f = field_2r_2y_3t();
        let m = f.mean_over_time();
        assert_relative_eq!(m.values(0)[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(m.values(0)[1], 5.0, epsilon = 1e-12);
        // NaN timestep excluded: (40 + 50) / 2
        assert_relative_eq!(m.values(1)[1], 45.0, epsilon = 1e-12);
    }

    #[test]
    fn climatology_over_years_skips_nan() {
        let f = field_2r_2y_3t();
        let clim = f.climatology_over_years();
        // region a, t0: (1 + 4) / 2
        assert_relative_eq!(clim[0], 2.5, epsilon = 1e-12);
        // region b, t2: only year0 finite
        assert_relative_eq!(clim[5], 30.0, epsilon = 1e-12);
    }
}
