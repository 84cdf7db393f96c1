//! Labeled risk grids.

/// Exceedance risk per region and strength increment, values in
/// `[0, 100]` percent.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthRisk {
    regions: Vec<String>,
    increments: Vec<f64>,
    values: Vec<f64>,
}

impl StrengthRisk {
    /// Assembles a grid from parts; `values` is `(region, increment)`
    /// row-major.
    pub fn new(regions: Vec<String>, increments: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), regions.len() * increments.len());
        Self {
            regions,
            increments,
            values,
        }
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Strength increments added to the focus event, in axis order.
    pub fn increments(&self) -> &[f64] {
        &self.increments
    }

    /// The risk curve of one region.
    pub fn values(&self, region_idx: usize) -> &[f64] {
        let n = self.increments.len();
        &self.values[region_idx * n..(region_idx + 1) * n]
    }

    /// One grid point.
    pub fn value(&self, region_idx: usize, increment_idx: usize) -> f64 {
        self.values[region_idx * self.increments.len() + increment_idx]
    }
}

/// Exceedance risk per region and pivot year, values in `[0, 100]`
/// percent.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRisk {
    regions: Vec<String>,
    pivot_years: Vec<i32>,
    values: Vec<f64>,
}

impl TimeRisk {
    /// Assembles a grid from parts; `values` is `(region, pivot_year)`
    /// row-major.
    pub fn new(regions: Vec<String>, pivot_years: Vec<i32>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), regions.len() * pivot_years.len());
        Self {
            regions,
            pivot_years,
            values,
        }
    }

    /// Region names, in axis order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Pivot years, in axis order.
    pub fn pivot_years(&self) -> &[i32] {
        &self.pivot_years
    }

    /// The risk curve of one region.
    pub fn values(&self, region_idx: usize) -> &[f64] {
        let n = self.pivot_years.len();
        &self.values[region_idx * n..(region_idx + 1) * n]
    }

    /// One grid point.
    pub fn value(&self, region_idx: usize, year_idx: usize) -> f64 {
        self.values[region_idx * self.pivot_years.len() + year_idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_indexing() {
        let r = StrengthRisk::new(
            vec!["a".into(), "b".into()],
            vec![0.0, 0.5],
            vec![40.0, 20.0, 80.0, 60.0],
        );
        assert_eq!(r.values(1), &[80.0, 60.0]);
        assert_eq!(r.value(0, 1), 20.0);
    }

    #[test]
    fn time_indexing() {
        let r = TimeRisk::new(vec!["a".into()], vec![2000, 2001], vec![10.0, 30.0]);
        assert_eq!(r.values(0), &[10.0, 30.0]);
        assert_eq!(r.value(0, 0), 10.0);
    }
}
