//! Configuration for distribution building.

use nereus_trend::PivotMode;

use crate::error::UnseenError;

/// Configuration for [`build_distribution`](crate::build_distribution).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use nereus_unseen::DistributionOptions;
///
/// let opts = DistributionOptions::new(14, 2016).with_detrend(false);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DistributionOptions {
    window_days: usize,
    pivot_year: i32,
    detrend: bool,
    mode: PivotMode,
    extrapolate_years: Option<Vec<i32>>,
}

impl DistributionOptions {
    /// Creates options for a given rolling window and pivot year.
    ///
    /// Defaults: `detrend = true`, `mode = Hindcast`, no extrapolation
    /// years.
    pub fn new(window_days: usize, pivot_year: i32) -> Self {
        Self {
            window_days,
            pivot_year,
            detrend: true,
            mode: PivotMode::Hindcast,
            extrapolate_years: None,
        }
    }

    /// Enables or disables pivot-year detrending.
    pub fn with_detrend(mut self, detrend: bool) -> Self {
        self.detrend = detrend;
        self
    }

    /// Sets the pivot mode.
    pub fn with_mode(mut self, mode: PivotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the years the trend may be extrapolated over.
    pub fn with_extrapolate_years(mut self, years: Vec<i32>) -> Self {
        self.extrapolate_years = Some(years);
        self
    }

    // --- Accessors ---

    /// Returns the rolling window length in days.
    pub fn window_days(&self) -> usize {
        self.window_days
    }

    /// Returns the pivot year.
    pub fn pivot_year(&self) -> i32 {
        self.pivot_year
    }

    /// Returns whether detrending is enabled.
    pub fn detrend(&self) -> bool {
        self.detrend
    }

    /// Returns the pivot mode.
    pub fn mode(&self) -> PivotMode {
        self.mode
    }

    /// Returns the extrapolation years, if set.
    pub fn extrapolate_years(&self) -> Option<&[i32]> {
        self.extrapolate_years.as_deref()
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), UnseenError> {
        if self.window_days == 0 {
            return Err(UnseenError::InvalidOption {
                reason: "window_days must be >= 1".to_string(),
            });
        }
        if self.mode == PivotMode::Extrapolated {
            match &self.extrapolate_years {
                None => {
                    return Err(UnseenError::InvalidOption {
                        reason: "extrapolate_years is required in Extrapolated mode".to_string(),
                    });
                }
                Some(years) if years.is_empty() => {
                    return Err(UnseenError::InvalidOption {
                        reason: "extrapolate_years must not be empty".to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = DistributionOptions::new(14, 2016);
        assert_eq!(opts.window_days(), 14);
        assert_eq!(opts.pivot_year(), 2016);
        assert!(opts.detrend());
        assert_eq!(opts.mode(), PivotMode::Hindcast);
        assert!(opts.extrapolate_years().is_none());
    }

    #[test]
    fn builder_chaining() {
        let opts = DistributionOptions::new(7, 2030)
            .with_detrend(false)
            .with_mode(PivotMode::Extrapolated)
            .with_extrapolate_years(vec![2030, 2031]);
        assert!(!opts.detrend());
        assert_eq!(opts.mode(), PivotMode::Extrapolated);
        assert_eq!(opts.extrapolate_years(), Some(&[2030, 2031][..]));
    }

    #[test]
    fn validate_zero_window() {
        assert!(DistributionOptions::new(0, 2016).validate().is_err());
    }

    #[test]
    fn validate_extrapolated_needs_years() {
        let opts = DistributionOptions::new(14, 2030).with_mode(PivotMode::Extrapolated);
        assert!(opts.validate().is_err());
        let opts = opts.with_extrapolate_years(vec![]);
        assert!(opts.validate().is_err());
        let opts = opts.with_extrapolate_years(vec![2030]);
        assert!(opts.validate().is_ok());
    }
}
