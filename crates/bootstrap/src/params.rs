//! Bootstrap parameters.

use crate::error::BootstrapError;

/// Parameters shared by every bootstrap routine.
///
/// # Example
///
/// ```
/// use nereus_bootstrap::BootstrapParams;
///
/// let params = BootstrapParams::new(10_000, 42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapParams {
    n_iterations: usize,
    seed: u64,
    q_low: f64,
    q_high: f64,
}

impl BootstrapParams {
    /// Creates parameters with the default 95% interval
    /// (quantiles 0.025 and 0.975).
    pub fn new(n_iterations: usize, seed: u64) -> Self {
        Self {
            n_iterations,
            seed,
            q_low: 0.025,
            q_high: 0.975,
        }
    }

    /// Sets the interval quantile pair.
    pub fn with_quantiles(mut self, q_low: f64, q_high: f64) -> Self {
        self.q_low = q_low;
        self.q_high = q_high;
        self
    }

    /// Returns the number of bootstrap iterations.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Returns the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the lower interval quantile.
    pub fn q_low(&self) -> f64 {
        self.q_low
    }

    /// Returns the upper interval quantile.
    pub fn q_high(&self) -> f64 {
        self.q_high
    }

    /// Validates these parameters.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.n_iterations == 0 {
            return Err(BootstrapError::InvalidParams {
                reason: "n_iterations must be >= 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.q_low)
            || !(0.0..=1.0).contains(&self.q_high)
            || self.q_low >= self.q_high
        {
            return Err(BootstrapError::InvalidParams {
                reason: format!(
                    "quantiles must satisfy 0 <= q_low < q_high <= 1, got ({}, {})",
                    self.q_low, self.q_high
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = BootstrapParams::new(1000, 7);
        assert_eq!(p.n_iterations(), 1000);
        assert_eq!(p.seed(), 7);
        assert!((p.q_low() - 0.025).abs() < f64::EPSILON);
        assert!((p.q_high() - 0.975).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(BootstrapParams::new(0, 7).validate().is_err());
    }

    #[test]
    fn inverted_quantiles_rejected() {
        assert!(
            BootstrapParams::new(10, 7)
                .with_quantiles(0.975, 0.025)
                .validate()
                .is_err()
        );
    }
}
