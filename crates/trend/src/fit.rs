//! Ordinary least-squares line fitting.

use crate::error::TrendError;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    /// Fits a line to `(x, y)` pairs by ordinary least squares.
    ///
    /// # Errors
    ///
    /// - [`TrendError::LengthMismatch`] if the slices differ in length.
    /// - [`TrendError::TooFewPoints`] for fewer than two points.
    /// - [`TrendError::DegenerateAbscissa`] if all x-values are equal.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, TrendError> {
        if x.len() != y.len() {
            return Err(TrendError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(TrendError::TooFewPoints { n: x.len() });
        }

        let n = x.len() as f64;
        let mx = x.iter().sum::<f64>() / n;
        let my = y.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - mx;
            sxx += dx * dx;
            sxy += dx * (yi - my);
        }

        if sxx == 0.0 {
            return Err(TrendError::DegenerateAbscissa {
                n: x.len(),
                value: x[0],
            });
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: my - slope * mx,
        })
    }

    /// The fitted slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exact_line_recovered() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0]; // y = 2x + 1
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn noisy_symmetric_points() {
        // Residuals cancel around y = x.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.1, 0.9, 2.1, 2.9];
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope(), 0.98, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn length_mismatch_rejected() {
        assert_eq!(
            LinearFit::fit(&[1.0, 2.0], &[1.0]).unwrap_err(),
            TrendError::LengthMismatch { x_len: 2, y_len: 1 }
        );
    }

    #[test]
    fn too_few_points_rejected() {
        assert_eq!(
            LinearFit::fit(&[1.0], &[1.0]).unwrap_err(),
            TrendError::TooFewPoints { n: 1 }
        );
    }

    #[test]
    fn constant_x_rejected() {
        let err = LinearFit::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, TrendError::DegenerateAbscissa { n: 3, .. }));
    }
}
