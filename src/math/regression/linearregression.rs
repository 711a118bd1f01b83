use std::fmt;

use crate::curvefiterror::{
    ensure_same_len,
    Result
};
use crate::math::curve::curve::Curve;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearModel {
    slope: f64,
    intercept: f64
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> LinearModel {
        LinearModel { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Curve for LinearModel {
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.slope, x, self.intercept)
    }

    fn derivative(&self, _x: f64) -> f64 {
        self.slope
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "y = {:.*} * x + {:.*}", precision, self.slope, precision, self.intercept)
    }
}

/// Closed-form least-squares line:
///
///   slope     = (n·Σxy - Σx·Σy) / (n·Σx² - (Σx)²)
///   intercept = (Σy - slope·Σx) / n
pub struct LinearRegression;

impl LinearRegression {
    /// A zero denominator (no samples, or every x identical) yields the model
    /// `slope = 0, intercept = 0` rather than an error.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<LinearModel> {
        ensure_same_len(xs, ys)?;

        let n = xs.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (&x, &y) in xs.iter().zip(ys) {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            tracing::warn!(samples = xs.len(), "degenerate abscissas, falling back to y = 0");
            return Ok(LinearModel::new(0.0, 0.0));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        tracing::debug!(slope, intercept, samples = xs.len(), "linear regression fitted");

        Ok(LinearModel::new(slope, intercept))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::curvefiterror::CurveFitError;

    #[test]
    fn fits_exact_line() {
        let model = LinearRegression::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();
        assert_abs_diff_eq!(model.slope(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.value(10.0), 20.0, epsilon = 1e-12);
        assert_eq!(model.derivative(-4.0), model.slope());
    }

    #[test]
    fn least_squares_through_scatter() {
        // y = 1 + 0.5x with symmetric residuals
        let model = LinearRegression::fit(&[0.0, 1.0, 2.0, 3.0], &[1.1, 1.4, 2.1, 2.4]).unwrap();
        assert_abs_diff_eq!(model.slope(), 0.46, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 1.06, epsilon = 1e-12);
    }

    #[test]
    fn identical_abscissas_fall_back_to_zero_model() {
        let model = LinearRegression::fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(model, LinearModel::new(0.0, 0.0));
        assert_eq!(LinearRegression::fit(&[], &[]).unwrap(), LinearModel::new(0.0, 0.0));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = LinearRegression::fit(&[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, CurveFitError::SizeMismatch { .. }));
    }

    #[test]
    fn display_uses_requested_precision() {
        let model = LinearModel::new(2.0, -0.5);
        assert_eq!(format!("{:.2}", model), "y = 2.00 * x + -0.50");
    }
}
