use nalgebra::DMatrix;

use crate::curvefiterror::{
    ensure_same_len,
    CurveFitError,
    Result
};
use crate::math::curve::curve::Curve;
use crate::math::linearsystem::gaussianelimination::{
    GaussianElimination,
    PivotStrategy
};
use crate::math::polynomial::polynomial::Polynomial;

// ─────────────────────────────────────────────────────────────────────────────
// PolynomialModel
// ─────────────────────────────────────────────────────────────────────────────

/// A least-squares polynomial expressed in `x - origin`.
#[derive(Clone, Debug)]
pub struct PolynomialModel {
    polynomial: Polynomial,
    origin: f64
}

impl PolynomialModel {
    pub fn new(polynomial: Polynomial, origin: f64) -> PolynomialModel {
        PolynomialModel { polynomial, origin }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// `[a0, a1, ..., ad]`
    pub fn coefficients(&self) -> &[f64] {
        self.polynomial.coefficients()
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }
}

impl Curve for PolynomialModel {
    fn value(&self, x: f64) -> f64 {
        self.polynomial.value(x - self.origin)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.polynomial.derivative(x - self.origin)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PolynomialRegression
// ─────────────────────────────────────────────────────────────────────────────

/// Least squares through the normal equations:
///
///   Σ_j (Σ_k x_k^(i+j)) · a_j = Σ_k y_k · x_k^i,   i = 0..=degree
pub struct PolynomialRegression {
    degree: usize,
    origin: f64,
    solver: GaussianElimination
}

impl PolynomialRegression {
    pub fn new(degree: usize, pivot_strategy: PivotStrategy) -> PolynomialRegression {
        PolynomialRegression {
            degree,
            origin: 0.0,
            solver: GaussianElimination::new(pivot_strategy)
        }
    }

    pub fn cubic() -> PolynomialRegression {
        PolynomialRegression::new(3, PivotStrategy::Naive)
    }

    /// Fits against `x - origin` instead of `x`.
    pub fn with_origin(mut self, origin: f64) -> PolynomialRegression {
        self.origin = origin;
        self
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<PolynomialModel> {
        ensure_same_len(xs, ys)?;
        let terms = self.degree + 1;
        if xs.len() < terms {
            return Err(CurveFitError::InsufficientData { needed: terms, got: xs.len() });
        }

        let augmented = self.normal_equations(xs, ys);
        let solution = self.solver.solve(&augmented)?;
        let polynomial = Polynomial::new(solution.iter().copied().collect());

        tracing::debug!(
            degree = self.degree,
            samples = xs.len(),
            origin = self.origin,
            coefficients = ?polynomial.coefficients(),
            "polynomial regression fitted"
        );

        Ok(PolynomialModel::new(polynomial, self.origin))
    }

    fn normal_equations(&self, xs: &[f64], ys: &[f64]) -> DMatrix<f64> {
        let terms = self.degree + 1;

        // x_sums[p] = Σ x^p for p in 0..=2d, xy_sums[p] = Σ y·x^p for p in 0..=d
        let mut x_sums = vec![0.0; 2 * self.degree + 1];
        let mut xy_sums = vec![0.0; terms];
        for (&x, &y) in xs.iter().zip(ys) {
            let x = x - self.origin;
            let mut power = 1.0;
            for p in 0..x_sums.len() {
                if p < terms {
                    xy_sums[p] += y * power;
                }
                x_sums[p] += power;
                power *= x;
            }
        }

        DMatrix::from_fn(terms, terms + 1, |i, j| {
            if j == terms {
                xy_sums[i]
            } else {
                x_sums[i + j]
            }
        })
    }
}
