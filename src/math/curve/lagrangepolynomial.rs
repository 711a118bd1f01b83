use crate::curvefiterror::{
    ensure_same_len,
    CurveFitError,
    Result
};
use crate::math::curve::curve::Curve;
use crate::math::polynomial::polynomial::Polynomial;

// ─────────────────────────────────────────────────────────────────────────────
// LagrangePolynomial
// ─────────────────────────────────────────────────────────────────────────────
//
//   P(x) = Σ_i y_i · L_i(x),   L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
//
// Two ways to use it:
//   - evaluate_at: O(n²) per query, nothing is stored
//   - build_polynomial: O(n²) once, then O(n) Horner per query and the
//     explicit coefficients are available for display
//
// Interpolation is global; with many nodes the polynomial oscillates
// between them (Runge's phenomenon). Nothing here tries to correct that.

/// Nodes must be non-empty, finite, paired one-to-one and pairwise distinct.
fn validate_nodes(xs: &[f64], ys: &[f64]) -> Result<()> {
    ensure_same_len(xs, ys)?;
    if xs.is_empty() {
        return Err(CurveFitError::EmptyDataset);
    }
    if let Some((&x, &y)) = xs.iter().zip(ys).find(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(CurveFitError::NonFiniteNode(x, y));
    }
    for (i, &xi) in xs.iter().enumerate() {
        if xs[i + 1..].contains(&xi) {
            return Err(CurveFitError::DuplicateAbscissa(xi));
        }
    }
    Ok(())
}

/// Value of the interpolating polynomial at `target`, without building it.
pub fn evaluate_at(xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
    validate_nodes(xs, ys)?;
    Ok(product_formula(xs, ys, target))
}

fn product_formula(xs: &[f64], ys: &[f64], target: f64) -> f64 {
    let mut result = 0.0;
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut term = yi;
        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                term *= (target - xj) / (xi - xj);
            }
        }
        result += term;
    }
    result
}

/// Explicit coefficients of the degree-(n-1) interpolating polynomial.
pub fn build_polynomial(xs: &[f64], ys: &[f64], max_degree: usize) -> Result<Polynomial> {
    validate_nodes(xs, ys)?;
    if xs.len() - 1 > max_degree {
        return Err(CurveFitError::CapacityExceeded { points: xs.len(), max_degree });
    }

    let mut result = Polynomial::zero();
    for (i, &yi) in ys.iter().enumerate() {
        let basis = basis_polynomial(i, xs);
        result = &result + &basis.scale(yi);
    }
    Ok(result)
}

/// L_i(x), built one normalised linear factor at a time.
fn basis_polynomial(i: usize, xs: &[f64]) -> Polynomial {
    let xi = xs[i];
    xs.iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(Polynomial::constant(1.0), |basis, (_, &xj)| {
            let factor = Polynomial::linear_factor(xj, 1.0 / (xi - xj));
            &basis * &factor
        })
}

pub struct LagrangePolynomial {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    polynomial: Polynomial
}

impl LagrangePolynomial {
    pub fn new(xs: &[f64], ys: &[f64], max_degree: usize) -> Result<LagrangePolynomial> {
        let polynomial = build_polynomial(xs, ys, max_degree)?;

        tracing::debug!(
            nodes = xs.len(),
            effective_degree = polynomial.effective_degree(),
            "lagrange polynomial built"
        );

        Ok(LagrangePolynomial {
            x_data: xs.to_vec(),
            y_data: ys.to_vec(),
            polynomial
        })
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_data.iter().copied().zip(self.y_data.iter().copied())
    }

    /// Evaluates with the product formula on the stored nodes instead of the coefficients.
    pub fn interpolate(&self, target: f64) -> f64 {
        product_formula(&self.x_data, &self.y_data, target)
    }
}

impl Curve for LagrangePolynomial {
    fn value(&self, x: f64) -> f64 {
        self.polynomial.value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.polynomial.derivative(x)
    }
}
