use std::fmt;
use std::ops::{Add, Mul};

use crate::math::curve::curve::Curve;

/// Coefficients with a magnitude below this value are treated as zero.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1e-10;

/// Decimals used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Free functions over coefficient slices
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluates Σ c_i·x^i with Horner's scheme.
pub fn evaluate_polynomial(coefs: &[f64], x: f64) -> f64 {
    coefs
        .iter()
        .rev()
        .fold(0.0, |acc, &c| f64::mul_add(acc, x, c))
}

/// Highest index `i <= max_degree` whose coefficient is significant, or 0.
pub fn effective_degree(coefs: &[f64], max_degree: usize) -> usize {
    if coefs.is_empty() {
        return 0;
    }
    let top = max_degree.min(coefs.len() - 1);
    (0..=top)
        .rev()
        .find(|&i| coefs[i].abs() > SIGNIFICANCE_THRESHOLD)
        .unwrap_or(0)
}

/// Renders the terms of degree `degree` down to 0 as `c·x^k + …`.
///
/// Insignificant terms are skipped, a magnitude of exactly 1 prints as a bare
/// `x` / `x^k`, and the constant term always prints its value. Returns `"0"` when
/// every term is skipped.
pub fn format_polynomial(coefs: &[f64], degree: usize, precision: usize) -> String {
    let mut out = String::new();
    let top = degree.min(coefs.len().saturating_sub(1));
    let mut first = true;

    for i in (0..=top).rev() {
        let Some(&coef) = coefs.get(i) else { continue };
        if coef.abs() < SIGNIFICANCE_THRESHOLD {
            continue;
        }

        if first {
            first = false;
            if coef < 0.0 {
                out.push('-');
            }
        } else if coef >= 0.0 {
            out.push_str(" + ");
        } else {
            out.push_str(" - ");
        }

        let magnitude = coef.abs();
        match i {
            0 => out.push_str(&format!("{:.*}", precision, magnitude)),
            1 if magnitude == 1.0 => out.push('x'),
            1 => out.push_str(&format!("{:.*}x", precision, magnitude)),
            _ if magnitude == 1.0 => out.push_str(&format!("x^{}", i)),
            _ => out.push_str(&format!("{:.*}x^{}", precision, magnitude, i))
        }
    }

    if first {
        out.push('0');
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────────────────────────────────────

/// Dense polynomial, coefficients in ascending power order.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>
}

impl Polynomial {
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        if coefs.is_empty() {
            return Polynomial::zero();
        }
        Polynomial { coefs }
    }

    pub fn zero() -> Polynomial {
        Polynomial { coefs: vec![0.0] }
    }

    pub fn constant(c: f64) -> Polynomial {
        Polynomial { coefs: vec![c] }
    }

    /// `(x - root) · scale`
    pub fn linear_factor(root: f64, scale: f64) -> Polynomial {
        Polynomial { coefs: vec![-root * scale, scale] }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefs.get(power).copied().unwrap_or(0.0)
    }

    /// Degree implied by the storage length, trailing zeros included.
    pub fn nominal_degree(&self) -> usize {
        self.coefs.len() - 1
    }

    pub fn effective_degree(&self) -> usize {
        effective_degree(&self.coefs, self.nominal_degree())
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.coefs.len().max(other.coefs.len());
        let coefs = (0..len)
            .map(|i| self.coefficient(i) + other.coefficient(i))
            .collect();
        Polynomial { coefs }
    }

    /// Convolution of the two coefficient vectors.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut coefs = vec![0.0; self.coefs.len() + other.coefs.len() - 1];
        for (i, &a) in self.coefs.iter().enumerate() {
            for (j, &b) in other.coefs.iter().enumerate() {
                coefs[i + j] += a * b;
            }
        }
        Polynomial { coefs }
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial { coefs: self.coefs.iter().map(|c| c * factor).collect() }
    }

    pub fn differentiate(&self) -> Polynomial {
        if self.coefs.len() == 1 {
            return Polynomial::zero();
        }
        let coefs = self.coefs[1..]
            .iter()
            .enumerate()
            .map(|(i, &c)| (i + 1) as f64 * c)
            .collect();
        Polynomial { coefs }
    }

    pub fn format(&self, precision: usize) -> String {
        format_polynomial(&self.coefs, self.effective_degree(), precision)
    }
}

impl Curve for Polynomial {
    fn value(&self, x: f64) -> f64 {
        evaluate_polynomial(&self.coefs, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.differentiate().value(x)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(f.precision().unwrap_or(DEFAULT_PRECISION)))
    }
}
