use serde::Deserialize;

use crate::curvefiterror::{
    ensure_same_len,
    CurveFitError,
    Result
};
use crate::math::curve::curve::Curve;
use crate::math::regression::linearregression::LinearRegression;

/// Fitted growth rates at or below this magnitude leave the midpoint undefined.
const MIN_GROWTH_RATE: f64 = 1e-10;

/// `l / (1 + exp(-k·(t - t0)))`
pub fn evaluate(t: f64, l: f64, k: f64, t0: f64) -> f64 {
    l / (1.0 + (-k * (t - t0)).exp())
}

// ─────────────────────────────────────────────────────────────────────────────
// LogisticCurve
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LogisticCurve {
    /// L, the value approached as t → +∞
    upper_asymptote: f64,
    /// k
    growth_rate: f64,
    /// t0, where the curve reaches L/2
    midpoint: f64
}

impl LogisticCurve {
    pub fn new(upper_asymptote: f64, growth_rate: f64, midpoint: f64) -> LogisticCurve {
        LogisticCurve { upper_asymptote, growth_rate, midpoint }
    }

    pub fn upper_asymptote(&self) -> f64 {
        self.upper_asymptote
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }
}

impl Curve for LogisticCurve {
    fn value(&self, t: f64) -> f64 {
        evaluate(t, self.upper_asymptote, self.growth_rate, self.midpoint)
    }

    fn derivative(&self, t: f64) -> f64 {
        let f = self.value(t);
        self.growth_rate * f * (1.0 - f / self.upper_asymptote)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogisticRegression
// ─────────────────────────────────────────────────────────────────────────────
//
// With L fixed the logit linearises the curve:
//
//   ln(y / (L - y)) = k·t - k·t0
//
// so k is the slope of a straight-line fit and t0 = -intercept / k.

pub struct LogisticRegression {
    upper_asymptote: f64
}

impl LogisticRegression {
    pub fn new(upper_asymptote: f64) -> LogisticRegression {
        LogisticRegression { upper_asymptote }
    }

    /// Every y must lie strictly between 0 and L.
    pub fn fit(&self, ts: &[f64], ys: &[f64]) -> Result<LogisticCurve> {
        ensure_same_len(ts, ys)?;
        if ts.len() < 2 {
            return Err(CurveFitError::InsufficientData { needed: 2, got: ts.len() });
        }

        let l = self.upper_asymptote;
        let logits = ys
            .iter()
            .map(|&y| {
                if y > 0.0 && y < l {
                    Ok((y / (l - y)).ln())
                } else {
                    Err(CurveFitError::OutOfRange { value: y, lower: 0.0, upper: l })
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        let line = LinearRegression::fit(ts, &logits)?;
        if line.slope().abs() <= MIN_GROWTH_RATE {
            return Err(CurveFitError::DegenerateLogistic);
        }

        let curve = LogisticCurve::new(l, line.slope(), -line.intercept() / line.slope());
        tracing::debug!(
            upper_asymptote = l,
            growth_rate = curve.growth_rate(),
            midpoint = curve.midpoint(),
            "logistic curve fitted"
        );
        Ok(curve)
    }
}
