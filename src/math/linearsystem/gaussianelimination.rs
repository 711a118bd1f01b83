use nalgebra::{
    DMatrix,
    DVector
};
use serde::Deserialize;

use crate::curvefiterror::{
    CurveFitError,
    Result
};

// ─────────────────────────────────────────────────────────────────────────────
// Gaussian elimination on an augmented matrix [B | b]
// ─────────────────────────────────────────────────────────────────────────────
//
// Forward elimination without scaling, then back substitution:
//
//   ratio   = B[k][i] / B[i][i]             (k > i)
//   B[k][·] = B[k][·] - ratio · B[i][·]
//   c_i     = (b_i - Σ_{j>i} B[i][j]·c_j) / B[i][i]
//
// Next to B a bound M on the magnitude of every entry is carried through the same
// updates, M[k][j] += |ratio| · M[i][j], starting from |B|. A pivot is rejected when
// |B[i][i]| <= EPSILON · m · M[i][i]: it is then smaller than the rounding error of
// the sums that produced it. The bound follows the rows through swaps, so both
// strategies apply the same rule.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum PivotStrategy {
    /// Rows are eliminated in their given order.
    #[default]
    Naive,
    /// Before eliminating column i the row with the largest |B[k][i]| (k >= i) is swapped in.
    Partial
}

pub struct GaussianElimination {
    pivot_strategy: PivotStrategy
}

impl GaussianElimination {
    pub fn new(pivot_strategy: PivotStrategy) -> GaussianElimination {
        GaussianElimination { pivot_strategy }
    }

    /// Solves the m x (m+1) augmented system and returns the m unknowns.
    pub fn solve(&self, augmented: &DMatrix<f64>) -> Result<DVector<f64>> {
        let m = augmented.nrows();
        if m == 0 || augmented.ncols() != m + 1 {
            return Err(CurveFitError::NotAugmented {
                rows: m,
                cols: augmented.ncols()
            });
        }

        let mut b = augmented.clone();
        let mut magnitude = augmented.abs();

        for i in 0..m {
            if self.pivot_strategy == PivotStrategy::Partial {
                let best = (i..m)
                    .max_by(|&p, &q| b[(p, i)].abs().total_cmp(&b[(q, i)].abs()))
                    .unwrap_or(i);
                if best != i {
                    b.swap_rows(i, best);
                    magnitude.swap_rows(i, best);
                }
            }

            let pivot = b[(i, i)];
            let tolerance = f64::EPSILON * m as f64 * magnitude[(i, i)];
            if !pivot.is_finite() || pivot.abs() <= tolerance {
                return Err(CurveFitError::SingularSystem { row: i, pivot });
            }

            for k in (i + 1)..m {
                let ratio = b[(k, i)] / pivot;
                for j in 0..=m {
                    let delta = ratio * b[(i, j)];
                    b[(k, j)] -= delta;
                    let growth = ratio.abs() * magnitude[(i, j)];
                    magnitude[(k, j)] += growth;
                }
            }
        }

        let mut coefs = DVector::zeros(m);
        for i in (0..m).rev() {
            let mut acc = b[(i, m)];
            for j in (i + 1)..m {
                acc -= b[(i, j)] * coefs[j];
            }
            coefs[i] = acc / b[(i, i)];
        }

        Ok(coefs)
    }
}

impl Default for GaussianElimination {
    fn default() -> GaussianElimination {
        GaussianElimination::new(PivotStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn system() -> DMatrix<f64> {
        // 2a + b - c = 8, -3a - b + 2c = -11, -2a + b + 2c = -3  =>  (2, 3, -1)
        DMatrix::from_row_slice(3, 4, &[
             2.0,  1.0, -1.0,   8.0,
            -3.0, -1.0,  2.0, -11.0,
            -2.0,  1.0,  2.0,  -3.0
        ])
    }

    #[test]
    fn naive_elimination_solves_regular_system() {
        let solution = GaussianElimination::default().solve(&system()).unwrap();
        assert_abs_diff_eq!(solution[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(solution[1], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(solution[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn partial_pivoting_agrees_with_naive() {
        let naive = GaussianElimination::new(PivotStrategy::Naive).solve(&system()).unwrap();
        let partial = GaussianElimination::new(PivotStrategy::Partial).solve(&system()).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(naive[i], partial[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_leading_pivot_needs_partial_pivoting() {
        let swapped = DMatrix::from_row_slice(2, 3, &[
            0.0, 1.0, 2.0,
            1.0, 1.0, 5.0
        ]);
        let err = GaussianElimination::new(PivotStrategy::Naive).solve(&swapped).unwrap_err();
        assert!(matches!(err, CurveFitError::SingularSystem { row: 0, .. }));

        let solution = GaussianElimination::new(PivotStrategy::Partial).solve(&swapped).unwrap();
        assert_abs_diff_eq!(solution[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(solution[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn dependent_rows_are_singular() {
        let singular = DMatrix::from_row_slice(2, 3, &[
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0
        ]);
        for strategy in [PivotStrategy::Naive, PivotStrategy::Partial] {
            let err = GaussianElimination::new(strategy).solve(&singular).unwrap_err();
            assert!(matches!(err, CurveFitError::SingularSystem { row: 1, .. }));
        }
    }

    #[test]
    fn rounding_noise_pivot_is_singular() {
        // 0.3 = 3 · 0.1 only up to rounding, so the second pivot is noise
        let nearly = DMatrix::from_row_slice(2, 3, &[
            0.1, 0.3, 1.0,
            0.3, 0.9, 2.0
        ]);
        for strategy in [PivotStrategy::Naive, PivotStrategy::Partial] {
            let err = GaussianElimination::new(strategy).solve(&nearly).unwrap_err();
            assert!(matches!(err, CurveFitError::SingularSystem { row: 1, .. }));
        }
    }

    #[test]
    fn rejects_non_augmented_shape() {
        let square = DMatrix::<f64>::identity(3, 3);
        let err = GaussianElimination::default().solve(&square).unwrap_err();
        assert!(matches!(err, CurveFitError::NotAugmented { rows: 3, cols: 3 }));
    }
}
