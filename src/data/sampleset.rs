use crate::curvefiterror::{
    ensure_same_len,
    Result
};

/// Ordered (x, y) samples stored as two parallel columns.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>
}

impl SampleSet {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<SampleSet> {
        ensure_same_len(&xs, &ys)?;
        Ok(SampleSet { xs, ys })
    }

    /// Columns already known to have the same length.
    pub(crate) fn from_columns(xs: Vec<f64>, ys: Vec<f64>) -> SampleSet {
        debug_assert_eq!(xs.len(), ys.len());
        SampleSet { xs, ys }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Copy with every x replaced by `x - origin`.
    pub fn shifted(&self, origin: f64) -> SampleSet {
        SampleSet {
            xs: self.xs.iter().map(|x| x - origin).collect(),
            ys: self.ys.clone()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curvefiterror::CurveFitError;

    #[test]
    fn rejects_unpaired_columns() {
        let err = SampleSet::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, CurveFitError::SizeMismatch { x_len: 2, y_len: 1 }));
    }

    #[test]
    fn shift_moves_only_abscissas() {
        let samples = SampleSet::new(vec![2000.0, 2010.0], vec![1.0, 2.0]).unwrap();
        let shifted = samples.shifted(2000.0);
        assert_eq!(shifted.xs(), &[0.0, 10.0]);
        assert_eq!(shifted.ys(), samples.ys());
        assert_eq!(shifted.iter().last(), Some((10.0, 2.0)));
    }
}
