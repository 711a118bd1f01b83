use crate::curvefiterror::{
    CurveFitError,
    Result
};
use crate::data::sampleset::SampleSet;
use crate::report::precision::Precision;

/// The measured quantity a series tracks against the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Percentage,
    Population
}

impl Indicator {
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Percentage => "Internet Users (%)",
            Indicator::Population => "Population"
        }
    }

    /// Letter used to name regression coefficients (`a0`, `b1`, ...).
    pub fn coefficient_prefix(&self) -> char {
        match self {
            Indicator::Percentage => 'b',
            Indicator::Population => 'a'
        }
    }

    pub fn unit_suffix(&self) -> &'static str {
        match self {
            Indicator::Percentage => "%",
            Indicator::Population => ""
        }
    }

    pub fn estimate_precision(&self, precision: &Precision) -> usize {
        match self {
            Indicator::Percentage => precision.percentage(),
            Indicator::Population => precision.population()
        }
    }
}

/// Year, internet-usage percentage and population columns, in CSV order.
#[derive(Clone, Debug, PartialEq)]
pub struct DemographicTable {
    years: Vec<f64>,
    percentages: Vec<f64>,
    populations: Vec<f64>
}

impl DemographicTable {
    pub fn new(years: Vec<f64>, percentages: Vec<f64>, populations: Vec<f64>) -> Result<DemographicTable> {
        if years.len() != percentages.len() {
            return Err(CurveFitError::SizeMismatch { x_len: years.len(), y_len: percentages.len() });
        }
        if years.len() != populations.len() {
            return Err(CurveFitError::SizeMismatch { x_len: years.len(), y_len: populations.len() });
        }
        if years.is_empty() {
            return Err(CurveFitError::EmptyDataset);
        }
        Ok(DemographicTable { years, percentages, populations })
    }

    pub fn years(&self) -> &[f64] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn column(&self, indicator: Indicator) -> &[f64] {
        match indicator {
            Indicator::Percentage => &self.percentages,
            Indicator::Population => &self.populations
        }
    }

    pub fn series(&self, indicator: Indicator) -> SampleSet {
        SampleSet::from_columns(self.years.clone(), self.column(indicator).to_vec())
    }

    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.years
            .iter()
            .zip(&self.percentages)
            .zip(&self.populations)
            .map(|((&year, &percentage), &population)| (year, percentage, population))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_pairs_years_with_indicator() {
        let table = DemographicTable::new(
            vec![2000.0, 2010.0],
            vec![0.9, 10.9],
            vec![2.1e8, 2.4e8]
        ).unwrap();
        let population = table.series(Indicator::Population);
        assert_eq!(population.xs(), &[2000.0, 2010.0]);
        assert_eq!(population.ys(), &[2.1e8, 2.4e8]);
        assert_eq!(table.rows().next(), Some((2000.0, 0.9, 2.1e8)));
    }

    #[test]
    fn rejects_ragged_and_empty_columns() {
        assert!(matches!(
            DemographicTable::new(vec![2000.0], vec![], vec![1.0]),
            Err(CurveFitError::SizeMismatch { .. })
        ));
        assert!(matches!(
            DemographicTable::new(vec![], vec![], vec![]),
            Err(CurveFitError::EmptyDataset)
        ));
    }

    #[test]
    fn indicator_labels() {
        assert_eq!(Indicator::Population.coefficient_prefix(), 'a');
        assert_eq!(Indicator::Percentage.coefficient_prefix(), 'b');
        let precision = Precision::default();
        assert_eq!(Indicator::Population.estimate_precision(&precision), 0);
        assert_eq!(Indicator::Percentage.estimate_precision(&precision), 2);
    }
}
