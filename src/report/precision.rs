use serde::Deserialize;

/// Decimal places for each kind of printed number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Precision {
    coefficient: usize,
    polynomial: usize,
    population: usize,
    percentage: usize
}

impl Precision {
    pub fn new(coefficient: usize, polynomial: usize, population: usize, percentage: usize) -> Precision {
        Precision { coefficient, polynomial, population, percentage }
    }

    /// Regression coefficients and model parameters.
    pub fn coefficient(&self) -> usize {
        self.coefficient
    }

    /// Terms of a printed polynomial.
    pub fn polynomial(&self) -> usize {
        self.polynomial
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn percentage(&self) -> usize {
        self.percentage
    }
}

impl Default for Precision {
    fn default() -> Precision {
        Precision::new(5, 6, 0, 2)
    }
}
