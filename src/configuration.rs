use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::curvefiterror::{
    CurveFitError,
    Result
};
use crate::data::csvreader::{
    read_csv,
    CsvWindow
};
use crate::data::demographictable::DemographicTable;
use crate::math::linearsystem::gaussianelimination::PivotStrategy;
use crate::math::regression::logisticregression::LogisticCurve;
use crate::report::precision::Precision;

const DEFAULT_MAX_ENTRIES: usize = 60;
const DEFAULT_MAX_DEGREE: usize = 60;
const DEFAULT_REGRESSION_DEGREE: usize = 3;

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_max_degree() -> usize {
    DEFAULT_MAX_DEGREE
}

fn default_regression_degree() -> usize {
    DEFAULT_REGRESSION_DEGREE
}

fn default_models() -> Vec<ModelType> {
    vec![
        ModelType::PolynomialRegression,
        ModelType::LagrangePolynomial,
        ModelType::LinearRegression,
        ModelType::Logistic
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON shapes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum DataSource {
    Csv {
        path: String,
        #[serde(default)]
        skip_rows: usize,
        #[serde(default = "default_max_entries")]
        max_entries: usize
    },
    Inline {
        years: Vec<f64>,
        percentages: Vec<f64>,
        populations: Vec<f64>
    }
}

impl DataSource {
    pub fn load(&self) -> Result<DemographicTable> {
        match self {
            DataSource::Csv { path, skip_rows, max_entries } => {
                let window = CsvWindow { skip_rows: *skip_rows, max_entries: *max_entries };
                read_csv(path, window)
            },
            DataSource::Inline { years, percentages, populations } => {
                DemographicTable::new(years.clone(), percentages.clone(), populations.clone())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ModelType {
    PolynomialRegression,
    LagrangePolynomial,
    LinearRegression,
    Logistic
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LogisticSettings {
    #[serde(flatten)]
    curve: LogisticCurve,
    /// Fit growth rate and midpoint to the percentage series instead of using the given ones.
    #[serde(default)]
    fit: bool
}

impl LogisticSettings {
    pub fn new(curve: LogisticCurve, fit: bool) -> LogisticSettings {
        LogisticSettings { curve, fit }
    }

    pub fn curve(&self) -> LogisticCurve {
        self.curve
    }

    pub fn fit(&self) -> bool {
        self.fit
    }
}

impl Default for LogisticSettings {
    fn default() -> LogisticSettings {
        LogisticSettings::new(LogisticCurve::new(100.0, 0.2, 2015.0), false)
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    data_source: DataSource,
    #[serde(default = "default_models")]
    models: Vec<ModelType>,
    #[serde(default = "default_max_degree")]
    max_degree: usize,
    #[serde(default = "default_regression_degree")]
    regression_degree: usize,
    #[serde(default)]
    pivot_strategy: PivotStrategy,
    #[serde(default)]
    x_origin: f64,
    #[serde(default)]
    query_years: Vec<f64>,
    #[serde(default)]
    logistic: LogisticSettings,
    #[serde(default)]
    precision: Precision
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    data_source: DataSource,
    models: Vec<ModelType>,
    max_degree: usize,
    regression_degree: usize,
    pivot_strategy: PivotStrategy,
    x_origin: f64,
    query_years: Vec<f64>,
    logistic: LogisticSettings,
    precision: Precision
}

impl Configuration {
    /// Defaults for everything but the data source.
    pub fn new(data_source: DataSource) -> Configuration {
        Configuration {
            data_source,
            models: default_models(),
            max_degree: DEFAULT_MAX_DEGREE,
            regression_degree: DEFAULT_REGRESSION_DEGREE,
            pivot_strategy: PivotStrategy::default(),
            x_origin: 0.0,
            query_years: Vec::new(),
            logistic: LogisticSettings::default(),
            precision: Precision::default()
        }
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration> {
        let file = File::open(file_path).map_err(|source| CurveFitError::DataSourceUnavailable {
            path: file_path.to_owned(),
            source
        })?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Ok(Configuration::from_json_prop(json_prop))
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(Configuration::from_json_prop(json_prop))
    }

    pub fn with_models(mut self, models: Vec<ModelType>) -> Configuration {
        self.models = models;
        self
    }

    pub fn with_query_years(mut self, query_years: Vec<f64>) -> Configuration {
        self.query_years = query_years;
        self
    }

    pub fn with_x_origin(mut self, x_origin: f64) -> Configuration {
        self.x_origin = x_origin;
        self
    }

    pub fn with_logistic(mut self, logistic: LogisticSettings) -> Configuration {
        self.logistic = logistic;
        self
    }

    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }

    pub fn models(&self) -> &[ModelType] {
        &self.models
    }

    pub fn has_model(&self, model: ModelType) -> bool {
        self.models.contains(&model)
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub fn regression_degree(&self) -> usize {
        self.regression_degree
    }

    pub fn pivot_strategy(&self) -> PivotStrategy {
        self.pivot_strategy
    }

    pub fn x_origin(&self) -> f64 {
        self.x_origin
    }

    pub fn query_years(&self) -> &[f64] {
        &self.query_years
    }

    pub fn logistic(&self) -> &LogisticSettings {
        &self.logistic
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }
}

impl Configuration {
    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Configuration {
        Configuration {
            data_source: json_prop.data_source,
            models: json_prop.models,
            max_degree: json_prop.max_degree,
            regression_degree: json_prop.regression_degree,
            pivot_strategy: json_prop.pivot_strategy,
            x_origin: json_prop.x_origin,
            query_years: json_prop.query_years,
            logistic: json_prop.logistic,
            precision: json_prop.precision
        }
    }
}
