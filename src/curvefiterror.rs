/// Errors raised while loading data, fitting curves or writing the report.
#[derive(Debug, thiserror::Error)]
pub enum CurveFitError {
    /// The x and y sequences do not have the same length.
    #[error("x and y sequences differ in length ({x_len} vs {y_len})")]
    SizeMismatch {
        x_len: usize,
        y_len: usize
    },

    /// A pivot became zero (or numerically indistinguishable from zero) during elimination.
    ///
    /// Usually the samples are too few, nearly duplicated, or the abscissas are so large
    /// that the normal equations lose all precision. Try a non-zero `x_origin`.
    #[error("pivot {pivot:e} at row {row} is zero or too small; the system is singular or ill-conditioned")]
    SingularSystem {
        row: usize,
        pivot: f64
    },

    #[error("expected an augmented m x (m+1) matrix, got {rows} x {cols}")]
    NotAugmented {
        rows: usize,
        cols: usize
    },

    /// Two interpolation nodes share the same x value.
    #[error("duplicate abscissa {0} among the interpolation nodes")]
    DuplicateAbscissa(f64),

    #[error("interpolation node ({0}, {1}) is not finite")]
    NonFiniteNode(f64, f64),

    #[error("data source '{path}' is unavailable: {source}")]
    DataSourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error
    },

    /// `line` and `column` are 1-based.
    #[error("line {line}, column {column}: '{token}' is not a number")]
    ParseError {
        line: usize,
        column: usize,
        token: String
    },

    #[error("no usable rows in the dataset")]
    EmptyDataset,

    #[error("at least {needed} samples are required, got {got}")]
    InsufficientData {
        needed: usize,
        got: usize
    },

    /// Interpolating `points` nodes needs degree `points - 1`.
    #[error("interpolating {points} points exceeds the maximum polynomial degree {max_degree}")]
    CapacityExceeded {
        points: usize,
        max_degree: usize
    },

    #[error("value {value} lies outside the open interval ({lower}, {upper})")]
    OutOfRange {
        value: f64,
        lower: f64,
        upper: f64
    },

    #[error("logistic fit produced a zero growth rate; the midpoint is undefined")]
    DegenerateLogistic,

    #[error("invalid configuration: {0}")]
    Configuration(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] std::fmt::Error)
}

pub type Result<T> = std::result::Result<T, CurveFitError>;

/// Fails with `SizeMismatch` unless both sequences have the same length.
pub fn ensure_same_len(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(CurveFitError::SizeMismatch { x_len: xs.len(), y_len: ys.len() });
    }
    Ok(())
}
