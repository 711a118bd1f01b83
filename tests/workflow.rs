use approx::assert_relative_eq;

use curvefit::configuration::{
    Configuration,
    DataSource,
    ModelType
};
use curvefit::curvefiterror::CurveFitError;
use curvefit::data::csvreader::{
    read_csv,
    CsvWindow
};
use curvefit::data::demographictable::Indicator;
use curvefit::math::curve::curve::Curve;
use curvefit::math::regression::polynomialregression::PolynomialRegression;
use curvefit::report::report::render_report;

const INLINE_CONFIG: &str = r#"{
    "data_source": {
        "Inline": {
            "years": [2000, 2001, 2002, 2003, 2004, 2007, 2008, 2009, 2010, 2011, 2012, 2013, 2014, 2017, 2018],
            "percentages": [0.9, 1.1, 1.3, 1.5, 1.8, 3.5, 4.2, 5.0, 6.0, 8.0, 10.5, 15.0, 19.8, 40.0, 47.0],
            "populations": [211540000, 214880000, 218030000, 221100000, 224100000, 230000000, 234000000, 237000000, 240000000, 243000000, 246000000, 249000000, 252000000, 258000000, 261000000]
        }
    },
    "x_origin": 2000,
    "query_years": [2005, 2006, 2015, 2016]
}"#;

fn csv_path() -> String {
    format!("{}/demos/indonesia.csv", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn inline_dataset_report() {
    let config = Configuration::from_json_str(INLINE_CONFIG).unwrap();
    let table = config.data_source().load().unwrap();
    let report = render_report(&table, &config).unwrap();

    assert!(report.starts_with("Using 15 data points:\n"));
    assert!(report.contains("=== Internet Users (%) vs Year ===\n(x = year - 2000)\n"));
    assert!(report.contains("=== Population vs Year ==="));
    assert!(report.contains("--- Polynomial regression (degree 3) ---\nb0 = 0.55347\n"));
    assert!(report.contains("b1 = 0.82056\n"));
    assert!(report.contains("b2 = -0.17983\n"));
    assert!(report.contains("b3 = 0.01555\n"));
    assert!(report.contains("a0 = 212328170."));
    assert!(report.contains("--- Lagrange interpolation (15 nodes) ---"));
    assert!(report.contains("--- Linear regression ---"));
    assert!(report.contains("--- Logistic curve (given) ---"));
    assert!(report.contains("Estimated internet users:"));
    assert!(report.contains("  2016: "));
}

#[test]
fn csv_matches_inline_dataset() {
    let from_csv = read_csv(&csv_path(), CsvWindow { skip_rows: 0, max_entries: 25 }).unwrap();
    let inline = Configuration::from_json_str(INLINE_CONFIG)
        .unwrap()
        .data_source()
        .load()
        .unwrap();

    assert_eq!(from_csv, inline);
}

#[test]
fn csv_window_limits_rows() {
    let table = read_csv(&csv_path(), CsvWindow { skip_rows: 5, max_entries: 4 }).unwrap();
    assert_eq!(table.years(), &[2007.0, 2008.0, 2009.0, 2010.0]);
}

#[test]
fn cubic_forecast_for_missing_years() {
    let table = read_csv(&csv_path(), CsvWindow { skip_rows: 0, max_entries: 25 }).unwrap();
    let series = table.series(Indicator::Percentage);
    let model = PolynomialRegression::cubic()
        .with_origin(2000.0)
        .fit(series.xs(), series.ys())
        .unwrap();

    // b0 + b1·x + b2·x² + b3·x³ with the published coefficients at x = 5
    let expected = 0.55347 + 0.82056 * 5.0 - 0.17983 * 25.0 + 0.01555 * 125.0;
    assert_relative_eq!(model.value(2005.0), expected, max_relative = 1e-3);
}

#[test]
fn csv_configuration_runs_end_to_end() {
    let config = Configuration::new(DataSource::Csv {
        path: csv_path(),
        skip_rows: 0,
        max_entries: 25
    })
    .with_models(vec![ModelType::PolynomialRegression])
    .with_x_origin(2000.0);

    let table = config.data_source().load().unwrap();
    let report = render_report(&table, &config).unwrap();
    assert!(report.contains("b0 = 0.55347\n"));
}

#[test]
fn missing_csv_is_unavailable() {
    let config = Configuration::new(DataSource::Csv {
        path: "no/such/data.csv".to_owned(),
        skip_rows: 0,
        max_entries: 25
    });
    let err = config.data_source().load().unwrap_err();
    assert!(matches!(err, CurveFitError::DataSourceUnavailable { ref path, .. } if path == "no/such/data.csv"));
}
