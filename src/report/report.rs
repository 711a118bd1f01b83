use std::fmt::Write;

use crate::configuration::{
    Configuration,
    ModelType
};
use crate::curvefiterror::Result;
use crate::data::demographictable::{
    DemographicTable,
    Indicator
};
use crate::data::sampleset::SampleSet;
use crate::math::curve::curve::{
    Curve,
    Shifted
};
use crate::math::curve::lagrangepolynomial::{
    evaluate_at,
    LagrangePolynomial
};
use crate::math::regression::linearregression::LinearRegression;
use crate::math::regression::logisticregression::{
    LogisticCurve,
    LogisticRegression
};
use crate::math::regression::polynomialregression::PolynomialRegression;
use crate::report::precision::Precision;

// ─────────────────────────────────────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────────────────────────────────────
//
// Layout:
//   dataset listing
//   per indicator (percentage, then population), per configured model:
//     parameters, formatted model, one estimate per query year
//
// Polynomial, Lagrange and linear models are fitted on `year - x_origin`;
// the logistic curve always works on plain years.

/// Writes the full report for `table` into `out`.
pub fn write_report<W: Write>(out: &mut W, table: &DemographicTable, config: &Configuration) -> Result<()> {
    write_dataset(out, table)?;
    for indicator in [Indicator::Percentage, Indicator::Population] {
        write_indicator(out, table, indicator, config)?;
    }
    Ok(())
}

pub fn render_report(table: &DemographicTable, config: &Configuration) -> Result<String> {
    let mut out = String::new();
    write_report(&mut out, table, config)?;
    Ok(out)
}

fn write_dataset<W: Write>(out: &mut W, table: &DemographicTable) -> Result<()> {
    writeln!(out, "Using {} data points:", table.len())?;
    for (year, percentage, population) in table.rows() {
        writeln!(
            out,
            "Year: {:.0} | Internet Users: {:.6}% | Population: {:.0}",
            year, percentage, population
        )?;
    }
    Ok(())
}

fn write_indicator<W: Write>(
    out: &mut W,
    table: &DemographicTable,
    indicator: Indicator,
    config: &Configuration
) -> Result<()> {
    let origin = config.x_origin();
    let samples = table.series(indicator).shifted(origin);

    writeln!(out)?;
    writeln!(out, "=== {} vs Year ===", indicator.label())?;
    if origin != 0.0 {
        writeln!(out, "(x = year - {})", origin)?;
    }

    for model in config.models() {
        writeln!(out)?;
        match model {
            ModelType::PolynomialRegression => {
                write_polynomial_regression(out, table, indicator, config)?
            },
            ModelType::LagrangePolynomial => {
                write_lagrange(out, &samples, indicator, config)?
            },
            ModelType::LinearRegression => {
                write_linear_regression(out, &samples, indicator, config)?
            },
            ModelType::Logistic => {
                if indicator == Indicator::Percentage {
                    write_logistic(out, table, config)?
                }
            }
        }
    }
    Ok(())
}

fn write_polynomial_regression<W: Write>(
    out: &mut W,
    table: &DemographicTable,
    indicator: Indicator,
    config: &Configuration
) -> Result<()> {
    let samples = table.series(indicator);
    let regression = PolynomialRegression::new(config.regression_degree(), config.pivot_strategy())
        .with_origin(config.x_origin());
    let model = regression.fit(samples.xs(), samples.ys())?;
    let precision = config.precision();

    writeln!(out, "--- Polynomial regression (degree {}) ---", regression.degree())?;
    for (i, coef) in model.coefficients().iter().enumerate() {
        writeln!(
            out,
            "{}{} = {:.*}",
            indicator.coefficient_prefix(),
            i,
            precision.coefficient(),
            coef
        )?;
    }
    writeln!(out, "P(x) = {:.*}", precision.polynomial(), model.polynomial())?;
    write_estimates(out, &model, indicator, config.query_years(), precision)
}

fn write_lagrange<W: Write>(
    out: &mut W,
    samples: &SampleSet,
    indicator: Indicator,
    config: &Configuration
) -> Result<()> {
    let curve = LagrangePolynomial::new(samples.xs(), samples.ys(), config.max_degree())?;
    let precision = config.precision();

    writeln!(out, "--- Lagrange interpolation ({} nodes) ---", samples.len())?;
    writeln!(out, "Effective degree: {}", curve.polynomial().effective_degree())?;
    writeln!(out, "P(x) = {:.*}", precision.polynomial(), curve.polynomial())?;
    write_estimates(
        out,
        &Shifted::new(&curve, config.x_origin()),
        indicator,
        config.query_years(),
        precision
    )
}

fn write_linear_regression<W: Write>(
    out: &mut W,
    samples: &SampleSet,
    indicator: Indicator,
    config: &Configuration
) -> Result<()> {
    let model = LinearRegression::fit(samples.xs(), samples.ys())?;
    let precision = config.precision();

    writeln!(out, "--- Linear regression ---")?;
    writeln!(out, "{:.*}", precision.coefficient(), model)?;
    write_estimates(
        out,
        &Shifted::new(&model, config.x_origin()),
        indicator,
        config.query_years(),
        precision
    )
}

fn write_logistic<W: Write>(out: &mut W, table: &DemographicTable, config: &Configuration) -> Result<()> {
    let settings = config.logistic();
    let curve = if settings.fit() {
        let samples = table.series(Indicator::Percentage);
        LogisticRegression::new(settings.curve().upper_asymptote()).fit(samples.xs(), samples.ys())?
    } else {
        settings.curve()
    };
    let precision = config.precision();
    let p = precision.coefficient();

    writeln!(
        out,
        "--- Logistic curve ({}) ---",
        if settings.fit() { "fitted" } else { "given" }
    )?;
    writeln!(
        out,
        "L = {:.*}, k = {:.*}, t0 = {:.*}",
        p, curve.upper_asymptote(), p, curve.growth_rate(), p, curve.midpoint()
    )?;
    write_estimates(out, &curve, Indicator::Percentage, config.query_years(), precision)?;

    if config.has_model(ModelType::LagrangePolynomial) && !config.query_years().is_empty() {
        write_internet_users(out, table, &curve, config)?;
    }
    Ok(())
}

/// Percentage from the logistic curve times population from Lagrange interpolation.
fn write_internet_users<W: Write>(
    out: &mut W,
    table: &DemographicTable,
    curve: &LogisticCurve,
    config: &Configuration
) -> Result<()> {
    let origin = config.x_origin();
    let population = table.series(Indicator::Population).shifted(origin);

    writeln!(out, "Estimated internet users:")?;
    for &year in config.query_years() {
        let people = evaluate_at(population.xs(), population.ys(), year - origin)?;
        let users = curve.value(year) / 100.0 * people;
        writeln!(out, "  {:.0}: {:.*}", year, config.precision().population(), users)?;
    }
    Ok(())
}

fn write_estimates<W: Write, C: Curve + ?Sized>(
    out: &mut W,
    curve: &C,
    indicator: Indicator,
    years: &[f64],
    precision: &Precision
) -> Result<()> {
    if years.is_empty() {
        return Ok(());
    }

    let p = indicator.estimate_precision(precision);
    let unit = indicator.unit_suffix();
    writeln!(out, "Estimates:")?;
    for &year in years {
        writeln!(
            out,
            "  {:.0}: {:.*}{} (trend {:+.*}{} / year)",
            year,
            p,
            curve.value(year),
            unit,
            p,
            curve.derivative(year),
            unit
        )?;
    }
    Ok(())
}
