use std::fs::File;
use std::io::{
    BufRead,
    BufReader
};

use crate::curvefiterror::{
    CurveFitError,
    Result
};
use crate::data::demographictable::DemographicTable;

/// Columns consumed from every data row: year, percentage, population.
const COLUMNS: usize = 3;

/// Which rows of a CSV file become data.
///
/// The first line is always a header. After it `skip_rows` lines are dropped, then at
/// most `max_entries` data rows are read; anything after that is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvWindow {
    pub skip_rows: usize,
    pub max_entries: usize
}

pub fn read_csv(path: &str, window: CsvWindow) -> Result<DemographicTable> {
    let file = File::open(path).map_err(|source| CurveFitError::DataSourceUnavailable {
        path: path.to_owned(),
        source
    })?;
    parse_csv(BufReader::new(file), path, window)
}

/// `source_name` only labels I/O errors raised while reading.
pub fn parse_csv<R: BufRead>(reader: R, source_name: &str, window: CsvWindow) -> Result<DemographicTable> {
    let mut years = Vec::new();
    let mut percentages = Vec::new();
    let mut populations = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1 + window.skip_rows) {
        let line = line.map_err(|source| CurveFitError::DataSourceUnavailable {
            path: source_name.to_owned(),
            source
        })?;
        if line.trim().is_empty() {
            continue;
        }
        if years.len() == window.max_entries {
            tracing::warn!(
                source = source_name,
                max_entries = window.max_entries,
                line = index + 1,
                "row limit reached, remaining rows ignored"
            );
            break;
        }

        let [year, percentage, population] = parse_row(&line, index + 1)?;
        years.push(year);
        percentages.push(percentage);
        populations.push(population);
    }

    tracing::info!(source = source_name, rows = years.len(), "dataset loaded");
    DemographicTable::new(years, percentages, populations)
}

/// `line_number` is 1-based; extra columns after the third are ignored. Every field
/// must be a finite number.
fn parse_row(line: &str, line_number: usize) -> Result<[f64; COLUMNS]> {
    let mut fields = line.split(',').map(str::trim);
    let mut values = [0.0; COLUMNS];
    for (column, value) in values.iter_mut().enumerate() {
        let token = fields.next().unwrap_or("");
        let parse_error = || CurveFitError::ParseError {
            line: line_number,
            column: column + 1,
            token: token.to_owned()
        };
        // `NaN` and `inf` parse as f64 but are not data
        *value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(parse_error)?;
    }
    Ok(values)
}
