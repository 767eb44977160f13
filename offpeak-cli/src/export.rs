//! Octopus Energy consumption export.
//!
//! The file is what the dashboard's «Get your energy geek on» section offers for download:
//!
//! ```csv
//! Consumption (kwh), Estimated Cost Inc. Tax (p), Start, End
//! 0.123, 3.01, 2024-03-01T00:00:00+00:00, 2024-03-01T00:30:00+00:00
//! ```

mod timestamp;

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use itertools::Itertools;
use offpeak_quantities::energy::KilowattHours;

pub use self::timestamp::parse_timestamp;
use crate::{core::row::ConsumptionRow, error::PipelineError, prelude::*};

pub const HEADER: [&str; 4] = ["Consumption (kwh)", "Estimated Cost Inc. Tax (p)", "Start", "End"];

/// The header is written with a space after every comma.
const HEADER_SEPARATOR: &str = ", ";

/// Parsed export: valid rows in file order, plus the number of incomplete ones.
#[must_use]
pub struct ConsumptionExport {
    pub rows: Vec<ConsumptionRow>,
    pub n_malformed_rows: usize,
}

impl ConsumptionExport {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read(path: &Path) -> Result<Self> {
        info!("reading the export…");
        let file =
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
        Self::from_reader(file).with_context(|| format!("failed to read `{}`", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Fields)
            .from_reader(reader);

        let header = reader.headers()?;
        if !is_valid_header(header) {
            return Err(PipelineError::Schema { found: header.iter().join(",") }.into());
        }

        let mut rows = Vec::new();
        let mut n_malformed_rows = 0;
        for record in reader.records() {
            let record = record?;
            match parse_row(&record)? {
                Some(row) => rows.push(row),
                None => n_malformed_rows += 1,
            }
        }

        if n_malformed_rows != 0 {
            warn!(n_malformed_rows, "skipped incomplete rows");
        }
        info!(n_rows = rows.len(), "parsed the export");
        Ok(Self { rows, n_malformed_rows })
    }
}

/// Exact match of the untrimmed header: same columns, order, casing and spacing.
#[must_use]
pub fn is_valid_header(header: &StringRecord) -> bool {
    header.iter().join(",") == HEADER.join(HEADER_SEPARATOR)
}

/// Parse a data row, `None` if it has fewer than four fields.
fn parse_row(record: &StringRecord) -> Result<Option<ConsumptionRow>, PipelineError> {
    let line = record.position().map_or(0, csv::Position::line);
    let (Some(consumption), Some(start), Some(end)) = (record.get(0), record.get(2), record.get(3))
    else {
        debug!(line, n_fields = record.len(), "incomplete row");
        return Ok(None);
    };

    let consumption = match consumption.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        result => {
            return Err(PipelineError::Consumption {
                line,
                value: consumption.to_owned(),
                source: result.err(),
            });
        }
    };
    let parse = |value: &str| {
        parse_timestamp(value)
            .map_err(|source| PipelineError::Timestamp { line, value: value.to_owned(), source })
    };
    Ok(Some(ConsumptionRow {
        consumption: KilowattHours::from(consumption),
        start: parse(start)?,
        end: parse(end)?,
    }))
}
