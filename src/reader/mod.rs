//! Housing CSV reader
//!
//! Reads a delimited file whose header names at least `floor_count`,
//! `area_residential`, `population` and `house_address`, and validates every
//! row into a typed [`BuildingRecord`]. All type and range coercion happens
//! here, once, so downstream statistics work on already-validated data.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_TRIM};
use crate::error::{HousingError, Result};
use crate::models::BuildingRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub mod column_mapping;
pub mod field_parsers;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use field_parsers::{parse_area_residential, parse_floor_count, parse_population};

/// Options controlling how the CSV file is tokenised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Trim whitespace around headers and fields
    pub trim: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            trim: DEFAULT_TRIM,
        }
    }
}

/// Read all building records from a CSV file with default options
pub fn read_buildings(path: &Path) -> Result<Vec<BuildingRecord>> {
    read_buildings_with(path, &ReaderOptions::default())
}

/// Read all building records from a CSV file
pub fn read_buildings_with(path: &Path, options: &ReaderOptions) -> Result<Vec<BuildingRecord>> {
    debug!("Opening housing file: {}", path.display());

    let file = File::open(path).map_err(|source| HousingError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_buildings(file, path, options)?;
    info!(
        "Read {} building records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse building records from any reader
///
/// `source` names the input in error messages.
pub fn parse_buildings<R: Read>(
    input: R,
    source: &Path,
    options: &ReaderOptions,
) -> Result<Vec<BuildingRecord>> {
    let csv_error = |error: csv::Error| HousingError::Csv {
        path: source.to_path_buf(),
        source: error,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let mapping = ColumnMapping::resolve(&headers, source)?;
    debug!("Resolved {} header columns", headers.len());
    let ignored = mapping.ignored_columns();
    if !ignored.is_empty() {
        debug!("Ignoring columns: {}", ignored.join(", "));
    }

    let mut buildings = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        buildings.push(parse_building_record(&record, &mapping, index as u64 + 1)?);
    }

    Ok(buildings)
}

/// Validate one CSV row into a typed building record
///
/// `row` is the 1-based data row number, used to identify the record in errors.
pub fn parse_building_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    row: u64,
) -> Result<BuildingRecord> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let house_address = field(mapping.house_address).to_string();

    let typed = || -> Result<(i64, f64, i64)> {
        Ok((
            parse_floor_count(field(mapping.floor_count))?,
            parse_area_residential(field(mapping.area_residential))?,
            parse_population(field(mapping.population))?,
        ))
    };

    match typed() {
        Ok((floor_count, area_residential, population)) => Ok(BuildingRecord {
            row,
            floor_count,
            area_residential,
            population,
            house_address,
        }),
        Err(error) => Err(error.for_record(row, house_address)),
    }
}
