//! Header resolution for housing CSV files
//!
//! Resolves the position of every required column once so each data row
//! can be read by index.

use crate::constants::columns;
use crate::error::{HousingError, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;

/// Positions of the required housing columns within a CSV header
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping for every header cell
    pub name_to_index: HashMap<String, usize>,

    pub floor_count: usize,
    pub area_residential: usize,
    pub population: usize,
    pub house_address: usize,
}

impl ColumnMapping {
    /// Resolve required columns from a header row
    ///
    /// Header names are matched after trimming. The first occurrence wins
    /// when a name is repeated.
    pub fn resolve(headers: &StringRecord, source: &Path) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let lookup = |column: &str| -> Result<usize> {
            name_to_index
                .get(column)
                .copied()
                .ok_or_else(|| HousingError::MissingColumn {
                    path: source.to_path_buf(),
                    column: column.to_string(),
                })
        };

        let floor_count = lookup(columns::FLOOR_COUNT)?;
        let area_residential = lookup(columns::AREA_RESIDENTIAL)?;
        let population = lookup(columns::POPULATION)?;
        let house_address = lookup(columns::HOUSE_ADDRESS)?;

        Ok(Self {
            name_to_index,
            floor_count,
            area_residential,
            population,
            house_address,
        })
    }

    /// Header columns that are not needed, in header order
    pub fn ignored_columns(&self) -> Vec<&str> {
        let mut ignored: Vec<(usize, &str)> = self
            .name_to_index
            .iter()
            .filter(|(name, _)| !columns::REQUIRED.contains(&name.as_str()))
            .map(|(name, &index)| (index, name.as_str()))
            .collect();
        ignored.sort_unstable();
        ignored.into_iter().map(|(_, name)| name).collect()
    }
}
