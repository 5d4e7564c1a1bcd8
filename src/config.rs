//! Configuration management and validation.
//!
//! Gathers the input path, CSV reader options and report flags from the
//! command line. Classification thresholds are fixed in [`crate::constants`]
//! and are not part of the configuration.

use crate::constants::DEFAULT_DELIMITER;
use crate::error::{HousingError, Result};
use crate::reader::ReaderOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for one report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Housing CSV file to analyse
    pub input_path: PathBuf,

    /// How the CSV file is tokenised
    pub reader: ReaderOptions,

    /// Print the category of every building, not just the totals
    pub list_buildings: bool,
}

impl Config {
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            reader: ReaderOptions::default(),
            list_buildings: false,
        }
    }

    /// Check that the configuration can be used to read a file
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.reader.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, b'"' | b'\n' | b'\r') {
            return Err(HousingError::configuration(format!(
                "unusable delimiter byte {:#04x}",
                delimiter
            )));
        }

        if self.input_path.as_os_str().is_empty() {
            return Err(HousingError::configuration("input path is empty"));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

/// Parse a delimiter given on the command line
///
/// Accepts a single ASCII character, or `tab` / `\t` for a tab.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "" => Ok(DEFAULT_DELIMITER),
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(HousingError::configuration(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    value
                ))),
            }
        }
    }
}
