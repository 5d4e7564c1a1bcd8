//! Error handling for housing data processing.
//!
//! Every failure is grouped into one of four kinds (type, value, parse, I/O)
//! so callers can react to the class of problem without matching on every
//! variant.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`HousingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value had the wrong type where an integer was required
    Type,
    /// A value was outside its allowed range
    Value,
    /// Malformed numeric text or malformed tabular structure
    Parse,
    /// File access failure
    Io,
}

#[derive(Error, Debug)]
pub enum HousingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in file: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required column '{column}' in file: {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid number for {field}: '{value}'")]
    MalformedNumber { field: String, value: String },

    #[error("Invalid type for {field} ('{value}'): {reason}")]
    InvalidType {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Record at row {row} ('{address}') rejected")]
    InvalidRecord {
        row: u64,
        address: String,
        #[source]
        source: Box<HousingError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HousingError {
    /// Kind of failure this error represents
    pub fn kind(&self) -> ErrorKind {
        match self {
            HousingError::Io(_) | HousingError::FileAccess { .. } => ErrorKind::Io,
            HousingError::Csv { source, .. } => {
                if source.is_io_error() {
                    ErrorKind::Io
                } else {
                    ErrorKind::Parse
                }
            }
            HousingError::MissingColumn { .. } | HousingError::MalformedNumber { .. } => {
                ErrorKind::Parse
            }
            HousingError::InvalidType { .. } => ErrorKind::Type,
            HousingError::InvalidValue { .. } | HousingError::Configuration { .. } => {
                ErrorKind::Value
            }
            HousingError::InvalidRecord { source, .. } => source.kind(),
        }
    }

    /// Attach the offending record's position and address to an error
    pub fn for_record(self, row: u64, address: impl Into<String>) -> Self {
        HousingError::InvalidRecord {
            row,
            address: address.into(),
            source: Box::new(self),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        HousingError::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HousingError>;
