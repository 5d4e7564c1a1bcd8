//! Housing Statistics Library
//!
//! Reads housing records from CSV files and derives simple aggregates.
//!
//! This library provides tools for:
//! - Reading and validating housing CSV files into typed records
//! - Classifying buildings as low-, mid- or high-rise by floor count
//! - Counting buildings per category
//! - Finding the building with the least residential area per resident

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reader;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorKind, HousingError, Result};
pub use models::{BuildingRecord, Category};
pub use reader::{ReaderOptions, read_buildings, read_buildings_with};
pub use stats::{
    AreaPerResident, HousingSummary, Tally, classify, classify_all, find_min_area,
    find_min_area_address, tally,
};
