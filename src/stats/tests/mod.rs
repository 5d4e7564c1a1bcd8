//! Shared fixtures for statistics tests

use crate::models::BuildingRecord;

pub mod summary_tests;

/// Build records from `(address, floors, area, population)` tuples, numbering rows from 1
pub fn create_test_buildings(rows: &[(&str, i64, f64, i64)]) -> Vec<BuildingRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, &(address, floors, area, population))| {
            BuildingRecord::new(i as u64 + 1, floors, area, population, address)
        })
        .collect()
}
