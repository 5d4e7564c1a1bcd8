//! Floor-count classification

use crate::constants::{LOW_RISE_MAX_FLOORS, MID_RISE_MAX_FLOORS, columns};
use crate::error::{HousingError, Result};
use crate::models::{BuildingRecord, Category};

/// Classify a building by its floor count
///
/// Thresholds are inclusive on the lower category: 5 floors is low-rise and
/// 16 floors is mid-rise. Non-positive floor counts are rejected.
pub fn classify(floor_count: i64) -> Result<Category> {
    if floor_count <= 0 {
        return Err(HousingError::InvalidValue {
            field: columns::FLOOR_COUNT.to_string(),
            value: floor_count.to_string(),
            reason: "floor count must be greater than zero".to_string(),
        });
    }

    Ok(if floor_count <= LOW_RISE_MAX_FLOORS {
        Category::LowRise
    } else if floor_count <= MID_RISE_MAX_FLOORS {
        Category::MidRise
    } else {
        Category::HighRise
    })
}

/// Classify every record, preserving input order
///
/// The first failing record aborts the batch; the error names its row and
/// address.
pub fn classify_all(records: &[BuildingRecord]) -> Result<Vec<Category>> {
    records
        .iter()
        .map(|record| {
            classify(record.floor_count)
                .map_err(|error| error.for_record(record.row, record.house_address.as_str()))
        })
        .collect()
}
