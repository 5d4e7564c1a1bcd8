//! Lowest residential area per resident

use crate::models::BuildingRecord;

/// The building with the smallest residential area per resident
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaPerResident<'a> {
    pub house_address: &'a str,
    pub ratio: f64,
    pub row: u64,
}

/// Find the building with the smallest residential area per resident
///
/// Records with zero or negative population are skipped. On a tie the
/// earliest record wins. Returns `None` when no record qualifies.
pub fn find_min_area(records: &[BuildingRecord]) -> Option<AreaPerResident<'_>> {
    let mut best: Option<AreaPerResident<'_>> = None;

    for record in records {
        let Some(ratio) = record.area_per_resident() else {
            continue;
        };

        if best.is_none_or(|current| ratio < current.ratio) {
            best = Some(AreaPerResident {
                house_address: &record.house_address,
                ratio,
                row: record.row,
            });
        }
    }

    best
}

/// Address of the building with the smallest residential area per resident
pub fn find_min_area_address(records: &[BuildingRecord]) -> Option<&str> {
    find_min_area(records).map(|found| found.house_address)
}
