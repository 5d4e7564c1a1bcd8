//! Aggregate statistics over building records
//!
//! Classification by floor count, category tallies and the minimum
//! residential area per resident. Every function here is pure and operates
//! on records already validated by the reader.

pub mod classifier;
pub mod min_area;
pub mod tally;

#[cfg(test)]
pub mod tests;

pub use classifier::{classify, classify_all};
pub use min_area::{AreaPerResident, find_min_area, find_min_area_address};
pub use tally::{Tally, tally};

use crate::error::Result;
use crate::models::{BuildingRecord, Category};

/// Everything derived from one set of building records
#[derive(Debug, Clone)]
pub struct HousingSummary<'a> {
    /// Category of each record, in input order
    pub categories: Vec<Category>,
    pub category_counts: Tally<Category>,
    pub min_area: Option<AreaPerResident<'a>>,
}

impl<'a> HousingSummary<'a> {
    /// Run every statistic over `records`
    pub fn compute(records: &'a [BuildingRecord]) -> Result<Self> {
        let categories = classify_all(records)?;
        let category_counts = tally(categories.iter().copied());
        let min_area = find_min_area(records);

        Ok(Self {
            categories,
            category_counts,
            min_area,
        })
    }

    pub fn building_count(&self) -> usize {
        self.categories.len()
    }
}
