//! Core data structures for housing statistics.
//!
//! Defines the typed building record produced by the reader and the
//! floor-count categories derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validated row of housing data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// 1-based data row number in the source file (header excluded)
    pub row: u64,
    pub floor_count: i64,
    pub area_residential: f64,
    pub population: i64,
    pub house_address: String,
}

impl BuildingRecord {
    pub fn new(
        row: u64,
        floor_count: i64,
        area_residential: f64,
        population: i64,
        house_address: impl Into<String>,
    ) -> Self {
        Self {
            row,
            floor_count,
            area_residential,
            population,
            house_address: house_address.into(),
        }
    }

    /// Residential area per resident, or `None` when population is not positive
    pub fn area_per_resident(&self) -> Option<f64> {
        if self.population > 0 {
            Some(self.area_residential / self.population as f64)
        } else {
            None
        }
    }
}

/// Building category by floor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LowRise,
    MidRise,
    HighRise,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LowRise => "low-rise",
            Category::MidRise => "mid-rise",
            Category::HighRise => "high-rise",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        let labels: Vec<String> = [Category::LowRise, Category::MidRise, Category::HighRise]
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(labels, vec!["low-rise", "mid-rise", "high-rise"]);
    }

    #[test]
    fn test_area_per_resident() {
        let record = BuildingRecord::new(1, 3, 100.0, 8, "1 Main St");
        assert_eq!(record.area_per_resident(), Some(12.5));

        let empty = BuildingRecord::new(2, 3, 100.0, 0, "2 Main St");
        assert_eq!(empty.area_per_resident(), None);

        let negative = BuildingRecord::new(3, 3, 100.0, -4, "3 Main St");
        assert_eq!(negative.area_per_resident(), None);
    }
}
