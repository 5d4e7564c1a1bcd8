//! Tests for the combined housing summary

use super::create_test_buildings;
use crate::error::ErrorKind;
use crate::models::Category;
use crate::stats::HousingSummary;

#[test]
fn test_summary_combines_statistics() {
    let buildings = create_test_buildings(&[
        ("1 Low St", 2, 200.0, 4),
        ("2 Mid St", 9, 900.0, 60),
        ("3 Low St", 5, 300.0, 0),
        ("4 High St", 30, 4000.0, 500),
    ]);

    let summary = HousingSummary::compute(&buildings).unwrap();

    assert_eq!(summary.building_count(), 4);
    assert_eq!(summary.category_counts.get(&Category::LowRise), Some(2));
    assert_eq!(summary.category_counts.get(&Category::MidRise), Some(1));
    assert_eq!(summary.category_counts.get(&Category::HighRise), Some(1));
    assert_eq!(summary.category_counts.total(), summary.building_count());

    let min_area = summary.min_area.unwrap();
    assert_eq!(min_area.house_address, "4 High St");
    assert_eq!(min_area.ratio, 8.0);
}

#[test]
fn test_summary_propagates_classification_failure() {
    let buildings = create_test_buildings(&[("1 Low St", 2, 200.0, 4), ("2 Flat St", 0, 1.0, 1)]);

    let err = HousingSummary::compute(&buildings).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
}
