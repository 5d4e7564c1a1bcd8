//! Application constants for housing statistics
//!
//! Fixed classification thresholds, the expected CSV column names and
//! reader defaults.

// =============================================================================
// Classification Thresholds
// =============================================================================

/// Highest floor count still classified as low-rise
pub const LOW_RISE_MAX_FLOORS: i64 = 5;

/// Highest floor count still classified as mid-rise
pub const MID_RISE_MAX_FLOORS: i64 = 16;

// =============================================================================
// Column Names
// =============================================================================

pub mod columns {
    pub const FLOOR_COUNT: &str = "floor_count";
    pub const AREA_RESIDENTIAL: &str = "area_residential";
    pub const POPULATION: &str = "population";
    pub const HOUSE_ADDRESS: &str = "house_address";

    /// Columns every housing file must provide
    pub const REQUIRED: &[&str] = &[FLOOR_COUNT, AREA_RESIDENTIAL, POPULATION, HOUSE_ADDRESS];
}

// =============================================================================
// Reader Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Trim surrounding whitespace from headers and fields by default
pub const DEFAULT_TRIM: bool = true;

// =============================================================================
// Logging
// =============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VERBOSE_LOG_LEVEL: &str = "debug";
pub const QUIET_LOG_LEVEL: &str = "warn";
