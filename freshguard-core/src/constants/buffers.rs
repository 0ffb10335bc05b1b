//! History Window Sizing and Seeding

/// Points kept per channel.
///
/// Ten points fill a trend sparkline without crowding it.
pub const HISTORY_CAPACITY: usize = 10;

/// Probability that a reseeded point is drawn as fresh.
pub const FRESH_POINT_PROBABILITY: f64 = 0.7;

/// Largest fraction of the baseline-to-ceiling distance a not-fresh point drifts.
pub const STALE_DRIFT_FRACTION: f64 = 0.5;

/// Ceiling used for channels with no maximum threshold, as a multiple of baseline.
pub const NO_CEILING_FACTOR: f64 = 1.5;
