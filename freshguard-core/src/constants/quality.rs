//! Verdict Boundaries and Advisory Status Factors
//!
//! The verdict table is fixed. Tests pin these exact boundaries, so changing
//! them is a behavior change, not a tuning.

// ===== AGGREGATE VERDICT =====

/// Scores at or above this are `unsafe`.
pub const UNSAFE_SCORE: u32 = 3;

/// Scores at or above this (and below `UNSAFE_SCORE`) are `warning`.
pub const WARNING_SCORE: u32 = 1;

/// Largest weight a threshold may carry. Catalogs above it fail to load.
pub const MAX_WEIGHT: u32 = 1_000;

// ===== PER-CHANNEL STATUS =====

/// A reading above `max × DANGER_MAX_FACTOR` is shown as danger.
pub const DANGER_MAX_FACTOR: f64 = 1.5;

/// A reading below `min × DANGER_MIN_FACTOR` is shown as danger.
pub const DANGER_MIN_FACTOR: f64 = 0.7;

/// Gauge full scale as a multiple of the channel's gauge maximum.
pub const GAUGE_HEADROOM: f64 = 1.5;

/// Chart vertical headroom above the largest point.
pub const CHART_HEADROOM: f64 = 1.2;
