//! Constants for FreshGuard Core
//!
//! Every tunable number the engine uses is defined here with a note on what
//! it controls. Grouped by domain:
//! - **Sensors**: noise and spoilage escalation for reading synthesis
//! - **Quality**: verdict cut-offs and advisory status factors
//! - **Buffers**: history capacity and reseeding mix
//! - **Time**: simulated sensor latency

/// Reading synthesis parameters.
pub mod sensors;

/// Verdict boundaries and per-channel status factors.
pub mod quality;

/// History window sizing and seeding.
pub mod buffers;

/// Sensor latency.
pub mod time;

pub use sensors::{
    NOISE_FRACTION, NOISE_FLOOR, SPOILAGE_OFFSET, SPOILAGE_JITTER, SPOILAGE_TEMP_OFFSET,
};

pub use quality::{
    UNSAFE_SCORE, WARNING_SCORE, DANGER_MAX_FACTOR, DANGER_MIN_FACTOR,
};

pub use buffers::{
    HISTORY_CAPACITY, FRESH_POINT_PROBABILITY, STALE_DRIFT_FRACTION, NO_CEILING_FACTOR,
};

pub use time::READING_DELAY_MS;
