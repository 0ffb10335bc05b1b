//! Sensor Latency

/// Simulated time for one full sensor sweep (milliseconds).
///
/// Long enough that a consumer visibly shows the busy state.
pub const READING_DELAY_MS: u64 = 800;
