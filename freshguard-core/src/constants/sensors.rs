//! Reading Synthesis Parameters
//!
//! Defaults for the simulated sensor front end. `SynthesizerConfig` starts
//! from these values; override them there rather than editing the constants.

// ===== NOISE =====

/// Noise amplitude as a fraction of the baseline value.
///
/// A reading wanders within ±5% of its baseline (amplitude 10%, centered).
pub const NOISE_FRACTION: f64 = 0.1;

/// Minimum noise amplitude.
///
/// Keeps zero and near-zero baselines (ammonia, H2S on fresh produce)
/// from producing a perfectly flat signal.
pub const NOISE_FLOOR: f64 = 2.0;

// ===== SPOILAGE ESCALATION =====

/// Fixed offset added to bad-indicator channels in spoilage mode.
///
/// Large enough to push every built-in bad-indicator threshold over its
/// maximum except ethylene on fruit.
pub const SPOILAGE_OFFSET: f64 = 50.0;

/// Width of the random spread added on top of `SPOILAGE_OFFSET`.
pub const SPOILAGE_JITTER: f64 = 20.0;

/// Temperature rise in spoilage mode.
///
/// Models metabolic heat from microbial decomposition.
pub const SPOILAGE_TEMP_OFFSET: f64 = 5.0;
