//! Reading Synthesizer
//!
//! Produces a plausible sensor sweep from a profile's baseline. There is no
//! hardware behind it: each channel is its baseline plus centered noise,
//! and in spoilage mode the decomposition markers are pushed sharply upward.
//!
//! ## Per-Channel Formula
//!
//! ```text
//! amplitude  = max(baseline × 0.1, 2)
//! noise      = (u − 0.5) × amplitude                 u ∈ [0, 1)
//! escalation = 50 + 20·u′     spoilage, bad-indicator channel
//!            + 5              spoilage, temperature
//! reading    = round₁(baseline + escalation + noise)
//! ```
//!
//! Draw order per channel is fixed (noise first, then escalation), and
//! channels are visited in `SensorChannel` order, so a scripted
//! `RandomSource` yields exact, repeatable readings.
//!
//! ```rust
//! use freshguard_core::{ProfileRegistry, ReadingSynthesizer, SimulationMode};
//! use freshguard_core::random::FixedRandom;
//!
//! let registry = ProfileRegistry::builtin().unwrap();
//! let milk = registry.get("milk").unwrap();
//! let mut synth = ReadingSynthesizer::new(FixedRandom::centered());
//!
//! let snapshot = synth.synthesize(&milk, SimulationMode::Normal, 0);
//! assert_eq!(snapshot.readings(), milk.baseline());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::channels::SensorChannel;
use crate::constants::sensors::{
    NOISE_FLOOR, NOISE_FRACTION, SPOILAGE_JITTER, SPOILAGE_OFFSET, SPOILAGE_TEMP_OFFSET,
};
use crate::profiles::FoodProfile;
use crate::random::RandomSource;
use crate::snapshot::Snapshot;
use crate::time::Timestamp;

/// How the simulated food is behaving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    /// Readings hover around the baseline
    #[default]
    Normal,
    /// Decomposition markers escalate
    Spoilage,
}

impl SimulationMode {
    /// Lowercase name, as serialized
    pub const fn as_str(&self) -> &'static str {
        match self {
            SimulationMode::Normal => "normal",
            SimulationMode::Spoilage => "spoilage",
        }
    }
}

impl FromStr for SimulationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SimulationMode::Normal),
            "spoilage" => Ok(SimulationMode::Spoilage),
            other => Err(format!("unknown simulation mode '{other}'")),
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning for the synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Noise amplitude as a fraction of baseline
    pub noise_fraction: f64,
    /// Minimum noise amplitude
    pub noise_floor: f64,
    /// Fixed escalation on bad-indicator channels in spoilage mode
    pub spoilage_offset: f64,
    /// Random spread on top of `spoilage_offset`
    pub spoilage_jitter: f64,
    /// Temperature rise in spoilage mode
    pub temperature_offset: f64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            noise_fraction: NOISE_FRACTION,
            noise_floor: NOISE_FLOOR,
            spoilage_offset: SPOILAGE_OFFSET,
            spoilage_jitter: SPOILAGE_JITTER,
            temperature_offset: SPOILAGE_TEMP_OFFSET,
        }
    }
}

impl SynthesizerConfig {
    /// Noise amplitude for a baseline value
    pub fn noise_amplitude(&self, baseline: f64) -> f64 {
        (baseline * self.noise_fraction).max(self.noise_floor)
    }

    /// Centered noise term for one draw
    pub fn noise(&self, baseline: f64, rng: &mut impl RandomSource) -> f64 {
        (rng.next_unit() - 0.5) * self.noise_amplitude(baseline)
    }
}

/// Generates snapshots from profiles
#[derive(Debug, Clone)]
pub struct ReadingSynthesizer<R> {
    rng: R,
    config: SynthesizerConfig,
}

impl<R: RandomSource> ReadingSynthesizer<R> {
    /// Synthesizer with default tuning
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, SynthesizerConfig::default())
    }

    /// Synthesizer with custom tuning
    pub fn with_config(rng: R, config: SynthesizerConfig) -> Self {
        Self { rng, config }
    }

    /// Active tuning
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Borrow the randomness source (history reseeding shares it)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// One full sweep of every channel the profile's baseline defines
    pub fn synthesize(
        &mut self,
        profile: &FoodProfile,
        mode: SimulationMode,
        taken_at: Timestamp,
    ) -> Snapshot {
        let readings: BTreeMap<SensorChannel, f64> = profile
            .baseline()
            .iter()
            .map(|(channel, &baseline)| (channel.clone(), self.read_channel(channel, baseline, mode)))
            .collect();

        debug!(
            "synthesized {} channels for {} ({} mode)",
            readings.len(),
            profile.key(),
            mode
        );

        Snapshot::new(profile.key(), taken_at, readings)
    }

    fn read_channel(&mut self, channel: &SensorChannel, baseline: f64, mode: SimulationMode) -> f64 {
        let noise = self.config.noise(baseline, &mut self.rng);

        let mut escalation = 0.0;
        if mode == SimulationMode::Spoilage {
            if channel.is_bad_indicator() {
                escalation += self.config.spoilage_offset
                    + self.rng.next_unit() * self.config.spoilage_jitter;
            }
            if channel.is_temperature() {
                escalation += self.config.temperature_offset;
            }
        }

        round_tenth(baseline + escalation + noise)
    }
}

/// Round to one decimal place
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileRegistry;
    use crate::random::{FixedRandom, SequenceRandom};

    #[test]
    fn noise_amplitude_has_a_floor() {
        let config = SynthesizerConfig::default();
        assert_eq!(config.noise_amplitude(0.0), 2.0);
        assert_eq!(config.noise_amplitude(4.0), 2.0);
        assert_eq!(config.noise_amplitude(100.0), 10.0);
    }

    #[test]
    fn centered_draw_reproduces_baseline() {
        let registry = ProfileRegistry::builtin().unwrap();
        for profile in registry.iter() {
            let mut synth = ReadingSynthesizer::new(FixedRandom::centered());
            let snapshot = synth.synthesize(profile, SimulationMode::Normal, 0);
            assert_eq!(snapshot.readings(), profile.baseline(), "{}", profile.key());
        }
    }

    #[test]
    fn noise_extremes() {
        let registry = ProfileRegistry::builtin().unwrap();
        let fruit = registry.get("fruit").unwrap();

        // u = 0 → noise = −amplitude/2
        let mut synth = ReadingSynthesizer::new(FixedRandom::new(0.0));
        let snapshot = synth.synthesize(&fruit, SimulationMode::Normal, 0);
        assert_eq!(snapshot.get(&SensorChannel::VolatileOrganics), Some(95.0));
        assert_eq!(snapshot.get(&SensorChannel::Temperature), Some(17.0));
        assert_eq!(snapshot.get(&SensorChannel::Ammonia), Some(-1.0));
    }

    #[test]
    fn spoilage_escalates_bad_indicators_and_temperature() {
        let registry = ProfileRegistry::builtin().unwrap();
        let meat = registry.get("raw-meat").unwrap();

        let mut synth = ReadingSynthesizer::new(FixedRandom::centered());
        let snapshot = synth.synthesize(&meat, SimulationMode::Spoilage, 0);

        // escalation = 50 + 0.5 × 20 = 60, noise = 0
        assert_eq!(snapshot.get(&SensorChannel::Ammonia), Some(62.0));
        assert_eq!(snapshot.get(&SensorChannel::HydrogenSulfide), Some(60.0));
        assert_eq!(snapshot.get(&SensorChannel::VolatileOrganics), Some(110.0));
        assert_eq!(snapshot.get(&SensorChannel::Temperature), Some(7.0));
        assert_eq!(snapshot.get(&SensorChannel::Humidity), Some(80.0));
    }

    #[test]
    fn draws_follow_channel_order() {
        let registry = ProfileRegistry::builtin().unwrap();
        let eggs = registry.get("eggs").unwrap();

        // Eggs channels in order: temp, humidity, ammonia, h2s, voc, ethyl, alcohol.
        // Spoilage: temp draws noise only, humidity noise only, then each
        // bad indicator draws noise + jitter.
        let mut rng = SequenceRandom::new([0.5]);
        let mut synth = ReadingSynthesizer::new(rng.clone());
        synth.synthesize(&eggs, SimulationMode::Spoilage, 0);
        for _ in 0..(2 + 5 * 2) {
            rng.next_unit();
        }
        assert_eq!(synth.rng_mut().draws(), rng.draws());
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_eq!(round_tenth(4.04), 4.0);
        assert_eq!(round_tenth(4.06), 4.1);
        assert_eq!(round_tenth(-0.96), -1.0);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("spoilage".parse::<SimulationMode>(), Ok(SimulationMode::Spoilage));
        assert!("Spoilage".parse::<SimulationMode>().is_err());
        assert!("rotten".parse::<SimulationMode>().is_err());
        assert_eq!(SimulationMode::default(), SimulationMode::Normal);
    }
}
