//! Per-Channel History Buffer
//!
//! Keeps one [`HistoryWindow`] for every channel the active profile
//! declares. Each reading cycle appends the new snapshot; switching profile
//! throws every window away and reseeds from the new profile.
//!
//! ## Reseeding
//!
//! A fresh profile has no past, but a flat chart looks broken. Reseeding
//! fabricates N plausible points per channel:
//!
//! ```text
//! slot 0 .. N-2:
//!   70%  fresh      baseline + noise                  (same noise as a normal reading)
//!   30%  not fresh  baseline + f × (ceiling − baseline),  f ∈ [0, 0.5)
//!        ceiling = threshold max, or baseline × 1.5 without one
//!   floored at 0, rounded to 0.1
//! slot N-1:
//!   exactly baseline
//! ```
//!
//! The rightmost point always reads fresh right after a switch. Seeded
//! points are tagged `PointOrigin::Seeded` so they are never mistaken for
//! measurements.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::buffer::{HistoryPoint, HistoryWindow};
use crate::channels::SensorChannel;
use crate::constants::buffers::{
    FRESH_POINT_PROBABILITY, HISTORY_CAPACITY, NO_CEILING_FACTOR, STALE_DRIFT_FRACTION,
};
use crate::errors::{FreshnessError, FreshnessResult};
use crate::profiles::{FoodProfile, ProfileKey};
use crate::random::RandomSource;
use crate::snapshot::Snapshot;
use crate::synthesizer::{round_tenth, SynthesizerConfig};

/// Rolling history for every channel of one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryBuffer<const N: usize = HISTORY_CAPACITY> {
    profile: ProfileKey,
    windows: BTreeMap<SensorChannel, HistoryWindow<N>>,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Buffer reseeded with plausible past points
    pub fn seeded(
        profile: &FoodProfile,
        config: &SynthesizerConfig,
        rng: &mut impl RandomSource,
    ) -> Self {
        let windows = profile
            .baseline()
            .iter()
            .map(|(channel, &baseline)| {
                let ceiling = profile
                    .threshold(channel)
                    .and_then(|t| t.max())
                    .unwrap_or(baseline * NO_CEILING_FACTOR);
                let window = seed_window::<N>(baseline, ceiling, config, rng);
                (channel.clone(), window)
            })
            .collect();

        Self {
            profile: profile.key(),
            windows,
        }
    }

    /// Buffer with every slot at the baseline
    pub fn flat(profile: &FoodProfile) -> Self {
        let windows = profile
            .baseline()
            .iter()
            .map(|(channel, &baseline)| (channel.clone(), HistoryWindow::filled(baseline)))
            .collect();

        Self {
            profile: profile.key(),
            windows,
        }
    }

    /// Discard all history and reseed for a (possibly different) profile
    pub fn reset(
        &mut self,
        profile: &FoodProfile,
        config: &SynthesizerConfig,
        rng: &mut impl RandomSource,
    ) {
        *self = Self::seeded(profile, config, rng);
    }

    /// Append one live value
    pub fn push(&mut self, channel: &SensorChannel, value: f64) -> FreshnessResult<()> {
        match self.windows.get_mut(channel) {
            Some(window) => {
                window.push(value);
                Ok(())
            }
            None => Err(self.undeclared(channel)),
        }
    }

    /// Append every channel of a snapshot
    ///
    /// All channels are checked before anything is written, so a rejected
    /// snapshot leaves the buffer untouched.
    pub fn record(&mut self, snapshot: &Snapshot) -> FreshnessResult<()> {
        if let Some(channel) = snapshot.channels().find(|c| !self.windows.contains_key(*c)) {
            return Err(self.undeclared(channel));
        }
        for (channel, &value) in snapshot.readings() {
            self.push(channel, value)?;
        }
        Ok(())
    }

    /// Profile the buffer was seeded for
    pub fn profile(&self) -> ProfileKey {
        self.profile
    }

    /// Window for one channel
    pub fn window(&self, channel: &SensorChannel) -> Option<&HistoryWindow<N>> {
        self.windows.get(channel)
    }

    /// Values for a channel, oldest first
    pub fn trend(&self, channel: &SensorChannel) -> Option<Vec<f64>> {
        self.window(channel).map(HistoryWindow::values)
    }

    /// Channels with a window, in key order
    pub fn channels(&self) -> impl Iterator<Item = &SensorChannel> {
        self.windows.keys()
    }

    /// Window length (always N)
    pub const fn capacity(&self) -> usize {
        N
    }

    fn undeclared(&self, channel: &SensorChannel) -> FreshnessError {
        FreshnessError::UnknownChannel {
            profile: self.profile.to_string(),
            channel: channel.to_string(),
        }
    }
}

fn seed_window<const N: usize>(
    baseline: f64,
    ceiling: f64,
    config: &SynthesizerConfig,
    rng: &mut impl RandomSource,
) -> HistoryWindow<N> {
    let points = std::array::from_fn(|slot| {
        if slot + 1 == N {
            HistoryPoint::seeded(baseline)
        } else {
            HistoryPoint::seeded(seed_point(baseline, ceiling, config, rng))
        }
    });
    HistoryWindow::from_points(points)
}

/// One synthetic past value
pub fn seed_point(
    baseline: f64,
    ceiling: f64,
    config: &SynthesizerConfig,
    rng: &mut impl RandomSource,
) -> f64 {
    let value = if rng.chance(FRESH_POINT_PROBABILITY) {
        baseline + config.noise(baseline, rng)
    } else {
        baseline + rng.uniform(0.0, STALE_DRIFT_FRACTION) * (ceiling - baseline)
    };
    round_tenth(value).max(0.0)
}
