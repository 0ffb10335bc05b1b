//! Sensor Snapshots
//!
//! A snapshot is one complete sweep of every channel a profile defines. It
//! is produced whole and never edited; the next reading cycle replaces it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::channels::SensorChannel;
use crate::profiles::{FoodProfile, ProfileKey};
use crate::time::Timestamp;

/// One full set of readings taken against a single profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    profile: ProfileKey,
    taken_at: Timestamp,
    readings: BTreeMap<SensorChannel, f64>,
}

impl Snapshot {
    /// Snapshot from explicit readings
    pub fn new(
        profile: ProfileKey,
        taken_at: Timestamp,
        readings: BTreeMap<SensorChannel, f64>,
    ) -> Self {
        Self {
            profile,
            taken_at,
            readings,
        }
    }

    /// Snapshot that reads exactly the profile's baseline
    pub fn baseline(profile: &FoodProfile, taken_at: Timestamp) -> Self {
        Self::new(profile.key(), taken_at, profile.baseline().clone())
    }

    /// Profile this snapshot was generated from
    pub fn profile(&self) -> ProfileKey {
        self.profile
    }

    /// Milliseconds since the Unix epoch
    pub fn taken_at(&self) -> Timestamp {
        self.taken_at
    }

    /// Reading for a channel, if the snapshot covers it
    pub fn get(&self, channel: &SensorChannel) -> Option<f64> {
        self.readings.get(channel).copied()
    }

    /// Readings keyed by channel
    pub fn readings(&self) -> &BTreeMap<SensorChannel, f64> {
        &self.readings
    }

    /// Channels present, in key order
    pub fn channels(&self) -> impl Iterator<Item = &SensorChannel> {
        self.readings.keys()
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when no channel was read
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
