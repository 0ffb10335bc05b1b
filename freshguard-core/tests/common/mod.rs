//! Common test utilities for integration tests
//!
//! This module provides:
//! - Session constructors with scripted randomness and a pinned clock
//! - Snapshot builders that override single channels
//! - Named scenarios with their expected verdicts

#![allow(dead_code)]

use std::sync::Arc;

use freshguard_core::{
    random::{FixedRandom, SeededRandom},
    time::FixedTime,
    FoodProfile, MonitorSession, ProfileRegistry, SensorChannel, Snapshot,
};

pub mod scenarios;

/// Start time for every test clock
pub const START_TIME: u64 = 1_000;

pub fn registry() -> Arc<ProfileRegistry> {
    ProfileRegistry::builtin().expect("built-in catalog loads")
}

/// Session whose noise term is always zero
pub fn quiet_session(key: &str) -> MonitorSession<FixedRandom, FixedTime> {
    MonitorSession::new(registry(), key, FixedRandom::centered(), FixedTime::new(START_TIME))
        .expect("known profile")
}

/// Session driven by a reproducible pseudo-random stream
pub fn seeded_session(key: &str, seed: u64) -> MonitorSession<SeededRandom, FixedTime> {
    MonitorSession::new(registry(), key, SeededRandom::new(seed), FixedTime::new(START_TIME))
        .expect("known profile")
}

/// Baseline snapshot with some channels replaced
pub fn snapshot_with(profile: &FoodProfile, overrides: &[(SensorChannel, f64)]) -> Snapshot {
    let mut readings = profile.baseline().clone();
    for (channel, value) in overrides {
        readings.insert(channel.clone(), *value);
    }
    Snapshot::new(profile.key(), START_TIME, readings)
}
