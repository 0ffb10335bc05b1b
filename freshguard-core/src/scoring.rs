//! Quality Scorer
//!
//! Turns a snapshot into a weighted spoilage score and a three-level verdict.
//!
//! ## Score
//!
//! Every threshold on the profile is evaluated on its own and the weights of
//! the rules that fire are summed. Evaluation order never matters: the total
//! is the plain sum of per-channel contributions.
//!
//! ## Verdict Table
//!
//! ```text
//! score == 0        safe
//! 1 <= score < 3    warning
//! score >= 3        unsafe
//! ```
//!
//! ## Advisory Status
//!
//! Per-channel status is display-only and independent of the verdict:
//! above `max × 1.5` or below `min × 0.7` is danger, outside a bound is
//! warning, anything else (including channels with no rule) is good.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::channels::SensorChannel;
use crate::constants::quality::{UNSAFE_SCORE, WARNING_SCORE};
use crate::profiles::FoodProfile;
use crate::snapshot::Snapshot;

/// Aggregate freshness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityVerdict {
    /// No rule fired
    Safe,
    /// Early signs of degradation
    Warning,
    /// Hazardous levels
    Unsafe,
}

impl QualityVerdict {
    /// Fixed mapping from score to verdict
    pub const fn from_score(score: u32) -> Self {
        if score >= UNSAFE_SCORE {
            QualityVerdict::Unsafe
        } else if score >= WARNING_SCORE {
            QualityVerdict::Warning
        } else {
            QualityVerdict::Safe
        }
    }

    /// Lowercase name, as serialized
    pub const fn as_str(&self) -> &'static str {
        match self {
            QualityVerdict::Safe => "safe",
            QualityVerdict::Warning => "warning",
            QualityVerdict::Unsafe => "unsafe",
        }
    }

    /// Badge headline
    pub const fn headline(&self) -> &'static str {
        match self {
            QualityVerdict::Safe => "SAFE TO EAT",
            QualityVerdict::Warning => "CAUTION",
            QualityVerdict::Unsafe => "UNSAFE",
        }
    }

    /// One-line badge description
    pub const fn description(&self) -> &'static str {
        match self {
            QualityVerdict::Safe => "No spoilage biomarkers detected.",
            QualityVerdict::Warning => "Early signs of degradation detected.",
            QualityVerdict::Unsafe => "Hazardous bacterial or chemical levels.",
        }
    }

    /// Diagnostic paragraph for the analysis panel
    pub const fn insight(&self) -> &'static str {
        match self {
            QualityVerdict::Safe => {
                "All parameters are within the optimal freshness range for this product \
                 category. No bacterial metabolic byproducts detected."
            }
            QualityVerdict::Warning => {
                "Sensors are detecting elevated levels of volatile organic compounds or \
                 temperature deviations. Recommend consuming soon or checking refrigeration."
            }
            QualityVerdict::Unsafe => {
                "CRITICAL: High concentrations of Ammonia, H2S, or Alcohol detected indicating \
                 active decomposition or fermentation. Do not consume."
            }
        }
    }
}

impl fmt::Display for QualityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display status for a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    /// Within bounds, or no rule for this channel
    Good,
    /// Outside a bound
    Warning,
    /// Far outside a bound
    Danger,
}

/// Score, verdict, and the contributions that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityAssessment {
    score: u32,
    verdict: QualityVerdict,
    contributions: BTreeMap<SensorChannel, u32>,
}

impl QualityAssessment {
    /// Weighted sum of fired rules
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Verdict for the score
    pub fn verdict(&self) -> QualityVerdict {
        self.verdict
    }

    /// Weight each guarded channel added (zero entries included)
    pub fn contributions(&self) -> &BTreeMap<SensorChannel, u32> {
        &self.contributions
    }

    /// Channels whose rule fired
    pub fn breached(&self) -> impl Iterator<Item = &SensorChannel> {
        self.contributions
            .iter()
            .filter(|(_, weight)| **weight > 0)
            .map(|(channel, _)| channel)
    }
}

/// Score a snapshot against a profile's thresholds
///
/// Channels with a threshold but no reading in the snapshot contribute
/// nothing.
pub fn score(snapshot: &Snapshot, profile: &FoodProfile) -> QualityAssessment {
    let contributions: BTreeMap<SensorChannel, u32> = profile
        .thresholds()
        .iter()
        .map(|(channel, threshold)| {
            let weight = snapshot
                .get(channel)
                .map_or(0, |value| threshold.contribution(value));
            (channel.clone(), weight)
        })
        .collect();

    let score = contributions
        .values()
        .fold(0u32, |total, &weight| total.saturating_add(weight));
    let verdict = QualityVerdict::from_score(score);
    debug!("{} scored {} → {}", profile.key(), score, verdict);

    QualityAssessment {
        score,
        verdict,
        contributions,
    }
}

/// Advisory status for one reading under a profile
pub fn channel_status(channel: &SensorChannel, value: f64, profile: &FoodProfile) -> ChannelStatus {
    profile
        .threshold(channel)
        .map_or(ChannelStatus::Good, |threshold| threshold.status(value))
}
