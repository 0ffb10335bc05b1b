//! Per-channel spoilage rule
//!
//! A threshold carries an optional upper bound, an optional lower bound and
//! a weight in `1..=MAX_WEIGHT`. The "no bound on this side" case is an
//! explicit `None`; there are no sentinel infinities.

use serde::{Deserialize, Serialize};

use crate::constants::quality::{DANGER_MAX_FACTOR, DANGER_MIN_FACTOR, MAX_WEIGHT};
use crate::errors::ThresholdError;
use crate::scoring::ChannelStatus;

/// Validated threshold rule for one (profile, channel) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    max: Option<f64>,
    min: Option<f64>,
    weight: u32,
}

impl Threshold {
    /// Build a threshold, rejecting rules that could never fire or could not be evaluated
    pub fn new(max: Option<f64>, min: Option<f64>, weight: u32) -> Result<Self, ThresholdError> {
        if max.is_none() && min.is_none() {
            return Err(ThresholdError::NoBound);
        }
        if weight == 0 {
            return Err(ThresholdError::ZeroWeight);
        }
        if weight > MAX_WEIGHT {
            return Err(ThresholdError::WeightTooLarge(weight));
        }
        if max.into_iter().chain(min).any(|bound| !bound.is_finite()) {
            return Err(ThresholdError::NonFiniteBound);
        }

        Ok(Self { max, min, weight })
    }

    /// Upper-bound rule
    pub fn upper(max: f64, weight: u32) -> Result<Self, ThresholdError> {
        Self::new(Some(max), None, weight)
    }

    /// Lower-bound rule
    pub fn lower(min: f64, weight: u32) -> Result<Self, ThresholdError> {
        Self::new(None, Some(min), weight)
    }

    /// Upper bound, if any
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Lower bound, if any
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Score added each time a bound is breached
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Score contribution of a reading.
    ///
    /// Strictly above `max` adds the weight; strictly below `min` adds the
    /// weight again. A reading sitting exactly on a bound contributes nothing.
    pub fn contribution(&self, value: f64) -> u32 {
        let mut score: u32 = 0;
        if matches!(self.max, Some(max) if value > max) {
            score = score.saturating_add(self.weight);
        }
        if matches!(self.min, Some(min) if value < min) {
            score = score.saturating_add(self.weight);
        }
        score
    }

    /// Advisory status of a single reading, used for per-sensor display
    pub fn status(&self, value: f64) -> ChannelStatus {
        if let Some(max) = self.max {
            if value > max * DANGER_MAX_FACTOR {
                return ChannelStatus::Danger;
            }
            if value > max {
                return ChannelStatus::Warning;
            }
        }
        if let Some(min) = self.min {
            if value < min * DANGER_MIN_FACTOR {
                return ChannelStatus::Danger;
            }
            if value < min {
                return ChannelStatus::Warning;
            }
        }
        ChannelStatus::Good
    }
}

/// Threshold as written in a catalog, before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdDefinition {
    /// Upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Score weight, `1..=MAX_WEIGHT`
    pub weight: u32,
}

impl TryFrom<ThresholdDefinition> for Threshold {
    type Error = ThresholdError;

    fn try_from(def: ThresholdDefinition) -> Result<Self, Self::Error> {
        Threshold::new(def.max, def.min, def.weight)
    }
}

impl From<Threshold> for ThresholdDefinition {
    fn from(threshold: Threshold) -> Self {
        Self {
            max: threshold.max,
            min: threshold.min,
            weight: threshold.weight,
        }
    }
}
