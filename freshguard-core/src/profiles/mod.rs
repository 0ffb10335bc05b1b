//! Food Profiles
//!
//! A profile describes one food category: what a fresh sample reads on every
//! channel (the baseline), which channels carry spoilage rules, and which
//! channels the trend charts follow.
//!
//! Profiles are loaded once from a catalog, validated, and then shared
//! read-only behind `Arc`. Nothing mutates a profile after load.
//!
//! ## Validation at Load
//!
//! ```text
//! baseline    every value finite                 → InvalidBaseline
//! thresholds  at least one bound, 0 < weight ≤ MAX_WEIGHT → InvalidThreshold
//!             channel declared by the baseline   → UnknownChannel
//! trend       channel declared by the baseline   → UnknownChannel
//! ```

mod registry;
mod threshold;

pub use registry::ProfileRegistry;
pub use threshold::{Threshold, ThresholdDefinition};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channels::SensorChannel;
use crate::errors::{FreshnessError, FreshnessResult};

/// Supported food categories
///
/// The set is closed. Short keys from earlier catalogs (`banana`, `milk`,
/// `meat`, `egg`, `veggies`) are accepted as aliases. Parsing and serde
/// accept exactly the same spellings: lowercase, no surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKey {
    /// Climacteric fruit (banana)
    #[serde(alias = "banana")]
    Fruit,
    /// Refrigerated pasteurized milk
    #[serde(alias = "milk")]
    PasteurizedMilk,
    /// Raw poultry or beef
    #[serde(alias = "meat")]
    RawMeat,
    /// Chicken eggs
    #[serde(alias = "egg")]
    Eggs,
    /// Fresh leafy and root vegetables
    #[serde(alias = "veggies")]
    Vegetables,
}

impl ProfileKey {
    /// Every supported category, in display order
    pub const ALL: [ProfileKey; 5] = [
        ProfileKey::Fruit,
        ProfileKey::PasteurizedMilk,
        ProfileKey::RawMeat,
        ProfileKey::Eggs,
        ProfileKey::Vegetables,
    ];

    /// Canonical key
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::Fruit => "fruit",
            ProfileKey::PasteurizedMilk => "pasteurized-milk",
            ProfileKey::RawMeat => "raw-meat",
            ProfileKey::Eggs => "eggs",
            ProfileKey::Vegetables => "vegetables",
        }
    }
}

impl FromStr for ProfileKey {
    type Err = FreshnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruit" | "banana" => Ok(ProfileKey::Fruit),
            "pasteurized-milk" | "milk" => Ok(ProfileKey::PasteurizedMilk),
            "raw-meat" | "meat" => Ok(ProfileKey::RawMeat),
            "eggs" | "egg" => Ok(ProfileKey::Eggs),
            "vegetables" | "veggies" => Ok(ProfileKey::Vegetables),
            _ => Err(FreshnessError::UnknownProfile { key: s.to_string() }),
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile as written in a catalog, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    /// Category this definition describes
    pub key: ProfileKey,
    /// Display name
    pub name: String,
    /// Fresh reading per channel; declares the profile's channel set
    pub baseline: BTreeMap<SensorChannel, f64>,
    /// Spoilage rules keyed by channel
    #[serde(default)]
    pub thresholds: BTreeMap<SensorChannel, ThresholdDefinition>,
    /// Channels charted as trends, in display order
    #[serde(default)]
    pub trend: Vec<SensorChannel>,
}

/// Validated, immutable food profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodProfile {
    key: ProfileKey,
    name: String,
    baseline: BTreeMap<SensorChannel, f64>,
    thresholds: BTreeMap<SensorChannel, Threshold>,
    trend_channels: Vec<SensorChannel>,
}

impl FoodProfile {
    /// Validate a catalog definition
    pub fn from_definition(def: ProfileDefinition) -> FreshnessResult<Self> {
        let profile = def.key.as_str();

        if let Some((channel, value)) = def.baseline.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FreshnessError::InvalidBaseline {
                profile: profile.to_string(),
                channel: channel.to_string(),
                value: *value,
            });
        }

        let mut thresholds = BTreeMap::new();
        for (channel, rule) in def.thresholds {
            if !def.baseline.contains_key(&channel) {
                return Err(unknown_channel(profile, &channel));
            }
            let threshold = Threshold::try_from(rule).map_err(|source| {
                FreshnessError::InvalidThreshold {
                    profile: profile.to_string(),
                    channel: channel.to_string(),
                    source,
                }
            })?;
            thresholds.insert(channel, threshold);
        }

        if let Some(channel) = def.trend.iter().find(|c| !def.baseline.contains_key(*c)) {
            return Err(unknown_channel(profile, channel));
        }

        Ok(Self {
            key: def.key,
            name: def.name,
            baseline: def.baseline,
            thresholds,
            trend_channels: def.trend,
        })
    }

    /// Category key
    pub fn key(&self) -> ProfileKey {
        self.key
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fresh reading per channel
    pub fn baseline(&self) -> &BTreeMap<SensorChannel, f64> {
        &self.baseline
    }

    /// Fresh reading for one channel
    pub fn baseline_value(&self, channel: &SensorChannel) -> Option<f64> {
        self.baseline.get(channel).copied()
    }

    /// Spoilage rules keyed by channel
    pub fn thresholds(&self) -> &BTreeMap<SensorChannel, Threshold> {
        &self.thresholds
    }

    /// Spoilage rule for one channel, if it has one
    pub fn threshold(&self, channel: &SensorChannel) -> Option<&Threshold> {
        self.thresholds.get(channel)
    }

    /// Channels shown as trend charts, in display order
    pub fn trend_channels(&self) -> &[SensorChannel] {
        &self.trend_channels
    }

    /// Channels this profile defines
    pub fn channels(&self) -> impl Iterator<Item = &SensorChannel> {
        self.baseline.keys()
    }

    /// True when the baseline declares the channel
    pub fn declares(&self, channel: &SensorChannel) -> bool {
        self.baseline.contains_key(channel)
    }
}

fn unknown_channel(profile: &str, channel: &SensorChannel) -> FreshnessError {
    FreshnessError::UnknownChannel {
        profile: profile.to_string(),
        channel: channel.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal two-channel profile for unit tests
    pub(crate) fn sample_definition() -> ProfileDefinition {
        serde_json::from_str(
            r#"{
                "key": "eggs",
                "name": "Test Eggs",
                "baseline": { "temp": 10, "h2s": 0 },
                "thresholds": { "h2s": { "max": 5, "weight": 3 } },
                "trend": ["h2s"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn keys_parse_with_aliases() {
        assert_eq!("raw-meat".parse::<ProfileKey>().unwrap(), ProfileKey::RawMeat);
        assert_eq!("milk".parse::<ProfileKey>().unwrap(), ProfileKey::PasteurizedMilk);
        assert_eq!("veggies".parse::<ProfileKey>().unwrap(), ProfileKey::Vegetables);

        match "durian".parse::<ProfileKey>() {
            Err(FreshnessError::UnknownProfile { key }) => assert_eq!(key, "durian"),
            other => panic!("expected UnknownProfile, got {other:?}"),
        }
    }

    #[test]
    fn parse_and_serde_accept_the_same_spellings() {
        for text in ["fruit", "banana", "milk", "raw-meat", "egg", "veggies", "Milk", " milk ", "RAW-MEAT"] {
            let parsed = text.parse::<ProfileKey>().ok();
            let decoded = serde_json::from_value::<ProfileKey>(serde_json::Value::from(text)).ok();
            assert_eq!(parsed, decoded, "{text:?}");
        }
        assert!(" Milk ".parse::<ProfileKey>().is_err());
    }

    #[test]
    fn canonical_keys_round_trip() {
        for key in ProfileKey::ALL {
            assert_eq!(key.as_str().parse::<ProfileKey>().unwrap(), key);
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn valid_definition_loads() {
        let profile = FoodProfile::from_definition(sample_definition()).unwrap();
        assert_eq!(profile.key(), ProfileKey::Eggs);
        assert_eq!(profile.baseline_value(&SensorChannel::Temperature), Some(10.0));
        assert_eq!(profile.threshold(&SensorChannel::HydrogenSulfide).unwrap().weight(), 3);
        assert!(profile.threshold(&SensorChannel::Temperature).is_none());
        assert_eq!(profile.trend_channels(), &[SensorChannel::HydrogenSulfide]);
    }

    #[test]
    fn threshold_without_bounds_is_rejected() {
        let mut def = sample_definition();
        def.thresholds.insert(
            SensorChannel::Temperature,
            ThresholdDefinition { max: None, min: None, weight: 1 },
        );
        match FoodProfile::from_definition(def) {
            Err(FreshnessError::InvalidThreshold { channel, .. }) => assert_eq!(channel, "temp"),
            other => panic!("expected InvalidThreshold, got {other:?}"),
        }
    }

    #[test]
    fn threshold_on_undeclared_channel_is_rejected() {
        let mut def = sample_definition();
        def.thresholds.insert(
            SensorChannel::Alcohol,
            ThresholdDefinition { max: Some(50.0), min: None, weight: 3 },
        );
        assert!(matches!(
            FoodProfile::from_definition(def),
            Err(FreshnessError::UnknownChannel { .. })
        ));
    }

    #[test]
    fn trend_on_undeclared_channel_is_rejected() {
        let mut def = sample_definition();
        def.trend.push(SensorChannel::VolatileOrganics);
        assert!(matches!(
            FoodProfile::from_definition(def),
            Err(FreshnessError::UnknownChannel { .. })
        ));
    }

    #[test]
    fn non_finite_baseline_is_rejected() {
        let mut def = sample_definition();
        def.baseline.insert(SensorChannel::Humidity, f64::NAN);
        assert!(matches!(
            FoodProfile::from_definition(def),
            Err(FreshnessError::InvalidBaseline { .. })
        ));
    }
}
