//! Profile Registry
//!
//! Holds every loaded food profile for the lifetime of the process. The
//! built-in catalog ships as JSON embedded in the binary and is parsed once,
//! on first use. After load the registry is read-only, so it is shared as a
//! plain `Arc` with no locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::{error, info};
use serde::Deserialize;

use super::{FoodProfile, ProfileDefinition, ProfileKey};
use crate::errors::{FreshnessError, FreshnessResult};

/// Built-in catalog text
const BUILTIN_CATALOG: &str = include_str!("../../profiles/catalog.json");

lazy_static! {
    static ref BUILTIN: Option<Arc<ProfileRegistry>> = match ProfileRegistry::from_json(BUILTIN_CATALOG) {
        Ok(registry) => {
            info!("loaded {} built-in food profiles", registry.len());
            Some(Arc::new(registry))
        }
        Err(e) => {
            error!("built-in profile catalog is invalid: {}", e);
            None
        }
    };
}

#[derive(Deserialize)]
struct CatalogDocument {
    profiles: Vec<ProfileDefinition>,
}

/// Read-only catalog of food profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<ProfileKey, Arc<FoodProfile>>,
}

impl ProfileRegistry {
    /// Shared registry loaded from the embedded catalog
    pub fn builtin() -> FreshnessResult<Arc<ProfileRegistry>> {
        match BUILTIN.as_ref() {
            Some(registry) => Ok(Arc::clone(registry)),
            // Re-parse to hand the caller the actual load error
            None => Self::from_json(BUILTIN_CATALOG).map(Arc::new),
        }
    }

    /// Parse and validate a catalog document (`{"profiles": [...]}`)
    pub fn from_json(text: &str) -> FreshnessResult<Self> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        Self::from_definitions(document.profiles)
    }

    /// Validate a set of definitions; any invalid profile fails the whole load
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ProfileDefinition>,
    ) -> FreshnessResult<Self> {
        let mut profiles = BTreeMap::new();
        for def in definitions {
            let key = def.key;
            if profiles.contains_key(&key) {
                return Err(FreshnessError::DuplicateProfile {
                    key: key.to_string(),
                });
            }
            profiles.insert(key, Arc::new(FoodProfile::from_definition(def)?));
        }
        Ok(Self { profiles })
    }

    /// Look up a profile by its textual key
    pub fn get(&self, key: &str) -> FreshnessResult<Arc<FoodProfile>> {
        self.profile(key.parse()?)
    }

    /// Look up a profile by category
    ///
    /// A custom registry may not carry every category; missing ones are
    /// `UnknownProfile` just like unparseable keys.
    pub fn profile(&self, key: ProfileKey) -> FreshnessResult<Arc<FoodProfile>> {
        self.profiles
            .get(&key)
            .cloned()
            .ok_or_else(|| FreshnessError::UnknownProfile {
                key: key.to_string(),
            })
    }

    /// Loaded categories, in display order
    pub fn keys(&self) -> impl Iterator<Item = ProfileKey> + '_ {
        self.profiles.keys().copied()
    }

    /// Profiles in key order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<FoodProfile>> {
        self.profiles.values()
    }

    /// Number of loaded profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::SensorChannel;
    use crate::profiles::tests::sample_definition;

    #[test]
    fn builtin_has_every_category() {
        let registry = ProfileRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.keys().collect::<Vec<_>>(), ProfileKey::ALL.to_vec());
    }

    #[test]
    fn builtin_is_shared() {
        let a = ProfileRegistry::builtin().unwrap();
        let b = ProfileRegistry::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn milk_catalog_values() {
        let registry = ProfileRegistry::builtin().unwrap();
        let milk = registry.get("pasteurized-milk").unwrap();
        assert_eq!(milk.name(), "Pasteurized Milk");
        assert_eq!(milk.baseline_value(&SensorChannel::Temperature), Some(4.0));

        let max = |c: SensorChannel| milk.threshold(&c).and_then(|t| t.max());
        assert_eq!(max(SensorChannel::Temperature), Some(7.0));
        assert_eq!(max(SensorChannel::Ammonia), Some(10.0));
        assert_eq!(max(SensorChannel::VolatileOrganics), Some(300.0));
        assert_eq!(max(SensorChannel::Turbidity), Some(50.0));
    }

    #[test]
    fn vegetables_guard_humidity_from_below() {
        let registry = ProfileRegistry::builtin().unwrap();
        let veg = registry.get("vegetables").unwrap();
        let humidity = veg.threshold(&SensorChannel::Humidity).unwrap();
        assert_eq!(humidity.min(), Some(80.0));
        assert_eq!(humidity.max(), None);
    }

    #[test]
    fn every_category_charts_the_same_trends() {
        let registry = ProfileRegistry::builtin().unwrap();
        for profile in registry.iter() {
            assert_eq!(
                profile.trend_channels(),
                &[
                    SensorChannel::Temperature,
                    SensorChannel::Ammonia,
                    SensorChannel::VolatileOrganics
                ],
                "{}",
                profile.key()
            );
        }
    }

    #[test]
    fn unknown_key_fails_fast() {
        let registry = ProfileRegistry::builtin().unwrap();
        assert!(matches!(
            registry.get("cheese"),
            Err(FreshnessError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn aliases_resolve_to_same_profile() {
        let registry = ProfileRegistry::builtin().unwrap();
        let a = registry.get("meat").unwrap();
        let b = registry.get("raw-meat").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let result = ProfileRegistry::from_definitions([sample_definition(), sample_definition()]);
        assert!(matches!(result, Err(FreshnessError::DuplicateProfile { .. })));
    }

    #[test]
    fn custom_registry_lacks_other_categories() {
        let registry = ProfileRegistry::from_definitions([sample_definition()]).unwrap();
        assert!(registry.get("eggs").is_ok());
        assert!(matches!(
            registry.get("fruit"),
            Err(FreshnessError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            ProfileRegistry::from_json("{\"profiles\": [{]}"),
            Err(FreshnessError::Catalog(_))
        ));
        assert!(matches!(
            ProfileRegistry::from_json(r#"{"profiles": [{"key": "cheese", "name": "x", "baseline": {}}]}"#),
            Err(FreshnessError::Catalog(_))
        ));
    }

    #[test]
    fn invalid_threshold_in_json_fails_load() {
        let text = r#"{"profiles": [{
            "key": "eggs", "name": "Eggs",
            "baseline": {"h2s": 0},
            "thresholds": {"h2s": {"weight": 3}}
        }]}"#;
        assert!(matches!(
            ProfileRegistry::from_json(text),
            Err(FreshnessError::InvalidThreshold { .. })
        ));
    }
}
