//! Error Types for Profile Loading and Session Commands
//!
//! ## Error Categories
//!
//! The taxonomy is narrow. Synthesis and scoring are total
//! functions over a loaded profile, so every error comes from one of two
//! places:
//!
//! ### Catalog Load
//! - `InvalidThreshold`: a threshold with no bound, a zero or oversized
//!   weight, or a non-finite bound
//! - `InvalidBaseline`: a baseline value that is NaN or infinite
//! - `UnknownChannel`: a threshold or trend channel the baseline never declares
//! - `DuplicateProfile`: the same category defined twice
//! - `Catalog`: the catalog text is not valid JSON for the profile schema
//!
//! ### Command Boundary
//! - `UnknownProfile`: category key outside the supported set. Never
//!   substituted with a default.
//! - `UnknownChannel`: a history push for a channel the active profile lacks
//! - `ReadingInProgress`: a reading was triggered while another is in flight
//!
//! ## Handling Strategy
//!
//! ```rust
//! use freshguard_core::{FreshnessError, ProfileRegistry};
//!
//! let registry = ProfileRegistry::builtin().unwrap();
//! match registry.get("durian") {
//!     Ok(profile) => println!("monitoring {}", profile.name()),
//!     Err(FreshnessError::UnknownProfile { key }) => {
//!         // Reject at the command boundary, keep the current profile
//!         println!("no such category: {key}");
//!     }
//!     Err(other) => println!("unexpected: {other}"),
//! }
//! ```

use thiserror::Error;

/// Result type for engine operations
pub type FreshnessResult<T> = Result<T, FreshnessError>;

/// Errors raised while loading profiles or dispatching session commands
#[derive(Error, Debug)]
pub enum FreshnessError {
    /// Category key is not one of the supported food profiles
    #[error("unknown food profile '{key}'")]
    UnknownProfile {
        /// The key as supplied by the caller
        key: String,
    },

    /// Threshold rule is unusable (no bound, bad weight, or non-finite bound)
    #[error("invalid threshold for channel '{channel}' in profile '{profile}': {source}")]
    InvalidThreshold {
        /// Profile the threshold belongs to
        profile: String,
        /// Channel the threshold guards
        channel: String,
        /// What is wrong with it
        source: ThresholdError,
    },

    /// Baseline value is NaN or infinite
    #[error("invalid baseline {value} for channel '{channel}' in profile '{profile}'")]
    InvalidBaseline {
        /// Profile the baseline belongs to
        profile: String,
        /// Channel carrying the bad value
        channel: String,
        /// The rejected value
        value: f64,
    },

    /// Channel is not declared by the profile's baseline
    #[error("channel '{channel}' is not declared by profile '{profile}'")]
    UnknownChannel {
        /// Profile that was consulted
        profile: String,
        /// Channel that was referenced
        channel: String,
    },

    /// The same category appears more than once in a catalog
    #[error("food profile '{key}' is defined more than once")]
    DuplicateProfile {
        /// Repeated category key
        key: String,
    },

    /// Catalog text could not be parsed
    #[error("failed to parse profile catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A reading is already in flight
    #[error("a sensor reading is already in progress")]
    ReadingInProgress,
}

/// Why a threshold rule was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    /// Neither `max` nor `min` is set
    #[error("neither max nor min is set")]
    NoBound,

    /// Weight must be a positive integer
    #[error("weight must be positive")]
    ZeroWeight,

    /// Weight exceeds `MAX_WEIGHT`
    #[error("weight {0} exceeds the maximum of {max}", max = crate::constants::quality::MAX_WEIGHT)]
    WeightTooLarge(u32),

    /// A bound is NaN or infinite
    #[error("bound is not a finite number")]
    NonFiniteBound,
}

impl FreshnessError {
    /// True for errors a user can trigger from the command surface
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownProfile { .. } | Self::UnknownChannel { .. } | Self::ReadingInProgress
        )
    }
}
