//! Core freshness engine for FreshGuard
//!
//! Synthesizes multi-sensor readings for a food category, scores them
//! against per-category spoilage thresholds, and keeps a rolling history
//! for trend charts.
//!
//! Key properties:
//! - Deterministic under an injected `RandomSource`
//! - Profiles validated once at load and shared read-only
//! - No I/O: presentation layers consume `SessionView`
//!
//! ```no_run
//! use freshguard_core::{MonitorSession, SimulationMode};
//!
//! let mut session = MonitorSession::builtin("milk")?;
//! session.select_mode(SimulationMode::Spoilage);
//! session.trigger_reading()?;
//!
//! let view = session.view();
//! println!("{}: {}", view.profile_name, view.headline);
//! # Ok::<(), freshguard_core::FreshnessError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod channels;
pub mod constants;
pub mod errors;
pub mod history;
pub mod profiles;
pub mod random;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod synthesizer;
pub mod time;
pub mod view;

// Public API
pub use channels::{ChannelInfo, SensorChannel};
pub use errors::{FreshnessError, FreshnessResult, ThresholdError};
pub use history::HistoryBuffer;
pub use profiles::{FoodProfile, ProfileDefinition, ProfileKey, ProfileRegistry, Threshold};
pub use random::RandomSource;
pub use scoring::{channel_status, score, ChannelStatus, QualityAssessment, QualityVerdict};
pub use session::{MonitorSession, ReadingOutcome, ReadingTicket};
pub use snapshot::Snapshot;
pub use synthesizer::{ReadingSynthesizer, SimulationMode, SynthesizerConfig};
pub use time::{TimeSource, Timestamp};
pub use view::{ChannelView, SessionView, TrendLine};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
