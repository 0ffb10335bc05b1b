//! Monitor Session
//!
//! The command state machine behind the monitor. One session owns the
//! active profile, simulation mode, latest snapshot and assessment, the
//! rolling history, and whether a reading is in flight.
//!
//! ## Reading Lifecycle
//!
//! ```text
//!            begin_reading()                complete_reading(ticket)
//!   Idle ───────────────────────▶ Busy ──────────────────────────────▶ Idle
//!    ▲                              │       snapshot, score, history
//!    │   select_profile()           │
//!    └──────────────────────────────┘   ticket invalidated, late result
//!                                       comes back as Discarded
//! ```
//!
//! A ticket captures the profile and mode at trigger time. Changing the
//! mode while busy does not affect the reading already in flight.
//!
//! The split into begin/complete lets an async caller sleep for the sensor
//! latency without holding the session. Synchronous callers use
//! [`MonitorSession::trigger_reading`].
//!
//! ```rust
//! use freshguard_core::{MonitorSession, QualityVerdict, SimulationMode};
//!
//! let mut session = MonitorSession::builtin("raw-meat").unwrap();
//! session.select_mode(SimulationMode::Spoilage);
//! session.trigger_reading().unwrap();
//! assert_eq!(session.assessment().verdict(), QualityVerdict::Unsafe);
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::buffers::HISTORY_CAPACITY;
use crate::errors::{FreshnessError, FreshnessResult};
use crate::history::HistoryBuffer;
use crate::profiles::{FoodProfile, ProfileRegistry};
use crate::random::{RandomSource, ThreadRandom};
use crate::scoring::{score, QualityAssessment};
use crate::snapshot::Snapshot;
use crate::synthesizer::{ReadingSynthesizer, SimulationMode, SynthesizerConfig};
use crate::time::{SystemTime, TimeSource};
use crate::view::SessionView;

/// Claim on the single reading slot
///
/// Not `Clone`: each ticket completes at most once.
#[derive(Debug)]
pub struct ReadingTicket {
    sequence: u64,
    profile: Arc<FoodProfile>,
    mode: SimulationMode,
}

impl ReadingTicket {
    /// Monotonic reading number
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Profile the reading will be taken against
    pub fn profile(&self) -> &FoodProfile {
        &self.profile
    }

    /// Mode captured at trigger time
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }
}

/// Result of completing a ticket
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingOutcome {
    /// The snapshot was applied and scored
    Completed(QualityAssessment),
    /// The ticket was invalidated by a profile switch; nothing changed
    Discarded,
}

impl ReadingOutcome {
    /// True unless the reading was discarded
    pub fn is_completed(&self) -> bool {
        matches!(self, ReadingOutcome::Completed(_))
    }

    /// Assessment of a completed reading
    pub fn assessment(&self) -> Option<&QualityAssessment> {
        match self {
            ReadingOutcome::Completed(assessment) => Some(assessment),
            ReadingOutcome::Discarded => None,
        }
    }
}

/// Single-writer monitor state
pub struct MonitorSession<R = ThreadRandom, T = SystemTime, const N: usize = HISTORY_CAPACITY> {
    registry: Arc<ProfileRegistry>,
    profile: Arc<FoodProfile>,
    mode: SimulationMode,
    synthesizer: ReadingSynthesizer<R>,
    clock: T,
    snapshot: Snapshot,
    assessment: QualityAssessment,
    history: HistoryBuffer<N>,
    in_flight: Option<u64>,
    next_sequence: u64,
}

impl MonitorSession {
    /// Session over the built-in catalog with production randomness and clock
    pub fn builtin(initial: &str) -> FreshnessResult<Self> {
        Self::new(ProfileRegistry::builtin()?, initial, ThreadRandom, SystemTime)
    }
}

impl<R: RandomSource, T: TimeSource, const N: usize> MonitorSession<R, T, N> {
    /// Session with default synthesizer tuning
    pub fn new(
        registry: Arc<ProfileRegistry>,
        initial: &str,
        rng: R,
        clock: T,
    ) -> FreshnessResult<Self> {
        Self::with_config(registry, initial, rng, clock, SynthesizerConfig::default())
    }

    /// Session with a custom synthesizer tuning
    pub fn with_config(
        registry: Arc<ProfileRegistry>,
        initial: &str,
        rng: R,
        clock: T,
        config: SynthesizerConfig,
    ) -> FreshnessResult<Self> {
        let profile = registry.get(initial)?;
        let mut synthesizer = ReadingSynthesizer::with_config(rng, config);

        let snapshot = Snapshot::baseline(&profile, clock.now());
        let assessment = score(&snapshot, &profile);
        let history = HistoryBuffer::seeded(&profile, &config, synthesizer.rng_mut());
        info!("monitor session started on {}", profile.key());

        Ok(Self {
            registry,
            profile,
            mode: SimulationMode::default(),
            synthesizer,
            clock,
            snapshot,
            assessment,
            history,
            in_flight: None,
            next_sequence: 0,
        })
    }

    /// Switch food category
    ///
    /// Unknown keys are rejected before anything changes. On success the
    /// mode returns to normal, the snapshot resets to the baseline, history
    /// is reseeded, and any in-flight reading is invalidated.
    pub fn select_profile(&mut self, key: &str) -> FreshnessResult<()> {
        let profile = self.registry.get(key)?;

        if let Some(sequence) = self.in_flight.take() {
            warn!("reading #{} invalidated by switch to {}", sequence, profile.key());
        }

        let config = *self.synthesizer.config();
        self.snapshot = Snapshot::baseline(&profile, self.clock.now());
        self.assessment = score(&self.snapshot, &profile);
        self.history.reset(&profile, &config, self.synthesizer.rng_mut());
        self.mode = SimulationMode::Normal;
        info!("selected profile {} ({})", profile.key(), profile.name());
        self.profile = profile;

        Ok(())
    }

    /// Switch simulation mode for subsequent readings
    pub fn select_mode(&mut self, mode: SimulationMode) {
        if self.mode != mode {
            debug!("simulation mode {} → {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Claim the reading slot
    pub fn begin_reading(&mut self) -> FreshnessResult<ReadingTicket> {
        if let Some(sequence) = self.in_flight {
            warn!("reading requested while #{} is in flight", sequence);
            return Err(FreshnessError::ReadingInProgress);
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.in_flight = Some(sequence);
        debug!("reading #{} started ({}, {})", sequence, self.profile.key(), self.mode);

        Ok(ReadingTicket {
            sequence,
            profile: Arc::clone(&self.profile),
            mode: self.mode,
        })
    }

    /// Take the reading a ticket describes and apply it
    pub fn complete_reading(&mut self, ticket: ReadingTicket) -> FreshnessResult<ReadingOutcome> {
        if self.in_flight != Some(ticket.sequence) {
            warn!("discarding stale reading #{}", ticket.sequence);
            return Ok(ReadingOutcome::Discarded);
        }
        self.in_flight = None;

        let snapshot = self
            .synthesizer
            .synthesize(&ticket.profile, ticket.mode, self.clock.now());
        let assessment = score(&snapshot, &ticket.profile);
        self.history.record(&snapshot)?;

        debug!(
            "reading #{} complete: score {} ({})",
            ticket.sequence,
            assessment.score(),
            assessment.verdict()
        );

        self.snapshot = snapshot;
        self.assessment = assessment.clone();
        Ok(ReadingOutcome::Completed(assessment))
    }

    /// Begin and complete a reading with no latency
    pub fn trigger_reading(&mut self) -> FreshnessResult<ReadingOutcome> {
        let ticket = self.begin_reading()?;
        self.complete_reading(ticket)
    }

    /// True while a reading is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Active profile
    pub fn profile(&self) -> &FoodProfile {
        &self.profile
    }

    /// Active simulation mode
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Latest snapshot (the baseline right after a profile switch)
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Assessment of the latest snapshot
    pub fn assessment(&self) -> &QualityAssessment {
        &self.assessment
    }

    /// Trend history for the active profile
    pub fn history(&self) -> &HistoryBuffer<N> {
        &self.history
    }

    /// Catalog the session selects from
    pub fn registry(&self) -> &Arc<ProfileRegistry> {
        &self.registry
    }

    /// Render state
    pub fn view(&self) -> SessionView {
        SessionView::build(
            &self.profile,
            self.mode,
            &self.snapshot,
            &self.assessment,
            &self.history,
            self.is_busy(),
        )
    }
}
