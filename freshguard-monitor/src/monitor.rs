//! Async monitor
//!
//! Wraps a [`MonitorSession`] behind an async mutex and publishes a fresh
//! [`SessionView`] on a watch channel after every state change.
//!
//! ## Reading Flow
//!
//! ```text
//! trigger_reading()
//!   lock   → begin_reading()  → publish (busy)   → unlock
//!   sleep reading_delay                            (lock free: view/select stay live)
//!   lock   → complete_reading() → publish (idle) → unlock
//! ```
//!
//! The delay and completion run on a spawned task, so dropping the
//! `trigger_reading` future never leaves the session stuck busy.

use std::sync::Arc;

use freshguard_core::random::{RandomSource, ThreadRandom};
use freshguard_core::time::{SystemTime, TimeSource};
use freshguard_core::{
    MonitorSession, ProfileRegistry, ReadingOutcome, ReadingTicket, SessionView, SimulationMode,
};
use log::{debug, info};
use tokio::sync::{watch, Mutex};

use crate::config::MonitorConfig;
use crate::error::MonitorResult;

/// Shared handle to one monitor session
pub struct Monitor<R = ThreadRandom, T = SystemTime> {
    session: Arc<Mutex<MonitorSession<R, T>>>,
    state: Arc<watch::Sender<SessionView>>,
    config: Arc<MonitorConfig>,
}

impl<R, T> Clone for Monitor<R, T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            state: Arc::clone(&self.state),
            config: Arc::clone(&self.config),
        }
    }
}

impl Monitor {
    /// Monitor over the built-in catalog
    pub fn builtin(config: MonitorConfig) -> MonitorResult<Self> {
        let session = MonitorSession::with_config(
            ProfileRegistry::builtin()?,
            &config.initial_profile,
            ThreadRandom,
            SystemTime,
            config.synthesizer,
        )?;
        Ok(Self::new(session, config))
    }
}

impl<R, T> Monitor<R, T>
where
    R: RandomSource + 'static,
    T: TimeSource + 'static,
{
    pub fn new(session: MonitorSession<R, T>, config: MonitorConfig) -> Self {
        let (state, _) = watch::channel(session.view());
        info!(
            "monitor ready on {} ({}ms reading delay)",
            session.profile().key(),
            config.reading_delay_ms
        );
        Self {
            session: Arc::new(Mutex::new(session)),
            state: Arc::new(state),
            config: Arc::new(config),
        }
    }

    /// Switch food category
    pub async fn select_profile(&self, key: &str) -> MonitorResult<()> {
        let mut session = self.session.lock().await;
        session.select_profile(key)?;
        self.publish(&session);
        Ok(())
    }

    /// Switch simulation mode
    pub async fn select_mode(&self, mode: SimulationMode) {
        let mut session = self.session.lock().await;
        session.select_mode(mode);
        self.publish(&session);
    }

    /// Take one reading, waiting out the sensor delay
    ///
    /// Fails with `ReadingInProgress` while another reading is in flight.
    pub async fn trigger_reading(&self) -> MonitorResult<ReadingOutcome> {
        let ticket = {
            let mut session = self.session.lock().await;
            let ticket = session.begin_reading()?;
            self.publish(&session);
            ticket
        };

        let monitor = self.clone();
        let handle = tokio::spawn(async move { monitor.finish_reading(ticket).await });
        handle.await?
    }

    async fn finish_reading(&self, ticket: ReadingTicket) -> MonitorResult<ReadingOutcome> {
        debug!(
            "reading #{} waiting {}ms for sensors",
            ticket.sequence(),
            self.config.reading_delay_ms
        );
        tokio::time::sleep(self.config.reading_delay()).await;

        let mut session = self.session.lock().await;
        let outcome = session.complete_reading(ticket)?;
        self.publish(&session);
        Ok(outcome)
    }

    /// True while a reading is in flight
    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Latest published render state
    pub fn view(&self) -> SessionView {
        self.state.borrow().clone()
    }

    /// Receiver that sees every published render state
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    fn publish(&self, session: &MonitorSession<R, T>) {
        self.state.send_replace(session.view());
    }
}
