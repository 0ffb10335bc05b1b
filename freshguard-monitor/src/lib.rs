//! Async command surface for FreshGuard
//!
//! ## Overview
//!
//! `freshguard-core` is synchronous and deterministic. This crate puts it
//! behind the interface a UI actually talks to:
//!
//! - commands are `async` and serialized through one mutex
//! - a reading takes real (simulated) time, 800 ms by default
//! - only one reading may be in flight; a second trigger is rejected
//! - every state change is published as a `SessionView` on a watch channel
//!
//! ## Example Usage
//!
//! ```no_run
//! use freshguard_monitor::{Monitor, MonitorConfig};
//! use freshguard_core::SimulationMode;
//!
//! # async fn run() -> freshguard_monitor::MonitorResult<()> {
//! let monitor = Monitor::builtin(MonitorConfig::from_env()?)?;
//! let mut updates = monitor.subscribe();
//!
//! monitor.select_profile("raw-meat").await?;
//! monitor.select_mode(SimulationMode::Spoilage).await;
//! monitor.trigger_reading().await?;
//!
//! updates.changed().await.ok();
//! println!("{}", updates.borrow().headline);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod monitor;

// Re-export common types
pub use config::MonitorConfig;
pub use error::{MonitorError, MonitorResult};
pub use monitor::Monitor;
