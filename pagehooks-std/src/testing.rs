//! Testing utilities for pagehooks.
//!
//! This module provides modules that record or fail on demand, so dispatch
//! order can be asserted without a real page.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log of hook calls
//! - [`RecordingModule`]: A module that appends each hook call to a log
//! - [`FailingModule`]: A module whose hook for one phase returns an error

use pagehooks_core::{BoxError, Module, Phase};
use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// Call Log
// ============================================================================

/// An ordered, shareable log of `(label, phase)` hook calls.
///
/// # Example
///
/// ```rust
/// use pagehooks_std::testing::{CallLog, RecordingModule};
/// use pagehooks_core::Module;
///
/// let log = CallLog::new();
/// let home = RecordingModule::new("home", &log);
/// home.init().unwrap();
/// assert_eq!(log.calls(), ["home.init"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<(String, Phase)>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call.
    pub fn record(&self, label: &str, phase: Phase) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((label.to_owned(), phase));
    }

    /// Get a clone of the recorded calls.
    pub fn entries(&self) -> Vec<(String, Phase)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded calls formatted as `label.phase`.
    pub fn calls(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(label, phase)| format!("{label}.{phase}"))
            .collect()
    }

    /// Get the number of recorded calls.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

// ============================================================================
// Recording Module
// ============================================================================

/// A module that records every hook call into a [`CallLog`].
#[derive(Debug, Clone)]
pub struct RecordingModule {
    label: String,
    log: CallLog,
}

impl RecordingModule {
    /// Create a recording module writing to `log` under `label`.
    pub fn new(label: impl Into<String>, log: &CallLog) -> Self {
        Self {
            label: label.into(),
            log: log.clone(),
        }
    }
}

impl Module for RecordingModule {
    fn init(&self) -> Result<(), BoxError> {
        self.log.record(&self.label, Phase::Init);
        Ok(())
    }

    fn finalize(&self) -> Result<(), BoxError> {
        self.log.record(&self.label, Phase::Finalize);
        Ok(())
    }
}

// ============================================================================
// Failing Module
// ============================================================================

/// A module that records its calls and fails in one phase.
///
/// The failing call is recorded before the error is returned, mirroring a
/// hook that starts running and then throws.
#[derive(Debug, Clone)]
pub struct FailingModule {
    label: String,
    fail_on: Phase,
    log: CallLog,
}

impl FailingModule {
    /// Create a module that fails when `fail_on` runs.
    pub fn new(label: impl Into<String>, fail_on: Phase, log: &CallLog) -> Self {
        Self {
            label: label.into(),
            fail_on,
            log: log.clone(),
        }
    }

    fn hook(&self, phase: Phase) -> Result<(), BoxError> {
        self.log.record(&self.label, phase);
        if phase == self.fail_on {
            return Err(format!("{}.{phase} failed", self.label).into());
        }
        Ok(())
    }
}

impl Module for FailingModule {
    fn init(&self) -> Result<(), BoxError> {
        self.hook(Phase::Init)
    }

    fn finalize(&self) -> Result<(), BoxError> {
        self.hook(Phase::Finalize)
    }
}
