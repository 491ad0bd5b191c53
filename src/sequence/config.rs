/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Sequence configuration.
//!
//! This module defines [`SequenceConfig`], the named-option carrier used to
//! construct an [`IntSequence`]. Every field has a default (start = 0,
//! stop = 0, step = 1, no cancellation token), so callers only set what they
//! need and chain the `with_*` builders.
//!
//! The numeric fields serialize with serde so definitions can be read from
//! configuration files; the cancellation token is runtime-only and skipped.
//!
//! [`IntSequence`]: super::core::IntSequence

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

fn default_step() -> i64 {
    1
}

/// Configuration for an [`IntSequence`].
///
/// # Examples
///
/// ```
/// use rangeseq_rs::sequence::SequenceConfig;
///
/// let config = SequenceConfig::default().with_start(1).with_stop(10).with_step(2);
/// assert_eq!(config.start(), 1);
/// assert_eq!(config.stop(), 10);
/// assert_eq!(config.step(), 2);
/// ```
///
/// [`IntSequence`]: super::core::IntSequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Inclusive origin of the sequence.
    #[serde(default)]
    start: i64,

    /// Exclusive bound; never yielded.
    #[serde(default)]
    stop: i64,

    /// Signed increment applied on each advance. Negative to descend.
    #[serde(default = "default_step")]
    step: i64,

    /// Optional caller-owned cancellation signal for push iteration.
    #[serde(skip)]
    cancel: Option<CancellationToken>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            start: 0,
            stop: 0,
            step: 1,
            cancel: None,
        }
    }
}

impl SequenceConfig {
    /// Creates a configuration with all defaults (start 0, stop 0, step 1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start of the iteration.
    #[must_use]
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Sets the stop of the iteration (exclusive).
    #[must_use]
    pub fn with_stop(mut self, stop: i64) -> Self {
        self.stop = stop;
        self
    }

    /// Sets the step of the iteration. It must be negative to decrement.
    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Sets a cancellation token, used by the channel-based push iterator.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Returns the configured start.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the configured stop.
    #[must_use]
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Returns the configured step.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Takes the cancellation token out of the configuration, if any.
    pub(super) fn take_cancel(&mut self) -> Option<CancellationToken> {
        self.cancel.take()
    }
}
