/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Core integer sequence implementation.
//!
//! This module provides [`IntSequence`]: construction and validation of the
//! (start, stop, step) definition, the pull-iteration protocol, and eager
//! materialization. Push iteration lives in [`super::stream`].

use super::config::SequenceConfig;
use super::error::SequenceError;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// An iterable sequence of integers.
///
/// Holds an immutable definition (start, stop, step) and a mutable cursor.
/// Validity is computed once at construction: a step whose sign cannot carry
/// the cursor from start to stop records [`SequenceError::InvalidSequence`]
/// instead of failing, and every consumption mode then yields zero elements.
///
/// # Examples
///
/// ```
/// use rangeseq_rs::sequence::{IntSequence, SequenceConfig};
///
/// let mut seq = IntSequence::new(SequenceConfig::default().with_stop(10));
/// assert_eq!(seq.all(), (0..10).collect::<Vec<i64>>());
/// ```
#[derive(Debug)]
pub struct IntSequence {
    /// Inclusive origin of the sequence.
    start: i64,

    /// Exclusive bound; never yielded.
    stop: i64,

    /// Signed increment applied on each advance.
    step: i64,

    /// Cursor, initialized to `start` and only ever moved toward `stop`.
    curr: i64,

    /// Optional caller-owned cancellation signal for push iteration.
    pub(super) cancel: Option<CancellationToken>,

    /// Validation outcome, fixed at construction.
    err: Option<SequenceError>,
}

impl IntSequence {
    /// Creates a new integer sequence from the given configuration.
    ///
    /// Construction never fails. An invalid definition — a positive step
    /// with `start > stop`, a negative step with `start < stop`, or a zero
    /// step with `start != stop` — returns an inert sequence that reports
    /// the condition through [`error`](Self::error).
    ///
    /// # Examples
    ///
    /// ```
    /// use rangeseq_rs::sequence::{IntSequence, SequenceConfig, SequenceError};
    ///
    /// let seq = IntSequence::new(SequenceConfig::default().with_start(5));
    /// assert_eq!(seq.error(), Some(SequenceError::InvalidSequence));
    /// ```
    #[must_use]
    pub fn new(mut config: SequenceConfig) -> Self {
        let (start, stop, step) = (config.start(), config.stop(), config.step());
        let invalid = (start > stop && step > 0)
            || (start < stop && step < 0)
            || (step == 0 && start != stop);

        if invalid {
            debug!(start, stop, step, "invalid sequence definition");
        }

        Self {
            start,
            stop,
            step,
            curr: start,
            cancel: config.take_cancel(),
            err: invalid.then_some(SequenceError::InvalidSequence),
        }
    }

    /// Creates a new integer sequence and returns the resolved start value
    /// alongside it, for callers seeding a manual loop.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangeseq_rs::sequence::{IntSequence, SequenceConfig};
    ///
    /// let (mut seq, mut n) = IntSequence::new_with_start(
    ///     SequenceConfig::default().with_start(1).with_stop(10).with_step(2),
    /// );
    /// let mut collected = Vec::new();
    /// while seq.has_more() {
    ///     collected.push(n);
    ///     n = seq.advance();
    /// }
    /// assert_eq!(collected, vec![1, 3, 5, 7, 9]);
    /// ```
    #[must_use]
    pub fn new_with_start(config: SequenceConfig) -> (Self, i64) {
        let seq = Self::new(config);
        let start = seq.start;
        (seq, start)
    }

    /// Returns `true` if the sequence hasn't ended.
    ///
    /// Always `false` for an invalid sequence. Ascending sequences end when
    /// the cursor reaches `stop` from below, descending ones from above.
    #[must_use]
    pub fn has_more(&self) -> bool {
        if self.err.is_some() {
            return false;
        }
        if self.step >= 0 {
            self.curr < self.stop
        } else {
            self.curr > self.stop
        }
    }

    /// Advances the cursor by one step and returns its new value.
    ///
    /// Callers are responsible for checking [`has_more`](Self::has_more)
    /// first; advancing past the end produces a value outside the intended
    /// range.
    pub fn advance(&mut self) -> i64 {
        self.curr += self.step;
        self.curr
    }

    /// Returns the current cursor value, i.e. the value before the upcoming
    /// advance. Immediately after construction this is `start`.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.curr
    }

    /// Returns the number of elements a valid sequence will produce.
    ///
    /// Computed as `ceil(|stop - start| / |step|)`; zero for an empty
    /// sequence.
    #[must_use]
    pub fn quantity(&self) -> usize {
        let span = self.stop.abs_diff(self.start);
        let step = self.step.unsigned_abs();
        if step == 0 {
            // only reachable when start == stop (empty, still valid)
            return 0;
        }
        span.div_ceil(step) as usize
    }

    /// Returns the entire sequence at once.
    ///
    /// Empty for an invalid sequence. Otherwise walks the pull protocol,
    /// collecting every value in order into a vector pre-sized to
    /// [`quantity`](Self::quantity).
    ///
    /// # Examples
    ///
    /// ```
    /// use rangeseq_rs::sequence::{IntSequence, SequenceConfig};
    ///
    /// let mut seq = IntSequence::new(
    ///     SequenceConfig::default().with_start(10).with_stop(-11).with_step(-5),
    /// );
    /// assert_eq!(seq.all(), vec![10, 5, 0, -5, -10]);
    /// ```
    pub fn all(&mut self) -> Vec<i64> {
        if self.err.is_some() {
            return Vec::new();
        }
        let mut values = Vec::with_capacity(self.quantity());
        let mut n = self.curr;
        while self.has_more() {
            values.push(n);
            n = self.advance();
        }
        values
    }

    /// Returns the recorded validation error, if any.
    ///
    /// Pure read; stable for the lifetime of the sequence.
    #[must_use]
    pub fn error(&self) -> Option<SequenceError> {
        self.err
    }
}
