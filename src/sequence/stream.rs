/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Push iteration over a bounded channel.
//!
//! This module provides [`IntSequence::into_stream`]: a single producer task
//! runs the pull protocol and emits each value into a `tokio::sync::mpsc`
//! channel whose capacity equals the sequence's element count, so the
//! producer never blocks on a consumer that drains at least as fast as it
//! produces. Each send is raced against the optional cancellation token;
//! when the token fires first the producer abandons the loop and the channel
//! closes, so consumers always terminate.

use super::core::IntSequence;
use tokio::sync::mpsc;
use tracing::{debug, trace};

impl IntSequence {
    /// Turns the sequence into an asynchronously produced stream of values.
    ///
    /// Consumes the sequence, so exactly one producer task can ever exist
    /// per instance. The returned receiver yields values in pull-iteration
    /// order and closes when the producer exits, whether by natural
    /// completion, cancellation, or the receiver being dropped.
    ///
    /// An invalid sequence returns an already-closed receiver that yields
    /// zero elements; no task is spawned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangeseq_rs::sequence::{IntSequence, SequenceConfig};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let seq = IntSequence::new(
    ///     SequenceConfig::default().with_start(1).with_stop(10).with_step(2),
    /// );
    /// let mut rx = seq.into_stream();
    ///
    /// let mut values = Vec::new();
    /// while let Some(n) = rx.recv().await {
    ///     values.push(n);
    /// }
    /// assert_eq!(values, vec![1, 3, 5, 7, 9]);
    /// # }
    /// ```
    #[must_use]
    pub fn into_stream(mut self) -> mpsc::Receiver<i64> {
        // mpsc requires a nonzero capacity even for empty sequences
        let (tx, rx) = mpsc::channel(self.quantity().max(1));
        if self.error().is_some() {
            return rx;
        }

        let cancel = self.cancel.take();
        tokio::spawn(async move {
            let mut n = self.current();
            while self.has_more() {
                match &cancel {
                    Some(token) => {
                        tokio::select! {
                            // checked first so a pre-fired token emits nothing
                            biased;
                            _ = token.cancelled() => {
                                debug!(value = n, "sequence producer cancelled");
                                return;
                            }
                            sent = tx.send(n) => {
                                if sent.is_err() {
                                    return;
                                }
                            }
                        }
                    }
                    None => {
                        if tx.send(n).await.is_err() {
                            return;
                        }
                    }
                }
                n = self.advance();
            }
            trace!("sequence producer completed");
        });

        rx
    }
}
