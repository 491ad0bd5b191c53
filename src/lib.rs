/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! # rangeseq-rs
//!
//! A configurable integer-range sequence generator.
//!
//! Given a start, stop and step, [`IntSequence`] produces the arithmetic
//! sequence of integers from start (inclusive) toward stop (exclusive),
//! ascending or descending, and exposes three consumption modes over the
//! same validated definition:
//!
//! - **Materialize-all** — [`IntSequence::all`] eagerly collects the whole
//!   sequence into a `Vec<i64>`.
//! - **Pull iteration** — [`IntSequence::has_more`] / [`IntSequence::advance`]
//!   form a caller-driven manual iterator.
//! - **Push iteration** — [`IntSequence::into_stream`] spawns a producer task
//!   that emits each value into a bounded channel, racing an optional
//!   [`CancellationToken`] on every send.
//!
//! Definitions are validated once at construction. An invalid definition
//! (a step whose sign cannot carry start to stop) never fails construction:
//! the sequence is returned inert, yields zero elements under every mode,
//! and reports [`SequenceError::InvalidSequence`] via [`IntSequence::error`].
//!
//! # Examples
//!
//! ```
//! use rangeseq_rs::{IntSequence, SequenceConfig};
//!
//! let mut seq = IntSequence::new(
//!     SequenceConfig::default()
//!         .with_start(1)
//!         .with_stop(10)
//!         .with_step(2),
//! );
//!
//! assert_eq!(seq.all(), vec![1, 3, 5, 7, 9]);
//! assert!(seq.error().is_none());
//! ```
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod sequence;
pub mod utils;

pub use sequence::{IntSequence, SequenceConfig, SequenceError};
