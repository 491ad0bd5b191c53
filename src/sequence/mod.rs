/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Integer range sequence generation.
//!
//! This module provides [`IntSequence`], a generator for arithmetic integer
//! sequences defined by a (start, stop, step) triple. The definition is
//! validated once at construction and three consumption modes are derived
//! from the same cursor state:
//!
//! - materialize-all via [`IntSequence::all`]
//! - pull iteration via [`IntSequence::has_more`] / [`IntSequence::advance`]
//! - push iteration via [`IntSequence::into_stream`], a producer task
//!   writing into a bounded channel with optional cancellation
//!
//! # Examples
//!
//! ```
//! use rangeseq_rs::sequence::{IntSequence, SequenceConfig};
//!
//! let config = SequenceConfig::default().with_start(10).with_stop(1).with_step(-2);
//! let mut seq = IntSequence::new(config);
//!
//! assert_eq!(seq.all(), vec![10, 8, 6, 4, 2]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod stream;

#[cfg(test)]
mod tests;

// Re-export main types
pub use config::SequenceConfig;
pub use core::IntSequence;
pub use error::SequenceError;
