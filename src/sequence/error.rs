/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Sequence error types.
//!
//! This module defines the single validation error a sequence definition
//! can record at construction time.

use thiserror::Error;

/// Errors recorded when validating a sequence definition.
///
/// A sequence never fails construction: the error is stored on the instance
/// and reported through [`IntSequence::error`], while every consumption mode
/// degrades to producing zero elements.
///
/// [`IntSequence::error`]: super::core::IntSequence::error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The step's sign cannot carry the cursor from start to stop, or the
    /// step is zero while start differs from stop.
    #[error("invalid sequence")]
    InvalidSequence,
}
