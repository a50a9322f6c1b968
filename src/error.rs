//! # Error Types
//!
//! Error handling for the wire codec.
//!
//! Two failure classes exist: transport errors surfaced by the underlying
//! byte stream, and varint overflow, a distinct condition signalling
//! malformed or adversarial input rather than a transport fault.
//!
//! Codec operations never return errors individually. The first failure in
//! a sequence is recorded inside the writer or reader and surfaced once,
//! by [`finish`](crate::WireWriter::finish), after a whole batch of
//! operations has been issued.

use std::io;
use thiserror::Error;

/// Primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Transport error from the underlying stream, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A varint did not fit a 64-bit integer. Malformed or adversarial
    /// input, never a transport fault.
    #[error("varint overflows a 64-bit integer")]
    VarintOverflow,
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
