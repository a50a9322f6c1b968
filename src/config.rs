//! # Wire Constants
//!
//! Compile-time constants shared by the codec layers.
//!
//! The codec has no runtime tunables; everything that bounds its behavior
//! on the wire is fixed here.

/// Worst-case encoded length of a 64-bit unsigned varint: 10 groups of
/// 7 bits. The decoder never consumes more than this many bytes for one
/// value, and the encoder's scratch buffer is sized to it.
pub const MAX_UVARINT_LEN: usize = 10;

/// Consecutive zero-length, error-free reads tolerated before the source
/// is considered dry and an `UnexpectedEof` transport error is recorded.
/// A single spurious zero-length read is a transient condition; an
/// in-memory source that has run out of bytes returns zero forever.
pub const MAX_ZERO_READS: usize = 16;
