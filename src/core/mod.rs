//! # Core Codec Components
//!
//! Low-level integer encoding and decoding over byte streams.
//!
//! ## Components
//! - **Stream**: writer/reader wrappers owning the running byte count and
//!   the deferred error slot
//! - **Int**: fixed-width little-endian integers (8/16/32/64-bit)
//! - **Varint**: LEB128 unsigned varints and zigzag-signed varints
//!
//! ## Wire Format
//! ```text
//! fixed-width: exactly width/8 bytes, little-endian, two's-complement
//! uvarint:     1-10 bytes, 7 value bits per byte, 0x80 = continuation
//! varint:      zigzag(v) encoded as an unsigned varint
//! ```
//!
//! ## Robustness
//! - Varint decoding is bounded: at most 10 bytes per value, and a value
//!   that cannot fit 64 bits is a named overflow error
//! - Transient zero-length reads are tolerated, a bounded number of
//!   times in a row

pub mod int;
pub mod stream;
pub mod varint;
