//! # wire-codec
//!
//! Binary integer codec core for peer-to-peer protocol stacks.
//!
//! The codec turns integers into bytes and back: fixed-width 8/16/32/64-bit
//! signed and unsigned values, little-endian, plus LEB128 unsigned varints
//! and zigzag-signed varints. A [`WireWriter`] or [`WireReader`]
//! accumulates a running byte count and defers errors, so a whole record
//! can be encoded or decoded field-by-field with a single status check at
//! the end.
//!
//! ## Components
//! - **Core**: stream primitives, fixed-width codec, varint codec
//! - **Error**: transport and overflow error types
//! - **P2P**: the peer-lifecycle contract this codec serves, with a mock
//!   reactor for tests
//!
//! ## Example
//! ```rust
//! use wire_codec::{WireReader, WireWriter};
//!
//! let mut buf = Vec::new();
//! let mut wr = WireWriter::new(&mut buf);
//! wr.put_u16(0x1234);
//! wr.put_varint(-1);
//! wr.put_uvarint(300);
//! assert_eq!(wr.finish().unwrap(), 5);
//! assert_eq!(buf, [0x34, 0x12, 0x01, 0xAC, 0x02]);
//!
//! let mut rd = WireReader::new(buf.as_slice());
//! assert_eq!(rd.get_u16(), 0x1234);
//! assert_eq!(rd.get_varint(), -1);
//! assert_eq!(rd.get_uvarint(), 300);
//! assert_eq!(rd.finish().unwrap(), 5);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod p2p;

// Re-export the codec surface most callers touch
pub use crate::core::stream::{WireReader, WireWriter};
pub use crate::core::varint::{uvarint_len, zigzag_decode, zigzag_encode};
pub use crate::error::{CodecError, Result};
