//! # Fixed-Width Integers
//!
//! Little-endian encode/decode for 1/2/4/8-byte signed and unsigned
//! integers, built on the stream primitives. The single byte is the
//! primitive on which `u8`/`i8` are built; no endianness conversion
//! applies to it. Sign is recovered by bit-reinterpretation (a plain
//! same-width cast), with no special-casing beyond byte order.
//!
//! After an error is recorded on the wrapper, `put_*` does nothing and
//! `get_*` returns 0; callers must check
//! [`finish`](crate::WireWriter::finish) before trusting decoded values.

use std::io::{Read, Write};

use crate::core::stream::{WireReader, WireWriter};

impl<W: Write> WireWriter<W> {
    /// Write a single byte as-is.
    pub fn put_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub fn put_i8(&mut self, v: i8) {
        self.put_u8(v as u8);
    }

    /// Write `v` as 2 little-endian bytes.
    pub fn put_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub fn put_i16(&mut self, v: i16) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Write `v` as 4 little-endian bytes.
    pub fn put_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Write `v` as 8 little-endian bytes.
    pub fn put_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub fn put_i64(&mut self, v: i64) {
        self.write_bytes(&v.to_le_bytes());
    }
}

impl<R: Read> WireReader<R> {
    /// Read a single byte.
    pub fn get_u8(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        self.read_full(&mut buf);
        buf[0]
    }

    pub fn get_i8(&mut self) -> i8 {
        self.get_u8() as i8
    }

    /// Read 2 little-endian bytes as a `u16`.
    pub fn get_u16(&mut self) -> u16 {
        let mut buf = [0u8; 2];
        self.read_full(&mut buf);
        u16::from_le_bytes(buf)
    }

    pub fn get_i16(&mut self) -> i16 {
        self.get_u16() as i16
    }

    /// Read 4 little-endian bytes as a `u32`.
    pub fn get_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.read_full(&mut buf);
        u32::from_le_bytes(buf)
    }

    pub fn get_i32(&mut self) -> i32 {
        self.get_u32() as i32
    }

    /// Read 8 little-endian bytes as a `u64`.
    pub fn get_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.read_full(&mut buf);
        u64::from_le_bytes(buf)
    }

    pub fn get_i64(&mut self) -> i64 {
        self.get_u64() as i64
    }
}
