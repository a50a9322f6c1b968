#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! End-to-end codec tests: record-style batches with one status check,
//! hand-crafted wire vectors, misbehaving sources, and error
//! short-circuiting.

use std::io::{self, Read, Write};

use wire_codec::{CodecError, WireReader, WireWriter};

/// Source that reports one spurious zero-length read before every
/// productive read, then serves one byte at a time.
struct FlakySource {
    data: Vec<u8>,
    pos: usize,
    primed: bool,
}

impl FlakySource {
    fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: 0,
            primed: false,
        }
    }
}

impl Read for FlakySource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.primed {
            self.primed = true;
            return Ok(0);
        }
        self.primed = false;
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// Sink that accepts a fixed number of bytes, then fails every write.
struct BreakingSink {
    healthy: usize,
    accepted: Vec<u8>,
    writes_after_break: usize,
}

impl BreakingSink {
    fn new(healthy: usize) -> Self {
        Self {
            healthy,
            accepted: Vec::new(),
            writes_after_break: 0,
        }
    }
}

impl Write for BreakingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted.len() + buf.len() > self.healthy {
            self.writes_after_break += 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "link down"));
        }
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// RECORD BATCHES
// ============================================================================

#[test]
fn test_record_batch_roundtrip() {
    // a composite record: several fields, one status check at the end
    let mut buf = Vec::new();
    let mut wr = WireWriter::new(&mut buf);
    wr.put_u8(7);
    wr.put_i32(-12345);
    wr.put_uvarint(u64::MAX);
    wr.put_varint(i64::MIN);
    wr.put_u64(0xDEAD_BEEF_CAFE_F00D);
    let written = wr.finish().expect("write batch should succeed");
    assert_eq!(written, 1 + 4 + 10 + 10 + 8);
    assert_eq!(written, buf.len() as u64);

    let mut rd = WireReader::new(buf.as_slice());
    assert_eq!(rd.get_u8(), 7);
    assert_eq!(rd.get_i32(), -12345);
    assert_eq!(rd.get_uvarint(), u64::MAX);
    assert_eq!(rd.get_varint(), i64::MIN);
    assert_eq!(rd.get_u64(), 0xDEAD_BEEF_CAFE_F00D);
    assert_eq!(rd.finish().expect("read batch should succeed"), written);
}

#[test]
fn test_mixed_record_wire_vector() {
    let mut buf = Vec::new();
    let mut wr = WireWriter::new(&mut buf);
    wr.put_u16(0x1234);
    wr.put_varint(-1);
    wr.put_varint(0);
    wr.put_uvarint(300);
    assert_eq!(wr.finish().unwrap(), 6);
    assert_eq!(buf, [0x34, 0x12, 0x01, 0x00, 0xAC, 0x02]);
}

// ============================================================================
// MISBEHAVING SOURCES
// ============================================================================

#[test]
fn test_spurious_zero_reads_do_not_truncate() {
    let mut encoded = Vec::new();
    let mut wr = WireWriter::new(&mut encoded);
    wr.put_u32(0xA1B2_C3D4);
    wr.put_uvarint(300);
    wr.put_varint(-7);
    wr.finish().unwrap();

    // every single byte arrives only after a zero-length read
    let mut rd = WireReader::new(FlakySource::new(encoded));
    assert_eq!(rd.get_u32(), 0xA1B2_C3D4);
    assert_eq!(rd.get_uvarint(), 300);
    assert_eq!(rd.get_varint(), -7);
    assert_eq!(rd.finish().unwrap(), 4 + 2 + 1);
}

#[test]
fn test_truncated_fixed_width_read_fails() {
    // two bytes on the wire, four requested
    let mut rd = WireReader::new(&[0x34u8, 0x12][..]);
    rd.get_u32();
    match rd.finish() {
        Err(CodecError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn test_transport_error_aborts_varint_read() {
    struct FailingSource;
    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer gone"))
        }
    }
    let mut rd = WireReader::new(FailingSource);
    assert_eq!(rd.get_uvarint(), 0);
    assert_eq!(rd.bytes_read(), 0);
    assert!(matches!(rd.error(), Some(CodecError::Io(_))));
}

// ============================================================================
// ERROR SHORT-CIRCUITING
// ============================================================================

#[test]
fn test_writer_stops_touching_broken_sink() {
    let mut wr = WireWriter::new(BreakingSink::new(2));
    wr.put_u16(0x1234); // accepted
    wr.put_u32(1); // breaks the sink
    wr.put_u64(2); // must be a no-op
    wr.put_uvarint(300); // must be a no-op
    assert_eq!(wr.bytes_written(), 2);
    assert!(matches!(wr.error(), Some(CodecError::Io(_))));

    let sink = wr.into_inner();
    assert_eq!(sink.accepted, [0x34, 0x12]);
    assert_eq!(sink.writes_after_break, 1);
}

#[test]
fn test_reader_freezes_after_overflow() {
    // overflowing varint followed by a perfectly good u16
    let mut input = vec![0x80u8; 10];
    input.extend_from_slice(&[0x34, 0x12]);
    let mut rd = WireReader::new(input.as_slice());
    assert_eq!(rd.get_uvarint(), 0);
    assert_eq!(rd.bytes_read(), 10);

    // the trailing bytes stay unread once the slot is set
    assert_eq!(rd.get_u16(), 0);
    assert_eq!(rd.bytes_read(), 10);
    assert!(matches!(rd.finish(), Err(CodecError::VarintOverflow)));
}

#[test]
fn test_overflow_is_not_a_transport_error() {
    let mut input = vec![0x80u8; 10];
    input.push(0x02);
    let mut rd = WireReader::new(input.as_slice());
    rd.get_uvarint();
    match rd.finish() {
        Err(CodecError::VarintOverflow) => {}
        other => panic!("expected VarintOverflow, got {other:?}"),
    }
}
