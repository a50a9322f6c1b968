//! # Stream Primitives
//!
//! Stateful writer/reader wrappers over arbitrary byte streams.
//!
//! A [`WireWriter`] or [`WireReader`] owns two pieces of per-sequence
//! state: a running byte count and a deferred error slot. Codec calls
//! never return errors individually; the first failure is recorded and
//! every later call on the same wrapper becomes a no-op, so a caller can
//! encode or decode a whole record field-by-field and check
//! [`finish`](WireWriter::finish) once.
//!
//! All operations are synchronous. A wrapper must not be shared across
//! threads without external synchronization; mutation is in-place and
//! unsynchronized. Blocking happens only inside the underlying stream's
//! read/write calls; callers needing bounded latency must wrap the
//! stream with a deadline-aware implementation.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::config::MAX_ZERO_READS;
use crate::error::{CodecError, Result};

/// Writer half of the codec: wraps a byte sink and accumulates the number
/// of bytes confirmed accepted plus the first error of the sequence.
pub struct WireWriter<W> {
    sink: W,
    written: u64,
    err: Option<CodecError>,
}

impl<W: Write> WireWriter<W> {
    /// Wrap a byte sink. The byte count starts at zero and no error is set.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            written: 0,
            err: None,
        }
    }

    /// Bytes confirmed accepted by the sink so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// First error recorded in this sequence, if any.
    pub fn error(&self) -> Option<&CodecError> {
        self.err.as_ref()
    }

    /// Consume the writer, yielding the total byte count on success or the
    /// first recorded error.
    pub fn finish(self) -> Result<u64> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }

    /// Consume the writer and return the underlying sink, discarding the
    /// byte count and any recorded error.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write `bytes` to the sink, advancing the count by the bytes
    /// confirmed. A failed write records the error and leaves the count
    /// untouched; once an error is recorded the call is a no-op.
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        if self.err.is_some() {
            return;
        }
        match self.sink.write_all(bytes) {
            Ok(()) => self.written += bytes.len() as u64,
            Err(err) => self.record(CodecError::Io(err)),
        }
    }

    pub(crate) fn record(&mut self, err: CodecError) {
        trace!(error = %err, written = self.written, "write sequence failed");
        self.err = Some(err);
    }
}

/// Reader half of the codec: wraps a byte source and accumulates the
/// number of bytes consumed plus the first error of the sequence.
pub struct WireReader<R> {
    source: R,
    read: u64,
    err: Option<CodecError>,
}

impl<R: Read> WireReader<R> {
    /// Wrap a byte source. The byte count starts at zero and no error is
    /// set.
    pub fn new(source: R) -> Self {
        Self {
            source,
            read: 0,
            err: None,
        }
    }

    /// Bytes consumed from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.read
    }

    /// First error recorded in this sequence, if any.
    pub fn error(&self) -> Option<&CodecError> {
        self.err.as_ref()
    }

    /// Consume the reader, yielding the total byte count on success or the
    /// first recorded error.
    pub fn finish(self) -> Result<u64> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.read),
        }
    }

    /// Consume the reader and return the underlying source, discarding the
    /// byte count and any recorded error.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Fill `buf` completely, advancing the count by the bytes consumed.
    ///
    /// `Interrupted` reads are retried. A zero-length, error-free read is
    /// treated as transient and retried, up to [`MAX_ZERO_READS`]
    /// consecutive occurrences; past that the source is considered dry and
    /// an `UnexpectedEof` transport error is recorded. On any failure the
    /// contents of `buf` are unspecified and the call records the error;
    /// once an error is recorded the call is a no-op.
    pub(crate) fn read_full(&mut self, buf: &mut [u8]) {
        if self.err.is_some() {
            return;
        }
        let mut filled = 0;
        let mut zero_reads = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => {
                    zero_reads += 1;
                    if zero_reads > MAX_ZERO_READS {
                        self.record(CodecError::Io(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "source ran dry before the buffer was filled",
                        )));
                        return;
                    }
                }
                Ok(n) => {
                    filled += n;
                    self.read += n as u64;
                    zero_reads = 0;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.record(CodecError::Io(err));
                    return;
                }
            }
        }
    }

    pub(crate) fn record(&mut self, err: CodecError) {
        trace!(error = %err, read = self.read, "read sequence failed");
        self.err = Some(err);
    }

    pub(crate) fn failed(&self) -> bool {
        self.err.is_some()
    }
}
