//! Destinations for the sink-based encode and decode variants.
//!
//! A [`Sink`] accepts one byte at a time and may refuse it. Anything that can take
//! bytes can serve as a destination: a growable buffer, a fixed slice, a file, a
//! socket.

use std::convert::Infallible;
use std::io::Write;
use thiserror::Error;

/// Accepts output one byte at a time.
pub trait Sink {
    /// Failure reported when a byte cannot be accepted.
    type Error;

    /// Pushes one byte. Bytes accepted before a failure stay where they are.
    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// The fixed-capacity [`SliceSink`] ran out of room.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sink is full after {written} bytes")]
pub struct SinkFull {
    pub written: usize,
}

/// Writes into a caller-owned slice and fails once the slice is full.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceSink { buf, len: 0 }
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases the sink, returning the written prefix of the slice.
    pub fn into_written(self) -> &'a mut [u8] {
        &mut self.buf[..self.len]
    }
}

impl Sink for SliceSink<'_> {
    type Error = SinkFull;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        let slot = self.buf.get_mut(self.len).ok_or(SinkFull { written: self.len })?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }
}

/// Adapts any [`Write`] into a [`Sink`].
///
/// Every byte goes through `write_all`, so wrap unbuffered writers in a
/// `BufWriter` first.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.writer.write_all(&[byte])
    }
}
