//! Feeds a position index from a `Read` source as a side effect.

use std::io;
use std::io::Read;

use crate::index::PositionIndex;

/// Wraps a reader and records line boundaries in everything read through it.
///
/// This is the tee arrangement: the wrapped reader stays fully usable (a
/// parser can consume it as usual), while every byte that passes through is
/// also fed to an owned [`PositionIndex`]. When the parser reports an error
/// at some byte offset, the index turns that offset into a line and column.
///
/// # Examples
///
/// ```rust
/// use std::io::Read;
/// use linepos::track::TrackingReader;
///
/// let source = std::io::Cursor::new(b"peter\npaul\nand mary".to_vec());
/// let mut reader = TrackingReader::new(source);
///
/// let mut content = String::new();
/// reader.read_to_string(&mut content).unwrap();
///
/// // offset 11 is the 'a' of "and mary"
/// let pos = reader.index().position(11).unwrap();
/// assert_eq!((pos.line, pos.column), (3, 1));
/// ```
#[derive(Debug)]
pub struct TrackingReader<R> {
    inner: R,
    index: PositionIndex,
}

impl<R: Read> TrackingReader<R> {
    /// Wraps `inner`, starting with an empty index.
    pub fn new(inner: R) -> Self {
        TrackingReader {
            inner,
            index: PositionIndex::new(),
        }
    }

    /// Returns the index built from the bytes read so far.
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped reader.
    ///
    /// Bytes read directly from the wrapped reader bypass the index, which
    /// then no longer matches the stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps into the reader and the index built so far.
    pub fn into_parts(self) -> (R, PositionIndex) {
        (self.inner, self.index)
    }
}

impl<R: Read> Read for TrackingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.index.ingest(&buf[..n]);
        Ok(n)
    }
}
