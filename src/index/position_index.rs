//! The incremental index itself.

use std::io;
use std::io::Write;

use crate::errors::{PositionError, PosResult};
use super::LineSpan;
use super::Position;

type Result<T> = PosResult<T>;

/// Maps byte offsets in a growing stream to (line, column) positions.
///
/// Feed the stream in with [`ingest`](PositionIndex::ingest), in order and
/// in chunks of any size, then ask where an offset falls with
/// [`position`](PositionIndex::position). The index only ever grows: lines
/// already recorded keep their answers no matter how much more data arrives.
///
/// # Examples
///
/// Ingest directly and resolve an offset:
///
/// ```rust
/// use linepos::PositionIndex;
///
/// let mut index = PositionIndex::new();
/// index.ingest(b"peter\npaul\n");
/// index.ingest(b"and mary");
///
/// let pos = index.position(6).unwrap();
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 1);
/// ```
///
/// The index also implements [`std::io::Write`], so a stream can be copied
/// through it:
///
/// ```rust
/// use linepos::PositionIndex;
///
/// let mut index = PositionIndex::new();
/// let mut data = std::io::Cursor::new(b"one\ntwo\n".to_vec());
/// std::io::copy(&mut data, &mut index).unwrap();
///
/// assert_eq!(index.len(), 8);
/// assert_eq!(index.line(4).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    /// Completed lines, in line order.
    spans: Vec<LineSpan>,
    /// Absolute offset where the current unterminated line begins.
    offset: u64,
    /// Number of completed lines.
    line: u64,
    /// Total bytes ingested.
    total: u64,
}

impl PositionIndex {
    /// Creates an empty index. No bytes ingested, no lines recorded.
    pub fn new() -> Self {
        PositionIndex {
            spans: Vec::new(),
            offset: 0,
            line: 0,
            total: 0,
        }
    }

    /// Ingests the next chunk of the stream.
    ///
    /// The chunk is taken to follow immediately after everything ingested
    /// before it. Every newline byte (`0x0A`) found closes one line; the
    /// remainder stays pending until a later chunk terminates it. An empty
    /// chunk is a no-op.
    ///
    /// Returns the number of bytes consumed, which is always the full
    /// chunk length: no I/O is performed and nothing can fail.
    pub fn ingest(&mut self, chunk: &[u8]) -> usize {
        // Absolute offset of chunk[0]. Spans must be anchored here, not at
        // the pending line start, or chunks that split a line produce
        // ranges shifted back by the bytes the previous chunk left pending.
        let base = self.total;
        for (i, b) in chunk.iter().enumerate() {
            if *b == b'\n' {
                let newline = base + i as u64;
                self.line += 1;
                self.spans.push(LineSpan {
                    from: self.offset,
                    to: newline,
                    line: self.line,
                });
                self.offset = newline + 1;
            }
        }
        self.total += chunk.len() as u64;
        chunk.len()
    }

    /// Returns how many bytes have been ingested so far.
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Returns true if nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the completed lines recorded so far, in line order.
    ///
    /// The pending line (bytes after the last newline) is not included; it
    /// has no span until a newline terminates it.
    pub fn lines(&self) -> &[LineSpan] {
        &self.spans
    }

    /// Returns the line and column for the given offset.
    ///
    /// The offset must be below [`len`](PositionIndex::len), otherwise
    /// [`PositionError::OutOfRange`] is returned. Line numbers start at 1
    /// from the beginning of the stream, column numbers start at 1 from the
    /// beginning of the line (left to right). Column numbers are based on
    /// bytes, so `'\t'` counts as 1 column whereas multi-byte characters
    /// count as several. A newline resolves to the line it terminates, one
    /// column past the last content byte.
    pub fn position(&self, offset: u64) -> Result<Position> {
        if offset >= self.total {
            return Err(PositionError::OutOfRange { offset, len: self.total });
        }
        for span in &self.spans {
            if span.contains(offset) {
                return Ok(Position {
                    line: span.line,
                    column: offset - span.from + 1,
                });
            }
        }
        // Bytes past the last newline belong to the still-open line. This
        // also covers a stream that has not seen any newline at all.
        if offset >= self.offset {
            return Ok(Position {
                line: self.line + 1,
                column: offset - self.offset + 1,
            });
        }
        Err(PositionError::Inconsistent { offset })
    }

    /// Returns the line number for the given offset.
    /// See [`position`](PositionIndex::position) for more information.
    pub fn line(&self, offset: u64) -> Result<u64> {
        Ok(self.position(offset)?.line)
    }

    /// Returns the column number for the given offset.
    /// See [`position`](PositionIndex::position) for more information.
    pub fn column(&self, offset: u64) -> Result<u64> {
        Ok(self.position(offset)?.column)
    }
}

/// Accepts data to track positions in. No actual I/O is performed, so
/// writes are never short and `flush` has nothing to do.
impl Write for PositionIndex {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.ingest(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
