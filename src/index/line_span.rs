//! Value types produced by the index.
//!
//! This module defines [`LineSpan`], the byte range of one completed line,
//! and [`Position`], a resolved (line, column) pair.

use std::fmt::{ Display, Formatter };
use std::fmt;

/// The byte range of one completed line of input.
///
/// A line runs from its first byte up to and including the newline byte that
/// terminates it. The newline belongs to the line it ends, one column past
/// the last content byte. An empty line (a bare newline) has `from == to`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LineSpan {
    /// Absolute offset of the first byte of the line, inclusive.
    pub from: u64,
    /// Absolute offset of the terminating newline byte, inclusive.
    pub to: u64,
    /// 1-based line number.
    pub line: u64,
}

impl LineSpan {
    /// Returns true if `offset` falls within this line, newline included.
    pub fn contains(&self, offset: u64) -> bool {
        self.from <= offset && offset <= self.to
    }

    /// Length of the line in bytes, including the terminating newline.
    pub fn len(&self) -> u64 {
        self.to - self.from + 1
    }
}

/// A (line, column) pair resolved from a byte offset.
///
/// Both components are 1-based. Columns are counted in bytes from the start
/// of the line, so a tab is one column and a multi-byte character spans as
/// many columns as it has bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    /// 1-based line number, counted from the beginning of the stream.
    pub line: u64,
    /// 1-based byte column, counted from the beginning of the line.
    pub column: u64,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(&format!("{}:{}", self.line, self.column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let s = LineSpan { from: 6, to: 10, line: 2 };
        assert!(!s.contains(5));
        assert!(s.contains(6));
        assert!(s.contains(10));
        assert!(!s.contains(11));
    }

    #[test]
    fn test_span_len() {
        let s = LineSpan { from: 6, to: 10, line: 2 };
        assert_eq!(s.len(), 5);
        let empty = LineSpan { from: 3, to: 3, line: 1 };
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_position_display() {
        let p = Position { line: 3, column: 8 };
        assert_eq!(format!("{}", p), "3:8");
    }
}
