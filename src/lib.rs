//! Maps byte offsets in a growing data stream to line/column positions
//! suitable for error messages.
//!
//! A [`PositionIndex`] accepts the stream incrementally, in chunks of any
//! size, and builds an append-only table of line boundaries. At any later
//! point it resolves an absolute byte offset into a 1-based (line, column)
//! pair. Columns are byte positions: no decoding is performed, so a
//! multi-byte character occupies as many columns as it has bytes.
//!
//! The typical customer is a parser that consumes a stream it cannot seek
//! in. It tees its input through the index (or into it, via the
//! [`std::io::Write`] impl) and, when a diagnostic is needed for some byte
//! offset, asks the index where that offset falls.
//!
//! # Examples
//!
//! Feed chunks directly and query:
//!
//! ```rust
//! use linepos::PositionIndex;
//!
//! let mut index = PositionIndex::new();
//! index.ingest(b"peter\npaul\n");
//! index.ingest(b"and mary");
//!
//! assert_eq!(index.len(), 19);
//!
//! let pos = index.position(11).unwrap();
//! assert_eq!((pos.line, pos.column), (3, 1));
//!
//! // offsets at or past the ingested length are rejected
//! assert!(index.position(19).is_err());
//! ```
//!
//! Or let a [`track::TrackingReader`] feed the index while a consumer reads
//! through it:
//!
//! ```rust
//! use std::io::BufRead;
//! use linepos::track::TrackingReader;
//!
//! let source = std::io::Cursor::new(b"fn main() {\n  oops\n}\n".to_vec());
//! let mut reader = std::io::BufReader::new(TrackingReader::new(source));
//!
//! let mut line = String::new();
//! while reader.read_line(&mut line).unwrap() > 0 {
//!     line.clear();
//! }
//!
//! let index = reader.get_ref().index();
//! // offset 14 is the 'o' of "oops"
//! assert_eq!(format!("{}", index.position(14).unwrap()), "2:3");
//! ```

pub mod errors;
pub mod index;
pub mod track;

mod serde_impl;

pub use crate::errors::{PosResult, PositionError};
pub use crate::index::{LineSpan, Position, PositionIndex};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
