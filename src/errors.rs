use thiserror::Error;

/// Errors that can occur when querying a position index.
#[derive(Debug, Error)]
pub enum PositionError {
    /// The queried offset is not covered by the bytes ingested so far.
    ///
    /// Expected and recoverable: either the offset is wrong, or more data
    /// has to be ingested before it can be resolved.
    #[error("offset {offset} out of range, must be in [0, {len})")]
    OutOfRange {
        /// The offset that was queried.
        offset: u64,
        /// Total bytes ingested; valid offsets are strictly below this.
        len: u64,
    },
    /// An in-range offset could not be placed on any line.
    ///
    /// This cannot happen while the index invariants hold; treat it as a
    /// defect in this crate, not as a caller error.
    #[error("internal error: no line covers offset {offset}")]
    Inconsistent {
        /// The offset that failed to resolve.
        offset: u64,
    },
}

/// A specialized `Result` type for position queries.
pub type PosResult<T> = Result<T, PositionError>;
