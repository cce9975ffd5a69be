use thiserror::Error;

/// Errors surfaced by edit-script validation and application.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// An edit references a byte range not contained in the source.
    #[error("edit [{start}, {end}) is out of bounds for source of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// Two edits' ranges intersect after sorting.
    #[error("edit [{start}, {end}) overlaps the previous edit ending at {prev_end}")]
    Overlapping { start: usize, end: usize, prev_end: usize },

    /// A reader or writer failed during streaming application.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for edit-script results.
pub type DeltaResult<T> = Result<T, DeltaError>;
