//! Error types for layout primitives.

/// Raised when a write would grow the output past its configured line cap.
///
/// By the time this is returned the collection already ends with a blank line
/// and a notice naming the cap. It is an expected condition: it unwinds the
/// render through `?` and is recovered only by the top-level entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("output exceeded the maximum of {max_lines} lines")]
pub struct Overflow {
    /// The configured cap.
    pub max_lines: usize,
}

/// Misuse of a [`LookaheadSequence`](crate::LookaheadSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// `current` or `index` was read before the first `advance`.
    #[error("sequence was read before `advance` was called")]
    NotAdvanced,
    /// The sequence has no current element (it is empty or was exhausted).
    #[error("sequence has no current element")]
    Exhausted,
}
