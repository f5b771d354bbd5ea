//! Render errors.

use depict_layout::{Overflow, StateError};

/// Misuse of the formatting API. Always propagated out of
/// [`Formatter::render`](crate::Formatter::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// `render` was called on a formatter that is already rendering, for
    /// example from inside one of its own strategies.
    #[error("formatter is already rendering; strategies must render children through `RenderChild`")]
    ReentrantRender,
    /// A child was rendered with an empty or whitespace-only label.
    #[error("child label must not be blank")]
    BlankLabel,
}

/// Everything a strategy can fail with.
///
/// Strategies propagate every variant with `?`; only the top-level render
/// recovers from [`RenderError::Overflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Overflow(#[from] Overflow),
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    State(#[from] StateError),
}
