//! Depict Layout
//!
//! Line-oriented building blocks for rendering a value graph whose layout is
//! only known after its children have been written.
//!
//! # Architecture
//!
//! Output is a bounded list of [`Line`]s. Strategies never build strings
//! directly; they write through [`RenderedGraph`], which keeps a current line,
//! an indentation level and the line cap. Because a composite only learns
//! whether it wraps after rendering its first child, it captures a position
//! token ([`Anchor`] or [`PossibleMultilineFragment`]) before the child and
//! uses it afterwards to place delimiters either inline or on lines of their
//! own. Tokens are plain `Copy` values holding a [`LineId`] and an offset;
//! lines are only ever split or inserted around, never replaced, so tokens
//! stay valid for the remainder of the strategy call that created them.
//!
//! # Modules
//!
//! - [`lookahead`]: one-element lookahead over arbitrary, possibly unbounded
//!   iterators with an item cap
//! - [`line`]: a single line and its storage state
//! - [`collection`]: the bounded line list and its overflow policy
//! - [`graph`]: the write surface plus position tokens

pub mod collection;
pub mod error;
pub mod graph;
pub mod line;
pub mod lookahead;

pub use collection::LineCollection;
pub use error::{Overflow, StateError};
pub use graph::{Anchor, PossibleMultilineFragment, RenderedGraph};
pub use line::{Line, LineId, LineState, INDENT_WIDTH};
pub use lookahead::LookaheadSequence;
