//! A single output line.
//!
//! A [`Line`] stores its content without indentation. Indentation is recorded
//! as a level and only materialized by [`Line::ensure_whitespace`] once the
//! owning collection knows it holds more than one line, so a value that fits
//! on one line never carries leading spaces. All offsets (for insertion and
//! truncation) are byte offsets into the content and therefore unaffected by
//! whether whitespace has been materialized yet.

use std::fmt;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Stable identity of a line within one
/// [`LineCollection`](crate::LineCollection).
///
/// Positions shift as lines are inserted; ids do not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u32);

impl LineId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        LineId(raw)
    }

    /// Raw numeric value, in creation order.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Storage for a line's content.
///
/// Only the storage strategy differs between variants; every operation is
/// defined on both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineState {
    /// Still receiving fragments. Appends are amortized O(1).
    Building(String),
    /// Written and frozen. Appends and inserts rebuild the text.
    Flushed(Box<str>),
}

impl Default for LineState {
    fn default() -> Self {
        LineState::Building(String::new())
    }
}

impl LineState {
    /// The content.
    pub fn as_str(&self) -> &str {
        match self {
            LineState::Building(buffer) => buffer,
            LineState::Flushed(text) => text,
        }
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether there is no content at all.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Whether this state is [`LineState::Flushed`].
    pub fn is_flushed(&self) -> bool {
        matches!(self, LineState::Flushed(_))
    }

    fn push_str(&mut self, fragment: &str) {
        match self {
            LineState::Building(buffer) => buffer.push_str(fragment),
            LineState::Flushed(text) => {
                let mut rebuilt = String::with_capacity(text.len() + fragment.len());
                rebuilt.push_str(text);
                rebuilt.push_str(fragment);
                *text = rebuilt.into_boxed_str();
            }
        }
    }

    fn insert_str(&mut self, at: usize, fragment: &str) {
        match self {
            LineState::Building(buffer) => buffer.insert_str(at, fragment),
            LineState::Flushed(text) => {
                let mut rebuilt = String::with_capacity(text.len() + fragment.len());
                rebuilt.push_str(&text[..at]);
                rebuilt.push_str(fragment);
                rebuilt.push_str(&text[at..]);
                *text = rebuilt.into_boxed_str();
            }
        }
    }

    /// Cut the content at `at`, returning everything after it in the same
    /// storage variant.
    fn split_off(&mut self, at: usize) -> LineState {
        match self {
            LineState::Building(buffer) => LineState::Building(buffer.split_off(at)),
            LineState::Flushed(text) => {
                let remainder: Box<str> = text[at..].into();
                *text = text[..at].into();
                LineState::Flushed(remainder)
            }
        }
    }

    fn flush(&mut self) {
        if let LineState::Building(buffer) = self {
            *self = LineState::Flushed(std::mem::take(buffer).into_boxed_str());
        }
    }
}

/// One line of rendered output.
#[derive(Clone, Debug)]
pub struct Line {
    id: LineId,
    state: LineState,
    indentation: usize,
    whitespace: bool,
}

impl Line {
    /// A new, empty line that is still being built.
    pub(crate) fn new(id: LineId, indentation: usize) -> Self {
        Line {
            id,
            state: LineState::default(),
            indentation,
            whitespace: false,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    /// Indentation level (not spaces).
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub fn set_indentation(&mut self, level: usize) {
        self.indentation = level;
    }

    pub fn state(&self) -> &LineState {
        &self.state
    }

    /// Content without indentation.
    pub fn text(&self) -> &str {
        self.state.as_str()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Whether the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    pub fn is_flushed(&self) -> bool {
        self.state.is_flushed()
    }

    /// Whether indentation has been materialized.
    pub fn has_whitespace(&self) -> bool {
        self.whitespace
    }

    /// Append a fragment to the end of the content.
    pub fn append(&mut self, fragment: &str) {
        self.state.push_str(fragment);
    }

    /// Insert a fragment at byte offset `at`, clamped to the content length.
    pub fn insert(&mut self, at: usize, fragment: &str) {
        let at = self.clamp(at);
        if at == self.len() {
            self.state.push_str(fragment);
        } else {
            self.state.insert_str(at, fragment);
        }
    }

    /// Freeze the content. Irreversible.
    pub fn flush(&mut self) {
        self.state.flush();
    }

    /// Keep the content before `at` and return the rest as a new line.
    ///
    /// Returns `None` (and drops the remainder) when the remainder is blank.
    /// The new line carries this line's indentation, whitespace state and
    /// storage variant.
    pub(crate) fn truncate(&mut self, at: usize, remainder_id: LineId) -> Option<Line> {
        let at = self.clamp(at);
        let remainder = self.state.split_off(at);
        if remainder.as_str().trim().is_empty() {
            return None;
        }
        Some(Line {
            id: remainder_id,
            state: remainder,
            indentation: self.indentation,
            whitespace: self.whitespace,
        })
    }

    /// Materialize indentation. Called once the line is known not to be the
    /// only line of its document.
    pub fn ensure_whitespace(&mut self) {
        self.whitespace = true;
    }

    fn clamp(&self, at: usize) -> usize {
        let mut at = at.min(self.len());
        while !self.text().is_char_boundary(at) {
            at -= 1;
        }
        at
    }
}

impl fmt::Display for Line {
    /// Trailing spaces are trimmed; embedded line breaks are kept as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text().trim_end_matches(' ');
        if text.is_empty() {
            return Ok(());
        }
        if self.whitespace {
            write!(f, "{:width$}", "", width = self.indentation * INDENT_WIDTH)?;
        }
        f.write_str(text)
    }
}
