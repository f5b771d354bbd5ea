//! Delimiters whose line placement is decided after the fact.

use super::{Anchor, Position, RenderedGraph};
use crate::error::Overflow;

/// A position captured just before a child renders.
///
/// Afterwards the token tells whether the child *wrapped*, meaning it wrote
/// onto more lines than the one it started on, and places a delimiter either
/// inline at the captured position or on a line boundary there. A composite
/// writes its opening brace or separator only after the child it precedes, so
/// a single rendering pass suffices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PossibleMultilineFragment {
    at: Position,
    prefer_multiline: bool,
}

impl PossibleMultilineFragment {
    pub(super) fn capture(graph: &RenderedGraph) -> Self {
        PossibleMultilineFragment {
            at: Position::capture(graph),
            prefer_multiline: false,
        }
    }

    /// Treat the fragment as wrapped regardless of what gets written.
    #[must_use]
    pub fn prefer_multiline(mut self, prefer: bool) -> Self {
        self.prefer_multiline = prefer;
        self
    }

    pub fn indentation(&self) -> usize {
        self.at.indentation
    }

    /// Whether output since capture spans more than one line.
    pub fn is_wrapped(&self, graph: &RenderedGraph) -> bool {
        let single = self.at.line_count + usize::from(self.at.line.is_none());
        self.prefer_multiline || graph.line_count() > single
    }

    /// Place an opening delimiter before what was written since capture.
    ///
    /// Unwrapped: `text` goes inline and an [`Anchor`] just after it is
    /// returned, so the caller can still break the line there later. Wrapped:
    /// `text` gets its own line at the captured indentation and the content
    /// that follows it is indented one level deeper.
    pub fn add_fragment_at_start(
        self,
        graph: &mut RenderedGraph,
        text: &str,
    ) -> Result<Option<Anchor>, Overflow> {
        if self.is_wrapped(graph) {
            graph.place_own_line(self.at, text)?;
            return Ok(None);
        }
        self.insert_inline(graph, text).map(Some)
    }

    /// Place a separator between what preceded the capture and what followed.
    ///
    /// Unwrapped: `text` goes inline and an [`Anchor`] just after it is
    /// returned. Wrapped: `text` ends the line holding the capture and
    /// whatever was written after it moves to the next line, one level deeper
    /// than the captured indentation.
    pub fn add_fragment_at_end_of_line(
        self,
        graph: &mut RenderedGraph,
        text: &str,
    ) -> Result<Option<Anchor>, Overflow> {
        if !self.is_wrapped(graph) {
            return self.insert_inline(graph, text).map(Some);
        }
        match self.at.line {
            Some(id) => {
                graph.split(id, self.at.offset, self.at.indentation + 1)?;
                graph.insert_text(id, self.at.offset, text);
            }
            None => {
                let previous = self
                    .at
                    .line_count
                    .checked_sub(1)
                    .and_then(|index| graph.line_id_at(index));
                match previous {
                    Some(previous) => {
                        let end = graph.line_len(previous);
                        graph.insert_text(previous, end, text);
                    }
                    None => {
                        graph.insert_line_at(0, text, self.at.indentation)?;
                    }
                }
            }
        }
        Ok(None)
    }

    /// Append `text` to the current line when unwrapped, otherwise start a
    /// new line with it.
    pub fn add_line_or_fragment(self, graph: &mut RenderedGraph, text: &str) -> Result<(), Overflow> {
        if self.is_wrapped(graph) {
            graph.add_fragment_on_new_line(text)
        } else {
            graph.add_fragment(text)
        }
    }

    /// Move everything written from the captured position onward to a line
    /// of its own at the captured indentation.
    ///
    /// Used once an inline opening delimiter turns out to belong to a wrapped
    /// block. Nothing moves when only whitespace precedes the position.
    pub fn break_before(self, graph: &mut RenderedGraph) -> Result<(), Overflow> {
        match self.at.line {
            Some(id) => {
                if !graph.prefix_is_blank(id, self.at.offset) {
                    graph.split(id, self.at.offset, self.at.indentation)?;
                }
            }
            None => {
                if let Some(id) = graph.line_id_at(self.at.line_count) {
                    graph.set_indentation(id, self.at.indentation);
                }
            }
        }
        Ok(())
    }

    fn insert_inline(self, graph: &mut RenderedGraph, text: &str) -> Result<Anchor, Overflow> {
        if let Some(id) = self.at.target(graph) {
            let offset = match self.at.line {
                Some(_) => self.at.offset,
                None => {
                    // The line now starts with `text`, written outside the
                    // child's indentation scope.
                    graph.set_indentation(id, self.at.indentation);
                    0
                }
            };
            graph.insert_text(id, offset, text);
            return Ok(Anchor::at(id, offset + text.len(), graph, self.at.indentation));
        }
        graph.add_fragment(text)?;
        Ok(match graph.current {
            Some(id) => Anchor::at(id, graph.line_len(id), graph, self.at.indentation),
            None => graph.anchor(),
        })
    }
}
