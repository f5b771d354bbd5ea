//! Saved write positions.

use super::{Position, RenderedGraph};
use crate::error::Overflow;
use crate::line::LineId;

/// A write position captured from a [`RenderedGraph`].
///
/// Either points into the line that was open at capture time, or, when no
/// line was open, at the slot where the next line would be appended. Content
/// written afterwards lands at or after this position, which is what lets an
/// anchor insert text "before" it later on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    at: Position,
}

impl Anchor {
    pub(super) fn capture(graph: &RenderedGraph) -> Self {
        Anchor {
            at: Position::capture(graph),
        }
    }

    pub(super) fn at(
        line: LineId,
        offset: usize,
        graph: &RenderedGraph,
        indentation: usize,
    ) -> Self {
        Anchor {
            at: Position {
                line: Some(line),
                offset,
                line_count: graph.line_count(),
                indentation,
            },
        }
    }

    /// The open line at capture time, if any.
    pub fn line(&self) -> Option<LineId> {
        self.at.line
    }

    pub fn offset(&self) -> usize {
        self.at.offset
    }

    pub fn indentation(&self) -> usize {
        self.at.indentation
    }

    /// Whether any line has been written after the anchor's line.
    pub fn has_lines_beyond(&self, graph: &RenderedGraph) -> bool {
        match self.at.line {
            Some(id) => graph.lines.has_lines_beyond(id),
            None => graph.lines.has_lines_beyond_index(self.at.line_count),
        }
    }

    /// Whether anything at all has been written since capture.
    pub fn has_written_beyond(&self, graph: &RenderedGraph) -> bool {
        graph.line_count() != self.at.line_count
            || self
                .at
                .line
                .is_some_and(|id| graph.line_len(id) > self.at.offset)
    }

    /// Write `text` at the captured position.
    ///
    /// While the output after the anchor is still on the anchor's line the
    /// text goes inline. Once lines follow it, whatever was written after the
    /// capture point on that line moves to a new line one level deeper, right
    /// after the one holding `text`.
    pub fn insert_fragment(self, graph: &mut RenderedGraph, text: &str) -> Result<(), Overflow> {
        let Position {
            line,
            offset,
            line_count,
            indentation,
        } = self.at;
        match line {
            Some(id) => {
                graph.insert_text(id, offset, text);
                if graph.lines.has_lines_beyond(id) {
                    graph.split(id, offset + text.len(), indentation + 1)?;
                }
                Ok(())
            }
            None if line_count == 0 => {
                if graph.line_count() == 0 {
                    graph.add_fragment(text)
                } else {
                    graph.insert_at_line_start_or_top(text, indentation)
                }
            }
            None => match graph.line_id_at(line_count) {
                Some(first) if !graph.lines.has_lines_beyond(first) => {
                    graph.insert_text(first, 0, text);
                    Ok(())
                }
                Some(_) => {
                    graph.insert_line_at(line_count, text, indentation)?;
                    Ok(())
                }
                None => graph.add_fragment(text),
            },
        }
    }

    /// Write `text` inline if nothing was written since capture, otherwise as
    /// a line of its own at the captured indentation.
    ///
    /// The line goes where the anchor points: in the slot the next line would
    /// have taken if no line was open, otherwise right after the anchor's line.
    /// Content written after the capture point on the anchor's line first
    /// moves to a new line one level deeper, and if nothing preceded the
    /// capture point the anchor's line itself receives `text`.
    pub fn insert_line_or_fragment(
        self,
        graph: &mut RenderedGraph,
        text: &str,
    ) -> Result<(), Overflow> {
        if self.has_written_beyond(graph) {
            graph.place_own_line(self.at, text)
        } else {
            self.insert_fragment(graph, text)
        }
    }

    /// Move everything after the anchor on its line to a new line one level
    /// deeper. Does nothing when no line was open at capture.
    pub fn split_line(self, graph: &mut RenderedGraph) -> Result<(), Overflow> {
        if let Some(id) = self.at.line {
            graph.split(id, self.at.offset, self.at.indentation + 1)?;
        }
        Ok(())
    }
}
