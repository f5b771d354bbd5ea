//! Write surface for strategies.
//!
//! [`RenderedGraph`] owns the [`LineCollection`] of one render, the line
//! currently receiving fragments, and the indentation level. Strategies write
//! through it and use the position tokens [`Anchor`] and
//! [`PossibleMultilineFragment`] to defer delimiter placement until after
//! their children have rendered.
//!
//! # Current line
//!
//! Fragments go to the *current* line, created lazily at the current
//! indentation by the first fragment written after it was closed. Standalone
//! lines (`add_line`) are closed immediately, so nothing attaches to them.

mod anchor;
mod fragment;

pub use anchor::Anchor;
pub use fragment::PossibleMultilineFragment;

use crate::collection::LineCollection;
use crate::error::Overflow;
use crate::line::{Line, LineId};

/// The lines of one render plus the state needed to append to them.
#[derive(Debug)]
pub struct RenderedGraph {
    lines: LineCollection,
    current: Option<LineId>,
    indentation: usize,
}

impl RenderedGraph {
    pub fn new(max_lines: usize) -> Self {
        RenderedGraph {
            lines: LineCollection::new(max_lines),
            current: None,
            indentation: 0,
        }
    }

    pub fn lines(&self) -> &LineCollection {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// The line receiving fragments, if one is open.
    pub fn current_line(&self) -> Option<LineId> {
        self.current
    }

    /// Append a fragment to the current line, opening one if needed.
    pub fn add_fragment(&mut self, fragment: &str) -> Result<(), Overflow> {
        let id = match self.current {
            Some(id) => id,
            None => {
                let line = self.lines.new_line(self.indentation);
                let id = self.lines.add(line)?;
                self.current = Some(id);
                id
            }
        };
        if let Some(line) = self.lines.get_mut(id) {
            line.append(fragment);
        }
        Ok(())
    }

    /// Close the current line and write `line` as a standalone line.
    pub fn add_line(&mut self, line: &str) -> Result<(), Overflow> {
        self.end_line();
        let mut standalone = self.lines.new_line(self.indentation);
        standalone.append(line);
        standalone.flush();
        self.lines.add(standalone)?;
        Ok(())
    }

    /// Close the current line and start a new one with `fragment`.
    pub fn add_fragment_on_new_line(&mut self, fragment: &str) -> Result<(), Overflow> {
        self.end_line();
        self.add_fragment(fragment)
    }

    /// Append to the sole line while the output is still a single line,
    /// otherwise write a standalone line.
    pub fn add_line_or_fragment(&mut self, fragment: &str) -> Result<(), Overflow> {
        if self.lines.len() > 1 {
            return self.add_line(fragment);
        }
        match (self.current, self.lines.last_mut()) {
            (None, Some(only)) => {
                only.append(fragment);
                Ok(())
            }
            _ => self.add_fragment(fragment),
        }
    }

    /// Append to the current line, or to the last written line when none is
    /// open. Used for separators that must trail the previous element.
    pub fn add_fragment_to_last_line(&mut self, fragment: &str) -> Result<(), Overflow> {
        if self.current.is_none() {
            if let Some(last) = self.lines.last_mut() {
                last.append(fragment);
                return Ok(());
            }
        }
        self.add_fragment(fragment)
    }

    /// Close the current line so the next fragment starts a new one.
    pub fn end_line(&mut self) {
        if let Some(id) = self.current.take() {
            if let Some(line) = self.lines.get_mut(id) {
                line.flush();
            }
        }
    }

    /// Run `f` one indentation level deeper.
    ///
    /// The level is restored when `f` returns, whether it returns `Ok` or
    /// unwinds with [`Overflow`] through `?`.
    pub fn with_indentation<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.indentation += 1;
        let result = f(self);
        self.indentation -= 1;
        result
    }

    /// Capture the current write position.
    pub fn anchor(&self) -> Anchor {
        Anchor::capture(self)
    }

    /// Capture the current write position for a delimiter whose line
    /// placement depends on what is written next.
    pub fn possible_multiline_fragment(&self) -> PossibleMultilineFragment {
        PossibleMultilineFragment::capture(self)
    }

    /// Render the final output.
    pub fn finish(self) -> String {
        self.lines.to_string()
    }

    // -- Token support --

    fn line_len(&self, id: LineId) -> usize {
        self.lines.get(id).map_or(0, Line::len)
    }

    fn line_is_blank(&self, id: LineId) -> bool {
        self.lines.get(id).is_none_or(Line::is_blank)
    }

    /// Whether `id` holds nothing but whitespace before byte offset `at`.
    fn prefix_is_blank(&self, id: LineId, at: usize) -> bool {
        self.lines.get(id).is_none_or(|line| {
            line.text()
                .get(..at)
                .is_none_or(|prefix| prefix.trim().is_empty())
        })
    }

    fn line_id_at(&self, index: usize) -> Option<LineId> {
        self.lines.line_at(index).map(Line::id)
    }

    fn insert_text(&mut self, id: LineId, at: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(id) {
            line.insert(at, text);
        }
    }

    fn set_indentation(&mut self, id: LineId, level: usize) {
        if let Some(line) = self.lines.get_mut(id) {
            line.set_indentation(level);
        }
    }

    /// Split `id` at `at`; the remainder, if any, moves to a new line at
    /// `remainder_indentation` and takes over as the current line when `id`
    /// was current.
    fn split(
        &mut self,
        id: LineId,
        at: usize,
        remainder_indentation: usize,
    ) -> Result<Option<LineId>, Overflow> {
        let remainder = self.lines.split_line(id, at)?;
        if let Some(remainder) = remainder {
            self.set_indentation(remainder, remainder_indentation);
            if self.current == Some(id) {
                self.current = Some(remainder);
                if let Some(prefix) = self.lines.get_mut(id) {
                    prefix.flush();
                }
            }
        }
        Ok(remainder)
    }

    fn standalone(&mut self, text: &str, indentation: usize) -> Line {
        let mut line = self.lines.new_line(indentation);
        line.append(text);
        line.flush();
        line
    }

    fn insert_line_at(
        &mut self,
        index: usize,
        text: &str,
        indentation: usize,
    ) -> Result<LineId, Overflow> {
        let line = self.standalone(text, indentation);
        self.lines.insert_at(index, line)
    }

    fn insert_line_after(
        &mut self,
        after: LineId,
        text: &str,
        indentation: usize,
    ) -> Result<LineId, Overflow> {
        let line = self.standalone(text, indentation);
        self.lines.insert_after(after, line)
    }

    fn insert_at_line_start_or_top(
        &mut self,
        text: &str,
        indentation: usize,
    ) -> Result<(), Overflow> {
        self.lines.insert_at_line_start_or_top(text, indentation)
    }

    /// Put `text` on a line of its own at `at`, pushing whatever was written
    /// after `at` one level deeper than `at.indentation`.
    fn place_own_line(&mut self, at: Position, text: &str) -> Result<(), Overflow> {
        match at.line {
            Some(id) => {
                self.split(id, at.offset, at.indentation + 1)?;
                if self.line_is_blank(id) {
                    self.insert_text(id, 0, text);
                    self.set_indentation(id, at.indentation);
                    if let Some(line) = self.lines.get_mut(id) {
                        line.flush();
                    }
                    if self.current == Some(id) {
                        self.current = None;
                    }
                } else {
                    self.insert_line_after(id, text, at.indentation)?;
                }
            }
            None => {
                self.insert_line_at(at.line_count, text, at.indentation)?;
                if let Some(next) = self.line_id_at(at.line_count + 1) {
                    self.set_indentation(next, at.indentation + 1);
                }
            }
        }
        Ok(())
    }
}

/// A captured write position shared by [`Anchor`] and
/// [`PossibleMultilineFragment`].
///
/// `line` is the line that was open at capture time; without one, the
/// position is the slot at index `line_count`, where the next line lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Position {
    line: Option<LineId>,
    offset: usize,
    line_count: usize,
    indentation: usize,
}

impl Position {
    fn capture(graph: &RenderedGraph) -> Self {
        let line = graph.current;
        Position {
            line,
            offset: line.map_or(0, |id| graph.line_len(id)),
            line_count: graph.line_count(),
            indentation: graph.indentation,
        }
    }

    /// The line holding the position: the open line, or the first line
    /// written after capture.
    fn target(&self, graph: &RenderedGraph) -> Option<LineId> {
        self.line.or_else(|| graph.line_id_at(self.line_count))
    }
}
