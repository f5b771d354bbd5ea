//! Bounded, ordered list of lines.
//!
//! Every operation that grows the collection goes through one check: once the
//! collection holds `max_lines` lines, the next growth attempt appends a blank
//! line and a notice naming the cap, then fails with [`Overflow`]. After that
//! the collection refuses all further growth, so the notice always stays the
//! final line.

use std::fmt;

use crate::error::Overflow;
use crate::line::{Line, LineId};

/// All lines of one top-level render.
#[derive(Debug)]
pub struct LineCollection {
    lines: Vec<Line>,
    max_lines: usize,
    next_id: u32,
    overflowed: bool,
}

impl LineCollection {
    pub fn new(max_lines: usize) -> Self {
        LineCollection {
            lines: Vec::new(),
            max_lines,
            next_id: 0,
            overflowed: false,
        }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cap has been hit and the notice appended.
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Create a detached line with a fresh id. It becomes part of the output
    /// only once added or inserted.
    pub fn new_line(&mut self, indentation: usize) -> Line {
        let id = LineId::new(self.next_id);
        self.next_id += 1;
        Line::new(id, indentation)
    }

    /// Position of a line. Searches from the end, where writes happen.
    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().rposition(|line| line.id() == id)
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.position(id).map(|index| &self.lines[index])
    }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.position(id).map(|index| &mut self.lines[index])
    }

    pub fn line_at(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_at_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Line> {
        self.lines.last_mut()
    }

    /// Append a line.
    pub fn add(&mut self, line: Line) -> Result<LineId, Overflow> {
        let index = self.lines.len();
        self.insert_at(index, line)
    }

    /// Insert a line directly after `after`, or append it if `after` is not
    /// part of the collection.
    pub fn insert_after(&mut self, after: LineId, line: Line) -> Result<LineId, Overflow> {
        let index = self.position(after).map_or(self.lines.len(), |index| index + 1);
        self.insert_at(index, line)
    }

    pub fn insert_at_top(&mut self, line: Line) -> Result<LineId, Overflow> {
        self.insert_at(0, line)
    }

    /// Insert a line at `index`, clamped to the current length.
    pub fn insert_at(&mut self, index: usize, mut line: Line) -> Result<LineId, Overflow> {
        self.reserve()?;
        let id = line.id();
        if !self.lines.is_empty() {
            line.ensure_whitespace();
            if self.lines.len() == 1 {
                self.lines[0].ensure_whitespace();
            }
        }
        let index = index.min(self.lines.len());
        self.lines.insert(index, line);
        Ok(id)
    }

    /// Prepend `fragment` to the sole line, or put it on a new top line when
    /// the collection holds zero or several lines.
    pub fn insert_at_line_start_or_top(
        &mut self,
        fragment: &str,
        indentation: usize,
    ) -> Result<(), Overflow> {
        if let [only] = self.lines.as_mut_slice() {
            only.insert(0, fragment);
            return Ok(());
        }
        let mut line = self.new_line(indentation);
        line.append(fragment);
        line.flush();
        self.insert_at_top(line)?;
        Ok(())
    }

    /// Cut `id` at byte offset `at`. A non-blank remainder is inserted as a
    /// new line right after it and its id returned.
    pub fn split_line(&mut self, id: LineId, at: usize) -> Result<Option<LineId>, Overflow> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let remainder_id = LineId::new(self.next_id);
        let Some(remainder) = self.lines[index].truncate(at, remainder_id) else {
            return Ok(None);
        };
        self.next_id += 1;
        self.insert_at(index + 1, remainder).map(Some)
    }

    /// Whether any line follows `id`.
    pub fn has_lines_beyond(&self, id: LineId) -> bool {
        self.position(id)
            .is_some_and(|index| index + 1 < self.lines.len())
    }

    /// Whether any line follows the line at `index`; for a position before any
    /// line was written (`index == len` at capture time) this asks whether
    /// more than one line has been written since.
    pub fn has_lines_beyond_index(&self, index: usize) -> bool {
        self.lines.len() > index + 1
    }

    fn reserve(&mut self) -> Result<(), Overflow> {
        let overflow = Overflow {
            max_lines: self.max_lines,
        };
        if self.overflowed {
            return Err(overflow);
        }
        if self.lines.len() < self.max_lines {
            return Ok(());
        }

        self.overflowed = true;
        tracing::debug!(max_lines = self.max_lines, "line cap reached");
        let mut blank = self.new_line(0);
        blank.flush();
        let mut notice = self.new_line(0);
        notice.append(&format!(
            "(Output has exceeded the maximum of {} lines. Increase FormattingOptions::max_lines to include more lines.)",
            self.max_lines
        ));
        notice.flush();
        for mut line in [blank, notice] {
            line.ensure_whitespace();
            self.lines.push(line);
        }
        if let Some(first) = self.lines.first_mut() {
            first.ensure_whitespace();
        }
        Err(overflow)
    }
}

impl fmt::Display for LineCollection {
    /// Lines joined by `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
