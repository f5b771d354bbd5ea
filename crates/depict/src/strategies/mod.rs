//! Built-in strategies.
//!
//! Consulted in this order, after any custom strategy:
//!
//! | Strategy | Handles | Output |
//! |----------|---------|--------|
//! | [`NullStrategy`] | `Null` | `<null>` |
//! | [`BoolStrategy`] | `Bool` | `true` |
//! | [`NumberStrategy`] | `Int`, `UInt`, `Float` | `42`, `1.5` |
//! | [`CharStrategy`] | `Char` | `'c'` |
//! | [`StringStrategy`] | `Str` | `"text"` |
//! | [`SequenceStrategy`] | `Seq` | `{1, 2, 3}` |
//! | [`KeyValueMapStrategy`] | `Map` | `{[1] = "one"}` |
//! | [`MemberStrategy`] | anything | `Customer { }` |
//!
//! [`MemberStrategy`] is the catch-all, so it is consulted only after every
//! other strategy declined.

mod leaf;
mod map;
mod member;
mod sequence;

#[cfg(test)]
mod test_helpers;

pub use leaf::{BoolStrategy, CharStrategy, NullStrategy, NumberStrategy, StringStrategy};
pub use map::KeyValueMapStrategy;
pub use member::MemberStrategy;
pub use sequence::SequenceStrategy;

use depict_layout::{Anchor, Overflow, PossibleMultilineFragment, RenderedGraph};
use smallvec::SmallVec;

use crate::options::FormattingContext;
use crate::strategy::Strategy;

/// Built-in strategies in priority order, without the catch-all.
pub(crate) fn builtin() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(NullStrategy),
        Box::new(BoolStrategy),
        Box::new(NumberStrategy),
        Box::new(CharStrategy),
        Box::new(StringStrategy),
        Box::new(SequenceStrategy),
        Box::new(KeyValueMapStrategy),
    ]
}

/// Elision marker for the elements past the item cap.
fn elision_marker(len: Option<usize>, cap: usize) -> String {
    match len {
        Some(len) => format!("…{} more…", len.saturating_sub(cap)),
        None => "…more…".to_owned(),
    }
}

/// Brace and separator placement shared by [`SequenceStrategy`] and
/// [`KeyValueMapStrategy`].
///
/// Elements are written first and their delimiters placed afterwards. While
/// everything fits on the opening line the braces and `, ` separators stay
/// inline. The first time the composite wraps, the opening brace and every
/// element written so far move to lines of their own; from then on each
/// element starts a new line after a trailing `,`.
struct Delimiters {
    opening: PossibleMultilineFragment,
    /// Just after an inline `{`.
    brace: Option<Anchor>,
    /// Just after each inline `, `.
    separators: SmallVec<[Anchor; 8]>,
    broken: bool,
}

impl Delimiters {
    fn open(graph: &RenderedGraph, context: &FormattingContext) -> Self {
        Delimiters {
            opening: graph
                .possible_multiline_fragment()
                .prefer_multiline(context.use_line_breaks()),
            brace: None,
            separators: SmallVec::new(),
            broken: false,
        }
    }

    /// Prepare for the next element. The returned fragment must be handed to
    /// [`after_element`](Self::after_element) once the element is written.
    fn before_element(
        &self,
        graph: &mut RenderedGraph,
    ) -> Result<PossibleMultilineFragment, Overflow> {
        if self.broken {
            graph.add_fragment_to_last_line(",")?;
            graph.end_line();
        }
        Ok(graph.possible_multiline_fragment())
    }

    fn after_element(
        &mut self,
        graph: &mut RenderedGraph,
        index: usize,
        fragment: PossibleMultilineFragment,
    ) -> Result<(), Overflow> {
        if index == 0 {
            self.brace = self.opening.add_fragment_at_start(graph, "{")?;
        } else if !self.broken {
            if let Some(separator) = fragment.add_fragment_at_end_of_line(graph, ", ")? {
                self.separators.push(separator);
            }
        }

        if !self.broken && self.opening.is_wrapped(graph) {
            self.broken = true;
            // Right to left, so the positions still to be split stay valid.
            for separator in self.separators.drain(..).rev() {
                separator.split_line(graph)?;
            }
            if let Some(brace) = self.brace.take() {
                brace.split_line(graph)?;
                self.opening.break_before(graph)?;
            }
        }
        Ok(())
    }

    fn close(&self, graph: &mut RenderedGraph) -> Result<(), Overflow> {
        self.opening.add_line_or_fragment(graph, "}")
    }
}
