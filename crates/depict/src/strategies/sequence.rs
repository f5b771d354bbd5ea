//! Ordered elements: `{1, 2, 3}`, or one element per line once any element
//! wraps.

use depict_layout::{LookaheadSequence, RenderedGraph};

use super::{elision_marker, Delimiters};
use crate::error::RenderError;
use crate::options::FormattingContext;
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

/// Renders [`Value::Seq`].
///
/// Elements are written first and delimiters placed afterwards: `{1, 2, 3}`
/// while every element fits on one line. As soon as one element wraps, the
/// sequence breaks as a whole, so every element, including those already
/// written inline, gets a line of its own between braces on lines of their
/// own. Elements past `max_items` are summarized by a single elision marker.
/// The source is never iterated past that marker, so generated sequences may
/// be infinite.
pub struct SequenceStrategy;

impl Strategy for SequenceStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Seq(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        context: &FormattingContext,
        child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        let Value::Seq(node) = value else {
            return Ok(());
        };
        let len = node.borrow().len();
        let cap = context.max_items();
        let mut items = LookaheadSequence::new(node.values(), Some(cap));
        let mut delimiters = Delimiters::open(graph, context);

        while items.advance() {
            let index = items.index()?;
            let fragment = delimiters.before_element(graph)?;
            if items.has_reached_cap() {
                let marker = elision_marker(len, cap);
                graph.with_indentation(|graph| graph.add_fragment(&marker))?;
            } else {
                let item = items.current()?;
                let label = index.to_string();
                graph.with_indentation(|graph| child.render_child(&label, item, graph))?;
            }
            delimiters.after_element(graph, index, fragment)?;

            if items.is_last() {
                delimiters.close(graph)?;
            }
        }

        if items.is_empty()? {
            graph.add_fragment("{empty}")?;
        }
        Ok(())
    }
}
