//! Key-value entries: `{[key] = value, …}`.

use depict_layout::{LookaheadSequence, RenderedGraph};

use super::{elision_marker, Delimiters};
use crate::error::RenderError;
use crate::options::FormattingContext;
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

/// Renders [`Value::Map`].
///
/// Entries render as `[key] = value` with the same brace and separator
/// placement as [`SequenceStrategy`](super::SequenceStrategy). A key that
/// wraps puts `] = ` and the value on a new line.
pub struct KeyValueMapStrategy;

impl Strategy for KeyValueMapStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Map(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        context: &FormattingContext,
        child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        let Value::Map(node) = value else {
            return Ok(());
        };
        let len = node.borrow().len();
        let cap = context.max_items();
        let mut delimiters = Delimiters::open(graph, context);
        let mut entries = LookaheadSequence::new(node.iter_entries(), Some(cap));

        while entries.advance() {
            let index = entries.index()?;
            let fragment = delimiters.before_element(graph)?;
            if entries.has_reached_cap() {
                let marker = elision_marker(Some(len), cap);
                graph.with_indentation(|graph| graph.add_fragment(&marker))?;
            } else {
                let (key, item) = entries.current()?;
                graph.with_indentation(|graph| -> Result<(), RenderError> {
                    graph.add_fragment("[")?;
                    let key_fragment = graph.possible_multiline_fragment();
                    child.render_child(&format!("{index}.key"), key, graph)?;
                    key_fragment.add_line_or_fragment(graph, "] = ")?;
                    child.render_child(&format!("{index}.value"), item, graph)
                })?;
            }
            delimiters.after_element(graph, index, fragment)?;

            if entries.is_last() {
                delimiters.close(graph)?;
            }
        }

        if entries.is_empty()? {
            graph.add_fragment("{empty}")?;
        }
        Ok(())
    }
}
