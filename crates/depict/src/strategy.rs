//! Extension points for rendering one category of value.

use depict_layout::RenderedGraph;

use crate::error::RenderError;
use crate::options::FormattingContext;
use crate::value::Value;

/// A renderer for one category of value.
///
/// Strategies are consulted in a fixed order and the first whose
/// [`can_handle`](Strategy::can_handle) returns true formats the value.
/// Children are rendered through `child`, never by calling
/// [`Formatter::render`](crate::Formatter::render) again, so that cycle,
/// depth and line limits apply to the whole graph.
pub trait Strategy {
    /// Must be pure: it may be asked any number of times per value.
    fn can_handle(&self, value: &Value) -> bool;

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        context: &FormattingContext,
        child: &mut dyn RenderChild,
    ) -> Result<(), RenderError>;
}

/// Callback used by composite strategies to render their children.
pub trait RenderChild {
    /// Render `value` as the child called `label` (a member name, an index).
    ///
    /// Writes a placeholder instead of recursing when `value` is already
    /// being formatted further up or the depth limit is reached.
    fn render_child(
        &mut self,
        label: &str,
        value: &Value,
        graph: &mut RenderedGraph,
    ) -> Result<(), RenderError>;
}
