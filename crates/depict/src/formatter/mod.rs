//! Strategy dispatch and the per-render traversal state.
//!
//! A [`Formatter`] is configured once (options plus custom strategies) and can
//! then render any number of values, one at a time. Each call to
//! [`Formatter::render`] creates a fresh [`GraphPath`] and [`RenderedGraph`];
//! children reach them through the [`ChildRenderer`] handed to strategies.

use std::cell::Cell;

use depict_layout::RenderedGraph;

use crate::error::{RenderError, UsageError};
use crate::options::{FormattingContext, FormattingOptions};
use crate::path::{GraphPath, Visit};
use crate::strategies::{builtin, MemberStrategy};
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

/// Handles every value no other strategy claims. Always consulted last.
static CATCH_ALL: MemberStrategy = MemberStrategy;

/// Renders value graphs to text.
pub struct Formatter {
    /// Custom strategies first, in registration order, then the built-ins.
    strategies: Vec<Box<dyn Strategy>>,
    custom_count: usize,
    options: FormattingOptions,
    rendering: Cell<bool>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::with_options(FormattingOptions::default())
    }

    pub fn with_options(options: FormattingOptions) -> Self {
        Formatter {
            strategies: builtin(),
            custom_count: 0,
            options,
            rendering: Cell::new(false),
        }
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// Register a strategy. It takes priority over every built-in strategy
    /// and over custom strategies registered after it.
    pub fn add_strategy(&mut self, strategy: impl Strategy + 'static) {
        self.strategies.insert(self.custom_count, Box::new(strategy));
        self.custom_count += 1;
    }

    /// Render `value` and everything reachable from it.
    ///
    /// Output that would exceed `max_lines` is cut off and ends with a notice;
    /// that is not an error. Fails only on API misuse, including calling
    /// `render` again while this formatter is rendering.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn render(&self, value: &Value) -> Result<String, RenderError> {
        let _guard = RenderGuard::enter(&self.rendering)?;

        let mut graph = RenderedGraph::new(self.options.max_lines);
        let mut renderer = ChildRenderer {
            formatter: self,
            path: GraphPath::new(value),
            context: FormattingContext::new(self.options),
        };
        match renderer.dispatch(value, &mut graph) {
            Ok(()) => {}
            Err(RenderError::Overflow(overflow)) => {
                tracing::debug!(max_lines = overflow.max_lines, "render truncated");
            }
            Err(error) => return Err(error),
        }
        Ok(graph.finish())
    }

    fn select(&self, value: &Value) -> &dyn Strategy {
        self.strategies
            .iter()
            .map(|strategy| &**strategy)
            .find(|strategy| strategy.can_handle(value))
            .unwrap_or(&CATCH_ALL)
    }
}

/// Marks a formatter as rendering for the guard's lifetime.
struct RenderGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> RenderGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Result<Self, UsageError> {
        if flag.replace(true) {
            return Err(UsageError::ReentrantRender);
        }
        Ok(RenderGuard { flag })
    }
}

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// State of one top-level render, handed to strategies as their
/// [`RenderChild`] callback.
pub struct ChildRenderer<'f> {
    formatter: &'f Formatter,
    path: GraphPath,
    context: FormattingContext,
}

impl ChildRenderer<'_> {
    /// The chain of labels from the root to the value being formatted.
    pub fn path(&self) -> &GraphPath {
        &self.path
    }

    fn dispatch(&mut self, value: &Value, graph: &mut RenderedGraph) -> Result<(), RenderError> {
        let formatter = self.formatter;
        let strategy = formatter.select(value);
        let context = self.context;
        strategy.format(value, graph, &context, self)
    }

    fn render_visit(
        &mut self,
        visit: Visit,
        value: &Value,
        graph: &mut RenderedGraph,
    ) -> Result<(), RenderError> {
        let max_depth = self.context.max_depth();
        match visit {
            Visit::Revisit => {
                tracing::trace!(path = %self.path, "cyclic reference");
                graph.add_fragment(&format!(
                    "{{Cyclic reference to type {} detected}}",
                    value.type_name()
                ))?;
            }
            // Only values that can nest are cut off, so the scalar members
            // of the deepest rendered level still show.
            Visit::First if value.identity().is_some() && self.path.depth() > max_depth => {
                tracing::trace!(path = %self.path, max_depth, "depth limit");
                graph.add_line_or_fragment(&format!(
                    "Maximum recursion depth of {max_depth} was reached. \
                     Increase FormattingOptions::max_depth to get more details."
                ))?;
            }
            Visit::First => {
                depict_stack::ensure_sufficient_stack(|| self.dispatch(value, graph))?;
            }
        }
        Ok(())
    }
}

impl RenderChild for ChildRenderer<'_> {
    fn render_child(
        &mut self,
        label: &str,
        value: &Value,
        graph: &mut RenderedGraph,
    ) -> Result<(), RenderError> {
        if label.trim().is_empty() {
            return Err(UsageError::BlankLabel.into());
        }
        let visit = self.path.push(label, value);
        let result = self.render_visit(visit, value, graph);
        self.path.pop();
        result
    }
}

#[cfg(test)]
mod tests;
