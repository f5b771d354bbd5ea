//! Test helpers for rendering one strategy in isolation.

use depict_layout::RenderedGraph;

use crate::error::RenderError;
use crate::options::{FormattingContext, FormattingOptions};
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

/// Child renderer that records labels and writes fixed output.
///
/// Integers and strings render inline. Objects render as a three-line block
/// (`TypeName`, `{`, `}`), so tests can force a child to wrap without a full
/// formatter.
#[derive(Default)]
pub struct MockChild {
    pub labels: Vec<String>,
}

impl RenderChild for MockChild {
    fn render_child(
        &mut self,
        label: &str,
        value: &Value,
        graph: &mut RenderedGraph,
    ) -> Result<(), RenderError> {
        self.labels.push(label.to_owned());
        match value {
            Value::Int(n) => graph.add_fragment(&n.to_string())?,
            Value::Str(text) => graph.add_fragment(&format!("\"{text}\""))?,
            Value::Object(node) => {
                graph.add_fragment(node.borrow().type_name())?;
                graph.add_fragment_on_new_line("{")?;
                graph.add_fragment_on_new_line("}")?;
            }
            other => graph.add_fragment(&other.type_name())?,
        }
        Ok(())
    }
}

pub fn render_with(strategy: &dyn Strategy, value: &Value) -> String {
    render_with_options(strategy, value, FormattingOptions::default()).0
}

/// Output plus the labels of every child rendered.
pub fn render_with_options(
    strategy: &dyn Strategy,
    value: &Value,
    options: FormattingOptions,
) -> (String, Vec<String>) {
    let mut graph = RenderedGraph::new(options.max_lines);
    let mut child = MockChild::default();
    strategy
        .format(value, &mut graph, &FormattingContext::new(options), &mut child)
        .unwrap();
    (graph.finish(), child.labels)
}
