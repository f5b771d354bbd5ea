//! Catch-all: objects member by member, anything else by type name.

use depict_layout::RenderedGraph;

use crate::error::RenderError;
use crate::options::FormattingContext;
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

/// Renders objects as
///
/// ```text
/// Customer
/// {
///     Name = "Ann",
///     Age = 36
/// }
/// ```
///
/// with members in declaration order, and `Customer { }` when there are none.
/// Handles every value, so it must be consulted last.
pub struct MemberStrategy;

impl Strategy for MemberStrategy {
    fn can_handle(&self, _value: &Value) -> bool {
        true
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        let type_name = value.type_name();
        let Value::Object(node) = value else {
            graph.add_fragment(&type_name)?;
            return Ok(());
        };

        let members = node.member_list();
        if members.is_empty() {
            graph.add_fragment(&format!("{type_name} {{ }}"))?;
            return Ok(());
        }

        graph.add_fragment(&type_name)?;
        graph.add_fragment_on_new_line("{")?;
        graph.with_indentation(|graph| -> Result<(), RenderError> {
            for (index, (name, member)) in members.iter().enumerate() {
                if index > 0 {
                    graph.add_fragment_to_last_line(",")?;
                }
                graph.add_fragment_on_new_line(&format!("{name} = "))?;
                child.render_child(name, member, graph)?;
            }
            Ok(())
        })?;
        graph.add_fragment_on_new_line("}")?;
        Ok(())
    }
}
