use std::rc::{Rc, Weak};

use pretty_assertions::assert_eq;

use super::*;

/// Renders integers as `#n`.
struct Hash;

impl Strategy for Hash {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Value::Int(n) = value {
            graph.add_fragment(&format!("#{n}"))?;
        }
        Ok(())
    }
}

/// Renders integers as `n!`.
struct Bang;

impl Strategy for Bang {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Value::Int(n) = value {
            graph.add_fragment(&format!("{n}!"))?;
        }
        Ok(())
    }
}

/// Renders `Point` objects as `(x, y)` through the child callback.
struct PointStrategy {
    label: &'static str,
}

impl Strategy for PointStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|node| node.borrow().type_name() == "Point")
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        let Value::Object(node) = value else {
            return Ok(());
        };
        graph.add_fragment("(")?;
        for (index, (_, member)) in node.member_list().iter().enumerate() {
            if index > 0 {
                graph.add_fragment(", ")?;
            }
            child.render_child(self.label, member, graph)?;
        }
        graph.add_fragment(")")?;
        Ok(())
    }
}

/// Calls back into the formatter that is rendering it.
struct Reenter {
    formatter: Weak<Formatter>,
}

impl Strategy for Reenter {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Str(text) if &**text == "again")
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Some(formatter) = self.formatter.upgrade() {
            let nested = formatter.render(value)?;
            graph.add_fragment(&nested)?;
        }
        Ok(())
    }
}

fn point(x: i32, y: i32) -> Value {
    Value::object("Point", [("X", x.into()), ("Y", y.into())])
}

#[test]
fn custom_strategy_takes_priority_over_builtins() {
    let mut formatter = Formatter::new();
    formatter.add_strategy(Hash);
    let value = Value::list([Value::from(1), Value::from(2)]);
    assert_eq!(formatter.render(&value).unwrap(), "{#1, #2}");
}

#[test]
fn earlier_custom_strategies_win() {
    let mut formatter = Formatter::new();
    formatter.add_strategy(Hash);
    formatter.add_strategy(Bang);
    assert_eq!(formatter.render(&Value::from(7)).unwrap(), "#7");
}

#[test]
fn custom_strategy_renders_children_through_the_callback() {
    let mut formatter = Formatter::new();
    formatter.add_strategy(PointStrategy { label: "coordinate" });
    let value = Value::list([point(1, 2), point(3, 4)]);
    assert_eq!(formatter.render(&value).unwrap(), "{(1, 2), (3, 4)}");
}

#[test]
fn blank_label_is_a_usage_error() {
    let mut formatter = Formatter::new();
    formatter.add_strategy(PointStrategy { label: "  " });
    assert_eq!(
        formatter.render(&point(1, 2)),
        Err(RenderError::Usage(UsageError::BlankLabel))
    );
}

#[test]
fn reentrant_render_fails_fast() {
    let formatter = Rc::new_cyclic(|weak| {
        let mut formatter = Formatter::new();
        formatter.add_strategy(Reenter {
            formatter: weak.clone(),
        });
        formatter
    });

    let value = Value::list([Value::from("again")]);
    assert_eq!(
        formatter.render(&value),
        Err(RenderError::Usage(UsageError::ReentrantRender))
    );

    // The guard is released after the failed render.
    assert_eq!(formatter.render(&Value::from(1)).unwrap(), "1");
}

#[test]
fn guard_is_released_after_every_render() {
    let formatter = Formatter::with_options(FormattingOptions::default().with_max_lines(1));
    let long = Value::list((0..5).map(|n| point(n, n)));
    let truncated = formatter.render(&long).unwrap();
    assert!(truncated.contains("maximum of 1 lines"));

    assert!(!formatter.rendering.get());
    assert_eq!(formatter.render(&Value::Null).unwrap(), "<null>");
}

#[test]
fn root_is_dispatched_without_a_depth_check() {
    let formatter = Formatter::with_options(FormattingOptions::default().with_max_depth(0));
    assert_eq!(formatter.render(&Value::from(5)).unwrap(), "5");
    assert_eq!(
        formatter.render(&Value::list([Value::list([])])).unwrap(),
        "{Maximum recursion depth of 0 was reached. \
         Increase FormattingOptions::max_depth to get more details.}"
    );
}

#[test]
fn scalar_children_are_never_cut_off() {
    let formatter = Formatter::with_options(FormattingOptions::default().with_max_depth(1));
    let value = Value::list([Value::from(5), Value::list([Value::from(6)])]);
    assert_eq!(
        formatter.render(&value).unwrap(),
        "{5, Maximum recursion depth of 1 was reached. \
         Increase FormattingOptions::max_depth to get more details.}"
    );
}

#[test]
fn root_revisit_is_a_cycle() {
    let list = Value::list([]);
    if let Value::Seq(node) = &list {
        node.push(list.clone());
    }
    assert_eq!(
        Formatter::new().render(&list).unwrap(),
        "{{Cyclic reference to type Sequence detected}}"
    );
}

#[test]
fn options_are_visible() {
    let options = FormattingOptions::default().with_max_items(3);
    assert_eq!(Formatter::with_options(options).options(), &options);
    assert_eq!(Formatter::default().options(), &FormattingOptions::default());
}
