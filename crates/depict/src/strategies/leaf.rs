//! Scalars.

use depict_layout::RenderedGraph;

use crate::error::RenderError;
use crate::options::FormattingContext;
use crate::strategy::{RenderChild, Strategy};
use crate::value::Value;

pub struct NullStrategy;

impl Strategy for NullStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Null)
    }

    fn format(
        &self,
        _value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        graph.add_fragment("<null>")?;
        Ok(())
    }
}

pub struct BoolStrategy;

impl Strategy for BoolStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Value::Bool(flag) = value {
            graph.add_fragment(if *flag { "true" } else { "false" })?;
        }
        Ok(())
    }
}

/// Integers in decimal; floats in their shortest round-trip form
/// (`1.0`, `NaN`, `inf`).
pub struct NumberStrategy;

impl Strategy for NumberStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        let text = match value {
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Float(n) => format!("{n:?}"),
            _ => return Ok(()),
        };
        graph.add_fragment(&text)?;
        Ok(())
    }
}

pub struct CharStrategy;

impl Strategy for CharStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Char(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Value::Char(c) = value {
            graph.add_fragment(&format!("'{c}'"))?;
        }
        Ok(())
    }
}

/// Quoted, with embedded line breaks kept as they are.
pub struct StringStrategy;

impl Strategy for StringStrategy {
    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Str(_))
    }

    fn format(
        &self,
        value: &Value,
        graph: &mut RenderedGraph,
        _context: &FormattingContext,
        _child: &mut dyn RenderChild,
    ) -> Result<(), RenderError> {
        if let Value::Str(text) = value {
            graph.add_fragment(&format!("\"{text}\""))?;
        }
        Ok(())
    }
}
