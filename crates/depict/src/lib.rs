//! Depict
//!
//! Renders arbitrary value graphs (possibly cyclic, possibly deep, possibly
//! infinite) into deterministic text for diagnostic output.
//!
//! ```
//! let value = depict::Value::list([1.into(), 2.into(), 3.into()]);
//! assert_eq!(depict::render(&value).ok().as_deref(), Some("{1, 2, 3}"));
//! ```
//!
//! # Architecture
//!
//! - [`Formatter`] owns the ordered [`Strategy`] list and dispatches each
//!   value to the first strategy that can handle it.
//! - Strategies write through [`RenderedGraph`] and render children through
//!   [`RenderChild`], which tracks the [`GraphPath`] to flag cycles and
//!   enforce the depth limit.
//! - Line layout, the line cap and retroactive delimiter placement live in
//!   [`depict_layout`].
//!
//! # Limits
//!
//! | Option | Default | When reached |
//! |--------|---------|--------------|
//! | `max_depth` | 5 | composite child replaced by a depth-limit placeholder |
//! | `max_items` | 32 | remaining elements replaced by `…N more…` |
//! | `max_lines` | 100 | output cut off with a notice |
//!
//! Reaching a limit is never an error.

mod error;
mod formatter;
mod options;
mod path;
pub mod strategies;
mod strategy;
mod value;

use std::sync::Once;

pub use depict_layout::{Anchor, Overflow, PossibleMultilineFragment, RenderedGraph, StateError};
pub use error::{RenderError, UsageError};
pub use formatter::{ChildRenderer, Formatter};
pub use options::{
    FormattingContext, FormattingOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS, DEFAULT_MAX_LINES,
};
pub use path::{GraphPath, Visit, ROOT_LABEL};
pub use strategy::{RenderChild, Strategy};
pub use value::{Generator, Identity, MapValue, Node, ObjectValue, Sequence, Value};

/// Render `value` with the default options and built-in strategies.
pub fn render(value: &Value) -> Result<String, RenderError> {
    Formatter::new().render(value)
}

/// Render `value` with `options` and the built-in strategies.
pub fn render_with(value: &Value, options: FormattingOptions) -> Result<String, RenderError> {
    Formatter::with_options(options).render(value)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing with `RUST_LOG` environment variable filtering.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. For example `RUST_LOG=depict=trace` logs every cycle and
/// depth-limit placeholder together with the path that produced it.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
