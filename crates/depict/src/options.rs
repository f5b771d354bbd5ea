//! Formatting options.

/// Default maximum nesting depth, counting the root.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default maximum number of output lines before the overflow notice.
pub const DEFAULT_MAX_LINES: usize = 100;

/// Default maximum number of elements rendered per sequence or map.
pub const DEFAULT_MAX_ITEMS: usize = 32;

/// Options controlling one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormattingOptions {
    /// Put every element of a sequence or map on its own line, even when the
    /// elements would fit on one.
    pub use_line_breaks: bool,

    /// Values nested deeper than this are replaced by a placeholder.
    /// The root is at depth 1.
    pub max_depth: usize,

    /// Output is cut off with a notice once it would exceed this many lines.
    pub max_lines: usize,

    /// Elements beyond this many are summarized by an elision marker.
    pub max_items: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            use_line_breaks: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_lines: DEFAULT_MAX_LINES,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl FormattingOptions {
    #[must_use]
    pub fn with_line_breaks(self, use_line_breaks: bool) -> Self {
        Self {
            use_line_breaks,
            ..self
        }
    }

    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    #[must_use]
    pub fn with_max_lines(self, max_lines: usize) -> Self {
        Self { max_lines, ..self }
    }

    #[must_use]
    pub fn with_max_items(self, max_items: usize) -> Self {
        Self { max_items, ..self }
    }
}

/// Read-only view of the options handed to strategies.
#[derive(Debug, Clone, Copy)]
pub struct FormattingContext {
    options: FormattingOptions,
}

impl FormattingContext {
    pub fn new(options: FormattingOptions) -> Self {
        FormattingContext { options }
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    #[inline]
    pub fn use_line_breaks(&self) -> bool {
        self.options.use_line_breaks
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.options.max_depth
    }

    #[inline]
    pub fn max_items(&self) -> usize {
        self.options.max_items
    }
}
