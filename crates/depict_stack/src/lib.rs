//! Stack growth for recursive rendering.
//!
//! Every child render re-enters the strategy dispatcher, so the native stack
//! grows with the depth of the value graph. `FormattingOptions::max_depth`
//! bounds that depth, but callers are free to raise it far beyond what a
//! default thread stack can hold. Each dispatch step is therefore wrapped in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```
/// use depict_stack::ensure_sufficient_stack;
///
/// fn nesting(levels: u32) -> u32 {
///     ensure_sufficient_stack(|| if levels == 0 { 0 } else { nesting(levels - 1) + 1 })
/// }
///
/// assert_eq!(nesting(64), 64);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
