//! Stack growth for the recursive formula recognizer.
//!
//! Every parenthesized sub-formula costs one level of recursion in the
//! recognizer, so an input like `(\neg (\neg (\neg ... true)))` nests as
//! deep as the caller cares to write it. [`ensure_sufficient_stack`] grows
//! the stack on demand instead of letting such input abort the process.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
