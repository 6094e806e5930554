//! Stack growth for the recursive validator, indexer and output checker.
//!
//! Class nesting depth is unbounded in generated code, so recursive walks
//! grow the stack on demand instead of relying on the thread default.

/// Grow when less than this remains. Same red zone as the front-end passes.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
