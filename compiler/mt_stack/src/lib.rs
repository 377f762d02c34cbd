//! Stack growth for re-entrant evaluation.
//!
//! Parenthesized sub-expressions, nested literal arrays and block bodies all
//! re-enter the evaluator on the native call stack. A script such as a
//! recursive block (`fact := [:n | ...]`) can nest thousands of those calls,
//! so each re-entry goes through [`ensure_sufficient_stack`], which moves
//! execution onto a freshly allocated segment when the current one is nearly
//! exhausted.
//!
//! On wasm32 the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// within [`RED_ZONE`] of overflowing.
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

/// Bytes of stack left on the current segment, when the platform reports it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_result_through() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
        let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(1));
        assert_eq!(ok, Ok(1));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        fn nest(depth: u32) -> u32 {
            ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
        }

        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn test_remaining_stack_is_reported_natively() {
        if cfg!(not(target_arch = "wasm32")) {
            assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
        }
    }
}
