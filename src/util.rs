/// Integer literal parsing.
///
/// Converts decimal literal text into an `i64` with an explicit result type
/// that separates an out-of-range literal from malformed text, so callers can
/// report each one precisely without any shared parsing state.
pub mod num;
/// Stack growth for deep recursion.
///
/// Lowering and evaluation recurse once per nesting level. The helper in this
/// module grows the stack on demand so deeply nested input cannot overflow it.
pub mod stack;
