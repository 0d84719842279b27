/// Core evaluation logic.
///
/// Contains `evaluate` and the S-expression reduction: children are evaluated
/// in place, the first error wins, single elements collapse, and anything
/// longer is dispatched on its leading symbol.
pub mod core;

/// The builtin dispatch table.
///
/// Maps symbol text to builtin operations together with their arity, and
/// applies a builtin to an argument list.
pub mod builtin;

/// Arithmetic builtins.
///
/// Implements the left folds behind `+`, `-`, `*` and `/`, including unary
/// negation and division-by-zero and overflow checks.
pub mod arithmetic;

/// List builtins.
///
/// Implements `list`, `head`, `tail`, `join` and `eval` over Q-expressions.
/// Reached only through the builtin table, which has already checked arity.
mod list;
