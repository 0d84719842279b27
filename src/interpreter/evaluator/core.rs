use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{evaluator::builtin, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the builtins.
///
/// Builtins return either a value or the `EvalError` describing the failure;
/// the dispatcher folds the error back into a [`Value::Error`].
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a value, consuming it.
///
/// Numbers, errors, symbols and Q-expressions are already values and are
/// returned unchanged. S-expressions are reduced.
///
/// # Example
/// ```
/// use sammallus::interpreter::{evaluator::core::evaluate, value::core::Value};
///
/// let sum = Value::sexpr().append(Value::symbol("+"))
///                         .append(Value::number(1))
///                         .append(Value::number(2));
///
/// assert_eq!(evaluate(sum), Value::number(3));
/// ```
#[must_use]
pub fn evaluate(value: Value) -> Value {
    match value {
        Value::SExpr(_) => ensure_sufficient_stack(|| reduce_sexpr(value)),
        other => other,
    }
}

/// Reduces an S-expression to a single value.
///
/// 1. Every child is evaluated in place, left to right.
/// 2. The first child that is now an error becomes the whole result.
/// 3. `()` stays `()`.
/// 4. A single child is returned on its own.
/// 5. Otherwise the leading child must be a symbol, which is dispatched to
///    the builtins with the remaining children as arguments.
fn reduce_sexpr(mut expr: Value) -> Value {
    for index in 0..expr.child_count() {
        expr.map_child_in_place(index, evaluate);
    }

    if let Some(index) = expr.children().iter().position(Value::is_error) {
        debug!(index, "error short-circuits S-expression");
        return expr.take_child(index);
    }

    match expr.child_count() {
        0 => expr,
        1 => expr.take_child(0),
        _ => match expr.pop_child(0) {
            Value::Symbol(name) => builtin::call(&name, expr),
            other => Value::error(EvalError::NotASymbol { found: other.kind() }),
        },
    }
}
