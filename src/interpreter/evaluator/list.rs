use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        value::core::{Value, ValueKind},
    },
};

/// `list`: turns the argument list itself into a Q-expression.
///
/// No copy is made; the same children change wrapper.
pub fn list(args: Value) -> EvalResult<Value> {
    Ok(args.quote())
}

/// `head`: keeps only the first element of a non-empty Q-expression.
///
/// The dispatch table guarantees exactly one argument.
///
/// # Errors
/// - `WrongType` if the argument is not a Q-expression.
/// - `EmptyList` if it is `{}`.
pub fn head(args: Value) -> EvalResult<Value> {
    let mut list = single_non_empty_list("head", args)?;
    if let Some(cells) = list.cells_mut() {
        cells.truncate(1);
    }
    Ok(list)
}

/// `tail`: drops the first element of a non-empty Q-expression and keeps the
/// rest in order.
///
/// # Errors
/// Same as [`head`].
pub fn tail(args: Value) -> EvalResult<Value> {
    let mut list = single_non_empty_list("tail", args)?;
    drop(list.pop_child(0));
    Ok(list)
}

/// `join`: concatenates Q-expressions in argument order.
///
/// Every argument is checked before anything is moved.
///
/// # Errors
/// - `WrongType` for the first argument that is not a Q-expression.
pub fn join(args: Value) -> EvalResult<Value> {
    if let Some(bad) = args.children().iter().find(|arg| !matches!(arg, Value::QExpr(_))) {
        return Err(EvalError::WrongType { function: "join",
                                          expected: ValueKind::QExpr,
                                          found:    bad.kind(), });
    }

    let mut lists = args.into_children().into_iter();
    let first = lists.next().unwrap_or_else(Value::qexpr);

    Ok(lists.fold(first, Value::join_into))
}

/// `eval`: turns a Q-expression into an S-expression and evaluates it.
///
/// # Errors
/// - `WrongType` if the argument is not a Q-expression.
pub fn eval(args: Value) -> EvalResult<Value> {
    let quoted = single_list("eval", args)?;
    Ok(evaluate(quoted.unquote()))
}

fn single_list(function: &'static str, args: Value) -> EvalResult<Value> {
    match args.take_child(0) {
        list @ Value::QExpr(_) => Ok(list),
        other => Err(EvalError::WrongType { function,
                                            expected: ValueKind::QExpr,
                                            found: other.kind() }),
    }
}

fn single_non_empty_list(function: &'static str, args: Value) -> EvalResult<Value> {
    let list = single_list(function, args)?;
    if list.child_count() == 0 {
        return Err(EvalError::EmptyList { function });
    }
    Ok(list)
}
