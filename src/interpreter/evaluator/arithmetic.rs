use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{builtin::Arity, core::EvalResult},
        value::core::Value,
    },
};

/// The four arithmetic builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// The symbol this operator is dispatched by.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Combines the running result with the next operand.
    ///
    /// Division truncates toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero for `/`.
    /// - `Overflow` if the result leaves the `i64` range.
    pub fn apply(self, lhs: i64, rhs: i64) -> EvalResult<i64> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            },
        };

        result.ok_or(EvalError::Overflow)
    }
}

/// Folds `op` over the numeric arguments from left to right.
///
/// A single argument to `-` is negated; a single argument to any other
/// operator is returned as is. Every argument is type checked before any
/// arithmetic happens.
///
/// # Errors
/// - `NonNumber` if any argument is not a number.
/// - `ArgumentCount` if there are no arguments.
/// - `DivisionByZero` if any divisor of `/` is zero, checked before folding.
/// - Any other error from [`Operator::apply`]; the fold stops at the first one.
///
/// # Example
/// ```
/// use sammallus::interpreter::{
///     evaluator::arithmetic::{Operator, fold},
///     value::core::Value,
/// };
///
/// let args = Value::sexpr().append(Value::number(10))
///                          .append(Value::number(3))
///                          .append(Value::number(2));
/// assert_eq!(fold(Operator::Subtract, args), Ok(Value::number(5)));
///
/// let args = Value::sexpr().append(Value::number(4));
/// assert_eq!(fold(Operator::Subtract, args), Ok(Value::number(-4)));
/// ```
pub fn fold(op: Operator, args: Value) -> EvalResult<Value> {
    let numbers = args.children()
                      .iter()
                      .map(|arg| match arg {
                          Value::Number(n) => Ok(*n),
                          _ => Err(EvalError::NonNumber),
                      })
                      .collect::<EvalResult<Vec<i64>>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(EvalError::ArgumentCount { function: op.symbol(),
                                              expected: Arity::AtLeast(1),
                                              found:    0, });
    };

    if op == Operator::Subtract && rest.is_empty() {
        return first.checked_neg().map(Value::number).ok_or(EvalError::Overflow);
    }

    // A zero divisor anywhere wins over an overflow at an earlier step.
    if op == Operator::Divide && rest.contains(&0) {
        return Err(EvalError::DivisionByZero);
    }

    rest.iter()
        .try_fold(first, |acc, &n| op.apply(acc, n))
        .map(Value::number)
}
