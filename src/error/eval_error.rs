use thiserror::Error;

use crate::interpreter::{evaluator::builtin::Arity, value::core::ValueKind};

/// Represents all errors that can occur during lowering and evaluation.
///
/// An `EvalError` is the payload of [`Value::Error`]. Its `Display` output is
/// the message shown to the user after the `Error: ` prefix.
///
/// [`Value::Error`]: crate::interpreter::value::core::Value::Error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A numeric literal could not be represented as a signed 64-bit integer.
    #[error("invalid number '{literal}': integers must fit in a signed 64-bit range")]
    InvalidNumber {
        /// The literal text as written.
        literal: String,
    },
    /// A builtin received the wrong number of arguments.
    #[error("function '{function}' passed {found} argument(s), expected {expected}")]
    ArgumentCount {
        /// The builtin's name.
        function: &'static str,
        /// The arity the builtin accepts.
        expected: Arity,
        /// The number of arguments actually passed.
        found:    usize,
    },
    /// A list builtin received an argument of the wrong kind.
    #[error("function '{function}' passed {found}, expected {expected}")]
    WrongType {
        /// The builtin's name.
        function: &'static str,
        /// The kind the builtin requires.
        expected: ValueKind,
        /// The kind it was given.
        found:    ValueKind,
    },
    /// An arithmetic operator received something other than a number.
    #[error("cannot operate on non-numbers")]
    NonNumber,
    /// `head` or `tail` was applied to `{}`.
    #[error("function '{function}' passed {{}}")]
    EmptyList {
        /// The builtin's name.
        function: &'static str,
    },
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// An arithmetic result left the signed 64-bit range.
    #[error("integer overflow")]
    Overflow,
    /// A reduced S-expression with two or more elements did not lead with a
    /// symbol.
    #[error("S-expression does not start with a symbol, found {found}")]
    NotASymbol {
        /// The kind of the leading element.
        found: ValueKind,
    },
    /// The leading symbol names no builtin.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The symbol text.
        name: String,
    },
}
