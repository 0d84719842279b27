//! # sammallus
//!
//! sammallus is a small interpreter for an S-expression language written in
//! Rust. It evaluates numbers, symbols, executable S-expressions `( ... )` and
//! quoted Q-expression lists `{ ... }` with a fixed set of arithmetic and list
//! builtins.
//!
//! Source text flows through four stages: the parser builds a generic syntax
//! tree, lowering turns it into a value tree, the evaluator reduces that tree to
//! a single value, and the printer renders the result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::evaluate, lower::lower, parser::core::parse, value::core::Value},
};

/// Error types for parsing and evaluation.
///
/// Parse errors reject input text before any value exists. Evaluation errors
/// are carried inside `Value::Error` and flow through evaluation like any
/// other value.
pub mod error;
/// The interpreter pipeline: lexer, parser, syntax tree, lowering, values and
/// evaluator.
pub mod interpreter;
/// Line-oriented front end shared by the interactive prompt and script files.
///
/// Reads input as bytes, evaluates one line at a time and keeps going after
/// any parse error, including lines that are not valid UTF-8.
pub mod session;
/// Helpers shared across the interpreter: integer literal parsing and stack
/// growth.
pub mod util;

/// Parses, lowers and evaluates `source`, returning the resulting value.
///
/// A program is the sequence of top-level expressions, evaluated as one
/// S-expression: a single expression yields its own value.
///
/// # Errors
/// Returns a `ParseError` if the text does not match the grammar. Evaluation
/// failures are not errors here; they come back as `Ok(Value::Error(..))`.
///
/// # Examples
/// ```
/// use sammallus::{interpret, interpreter::value::core::Value};
///
/// assert_eq!(interpret("(* 2 (- 5 1))").unwrap(), Value::number(8));
/// assert!(interpret("(/ 1 0)").unwrap().is_error());
/// assert!(interpret("(+ 1").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, ParseError> {
    let tree = parse(source)?;
    let value = lower(&tree);
    debug!(input = %value, "evaluating");
    Ok(evaluate(value))
}

/// Evaluates `source` and renders the result as text.
///
/// # Errors
/// Returns a `ParseError` if the text does not match the grammar.
///
/// # Examples
/// ```
/// use sammallus::get_result;
///
/// assert_eq!(get_result("(join {1 2} {3})").unwrap(), "{1 2 3}");
/// assert_eq!(get_result("(head {})").unwrap(), "Error: function 'head' passed {}");
/// assert_eq!(get_result("").unwrap(), "()");
/// ```
pub fn get_result(source: &str) -> Result<String, ParseError> {
    interpret(source).map(|value| value.to_string())
}
