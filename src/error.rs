/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// text into a syntax tree. Parse errors are reported before any value exists,
/// so they travel through `Result` rather than through the value channel.
pub mod parse_error;
/// Evaluation errors.
///
/// Defines every failure that can happen while lowering or evaluating a value
/// tree. These errors never escape as `Err`: they are wrapped in
/// `Value::Error` and flow through evaluation like any other result.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
