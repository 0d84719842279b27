use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte column of the offending input so the front
/// end can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a character sequence or token that does not fit the grammar.
    #[error("Error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending text.
        token:  String,
        /// The byte column where the token starts.
        column: usize,
    },
    /// Reached the end of input while an expression was still open.
    #[error("Error at column {column}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What was still expected, such as `')'`.
        expected: &'static str,
        /// The byte column of the end of input.
        column:   usize,
    },
    /// A closing delimiter did not match the bracket that opened the group.
    #[error("Error at column {column}: Expected '{expected}' but found '{found}'.")]
    MismatchedDelimiter {
        /// The closing delimiter that was expected.
        expected: char,
        /// The closing delimiter that was found.
        found:    char,
        /// The byte column of the found delimiter.
        column:   usize,
    },
    /// Expressions were nested deeper than the interpreter allows.
    #[error("Error at column {column}: Expressions nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum permitted depth.
        limit:  usize,
        /// The byte column of the opening delimiter that exceeded the limit.
        column: usize,
    },
}
