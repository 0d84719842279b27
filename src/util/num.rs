use std::num::IntErrorKind;

/// The reason an integer literal could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerLiteralError {
    /// The literal is well formed but lies outside the `i64` range.
    OutOfRange,
    /// The text is not a decimal integer at all.
    Malformed,
}

/// Parses a decimal integer literal with an optional leading `-`.
///
/// ## Errors
/// - `IntegerLiteralError::OutOfRange` if the digits do not fit in an `i64`.
/// - `IntegerLiteralError::Malformed` for empty or non-decimal text.
///
/// ## Example
/// ```
/// use sammallus::util::num::{IntegerLiteralError, parse_integer};
///
/// assert_eq!(parse_integer("-7"), Ok(-7));
/// assert_eq!(parse_integer("9223372036854775807"), Ok(i64::MAX));
/// assert_eq!(parse_integer("9223372036854775808"), Err(IntegerLiteralError::OutOfRange));
/// assert_eq!(parse_integer("4x"), Err(IntegerLiteralError::Malformed));
/// ```
pub fn parse_integer(text: &str) -> Result<i64, IntegerLiteralError> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IntegerLiteralError::Malformed);
    }

    text.parse::<i64>().map_err(|e| match e.kind() {
                           IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                               IntegerLiteralError::OutOfRange
                           },
                           _ => IntegerLiteralError::Malformed,
                       })
}
