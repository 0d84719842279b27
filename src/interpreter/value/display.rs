use std::fmt;

use crate::interpreter::value::core::Value;

/// Prefix written in front of every error message.
pub const ERROR_PREFIX: &str = "Error: ";

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "{ERROR_PREFIX}{e}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::SExpr(cells) => write_expression(f, cells, '(', ')'),
            Self::QExpr(cells) => write_expression(f, cells, '{', '}'),
        }
    }
}

/// Writes `cells` space separated between `open` and `close`.
fn write_expression(f: &mut fmt::Formatter<'_>,
                    cells: &[Value],
                    open: char,
                    close: char)
                    -> fmt::Result {
    write!(f, "{open}")?;

    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }

        write!(f, "{cell}")?;
    }

    write!(f, "{close}")
}

/// Renders a value to text without consuming or changing it.
///
/// # Example
/// ```
/// use sammallus::interpreter::value::{core::Value, display::print};
///
/// let list = Value::qexpr().append(Value::symbol("+")).append(Value::number(-3));
///
/// assert_eq!(print(&list), "{+ -3}");
/// assert_eq!(print(&list), "{+ -3}");
/// ```
#[must_use]
pub fn print(value: &Value) -> String {
    value.to_string()
}
