use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        syntax::{SyntaxNode, rule},
        value::core::Value,
    },
    util::{num::parse_integer, stack::ensure_sufficient_stack},
};

/// Converts a syntax tree into an owned value tree.
///
/// Classification goes by tag, most specific rule first:
/// - `number` leaves become [`Value::Number`], or a [`Value::Error`] if the
///   literal does not fit in 64 bits;
/// - `symbol` leaves become [`Value::Symbol`] with their text verbatim;
/// - the root and `s_expression` groups become S-expressions;
/// - `q_expression` groups become Q-expressions.
///
/// Group children are lowered left to right; delimiters and input anchors are
/// skipped.
///
/// # Example
/// ```
/// use sammallus::interpreter::{lower::lower, parser::core::parse};
///
/// let tree = parse("{1 (+ 2 3)}").unwrap();
/// assert_eq!(lower(&tree).to_string(), "({1 (+ 2 3)})");
/// ```
#[must_use]
pub fn lower(node: &SyntaxNode) -> Value {
    if node.tag.has(rule::NUMBER) {
        return lower_number(&node.contents);
    }
    if node.tag.has(rule::SYMBOL) {
        return Value::symbol(&node.contents);
    }

    let group = if node.tag.has(rule::Q_EXPRESSION) {
        Value::qexpr()
    } else {
        Value::sexpr()
    };

    ensure_sufficient_stack(|| {
        node.children
            .iter()
            .filter(|child| !child.is_punctuation())
            .fold(group, |group, child| group.append(lower(child)))
    })
}

fn lower_number(literal: &str) -> Value {
    parse_integer(literal).map_or_else(|reason| {
                                           trace!(literal, ?reason, "rejected integer literal");
                                           Value::error(EvalError::InvalidNumber { literal:
                                                                                       literal.to_string() })
                                       },
                                       Value::number)
}
