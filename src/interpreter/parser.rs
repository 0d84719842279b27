/// Parser entry point and shared definitions.
///
/// Turns a whole input line into the root syntax node, wrapping the parsed
/// expressions between start and end anchors, and defines the result type and
/// nesting limit shared by the rest of the parser.
pub mod core;
/// Expression parsing.
///
/// Recursive descent over the token stream for numbers, symbols,
/// S-expression groups and Q-expression groups.
pub mod expression;
