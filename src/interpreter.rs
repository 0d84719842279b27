/// The evaluator module reduces value trees to results.
///
/// Evaluation is a synchronous, depth-first recursive reduction of
/// S-expressions, dispatching to a fixed table of builtins by leading symbol.
///
/// # Responsibilities
/// - Evaluates children in place and short-circuits on the first error.
/// - Collapses single-element S-expressions.
/// - Dispatches arithmetic and list builtins and reports their failures as
///   error values.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// Recognises brackets, integer literals and builtin names, and skips
/// whitespace. Anything else is rejected with its column.
pub mod lexer;
/// Lowering from syntax trees to values.
///
/// Walks the generic syntax tree, turns number and symbol leaves into values,
/// turns groups into S- or Q-expressions, and drops punctuation.
pub mod lower;
/// The parser module builds a generic syntax tree from tokens.
///
/// # Responsibilities
/// - Matches the grammar of numbers, symbols, `( )` and `{ }` groups.
/// - Tags every node with the grammar rules it was matched by.
/// - Rejects malformed or too deeply nested input before it reaches lowering.
pub mod parser;
/// The generic syntax tree exchanged between the parser and lowering.
pub mod syntax;
/// The value module defines the runtime data type.
///
/// # Responsibilities
/// - Defines the `Value` enum and its single-owner tree structure.
/// - Provides the moves used to take expressions apart and rebuild them.
/// - Renders values as text.
pub mod value;
