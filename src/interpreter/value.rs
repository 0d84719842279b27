/// The runtime value tree and its ownership operations.
///
/// Declares the `Value` enum, its constructors, and the moves used by the
/// evaluator and builtins to take apart and rebuild expressions: appending,
/// popping and taking children, joining lists, and switching an expression
/// between its executable and quoted forms.
pub mod core;
/// Rendering values back to text.
///
/// Numbers print as decimal digits, symbols verbatim, errors behind an
/// `Error: ` prefix, S-expressions inside `( )` and Q-expressions inside
/// `{ }`.
pub mod display;
