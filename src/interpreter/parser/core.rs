use crate::{
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::expression::parse_expression,
        syntax::{SyntaxNode, Tag, rule},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest permitted nesting of `( )` and `{ }` groups.
///
/// Lowering, evaluation, printing and dropping all recurse once per level, so
/// this bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parses a full input into a syntax tree.
///
/// Grammar: `program := ^ expression* $`
///
/// The returned root is tagged `>` and its children are the start anchor, the
/// top-level expressions in order, and the end anchor.
///
/// # Errors
/// - `UnexpectedToken` for text outside the grammar or a stray closing
///   delimiter.
/// - `UnexpectedEndOfInput` if a group is never closed.
/// - `MismatchedDelimiter` if a group is closed by the wrong bracket.
/// - `NestingTooDeep` if groups nest beyond [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use sammallus::interpreter::parser::core::parse;
///
/// let tree = parse("(+ 1 2)").unwrap();
/// assert!(tree.tag.is_root());
/// assert_eq!(tree.children.len(), 3);
/// assert!(parse("(+ 1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<SyntaxNode> {
    let tokens =
        tokenize(source).map_err(|(token, column)| ParseError::UnexpectedToken { token, column })?;
    let mut iter = tokens.iter().peekable();

    let mut children = vec![SyntaxNode::leaf(Tag::new(&[rule::REGEX]), "", 0)];

    while iter.peek().is_some() {
        children.push(parse_expression(&mut iter, 0, source.len())?);
    }

    children.push(SyntaxNode::leaf(Tag::new(&[rule::REGEX]), "", source.len()));

    Ok(SyntaxNode::branch(Tag::root(), 0, children))
}
