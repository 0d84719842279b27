use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
        syntax::{SyntaxNode, Tag, rule},
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single expression.
///
/// Grammar: `expression := number | symbol | s_expression | q_expression`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Number of groups enclosing this expression.
/// - `end`: Byte column of the end of input, for error reporting.
///
/// # Returns
/// A leaf node for numbers and symbols, a group node otherwise.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               depth: usize,
                               end: usize)
                               -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(text), column)) => {
            Ok(SyntaxNode::leaf(Tag::new(&[rule::EXPRESSION, rule::NUMBER, rule::REGEX]),
                                text,
                                *column))
        },
        Some((Token::Symbol(text), column)) => {
            Ok(SyntaxNode::leaf(Tag::new(&[rule::EXPRESSION, rule::SYMBOL, rule::STRING]),
                                text,
                                *column))
        },
        Some((open @ (Token::LParen | Token::LBrace), column)) => {
            ensure_sufficient_stack(|| parse_group(tokens, open, *column, depth + 1, end))
        },
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.text().to_string(),
                                                                   column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an expression",
                                                       column:   end, }),
    }
}

/// Parses the remainder of a group after its opening delimiter.
///
/// Grammar:
/// ```text
///     s_expression := "(" expression* ")"
///     q_expression := "{" expression* "}"
/// ```
/// The delimiters are kept as `char` children so the tree reflects the source
/// exactly.
fn parse_group<'a, I>(tokens: &mut Peekable<I>,
                      open: &Token,
                      column: usize,
                      depth: usize,
                      end: usize)
                      -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                column });
    }

    let (group_rule, close, expected) = match open {
        Token::LBrace => (rule::Q_EXPRESSION, '}', "'}'"),
        _ => (rule::S_EXPRESSION, ')', "')'"),
    };

    let mut children = vec![SyntaxNode::leaf(Tag::new(&[rule::CHAR]), open.text(), column)];

    loop {
        match tokens.peek().copied() {
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected,
                                                              column: end });
            },
            Some((token @ (Token::RParen | Token::RBrace), close_column)) => {
                tokens.next();

                let found = if *token == Token::RParen { ')' } else { '}' };
                if found != close {
                    return Err(ParseError::MismatchedDelimiter { expected: close,
                                                                 found,
                                                                 column: *close_column });
                }

                children.push(SyntaxNode::leaf(Tag::new(&[rule::CHAR]),
                                               token.text(),
                                               *close_column));
                break;
            },
            Some(_) => children.push(parse_expression(tokens, depth, end)?),
        }
    }

    Ok(SyntaxNode::branch(Tag::new(&[rule::EXPRESSION, group_rule, ">"]), column, children))
}
