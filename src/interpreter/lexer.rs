use logos::Logos;

/// Represents a lexical token in the source input.
///
/// The language has only brackets, integer literals and a fixed set of
/// symbols, so every recognised piece of text maps onto one of these
/// variants. Anything else is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens such as `42` or `-7`. The text is kept verbatim;
    /// range checking happens when the literal is lowered.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Builtin names: the operators `+ - * /` and the keywords `list`,
    /// `head`, `tail`, `join` and `eval`.
    #[token("+", |lex| lex.slice().to_string())]
    #[token("-", |lex| lex.slice().to_string())]
    #[token("*", |lex| lex.slice().to_string())]
    #[token("/", |lex| lex.slice().to_string())]
    #[token("list", |lex| lex.slice().to_string())]
    #[token("head", |lex| lex.slice().to_string())]
    #[token("tail", |lex| lex.slice().to_string())]
    #[token("join", |lex| lex.slice().to_string())]
    #[token("eval", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text of a token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Symbol(text) => text,
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Ignored => "",
        }
    }
}

/// Tokenizes `source` into `(token, column)` pairs.
///
/// # Errors
/// Returns the offending slice and its byte column for the first piece of
/// text that is not a token.
///
/// # Example
/// ```
/// use sammallus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(- 5)").unwrap();
/// assert_eq!(tokens[1], (Token::Symbol("-".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Number("5".to_string()), 3));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, (String, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => return Err((lexer.slice().to_string(), column)),
        }
    }

    Ok(tokens)
}
