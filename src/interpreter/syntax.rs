use std::fmt;

/// Tag of the root node of every syntax tree.
pub const ROOT_TAG: &str = ">";

/// Names of the grammar rules that appear as tag components.
pub mod rule {
    /// Any expression.
    pub const EXPRESSION: &str = "expression";
    /// An integer literal.
    pub const NUMBER: &str = "number";
    /// A builtin name.
    pub const SYMBOL: &str = "symbol";
    /// A parenthesised group.
    pub const S_EXPRESSION: &str = "s_expression";
    /// A brace-delimited group.
    pub const Q_EXPRESSION: &str = "q_expression";
    /// A single delimiter character.
    pub const CHAR: &str = "char";
    /// A token matched by a pattern, or an input anchor.
    pub const REGEX: &str = "regex";
    /// A token matched by literal text.
    pub const STRING: &str = "string";
}

/// The grammar rules a syntax node was matched by.
///
/// Rules compose: a number reached through the `expression` rule is tagged
/// `expression|number|regex`. The tag is stored as that `|`-separated path and
/// queried by whole components, so `number` never matches a rule that merely
/// contains the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    /// Builds a tag from its rule components, outermost first.
    ///
    /// # Example
    /// ```
    /// use sammallus::interpreter::syntax::Tag;
    ///
    /// let tag = Tag::new(&["expression", "number", "regex"]);
    /// assert_eq!(tag.as_str(), "expression|number|regex");
    /// assert!(tag.has("number"));
    /// assert!(!tag.has("num"));
    /// ```
    #[must_use]
    pub fn new(rules: &[&str]) -> Self {
        Self(rules.join("|"))
    }

    /// The tag of a tree root.
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_TAG.to_string())
    }

    /// Returns `true` if `rule` is one of this tag's components.
    #[must_use]
    pub fn has(&self, rule: &str) -> bool {
        self.0.split('|').any(|component| component == rule)
    }

    /// Returns `true` for the root tag.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_TAG
    }

    /// The full tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the generic syntax tree produced by the parser.
///
/// Leaves carry their literal text in `contents`; groups carry their parts in
/// `children`, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// The rules this node was matched by.
    pub tag:      Tag,
    /// Literal text for tokens; empty for groups and anchors.
    pub contents: String,
    /// Byte column where the node starts in the source.
    pub column:   usize,
    /// Child nodes in source order.
    pub children: Vec<Self>,
}

impl SyntaxNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(tag: Tag, contents: &str, column: usize) -> Self {
        Self { tag,
               contents: contents.to_string(),
               column,
               children: Vec::new() }
    }

    /// Creates a group node with no text of its own.
    #[must_use]
    pub const fn branch(tag: Tag, column: usize, children: Vec<Self>) -> Self {
        Self { tag,
               contents: String::new(),
               column,
               children }
    }

    /// Returns `true` for bracket characters and start/end anchors, which
    /// carry no meaning once the tree has been built.
    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        matches!(self.contents.as_str(), "(" | ")" | "{" | "}")
        || (self.tag.has(rule::REGEX) && self.contents.is_empty())
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if self.children.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f, " @{}", self.column)?;

        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for SyntaxNode {
    /// Writes the tree one node per line, children indented under their
    /// parent, each followed by its column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
