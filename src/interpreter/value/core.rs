use std::mem;

use crate::error::EvalError;

/// Represents a runtime value in the interpreter.
///
/// A value is a tree: the two expression variants own their children through a
/// `Vec`, and nothing else can hold on to them. Values are neither `Clone` nor
/// reference counted; every child has exactly one owner and is released when
/// that owner is dropped.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Number(i64),
    /// An error produced by lowering or evaluation. Errors are never evaluated
    /// further; the first one found wins.
    Error(EvalError),
    /// An operator or builtin name such as `+` or `head`.
    Symbol(String),
    /// An executable expression, `( ... )`.
    SExpr(Vec<Self>),
    /// A quoted list literal, `{ ... }`. Never evaluated automatically.
    QExpr(Vec<Self>),
}

/// The variant tag of a [`Value`], without its payload.
///
/// Used to describe values in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Number`]
    Number,
    /// [`Value::Error`]
    Error,
    /// [`Value::Symbol`]
    Symbol,
    /// [`Value::SExpr`]
    SExpr,
    /// [`Value::QExpr`]
    QExpr,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::Error => write!(f, "Error"),
            Self::Symbol => write!(f, "Symbol"),
            Self::SExpr => write!(f, "S-Expression"),
            Self::QExpr => write!(f, "Q-Expression"),
        }
    }
}

impl Default for Value {
    /// The empty S-expression, `()`.
    fn default() -> Self {
        Self::sexpr()
    }
}

impl Value {
    /// Creates a number value.
    #[must_use]
    pub const fn number(n: i64) -> Self {
        Self::Number(n)
    }

    /// Creates an error value.
    #[must_use]
    pub const fn error(error: EvalError) -> Self {
        Self::Error(error)
    }

    /// Creates a symbol value holding its own copy of `name`.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    /// Creates an empty S-expression.
    #[must_use]
    pub const fn sexpr() -> Self {
        Self::SExpr(Vec::new())
    }

    /// Creates an empty Q-expression.
    #[must_use]
    pub const fn qexpr() -> Self {
        Self::QExpr(Vec::new())
    }

    /// Returns the variant tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Error(_) => ValueKind::Error,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::SExpr(_) => ValueKind::SExpr,
            Self::QExpr(_) => ValueKind::QExpr,
        }
    }

    /// Returns `true` for [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the children of an S- or Q-expression, or an empty slice for
    /// leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::SExpr(cells) | Self::QExpr(cells) => cells,
            Self::Number(_) | Self::Error(_) | Self::Symbol(_) => &[],
        }
    }

    /// Consumes an expression and returns its children; leaves yield none.
    #[must_use]
    pub fn into_children(self) -> Vec<Self> {
        match self {
            Self::SExpr(cells) | Self::QExpr(cells) => cells,
            Self::Number(_) | Self::Error(_) | Self::Symbol(_) => Vec::new(),
        }
    }

    /// Mutable access to the child sequence of an expression.
    pub(crate) fn cells_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::SExpr(cells) | Self::QExpr(cells) => Some(cells),
            Self::Number(_) | Self::Error(_) | Self::Symbol(_) => None,
        }
    }

    /// Number of children; zero for leaves.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Moves `child` onto the end of this expression and returns the
    /// expression.
    ///
    /// The receiver is consumed; use only the returned value afterwards.
    ///
    /// # Panics
    /// Panics if `self` is not an S- or Q-expression. Only lowering and the
    /// builtins append, and they only ever append to expressions.
    ///
    /// # Example
    /// ```
    /// use sammallus::interpreter::value::core::Value;
    ///
    /// let list = Value::qexpr().append(Value::number(1)).append(Value::number(2));
    /// assert_eq!(list.to_string(), "{1 2}");
    /// ```
    #[must_use]
    pub fn append(mut self, child: Self) -> Self {
        let kind = self.kind();
        match self.cells_mut() {
            Some(cells) => cells.push(child),
            None => panic!("cannot append a child to a {kind}"),
        }
        self
    }

    /// Removes the child at `index` and hands ownership of it to the caller.
    ///
    /// The remaining children keep their order.
    ///
    /// # Panics
    /// Panics if `self` is not an expression or `index` is out of bounds.
    ///
    /// # Example
    /// ```
    /// use sammallus::interpreter::value::core::Value;
    ///
    /// let mut list = Value::qexpr().append(Value::number(1)).append(Value::number(2));
    /// assert_eq!(list.pop_child(0), Value::number(1));
    /// assert_eq!(list.to_string(), "{2}");
    /// ```
    pub fn pop_child(&mut self, index: usize) -> Self {
        let kind = self.kind();
        match self.cells_mut() {
            Some(cells) => cells.remove(index),
            None => panic!("cannot pop a child from a {kind}"),
        }
    }

    /// Pops the child at `index` and drops everything else.
    ///
    /// This is how a builtin keeps exactly one of its arguments.
    ///
    /// # Panics
    /// Same contract as [`Value::pop_child`].
    #[must_use]
    pub fn take_child(mut self, index: usize) -> Self {
        self.pop_child(index)
    }

    /// Moves every child of `other` onto the end of `self`, in order, and
    /// returns `self`. `other` is consumed.
    ///
    /// # Panics
    /// Panics if `self` is not an expression.
    ///
    /// # Example
    /// ```
    /// use sammallus::interpreter::value::core::Value;
    ///
    /// let x = Value::qexpr().append(Value::number(1));
    /// let y = Value::qexpr().append(Value::number(2)).append(Value::number(3));
    ///
    /// assert_eq!(x.join_into(y).to_string(), "{1 2 3}");
    /// ```
    #[must_use]
    pub fn join_into(mut self, other: Self) -> Self {
        let kind = self.kind();
        let Some(cells) = self.cells_mut() else {
            panic!("cannot join into a {kind}");
        };

        if let Self::SExpr(mut moved) | Self::QExpr(mut moved) = other {
            cells.append(&mut moved);
        }

        self
    }

    /// Reclassifies an S-expression as a Q-expression, keeping its children.
    ///
    /// Any other value is returned unchanged.
    #[must_use]
    pub fn quote(self) -> Self {
        match self {
            Self::SExpr(cells) => Self::QExpr(cells),
            other => other,
        }
    }

    /// Reclassifies a Q-expression as an S-expression, keeping its children.
    ///
    /// Any other value is returned unchanged.
    #[must_use]
    pub fn unquote(self) -> Self {
        match self {
            Self::QExpr(cells) => Self::SExpr(cells),
            other => other,
        }
    }

    /// Replaces the child at `index` with the result of `f` applied to it.
    ///
    /// The child is moved out, so `f` receives ownership; an empty S-expression
    /// stands in for it until `f` returns.
    pub(crate) fn map_child_in_place(&mut self, index: usize, f: impl FnOnce(Self) -> Self) {
        if let Some(slot) = self.cells_mut().and_then(|cells| cells.get_mut(index)) {
            let child = mem::take(slot);
            *slot = f(child);
        }
    }
}
