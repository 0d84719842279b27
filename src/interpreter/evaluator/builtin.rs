use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            arithmetic::{self, Operator},
            core::EvalResult,
            list,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin takes ownership of its argument list, an expression whose
/// children are the already evaluated arguments, and returns a new value or
/// the error describing why it could not.
type BuiltinFn = fn(Value) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
    /// Any number of arguments, including none.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => write!(f, "any number"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the symbol text,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every symbol the evaluator can dispatch, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"    => { arity: Arity::AtLeast(1), func: |args| arithmetic::fold(Operator::Add, args) },
    "-"    => { arity: Arity::AtLeast(1), func: |args| arithmetic::fold(Operator::Subtract, args) },
    "*"    => { arity: Arity::AtLeast(1), func: |args| arithmetic::fold(Operator::Multiply, args) },
    "/"    => { arity: Arity::AtLeast(1), func: |args| arithmetic::fold(Operator::Divide, args) },
    "list" => { arity: Arity::Any,        func: list::list },
    "head" => { arity: Arity::Exact(1),   func: list::head },
    "tail" => { arity: Arity::Exact(1),   func: list::tail },
    "join" => { arity: Arity::Any,        func: list::join },
    "eval" => { arity: Arity::Exact(1),   func: list::eval },
}

/// Returns `true` if `name` is dispatchable.
///
/// Matching is on the exact symbol text, so no builtin name is ever matched
/// by a part of another.
///
/// # Example
/// ```
/// use sammallus::interpreter::evaluator::builtin::is_builtin;
///
/// assert!(is_builtin("-"));
/// assert!(is_builtin("join"));
/// assert!(!is_builtin("+-"));
/// assert!(!is_builtin("li"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|def| def.name == name)
}

/// Applies the builtin named `name` to `args`.
///
/// `args` is always consumed. Unknown names, arity violations and any failure
/// inside the builtin come back as a [`Value::Error`].
///
/// # Example
/// ```
/// use sammallus::interpreter::{evaluator::builtin::call, value::core::Value};
///
/// let args = Value::sexpr().append(Value::number(7)).append(Value::number(2));
/// assert_eq!(call("/", args), Value::number(3));
///
/// let args = Value::sexpr().append(Value::number(1));
/// assert!(call("sqrt", args).is_error());
/// ```
#[must_use]
pub fn call(name: &str, args: Value) -> Value {
    let Some(def) = lookup(name) else {
        debug!(name, "unknown function");
        return Value::error(EvalError::UnknownFunction { name: name.to_string() });
    };

    let found = args.child_count();
    trace!(builtin = def.name, args = found, "dispatching builtin");

    if !def.arity.check(found) {
        return Value::error(EvalError::ArgumentCount { function: def.name,
                                                       expected: def.arity,
                                                       found });
    }

    (def.func)(args).unwrap_or_else(|e| {
                        debug!(builtin = def.name, error = %e, "builtin failed");
                        Value::error(e)
                    })
}
