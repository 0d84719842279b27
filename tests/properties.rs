//! Property-based tests for the interpreter.
//!
//! These tests use proptest to generate random well-formed programs and
//! verify:
//! 1. Evaluation always completes with a value, never a panic.
//! 2. Printing is read-only: printing twice gives the same text.
//! 3. Quoted lists are inert and print back exactly as written.
//! 4. Builtins called outside their argument contract answer with an error
//!    value.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use sammallus::{
    get_result, interpret,
    interpreter::{
        evaluator::builtin::call,
        value::{core::Value, display::print},
    },
};

// -- Source Generation Strategies --

/// Generate an integer literal in canonical form.
fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Small integers, where arithmetic rarely overflows
        (-20i64..=20).prop_map(|n| n.to_string()),
        // Anything in range
        any::<i64>().prop_map(|n| n.to_string()),
    ]
}

/// Generate one of the builtin names.
fn symbol_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["+", "-", "*", "/", "list", "head", "tail", "join", "eval"])
        .prop_map(str::to_string)
}

/// Generate an expression: a leaf, or a group of up to five expressions.
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![number_strategy(), symbol_strategy()];

    leaf.prop_recursive(6, 64, 5, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..5)
                    .prop_map(|cells| format!("({})", cells.join(" "))),
                prop::collection::vec(inner, 0..5)
                    .prop_map(|cells| format!("{{{}}}", cells.join(" "))),
            ]
        })
}

/// Generate an expression that leads with a builtin, so it is usually
/// dispatched rather than rejected for not starting with a symbol.
fn application_strategy() -> impl Strategy<Value = String> {
    (symbol_strategy(), prop::collection::vec(expression_strategy(), 1..4))
        .prop_map(|(symbol, args)| format!("({symbol} {})", args.join(" ")))
}

/// Generate a value that is not a Q-expression.
fn non_list_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![any::<i64>().prop_map(Value::number),
                symbol_strategy().prop_map(|s| Value::symbol(&s)),
                Just(()).prop_map(|()| Value::sexpr()),]
}

fn numbers(values: &[i64]) -> Value {
    values.iter().fold(Value::qexpr(), |list, &n| list.append(Value::number(n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn evaluation_always_produces_a_value(source in expression_strategy()) {
        prop_assert!(get_result(&source).is_ok(), "'{}' was rejected", source);
    }

    #[test]
    fn applications_always_produce_a_value(source in application_strategy()) {
        let value = interpret(&source).unwrap();
        let text = print(&value);
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn printing_is_idempotent(source in expression_strategy()) {
        let value = interpret(&source).unwrap();
        let first = print(&value);
        let second = print(&value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn literals_round_trip(n in any::<i64>()) {
        prop_assert_eq!(get_result(&n.to_string()).unwrap(), n.to_string());
    }

    #[test]
    fn quoted_lists_are_inert(cells in prop::collection::vec(expression_strategy(), 0..5)) {
        let source = format!("{{{}}}", cells.join(" "));
        prop_assert_eq!(get_result(&source).unwrap(), source);
    }

    #[test]
    fn list_builtins_reject_wrong_argument_counts(
        function in prop::sample::select(vec!["head", "tail", "eval"]),
        count in prop_oneof![Just(0usize), 2usize..6],
    ) {
        let args = (0..count).fold(Value::sexpr(), |args, i| {
            args.append(numbers(&[i64::try_from(i).unwrap()]))
        });
        prop_assert!(call(function, args).is_error());
    }

    #[test]
    fn list_builtins_reject_non_lists(
        function in prop::sample::select(vec!["head", "tail", "eval", "join"]),
        arg in non_list_strategy(),
    ) {
        let args = Value::sexpr().append(arg);
        prop_assert!(call(function, args).is_error());
    }

    #[test]
    fn join_rejects_any_non_list_argument(
        before in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..3), 0..3),
        bad in non_list_strategy(),
    ) {
        let args = before.iter().fold(Value::sexpr(), |args, list| args.append(numbers(list)));
        prop_assert!(call("join", args.append(bad)).is_error());
    }

    #[test]
    fn head_and_tail_reject_empty_lists(function in prop::sample::select(vec!["head", "tail"])) {
        prop_assert!(call(function, Value::sexpr().append(Value::qexpr())).is_error());
    }

    #[test]
    fn arithmetic_rejects_non_numbers(
        operator in prop::sample::select(vec!["+", "-", "*", "/"]),
        prefix in prop::collection::vec(1i64..100, 0..3),
        bad in prop_oneof![Just(()).prop_map(|()| Value::qexpr()), symbol_strategy().prop_map(|s| Value::symbol(&s))],
    ) {
        let args = prefix.iter().fold(Value::sexpr(), |args, &n| args.append(Value::number(n)));
        prop_assert!(call(operator, args.append(bad)).is_error());
    }

    #[test]
    fn head_and_tail_split_a_list(list in prop::collection::vec(-1000i64..1000, 1..8)) {
        let head = call("head", Value::sexpr().append(numbers(&list)));
        let tail = call("tail", Value::sexpr().append(numbers(&list)));

        prop_assert_eq!(head, numbers(&list[..1]));
        prop_assert_eq!(tail, numbers(&list[1..]));
    }

    #[test]
    fn sums_match_native_addition(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(get_result(&format!("(+ {a} {b})")).unwrap(), (a + b).to_string());
        prop_assert_eq!(get_result(&format!("(- {a} {b})")).unwrap(), (a - b).to_string());
    }

    #[test]
    fn division_truncates_toward_zero(a in any::<i64>(), b in any::<i64>()) {
        let expected = match a.checked_div(b) {
            Some(q) => q.to_string(),
            None if b == 0 => "Error: division by zero".to_string(),
            None => "Error: integer overflow".to_string(),
        };
        prop_assert_eq!(get_result(&format!("(/ {a} {b})")).unwrap(), expected);
    }
}
