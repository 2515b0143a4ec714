//! Property-based tests with proptest.
//!
//! Generate random expression trees, format them, parse them back,
//! and verify the round-trip rebuilds the same tree. Trees are
//! generated from non-negative finite literals so every formatted
//! literal lexes back as a single number token; `Modulo` is excluded
//! from round-trip properties because the grammar never accepts `%`.

use mathexpr_rs::{Expr, evaluate, format, parse_str, tokenize};
use proptest::prelude::*;

// -- Leaf strategies --

/// Non-negative finite literals whose `Display` output the lexer
/// reads back as one number token (no sign, no exponent).
fn number() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| Expr::number(f64::from(n))),
        (0.0f64..1_000_000.0).prop_map(Expr::number),
    ]
}

/// Expression tree at a given depth (limits recursion). Covers every
/// node kind the grammar can produce.
fn expr(depth: u32) -> BoxedStrategy<Expr> {
    if depth == 0 {
        number().boxed()
    } else {
        prop_oneof![
            3 => number(),
            1 => expr(depth - 1).prop_map(Expr::unary_plus),
            1 => expr(depth - 1).prop_map(Expr::unary_minus),
            1 => (expr(depth - 1), expr(depth - 1))
                .prop_map(|(l, r)| Expr::addition(l, r)),
            1 => (expr(depth - 1), expr(depth - 1))
                .prop_map(|(l, r)| Expr::subtraction(l, r)),
            1 => (expr(depth - 1), expr(depth - 1))
                .prop_map(|(l, r)| Expr::multiplication(l, r)),
            1 => (expr(depth - 1), expr(depth - 1))
                .prop_map(|(l, r)| Expr::division(l, r)),
        ]
        .boxed()
    }
}

/// Like `expr`, with `Modulo` included. These trees format but do not
/// re-parse, so only evaluation properties use them.
fn expr_with_modulo(depth: u32) -> BoxedStrategy<Expr> {
    if depth == 0 {
        number().boxed()
    } else {
        prop_oneof![
            2 => expr(depth),
            1 => (expr(depth - 1), expr(depth - 1))
                .prop_map(|(l, r)| Expr::modulo(l, r)),
        ]
        .boxed()
    }
}

// -- Property tests --

proptest! {
    /// Formatted output never produces a lex error.
    #[test]
    fn format_never_produces_lex_error(e in expr(3)) {
        let formatted = format(&e);
        tokenize(&formatted).map_err(|err| {
            TestCaseError::fail(
                std::format!("lex error: {err}\n--- output ---\n{formatted}"))
        })?;
    }

    /// Formatting then parsing rebuilds the identical tree. This is
    /// the core round-trip property.
    #[test]
    fn format_parse_rebuilds_tree(e in expr(3)) {
        let formatted = format(&e);
        let parsed = parse_str(&formatted)
            .map_err(|err| {
                TestCaseError::fail(
                    std::format!("parse error: {err}\n--- output ---\n{formatted}"))
            })?;
        prop_assert_eq!(e, parsed);
    }

    /// Formatting is idempotent: format(parse(format(x))) == format(x).
    #[test]
    fn format_idempotent(e in expr(3)) {
        let r1 = format(&e);
        let parsed = parse_str(&r1).unwrap();
        let r2 = format(&parsed);
        prop_assert_eq!(r1, r2);
    }

    /// Evaluation is a pure function of the tree: repeated walks give
    /// bit-identical results (including NaN payloads and errors).
    #[test]
    fn evaluation_deterministic(e in expr(4)) {
        let first = evaluate(&e).map(f64::to_bits);
        let second = evaluate(&e).map(f64::to_bits);
        prop_assert_eq!(first, second);
    }

    /// Determinism holds for modulo trees too, where evaluation can
    /// fail. Errors can carry a NaN operand, so compare the rendered
    /// results rather than relying on float equality.
    #[test]
    fn evaluation_deterministic_with_modulo(e in expr_with_modulo(3)) {
        let first = evaluate(&e);
        let second = evaluate(&e);
        prop_assert_eq!(
            std::format!("{first:?}"),
            std::format!("{second:?}")
        );
    }

    /// Evaluation survives the format/parse round-trip bit-for-bit.
    #[test]
    fn evaluation_survives_roundtrip(e in expr(3)) {
        let parsed = parse_str(&format(&e)).unwrap();
        prop_assert_eq!(
            evaluate(&e).map(f64::to_bits),
            evaluate(&parsed).map(f64::to_bits)
        );
    }

    /// A literal's Display text lexes back to the same double.
    #[test]
    fn literal_value_roundtrip(value in 0.0f64..1e9) {
        let tokens = tokenize(&value.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(
            tokens[0].kind,
            mathexpr_rs::TokenKind::Number(value)
        );
    }
}
