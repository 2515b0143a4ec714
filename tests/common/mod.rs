#![allow(dead_code)]

use mathexpr_rs::{Expr, format, parse_str};

/// Helper: evaluate a source line, panicking on any failure.
pub fn eval(input: &str) -> f64 {
    mathexpr_rs::eval_str(input)
        .unwrap_or_else(|e| panic!("failed to evaluate {input:?}: {e}"))
}

/// Helper: format a tree, parse it back, assert structural equality.
pub fn assert_format_roundtrip(expr: &Expr) {
    let formatted = format(expr);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        expr, &parsed,
        "round-trip mismatch\n--- formatted ---\n{formatted}"
    );
}
