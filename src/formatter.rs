//! Serializes an expression tree back into parseable source text.
//!
//! Operands are parenthesized so the output re-parses to the same
//! tree despite the grammar's right-associative binding. Only
//! non-negative number leaves render bare; everything else in operand
//! position gets parentheses.

use crate::ast::Expr;

/// Format an expression tree into a source string accepted by
/// [`tokenize`](crate::lexer::tokenize) and
/// [`parse`](crate::parser::parse).
///
/// A `Modulo` node renders as `%`, which the grammar does not accept;
/// trees containing one format fine but do not re-parse.
#[must_use]
pub fn format(expr: &Expr) -> String {
    let mut out = String::new();
    format_expr(&mut out, expr);
    out
}

fn format_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Number(value) => out.push_str(&value.to_string()),
        Expr::UnaryPlus(operand) => {
            out.push('+');
            format_operand(out, operand);
        }
        Expr::UnaryMinus(operand) => {
            out.push('-');
            format_operand(out, operand);
        }
        Expr::Addition(left, right) => format_binary(out, '+', left, right),
        Expr::Subtraction(left, right) => format_binary(out, '-', left, right),
        Expr::Multiplication(left, right) => format_binary(out, '*', left, right),
        Expr::Division(left, right) => format_binary(out, '/', left, right),
        Expr::Modulo(left, right) => format_binary(out, '%', left, right),
    }
}

fn format_binary(out: &mut String, op: char, left: &Expr, right: &Expr) {
    format_operand(out, left);
    out.push(' ');
    out.push(op);
    out.push(' ');
    format_operand(out, right);
}

/// Render a child expression in operand position. Anything the lexer
/// cannot read back as a single number token is parenthesized.
fn format_operand(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Number(value) if !value.is_sign_negative() => {
            out.push_str(&value.to_string());
        }
        _ => {
            out.push('(');
            format_expr(out, expr);
            out.push(')');
        }
    }
}
