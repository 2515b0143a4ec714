use crate::ast::Expr;

/// Error produced during evaluation.
///
/// Only `Modulo` nodes can fail; every other operation follows
/// IEEE-754 double arithmetic, where division by zero yields an
/// infinity or NaN rather than an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Right-hand side of `%` truncated to zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// `%` operand that cannot be truncated to an unsigned 64-bit
    /// integer (negative, non-finite, or too large).
    #[error("modulo operand {0} is not representable as an unsigned integer")]
    ModuloOperandOutOfRange(f64),
}

/// Evaluate an expression tree to a double.
///
/// A pure post-order walk: no mutation, no external state, and the
/// same tree always produces the identical result.
///
/// # Errors
///
/// Returns `EvalError` when a `Modulo` operand falls outside the
/// unsigned 64-bit range or its right-hand side truncates to zero.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::UnaryPlus(operand) => evaluate(operand),
        Expr::UnaryMinus(operand) => Ok(-evaluate(operand)?),
        Expr::Addition(left, right) => Ok(evaluate(left)? + evaluate(right)?),
        Expr::Subtraction(left, right) => Ok(evaluate(left)? - evaluate(right)?),
        Expr::Multiplication(left, right) => Ok(evaluate(left)? * evaluate(right)?),
        Expr::Division(left, right) => Ok(evaluate(left)? / evaluate(right)?),
        Expr::Modulo(left, right) => modulo(evaluate(left)?, evaluate(right)?),
    }
}

/// Integer remainder on doubles: both operands are truncated to `u64`
/// before taking the remainder, and the result widens back to a
/// double.
#[allow(clippy::cast_precision_loss)]
fn modulo(left: f64, right: f64) -> Result<f64, EvalError> {
    let left = truncate(left)?;
    let right = truncate(right)?;

    if right == 0 {
        return Err(EvalError::ModuloByZero);
    }

    Ok((left % right) as f64)
}

/// Truncate a double toward zero into `u64`, rejecting values the
/// cast cannot represent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> Result<u64, EvalError> {
    // 2^64, the first double above u64::MAX.
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if value.is_finite() && value >= 0.0 && value < LIMIT {
        Ok(value as u64)
    } else {
        Err(EvalError::ModuloOperandOutOfRange(value))
    }
}
