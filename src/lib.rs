//! Arithmetic expression lexer, parser, and evaluator.
//!
//! A tokenizer, recursive-descent parser, and expression-tree
//! evaluator for arithmetic over doubles with `+ - * / % ( )` and
//! unary `+`/`-`, processed one source line at a time.
//!
//! # Quick start
//!
//! ## Evaluate a source line
//!
//! ```
//! use mathexpr_rs::{tokenize, parse, evaluate};
//!
//! let tokens = tokenize("(2 + 3) * 4").unwrap();
//! let expr = parse(&tokens).unwrap();
//! assert_eq!(evaluate(&expr).unwrap(), 20.0);
//! ```
//!
//! ## Build an expression programmatically
//!
//! ```
//! use mathexpr_rs::{Expr, evaluate, format};
//!
//! let expr = Expr::multiplication(
//!     Expr::addition(Expr::number(2.0), Expr::number(3.0)),
//!     Expr::number(4.0),
//! );
//! assert_eq!(format(&expr), "(2 + 3) * 4");
//! assert_eq!(evaluate(&expr).unwrap(), 20.0);
//! ```
//!
//! # Grammar notes
//!
//! Binary operators parse a full expression on their right-hand side,
//! so chains group to the right: `2 * 3 + 4` evaluates as
//! `2 * (3 + 4)`, and a leading `-` negates the whole rest of the
//! line (`-2 + 3` is `-(2 + 3)`). Parenthesize to control grouping.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod evaluator;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Expr;
pub use evaluator::{EvalError, evaluate};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Token, TokenKind};

/// Unified error type covering lexing, parsing, and evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// An evaluation error.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Tokenize and parse a source line in one step.
pub fn parse_str(input: &str) -> Result<Expr, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Tokenize, parse, and evaluate a source line in one step.
pub fn eval_str(input: &str) -> Result<f64, Error> {
    let expr = parse_str(input)?;
    Ok(evaluate(&expr)?)
}
