use std::fmt;

use crate::ast::Expr;
use crate::token::{Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseErrorKind {
    /// Expected a specific token, found something else or end of input.
    Expected {
        expected: TokenKind,
        found: Option<TokenKind>,
    },
    /// A factor position requires a number or `(`.
    ExpectedOperand { found: TokenKind },
    /// A rule needed a token but the stream was exhausted.
    UnexpectedEnd,
    /// Extra tokens after a complete expression.
    TrailingToken { found: TokenKind },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected {
                expected,
                found: None,
            } => {
                write!(f, "expected {expected}, found end of input")
            }
            Self::Expected {
                expected,
                found: Some(found),
            } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::ExpectedOperand { found } => {
                write!(f, "expected a number or '(', found {found}")
            }
            Self::UnexpectedEnd => {
                write!(f, "unexpected end of input")
            }
            Self::TrailingToken { found } => {
                write!(f, "unexpected trailing {found}")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

/// Parse a token stream into an expression tree.
///
/// Recursive descent over three precedence tiers (expression, term,
/// factor). Binary operators parse a full expression on their
/// right-hand side, so chains group to the right: `2 * 3 + 4` builds
/// `2 * (3 + 4)` and a leading `-` negates the whole rest of the
/// stream. Parentheses override the grouping.
///
/// # Errors
///
/// Returns `ParseError` on a grammar violation at a specific token,
/// on a stream that ends while a rule still needs input, or on
/// leftover tokens after a complete expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if let Some(token) = self.peek() {
            return Err(ParseError {
                kind: ParseErrorKind::TrailingToken { found: token.kind },
                position: token.position,
            });
        }

        Ok(expr)
    }

    /// `expression := ('+' | '-') expression | term (('+' | '-') expression)?`
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().ok_or_else(|| self.unexpected_end())?;

        match token.kind {
            TokenKind::Plus => {
                self.pos += 1;
                let operand = self.parse_expression()?;
                Ok(Expr::unary_plus(operand))
            }
            TokenKind::Minus => {
                self.pos += 1;
                let operand = self.parse_expression()?;
                Ok(Expr::unary_minus(operand))
            }
            _ => {
                let term = self.parse_term()?;

                let Some(next) = self.peek() else {
                    return Ok(term);
                };

                match next.kind {
                    TokenKind::Plus => {
                        self.pos += 1;
                        Ok(Expr::addition(term, self.parse_expression()?))
                    }
                    TokenKind::Minus => {
                        self.pos += 1;
                        Ok(Expr::subtraction(term, self.parse_expression()?))
                    }
                    // Left for an enclosing rule, or reported as a
                    // trailing token at top level.
                    _ => Ok(term),
                }
            }
        }
    }

    /// `term := factor (('*' | '/') expression)?`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let factor = self.parse_factor()?;

        let Some(next) = self.peek() else {
            return Ok(factor);
        };

        match next.kind {
            TokenKind::Star => {
                self.pos += 1;
                Ok(Expr::multiplication(factor, self.parse_expression()?))
            }
            TokenKind::Slash => {
                self.pos += 1;
                Ok(Expr::division(factor, self.parse_expression()?))
            }
            _ => Ok(factor),
        }
    }

    /// `factor := NUMBER | '(' expression ')'`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().ok_or_else(|| self.unexpected_end())?;

        match token.kind {
            TokenKind::LParen => {
                self.pos += 1;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Number(value) => {
                self.pos += 1;
                Ok(Expr::Number(value))
            }
            _ => Err(ParseError {
                kind: ParseErrorKind::ExpectedOperand { found: token.kind },
                position: token.position,
            }),
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(ParseError {
                kind: ParseErrorKind::Expected {
                    expected,
                    found: None,
                },
                position: self.eof_position(),
            }),
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParseError {
                kind: ParseErrorKind::Expected {
                    expected,
                    found: Some(token.kind),
                },
                position: token.position,
            }),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn unexpected_end(&self) -> ParseError {
        ParseError {
            kind: ParseErrorKind::UnexpectedEnd,
            position: self.eof_position(),
        }
    }

    fn eof_position(&self) -> usize {
        self.tokens.last().map_or(0, |token| token.position)
    }
}
