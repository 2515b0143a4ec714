use std::fmt;

use crate::token::{Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Digit-and-dot run that does not parse as a number (`1.2.3`).
    InvalidNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::InvalidNumber(text) => {
                write!(f, "invalid number literal: {text}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} at position {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
}

/// Tokenize an arithmetic source line into a sequence of tokens.
///
/// Whitespace contributes no tokens; every other character must begin
/// an operator, a parenthesis, or a number. Token positions are byte
/// offsets into `input`, strictly increasing left to right.
///
/// # Errors
///
/// Returns `LexError` on a character that cannot start a token, or on
/// a number literal that does not parse as a double.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let position = self.pos;

            match ch {
                ' ' | '\t' | '\n' => self.advance(ch),
                '+' => tokens.push(self.single(TokenKind::Plus, position)),
                '-' => tokens.push(self.single(TokenKind::Minus, position)),
                '*' => tokens.push(self.single(TokenKind::Star, position)),
                '/' => tokens.push(self.single(TokenKind::Slash, position)),
                '%' => tokens.push(self.single(TokenKind::Percent, position)),
                '(' => tokens.push(self.single(TokenKind::LParen, position)),
                ')' => tokens.push(self.single(TokenKind::RParen, position)),
                '0'..='9' => tokens.push(self.read_number(position)?),
                _ => {
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(ch),
                        position,
                    });
                }
            }
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    /// Emit a single-character token and step past it.
    fn single(&mut self, kind: TokenKind, position: usize) -> Token {
        self.pos += 1;
        Token { kind, position }
    }

    /// Greedy run of digits and dots starting at a digit. Placement of
    /// dots is not validated here; the numeric parse of the captured
    /// substring rejects malformed forms.
    fn read_number(&mut self, start: usize) -> Result<Token, LexError> {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                self.advance(ch);
            } else {
                break;
            }
        }

        let text = &self.src[start..self.pos];
        let value: f64 = text.parse().map_err(|_| LexError {
            kind: LexErrorKind::InvalidNumber(text.to_string()),
            position: start,
        })?;

        Ok(Token {
            kind: TokenKind::Number(value),
            position: start,
        })
    }
}
