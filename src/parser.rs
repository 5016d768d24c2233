//! Recursive-descent parser turning a token sequence into a formula tree.
//!
//! The grammar is deliberately unambiguous: binary connectives always carry
//! their own parentheses, so no precedence table is needed.
//!
//! ```text
//! formula := "(" formula binop formula ")" | "¬" formula | atom | "⊥"
//! binop   := "∨" | "∧" | "→"
//! ```

use crate::formula::Formula;
use crate::lexer::{tokenize, Token};
use crate::Error;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token: expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: Token,
    },
    #[error("unexpected trailing tokens after a complete formula")]
    TrailingInput,
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser { tokens, position: 0 }
    }

    /// Parses a single formula, consuming every token up to and including
    /// [`Token::Eof`]. Anything left over is a [`ParseError::TrailingInput`].
    pub fn parse(mut self) -> Result<Formula, ParseError> {
        let formula = self.formula()?;
        if self.current() != Token::Eof {
            return Err(ParseError::TrailingInput);
        }
        Ok(formula)
    }

    fn current(&self) -> Token {
        self.tokens.get(self.position).copied().unwrap_or(Token::Eof)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn eat(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        let found = self.current();
        if found == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                expected: description,
                found,
            })
        }
    }

    fn formula(&mut self) -> Result<Formula, ParseError> {
        match self.current() {
            Token::LeftParen => self.binary(),
            Token::Not => {
                self.advance();
                Ok(Formula::negation(self.formula()?))
            }
            Token::Atom(name) => {
                self.advance();
                Ok(Formula::atom(name.to_string()))
            }
            Token::Falsum => {
                self.advance();
                Ok(Formula::Falsum)
            }
            found => Err(ParseError::Unexpected {
                expected: "a formula",
                found,
            }),
        }
    }

    fn binary(&mut self) -> Result<Formula, ParseError> {
        self.eat(Token::LeftParen, "'('")?;
        let left = self.formula()?;
        let connective = self.current();
        match connective {
            Token::Or | Token::And | Token::Implies => self.advance(),
            found => {
                return Err(ParseError::Unexpected {
                    expected: "a binary connective",
                    found,
                })
            }
        }
        let right = self.formula()?;
        self.eat(Token::RightParen, "')'")?;
        Ok(match connective {
            Token::Or => Formula::disjunction(left, right),
            Token::And => Formula::conjunction(left, right),
            Token::Implies => Formula::implication(left, right),
            _ => unreachable!("connective was checked above"),
        })
    }
}

/// Tokenizes and parses `input` as a single formula.
pub fn parse_formula(input: &str) -> Result<Formula, Error> {
    let tokens = tokenize(input)?;
    Ok(Parser::new(tokens).parse()?)
}

/// Like [`parse_formula`], but retries once with outer parentheses added, so
/// a top-level binary formula may be written without them: `A ∧ B`.
///
/// If the retry fails too, the error for the input as typed is returned.
pub fn parse_formula_relaxed(input: &str) -> Result<Formula, Error> {
    match parse_formula(input) {
        Ok(formula) => Ok(formula),
        Err(err) => parse_formula(&format!("({input})")).map_err(|_| err),
    }
}
