//! Lexes raw formula text into a flat token sequence.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A single lexical token of the formula surface syntax.
///
/// ASCII fallbacks are accepted alongside the Unicode symbols: `|` for `∨`,
/// `&` for `∧`, `~` for `¬`, `->` for `→`, and `\bot` or `XX` for `⊥`.
/// Atoms are single letters, case-sensitive; `AB` lexes as two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    Or,
    And,
    Implies,
    Not,
    Falsum,
    Atom(char),
    Eof,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Or => write!(f, "'∨'"),
            Token::And => write!(f, "'∧'"),
            Token::Implies => write!(f, "'→'"),
            Token::Not => write!(f, "'¬'"),
            Token::Falsum => write!(f, "'⊥'"),
            Token::Atom(name) => write!(f, "atom '{name}'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unknown character '{ch}' at position {position}")]
    UnknownChar { ch: char, position: usize },
    #[error("malformed token at position {position}: expected \"{expected}\"")]
    Malformed {
        expected: &'static str,
        position: usize,
    },
}

/// Lexes `input` into a token sequence terminated by [`Token::Eof`].
///
/// Whitespace is skipped. Positions in errors are 0-based character offsets.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(&c) = chars.get(position) {
        match c {
            c if c.is_whitespace() => position += 1,
            '(' => {
                tokens.push(Token::LeftParen);
                position += 1;
            }
            ')' => {
                tokens.push(Token::RightParen);
                position += 1;
            }
            '∨' | '|' => {
                tokens.push(Token::Or);
                position += 1;
            }
            '∧' | '&' => {
                tokens.push(Token::And);
                position += 1;
            }
            '→' => {
                tokens.push(Token::Implies);
                position += 1;
            }
            '¬' | '~' => {
                tokens.push(Token::Not);
                position += 1;
            }
            '⊥' => {
                tokens.push(Token::Falsum);
                position += 1;
            }
            '-' => {
                if chars.get(position + 1) == Some(&'>') {
                    tokens.push(Token::Implies);
                    position += 2;
                } else {
                    return Err(LexError::Malformed {
                        expected: "->",
                        position,
                    });
                }
            }
            '\\' => {
                if chars.get(position + 1..position + 4) == Some(&['b', 'o', 't'][..]) {
                    tokens.push(Token::Falsum);
                    position += 4;
                } else {
                    return Err(LexError::Malformed {
                        expected: "\\bot",
                        position,
                    });
                }
            }
            // 'X' is reserved as the first half of the ASCII falsum, so a
            // lone 'X' is not an atom.
            'X' => {
                if chars.get(position + 1) == Some(&'X') {
                    tokens.push(Token::Falsum);
                    position += 2;
                } else {
                    return Err(LexError::Malformed {
                        expected: "XX",
                        position,
                    });
                }
            }
            'A'..='Z' | 'a'..='z' => {
                tokens.push(Token::Atom(c));
                position += 1;
            }
            ch => return Err(LexError::UnknownChar { ch, position }),
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{tokenize, LexError, Token};

    #[test]
    fn conjunction_of_atoms() {
        assert_eq!(
            tokenize("(A∧B)").unwrap(),
            vec![
                Token::LeftParen,
                Token::Atom('A'),
                Token::And,
                Token::Atom('B'),
                Token::RightParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn ascii_fallbacks() {
        assert_eq!(
            tokenize("(a | b) & ~c -> \\bot").unwrap(),
            vec![
                Token::LeftParen,
                Token::Atom('a'),
                Token::Or,
                Token::Atom('b'),
                Token::RightParen,
                Token::And,
                Token::Not,
                Token::Atom('c'),
                Token::Implies,
                Token::Falsum,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn double_x_is_falsum() {
        assert_eq!(tokenize("XX").unwrap(), vec![Token::Falsum, Token::Eof]);
        // Trailing odd 'X' is not an atom.
        assert_eq!(
            tokenize("XXX").unwrap_err(),
            LexError::Malformed {
                expected: "XX",
                position: 2
            }
        );
    }

    #[test]
    fn multi_letter_identifiers_are_separate_atoms() {
        assert_eq!(
            tokenize("AB").unwrap(),
            vec![Token::Atom('A'), Token::Atom('B'), Token::Eof]
        );
    }

    #[test]
    fn unknown_character_names_position() {
        assert_eq!(
            tokenize("A#B").unwrap_err(),
            LexError::UnknownChar { ch: '#', position: 1 }
        );
    }

    #[test]
    fn dangling_dash_and_backslash() {
        assert_eq!(
            tokenize("A - B").unwrap_err(),
            LexError::Malformed {
                expected: "->",
                position: 2
            }
        );
        assert_eq!(
            tokenize("\\bo").unwrap_err(),
            LexError::Malformed {
                expected: "\\bot",
                position: 0
            }
        );
    }

    #[test]
    fn whitespace_only_input() {
        assert_eq!(tokenize("   \t ").unwrap(), vec![Token::Eof]);
    }
}
