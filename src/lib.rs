//! # fitch
//! A checker for Fitch-style natural deduction proofs in propositional
//! logic. Formulas are parsed from a fully parenthesised surface syntax into
//! a [`Formula`] tree; a proof grows one validated [`ProofLine`] at a time,
//! each line justified by one of the eleven rules in the [`Rule`] catalogue.
//!
//! ```
//! use fitch::{parse_formula, LineSet, Proof, Rule};
//!
//! let mut proof = Proof::new(
//!     vec![parse_formula("A")?, parse_formula("(A → B)")?],
//!     parse_formula("B")?,
//! );
//! proof.add_line(
//!     LineSet::from_iter([1, 2]),
//!     parse_formula("B")?,
//!     Rule::ImplicationElim,
//!     [1, 2].into_iter().collect(),
//! )?;
//! assert!(proof.is_complete());
//! # Ok::<(), fitch::Error>(())
//! ```

pub mod formula;
pub mod lexer;
pub mod parser;
pub mod proof;
pub mod repl;
pub mod rules;
pub mod util;

pub use formula::Formula;
pub use lexer::{tokenize, LexError, Token};
pub use parser::{parse_formula, parse_formula_relaxed, ParseError, Parser};
pub use proof::{
    parse_line_numbers, parse_line_set, FormatError, LineSet, Proof, ProofLine, References,
};
pub use repl::Session;
pub use rules::{Rule, RuleError, UnknownRuleError, ALL_RULES};

use thiserror::Error;

/// Everything that can go wrong between raw user input and an accepted proof
/// line. Each variant surfaces verbatim to the caller; nothing is retried or
/// silently recovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    UnknownRule(#[from] UnknownRuleError),
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("line {0} does not exist in the proof")]
    NoSuchLine(usize),
    #[error("there should be a conclusion")]
    NoConclusion,
    #[error("line {0} is a premise and cannot be removed")]
    RemovePremise(usize),
    #[error("the proof is already complete")]
    ProofComplete,
    #[error("a proof line is written 'assumptions ; formula ; rule ; references'")]
    MalformedEntry,
}
