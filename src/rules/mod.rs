//! The inference-rule catalogue.
//!
//! Every rule validates a short ordered window of proof lines, the last
//! element being the line under test and the earlier elements the lines it
//! cites, in the rule's required order. Validation decomposes into four
//! checks run in a fixed order: line count, references, assumptions,
//! formulas. The first failing check determines the single error reported.
//!
//! Validation is pure: it never mutates a [`ProofLine`] and holds no state,
//! so re-running it with the same window gives the same answer.

mod assumption;
mod conjunction;
mod disjunction;
mod falsum;
mod implication;
mod negation;

use crate::proof::{LineSet, ProofLine};
use crate::util::{IndexMap, ListDisplay};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The closed set of inference rules.
///
/// Each variant dispatches to a pure validation function; there is no
/// per-rule state. [`Rule::from_str`] resolves the human-readable catalogue
/// names ("Conjunction Elimination", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    AssumptionIntro,
    ConjunctionElim,
    ConjunctionIntro,
    DisjunctionElim,
    DisjunctionIntro,
    ImplicationElim,
    ImplicationIntro,
    FalsumIntro,
    FalsumElim,
    NegationIntro,
    NegationElim,
}

/// Every rule, in the order the catalogue presents them.
pub const ALL_RULES: [Rule; 11] = [
    Rule::AssumptionIntro,
    Rule::ConjunctionElim,
    Rule::ConjunctionIntro,
    Rule::DisjunctionElim,
    Rule::DisjunctionIntro,
    Rule::ImplicationElim,
    Rule::ImplicationIntro,
    Rule::FalsumIntro,
    Rule::FalsumElim,
    Rule::NegationIntro,
    Rule::NegationElim,
];

lazy_static::lazy_static! {
    static ref CATALOGUE: IndexMap<&'static str, Rule> =
        ALL_RULES.iter().map(|rule| (rule.name(), *rule)).collect();
}

/// Raised when a rule name is not in the catalogue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown rule: {0}")]
pub struct UnknownRuleError(pub String);

impl FromStr for Rule {
    type Err = UnknownRuleError;

    fn from_str(name: &str) -> Result<Rule, UnknownRuleError> {
        CATALOGUE
            .get(name)
            .copied()
            .ok_or_else(|| UnknownRuleError(name.to_string()))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::AssumptionIntro => "Assumption Introduction",
            Rule::ConjunctionElim => "Conjunction Elimination",
            Rule::ConjunctionIntro => "Conjunction Introduction",
            Rule::DisjunctionElim => "Disjunction Elimination",
            Rule::DisjunctionIntro => "Disjunction Introduction",
            Rule::ImplicationElim => "Implication Elimination",
            Rule::ImplicationIntro => "Implication Introduction",
            Rule::FalsumIntro => "Falsum Introduction",
            Rule::FalsumElim => "Falsum Elimination",
            Rule::NegationIntro => "Negation Introduction",
            Rule::NegationElim => "Negation Elimination",
        }
    }

    /// A short description of the references the rule expects, shown by the
    /// interactive session.
    pub fn usage(&self) -> &'static str {
        match self {
            Rule::AssumptionIntro => {
                "expects no references; the line's assumption set is its own line number"
            }
            Rule::ConjunctionElim => "expects one reference: a formula A ∧ B",
            Rule::ConjunctionIntro => {
                "expects two references, in this order: formula A, formula B"
            }
            Rule::DisjunctionElim => {
                "expects five references, in this order: A ∨ B, the hypothesis A, \
                 C derived from A, the hypothesis B, C derived from B"
            }
            Rule::DisjunctionIntro => "expects one reference: one of the disjuncts",
            Rule::ImplicationElim => "expects two references, in this order: A → B, A",
            Rule::ImplicationIntro => {
                "expects two references, in this order: the hypothesis A, B"
            }
            Rule::FalsumIntro => "expects two references, in this order: A, ¬A",
            Rule::FalsumElim => "expects one reference: ⊥",
            Rule::NegationIntro => {
                "expects two references, in this order: the hypothesis A, ⊥"
            }
            Rule::NegationElim => {
                "expects two references, in this order: the hypothesis ¬A, ⊥"
            }
        }
    }

    /// Number of lines handed to [`Rule::validate`], including the line under
    /// test.
    pub fn arity(&self) -> usize {
        match self {
            Rule::AssumptionIntro => 1,
            Rule::ConjunctionElim | Rule::DisjunctionIntro | Rule::FalsumElim => 2,
            Rule::DisjunctionElim => 6,
            Rule::ConjunctionIntro
            | Rule::ImplicationElim
            | Rule::ImplicationIntro
            | Rule::FalsumIntro
            | Rule::NegationIntro
            | Rule::NegationElim => 3,
        }
    }

    /// Checks whether the last line of `lines` is a legal application of the
    /// rule given the cited lines before it.
    ///
    /// The four checks run in order and the first failure short-circuits the
    /// rest.
    pub fn validate(&self, lines: &[ProofLine]) -> Result<(), RuleError> {
        self.check_line_count(lines)?;
        self.check_references(lines)?;
        self.check_assumptions(lines)?;
        self.check_formulas(lines)?;
        Ok(())
    }

    pub fn check_line_count(&self, lines: &[ProofLine]) -> Result<(), RuleError> {
        if lines.len() != self.arity() {
            return Err(RuleError::LineCount {
                rule: *self,
                expected: self.arity(),
                actual: lines.len(),
            });
        }
        Ok(())
    }

    /// The reference contract is uniform: the line under test must cite
    /// exactly the earlier window lines, by number, in window order.
    pub fn check_references(&self, lines: &[ProofLine]) -> Result<(), RuleError> {
        let (target, cited) = split_target(lines);
        if target.references.len() != cited.len() {
            return Err(RuleError::ReferenceCount {
                rule: *self,
                expected: cited.len(),
                actual: target.references.len(),
            });
        }
        let expected: Vec<usize> = cited.iter().map(|line| line.line).collect();
        if target.references.as_slice() != expected.as_slice() {
            return Err(RuleError::References {
                rule: *self,
                expected,
                actual: target.references.to_vec(),
            });
        }
        Ok(())
    }

    pub fn check_assumptions(&self, lines: &[ProofLine]) -> Result<(), RuleError> {
        match self {
            Rule::AssumptionIntro => assumption::assumptions(lines),
            Rule::ConjunctionElim => conjunction::elim_assumptions(lines),
            Rule::ConjunctionIntro => conjunction::intro_assumptions(lines),
            Rule::DisjunctionElim => disjunction::elim_assumptions(lines),
            Rule::DisjunctionIntro => disjunction::intro_assumptions(lines),
            Rule::ImplicationElim => implication::elim_assumptions(lines),
            Rule::ImplicationIntro => implication::intro_assumptions(lines),
            Rule::FalsumIntro => falsum::intro_assumptions(lines),
            Rule::FalsumElim => falsum::elim_assumptions(lines),
            Rule::NegationIntro => negation::intro_assumptions(lines),
            Rule::NegationElim => negation::elim_assumptions(lines),
        }
    }

    pub fn check_formulas(&self, lines: &[ProofLine]) -> Result<(), RuleError> {
        match self {
            // Any formula may be assumed.
            Rule::AssumptionIntro => Ok(()),
            Rule::ConjunctionElim => conjunction::elim_formulas(lines),
            Rule::ConjunctionIntro => conjunction::intro_formulas(lines),
            Rule::DisjunctionElim => disjunction::elim_formulas(lines),
            Rule::DisjunctionIntro => disjunction::intro_formulas(lines),
            Rule::ImplicationElim => implication::elim_formulas(lines),
            Rule::ImplicationIntro => implication::intro_formulas(lines),
            Rule::FalsumIntro => falsum::intro_formulas(lines),
            Rule::FalsumElim => falsum::elim_formulas(lines),
            Rule::NegationIntro => negation::intro_formulas(lines),
            Rule::NegationElim => negation::elim_formulas(lines),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("{rule} operates on {expected} line(s), but {actual} were given")]
    LineCount {
        rule: Rule,
        expected: usize,
        actual: usize,
    },
    #[error("{rule} accepts exactly {expected} reference(s), got {actual}")]
    ReferenceCount {
        rule: Rule,
        expected: usize,
        actual: usize,
    },
    #[error(
        "incorrect references for {rule}: expected [{}], got [{}]",
        ListDisplay(.expected, ", "),
        ListDisplay(.actual, ", ")
    )]
    References {
        rule: Rule,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error(
        "incorrect assumption set for {rule} on line {line}: expected {{{}}}, got {{{}}}",
        ListDisplay(.expected, ", "),
        ListDisplay(.actual, ", ")
    )]
    Assumptions {
        rule: Rule,
        line: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("line {line} does not carry hypothesis {hypothesis} in its assumption set")]
    MissingHypothesis { line: usize, hypothesis: usize },
    #[error("line {line} must be {shape} to apply {rule}")]
    Shape {
        rule: Rule,
        line: usize,
        shape: &'static str,
    },
    #[error("line {line} must be introduced by Assumption Introduction to apply {rule}")]
    NotAnAssumption { rule: Rule, line: usize },
    #[error("cannot apply {rule} to the formulas on lines {}", ListDisplay(.lines, ", "))]
    FormulaMismatch { rule: Rule, lines: Vec<usize> },
}

/// Splits off the line under test. The window is never empty: the line count
/// check runs first and every arity is at least one.
fn split_target(lines: &[ProofLine]) -> (&ProofLine, &[ProofLine]) {
    let (target, cited) = lines.split_last().expect("rule window is never empty");
    (target, cited)
}

/// Views the window as a fixed-arity array. The line count check has already
/// established the length.
fn window<const N: usize>(lines: &[ProofLine]) -> &[ProofLine; N] {
    lines
        .try_into()
        .expect("line count is checked before the other checks")
}

/// The target line's assumption set must be exactly `expected`.
fn expect_assumptions(
    rule: Rule,
    target: &ProofLine,
    expected: LineSet,
) -> Result<(), RuleError> {
    let matches = target.assumptions.len() == expected.len()
        && target.assumptions.iter().all(|a| expected.contains(a));
    if !matches {
        return Err(RuleError::Assumptions {
            rule,
            line: target.line,
            expected: expected.into_iter().collect(),
            actual: target.assumptions.iter().copied().collect(),
        });
    }
    Ok(())
}

/// The target must carry the same assumption set as the cited line.
fn equal_assumptions(
    rule: Rule,
    reference: &ProofLine,
    target: &ProofLine,
) -> Result<(), RuleError> {
    expect_assumptions(rule, target, reference.assumptions.clone())
}

/// Discharge rules require the cited hypothesis to be an
/// Assumption-Introduction line.
fn expect_hypothesis(rule: Rule, hypothesis: &ProofLine) -> Result<(), RuleError> {
    if hypothesis.rule != Rule::AssumptionIntro {
        return Err(RuleError::NotAnAssumption {
            rule,
            line: hypothesis.line,
        });
    }
    Ok(())
}

fn line_numbers(lines: &[ProofLine]) -> Vec<usize> {
    lines.iter().map(|line| line.line).collect()
}
