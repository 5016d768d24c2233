//! Negation Introduction and Elimination, the reductio rules.
//!
//! Both close a hypothetical sub-proof that ended in falsum, discharging the
//! hypothesis from the assumption set of the conclusion.

use super::{
    expect_assumptions, expect_hypothesis, line_numbers, window, Rule, RuleError,
};
use crate::formula::Formula;
use crate::proof::ProofLine;

const INTRO: Rule = Rule::NegationIntro;
const ELIM: Rule = Rule::NegationElim;

pub(super) fn intro_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, falsum, target] = window::<3>(lines);
    discharge(INTRO, hypothesis, falsum, target)
}

pub(super) fn intro_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, falsum, target] = window::<3>(lines);
    expect_hypothesis(INTRO, hypothesis)?;
    let Formula::Negation(negated) = &target.formula else {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: target.line,
            shape: "a negation",
        });
    };
    expect_falsum(INTRO, falsum)?;
    if **negated != hypothesis.formula {
        return Err(RuleError::FormulaMismatch {
            rule: INTRO,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

pub(super) fn elim_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, falsum, target] = window::<3>(lines);
    discharge(ELIM, hypothesis, falsum, target)
}

pub(super) fn elim_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, falsum, target] = window::<3>(lines);
    expect_hypothesis(ELIM, hypothesis)?;
    let Formula::Negation(negated) = &hypothesis.formula else {
        return Err(RuleError::Shape {
            rule: ELIM,
            line: hypothesis.line,
            shape: "a negation",
        });
    };
    expect_falsum(ELIM, falsum)?;
    if target.formula != **negated {
        return Err(RuleError::FormulaMismatch {
            rule: ELIM,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

/// Shared assumption algebra: falsum must depend on the hypothesis, and the
/// target carries falsum's assumption set with the hypothesis removed.
fn discharge(
    rule: Rule,
    hypothesis: &ProofLine,
    falsum: &ProofLine,
    target: &ProofLine,
) -> Result<(), RuleError> {
    if !falsum.assumptions.contains(&hypothesis.line) {
        return Err(RuleError::MissingHypothesis {
            line: falsum.line,
            hypothesis: hypothesis.line,
        });
    }
    let mut expected = falsum.assumptions.clone();
    expected.swap_remove(&hypothesis.line);
    expect_assumptions(rule, target, expected)
}

fn expect_falsum(rule: Rule, line: &ProofLine) -> Result<(), RuleError> {
    if line.formula != Formula::Falsum {
        return Err(RuleError::Shape {
            rule,
            line: line.line,
            shape: "falsum",
        });
    }
    Ok(())
}
