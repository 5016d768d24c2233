//! Falsum Introduction and Elimination (ex falso quodlibet).

use super::{equal_assumptions, expect_assumptions, line_numbers, window, Rule, RuleError};
use crate::formula::Formula;
use crate::proof::ProofLine;

const INTRO: Rule = Rule::FalsumIntro;
const ELIM: Rule = Rule::FalsumElim;

pub(super) fn intro_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [affirmation, negation, target] = window::<3>(lines);
    let mut expected = affirmation.assumptions.clone();
    expected.extend(negation.assumptions.iter().copied());
    expect_assumptions(INTRO, target, expected)
}

pub(super) fn intro_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [affirmation, negation, target] = window::<3>(lines);
    let Formula::Negation(negated) = &negation.formula else {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: negation.line,
            shape: "a negation",
        });
    };
    if target.formula != Formula::Falsum {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: target.line,
            shape: "falsum",
        });
    }
    if **negated != affirmation.formula {
        return Err(RuleError::FormulaMismatch {
            rule: INTRO,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

pub(super) fn elim_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [falsum, target] = window::<2>(lines);
    equal_assumptions(ELIM, falsum, target)
}

/// The result formula is unconstrained: anything follows from falsum.
pub(super) fn elim_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [falsum, _target] = window::<2>(lines);
    if falsum.formula != Formula::Falsum {
        return Err(RuleError::Shape {
            rule: ELIM,
            line: falsum.line,
            shape: "falsum",
        });
    }
    Ok(())
}
