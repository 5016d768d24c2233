//! Implication Elimination (modus ponens) and Introduction.

use super::{
    expect_assumptions, expect_hypothesis, line_numbers, window, Rule, RuleError,
};
use crate::formula::Formula;
use crate::proof::ProofLine;

const ELIM: Rule = Rule::ImplicationElim;
const INTRO: Rule = Rule::ImplicationIntro;

/// The result must carry exactly the union of both cited assumption sets.
pub(super) fn elim_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [implication, antecedent, target] = window::<3>(lines);
    let mut expected = implication.assumptions.clone();
    expected.extend(antecedent.assumptions.iter().copied());
    expect_assumptions(ELIM, target, expected)
}

pub(super) fn elim_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [implication, antecedent, target] = window::<3>(lines);
    let Formula::Implication(left, right) = &implication.formula else {
        return Err(RuleError::Shape {
            rule: ELIM,
            line: implication.line,
            shape: "an implication",
        });
    };
    if antecedent.formula != **left || target.formula != **right {
        return Err(RuleError::FormulaMismatch {
            rule: ELIM,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

/// Discharges the hypothesis: the result carries the consequent's assumption
/// set minus the hypothesis line.
pub(super) fn intro_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, consequent, target] = window::<3>(lines);
    let mut expected = consequent.assumptions.clone();
    expected.swap_remove(&hypothesis.line);
    expect_assumptions(INTRO, target, expected)
}

pub(super) fn intro_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [hypothesis, consequent, target] = window::<3>(lines);
    expect_hypothesis(INTRO, hypothesis)?;
    let Formula::Implication(left, right) = &target.formula else {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: target.line,
            shape: "an implication",
        });
    };
    if **left != hypothesis.formula || **right != consequent.formula {
        return Err(RuleError::FormulaMismatch {
            rule: INTRO,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}
