//! Conjunction Elimination and Introduction.

use super::{equal_assumptions, expect_assumptions, line_numbers, window, Rule, RuleError};
use crate::formula::Formula;
use crate::proof::ProofLine;

const ELIM: Rule = Rule::ConjunctionElim;
const INTRO: Rule = Rule::ConjunctionIntro;

pub(super) fn elim_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [premise, target] = window::<2>(lines);
    equal_assumptions(ELIM, premise, target)
}

pub(super) fn elim_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [premise, target] = window::<2>(lines);
    let Formula::Conjunction(left, right) = &premise.formula else {
        return Err(RuleError::Shape {
            rule: ELIM,
            line: premise.line,
            shape: "a conjunction",
        });
    };
    if target.formula != **left && target.formula != **right {
        return Err(RuleError::FormulaMismatch {
            rule: ELIM,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

pub(super) fn intro_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [first, second, target] = window::<3>(lines);
    let mut expected = first.assumptions.clone();
    expected.extend(second.assumptions.iter().copied());
    expect_assumptions(INTRO, target, expected)
}

pub(super) fn intro_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [first, second, target] = window::<3>(lines);
    let Formula::Conjunction(left, right) = &target.formula else {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: target.line,
            shape: "a conjunction",
        });
    };
    // The conjuncts may match the cited lines in either order.
    let straight = **left == first.formula && **right == second.formula;
    let swapped = **left == second.formula && **right == first.formula;
    if !straight && !swapped {
        return Err(RuleError::FormulaMismatch {
            rule: INTRO,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}
