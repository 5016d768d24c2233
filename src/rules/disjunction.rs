//! Disjunction Introduction and Elimination.
//!
//! Elimination is the heaviest rule in the catalogue: it closes two
//! hypothetical sub-proofs at once, discharging both case hypotheses.

use super::{
    equal_assumptions, expect_assumptions, expect_hypothesis, line_numbers, window, Rule,
    RuleError,
};
use crate::formula::Formula;
use crate::proof::ProofLine;

const INTRO: Rule = Rule::DisjunctionIntro;
const ELIM: Rule = Rule::DisjunctionElim;

pub(super) fn intro_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [premise, target] = window::<2>(lines);
    equal_assumptions(INTRO, premise, target)
}

pub(super) fn intro_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [premise, target] = window::<2>(lines);
    let Formula::Disjunction(left, right) = &target.formula else {
        return Err(RuleError::Shape {
            rule: INTRO,
            line: target.line,
            shape: "a disjunction",
        });
    };
    if premise.formula != **left && premise.formula != **right {
        return Err(RuleError::FormulaMismatch {
            rule: INTRO,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}

pub(super) fn elim_assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [disjunction, left_hyp, left_result, right_hyp, right_result, target] =
        window::<6>(lines);

    // Each case conclusion must actually use its hypothesis.
    if !left_result.assumptions.contains(&left_hyp.line) {
        return Err(RuleError::MissingHypothesis {
            line: left_result.line,
            hypothesis: left_hyp.line,
        });
    }
    if !right_result.assumptions.contains(&right_hyp.line) {
        return Err(RuleError::MissingHypothesis {
            line: right_result.line,
            hypothesis: right_hyp.line,
        });
    }

    let mut expected = disjunction.assumptions.clone();
    expected.extend(left_result.assumptions.iter().copied());
    expected.extend(right_result.assumptions.iter().copied());
    expected.swap_remove(&left_hyp.line);
    expected.swap_remove(&right_hyp.line);
    expect_assumptions(ELIM, target, expected)
}

pub(super) fn elim_formulas(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [disjunction, left_hyp, left_result, right_hyp, right_result, target] =
        window::<6>(lines);

    expect_hypothesis(ELIM, left_hyp)?;
    expect_hypothesis(ELIM, right_hyp)?;

    if left_result.formula != target.formula || right_result.formula != target.formula {
        return Err(RuleError::FormulaMismatch {
            rule: ELIM,
            lines: line_numbers(lines),
        });
    }

    let Formula::Disjunction(left, right) = &disjunction.formula else {
        return Err(RuleError::Shape {
            rule: ELIM,
            line: disjunction.line,
            shape: "a disjunction",
        });
    };
    if **left != left_hyp.formula || **right != right_hyp.formula {
        return Err(RuleError::FormulaMismatch {
            rule: ELIM,
            lines: line_numbers(lines),
        });
    }
    Ok(())
}
