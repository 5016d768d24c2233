//! Assumption Introduction: a line may assume any formula, at the price of
//! depending on itself.

use super::{expect_assumptions, window, Rule, RuleError};
use crate::proof::{LineSet, ProofLine};

pub(super) fn assumptions(lines: &[ProofLine]) -> Result<(), RuleError> {
    let [target] = window::<1>(lines);
    expect_assumptions(
        Rule::AssumptionIntro,
        target,
        LineSet::from_iter([target.line]),
    )
}
