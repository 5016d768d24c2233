//! End-to-end proof construction: premises, validated line additions,
//! removal, and the completion check.

use fitch::{parse_formula, Error, LineSet, Proof, References, Rule};

fn refs(numbers: &[usize]) -> References {
    numbers.iter().copied().collect()
}

fn assumptions(numbers: &[usize]) -> LineSet {
    numbers.iter().copied().collect()
}

fn formula(text: &str) -> fitch::Formula {
    parse_formula(text).unwrap()
}

#[test]
fn modus_ponens_proof_completes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut proof = Proof::new(vec![formula("A"), formula("(A → B)")], formula("B"));
    assert_eq!(proof.premise_count(), 2);
    assert!(!proof.is_complete());

    proof
        .add_line(
            assumptions(&[1, 2]),
            formula("B"),
            Rule::ImplicationElim,
            refs(&[1, 2]),
        )
        .unwrap();

    // Both assumptions are premises, so the proof is done.
    assert!(proof.is_complete());
}

#[test]
fn premises_are_assumption_introductions() {
    let proof = Proof::new(vec![formula("A"), formula("(A ∧ B)")], formula("B"));
    for (index, premise) in proof.premises().iter().enumerate() {
        assert_eq!(premise.line, index + 1);
        assert_eq!(premise.rule, Rule::AssumptionIntro);
        assert_eq!(
            premise.assumptions.iter().copied().collect::<Vec<_>>(),
            vec![index + 1]
        );
        assert!(premise.references.is_empty());
    }
}

#[test]
fn hypothetical_proof_discharges_before_completion() {
    // ⊢ (B → B), via a hypothesis that is discharged on the final line.
    let mut proof = Proof::new(vec![], formula("(B → B)"));

    proof
        .add_line(assumptions(&[1]), formula("B"), Rule::AssumptionIntro, refs(&[]))
        .unwrap();
    assert!(!proof.is_complete());

    proof
        .add_line(
            assumptions(&[]),
            formula("(B → B)"),
            Rule::ImplicationIntro,
            refs(&[1, 1]),
        )
        .unwrap();
    assert!(proof.is_complete());
}

#[test]
fn reductio_proof_completes() {
    // (A → ⊥) ⊢ ¬A
    let mut proof = Proof::new(vec![formula("(A → ⊥)")], formula("¬A"));

    proof
        .add_line(assumptions(&[2]), formula("A"), Rule::AssumptionIntro, refs(&[]))
        .unwrap();
    proof
        .add_line(
            assumptions(&[1, 2]),
            formula("⊥"),
            Rule::ImplicationElim,
            refs(&[1, 2]),
        )
        .unwrap();
    proof
        .add_line(
            assumptions(&[1]),
            formula("¬A"),
            Rule::NegationIntro,
            refs(&[2, 3]),
        )
        .unwrap();

    assert!(proof.is_complete());
    // The discharged hypothesis never appears on the final line.
    let last = proof.lines().last().unwrap();
    assert!(!last.assumptions.contains(&2));
}

#[test]
fn conjunction_commutes() {
    // (A ∧ B) ⊢ (B ∧ A)
    let mut proof = Proof::new(vec![formula("(A ∧ B)")], formula("(B ∧ A)"));

    proof
        .add_line(
            assumptions(&[1]),
            formula("B"),
            Rule::ConjunctionElim,
            refs(&[1]),
        )
        .unwrap();
    proof
        .add_line(
            assumptions(&[1]),
            formula("A"),
            Rule::ConjunctionElim,
            refs(&[1]),
        )
        .unwrap();
    proof
        .add_line(
            assumptions(&[1]),
            formula("(B ∧ A)"),
            Rule::ConjunctionIntro,
            refs(&[2, 3]),
        )
        .unwrap();

    assert!(proof.is_complete());
}

#[test]
fn incomplete_while_depending_on_a_hypothesis() {
    let mut proof = Proof::new(vec![formula("A")], formula("B"));

    proof
        .add_line(assumptions(&[2]), formula("B"), Rule::AssumptionIntro, refs(&[]))
        .unwrap();

    // The last line is the conclusion, but it leans on line 2, which is not
    // a premise.
    assert!(!proof.is_complete());
}

#[test]
fn failed_validation_leaves_the_proof_unchanged() {
    let mut proof = Proof::new(vec![formula("A")], formula("(A ∧ A)"));
    let before = proof.lines().len();

    let err = proof
        .add_line(
            assumptions(&[1]),
            formula("B"),
            Rule::ConjunctionElim,
            refs(&[1]),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Rule(_)));
    assert!(err.to_string().contains("must be a conjunction"));
    assert_eq!(proof.lines().len(), before);
    assert_eq!(proof.next_line_number(), before + 1);
}

#[test]
fn unknown_references_are_rejected_before_validation() {
    let mut proof = Proof::new(vec![formula("(A ∧ B)")], formula("A"));
    let err = proof
        .add_line(
            assumptions(&[1]),
            formula("A"),
            Rule::ConjunctionElim,
            refs(&[7]),
        )
        .unwrap_err();
    assert_eq!(err, Error::NoSuchLine(7));
}

#[test]
fn removing_lines() {
    let mut proof = Proof::new(vec![formula("(A ∧ B)")], formula("(B ∧ A)"));
    proof
        .add_line(
            assumptions(&[1]),
            formula("A"),
            Rule::ConjunctionElim,
            refs(&[1]),
        )
        .unwrap();

    assert_eq!(proof.remove_line(1), Err(Error::RemovePremise(1)));
    assert_eq!(proof.remove_line(9), Err(Error::NoSuchLine(9)));
    assert_eq!(proof.remove_line(2), Ok(()));
    assert!(proof.line(2).is_none());

    // The removed line was the last one, so its number is free again.
    assert_eq!(proof.next_line_number(), 2);
}

#[test]
fn complete_proofs_are_frozen() {
    let mut proof = Proof::new(vec![formula("A")], formula("A"));
    // The premise already matches the conclusion.
    assert!(proof.is_complete());
    assert_eq!(proof.remove_line(1), Err(Error::ProofComplete));
}

#[test]
fn from_formulas_requires_a_conclusion() {
    assert!(matches!(
        Proof::from_formulas(vec![]),
        Err(Error::NoConclusion)
    ));

    let proof = Proof::from_formulas(vec![formula("A"), formula("(A → B)"), formula("B")])
        .unwrap();
    assert_eq!(proof.premise_count(), 2);
    assert_eq!(proof.conclusion(), &formula("B"));
}

#[test]
fn rendered_proof_lists_premises_and_lines() {
    let proof = Proof::new(vec![formula("A"), formula("(A → B)")], formula("B"));
    let rendered = proof.to_string();
    assert!(rendered.contains("A, (A → B) ⊢ B"));
    assert!(rendered.contains("Assumption Introduction"));
}
