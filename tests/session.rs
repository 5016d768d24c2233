//! Scripted runs of the interactive session.

use fitch::Session;

fn run(script: &str) -> String {
    let mut session = Session::new();
    let mut output = Vec::new();
    session.run_with(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn modus_ponens_session_completes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let output = run(
        "A\n\
         A -> B\n\
         B\n\
         begin\n\
         1, 2 ; B ; Implication Elimination ; 1 2\n",
    );
    assert!(output.contains("accepted line 3: B"));
    assert!(output.contains("Congratulations!"));
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let output = run(
        "A\n\
         A#B\n\
         A\n\
         begin\n",
    );
    assert!(output.contains("error: unknown character '#' at position 1"));
    // The bad premise was skipped; the session still reaches a proof.
    assert!(output.contains("A ⊢ A"));
}

#[test]
fn unknown_rules_and_bad_number_lists_are_rejected() {
    let output = run(
        "A\n\
         B\n\
         begin\n\
         1 ; A ; Modus Tollens ; 1\n\
         one ; A ; Conjunction Elimination ; 1\n",
    );
    assert!(output.contains("error: unknown rule: Modus Tollens"));
    assert!(output.contains("error: 'one' is not a line number"));
}

#[test]
fn rules_command_lists_the_catalogue() {
    let output = run(
        "A\n\
         B\n\
         begin\n\
         rules\n\
         quit\n",
    );
    assert!(output.contains("Conjunction Elimination: expects one reference"));
    assert!(output.contains("Negation Elimination"));
}

#[test]
fn remove_command_drops_derived_lines() {
    let output = run(
        "(A ∧ B)\n\
         (B ∧ A)\n\
         begin\n\
         1 ; A ; Conjunction Elimination ; 1\n\
         remove 2\n\
         remove 1\n\
         quit\n",
    );
    assert!(output.contains("removed line 2"));
    assert!(output.contains("error: line 1 is a premise and cannot be removed"));
}

#[test]
fn malformed_entry_lines_are_rejected() {
    let output = run(
        "A\n\
         B\n\
         begin\n\
         1 ; A ; Assumption Introduction\n",
    );
    assert!(output.contains("error: a proof line is written"));
}
