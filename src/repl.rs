//! A line-oriented interactive surface over the proof engine.
//!
//! The session starts by collecting premises and a conclusion, one formula
//! per line, closed with `begin`. After that, each input line proposes one
//! proof step written as `assumptions ; formula ; rule ; references`, where
//! the first and last fields are whitespace/comma-delimited line numbers.
//! `show` reprints the proof, `rules` lists the catalogue, `remove N` drops
//! a non-premise line, and `quit` ends the session.

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::parser::parse_formula_relaxed;
use crate::proof::{parse_line_numbers, parse_line_set, FormatError, Proof, References};
use crate::rules::{Rule, ALL_RULES};
use crate::{Error, Formula};

#[derive(Default)]
pub struct Session {
    pending: Vec<Formula>,
    proof: Option<Proof>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// The proof under construction, once `begin` has been entered.
    pub fn proof(&self) -> Option<&Proof> {
        self.proof.as_ref()
    }

    /// Runs the session over stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        self.run_with(io::stdin(), io::stdout())
    }

    pub fn run_with<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: Read,
        W: Write,
    {
        writeln!(
            output,
            "Enter your premises and your conclusion, one formula per line."
        )?;
        writeln!(
            output,
            "The conclusion is the last formula; close the list with 'begin'."
        )?;

        for line in BufReader::new(input).lines() {
            let line = line?;
            let line = line.trim();
            if line == "quit" {
                break;
            }
            match self.eval(line) {
                Ok(Some(message)) => writeln!(output, "{message}")?,
                Ok(None) => {}
                Err(err) => writeln!(output, "error: {err}")?,
            }
            if self.proof.as_ref().is_some_and(Proof::is_complete) {
                let proof = self.proof.as_ref().expect("proof is complete");
                writeln!(
                    output,
                    "Congratulations! You have completed your proof in {} lines.",
                    proof.lines().len()
                )?;
                break;
            }
        }
        Ok(())
    }

    /// Evaluates one input line; returns an optional message for the user.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some(proof) = &mut self.proof else {
            if line == "begin" {
                let proof = Proof::from_formulas(std::mem::take(&mut self.pending))?;
                let rendered = proof.to_string();
                self.proof = Some(proof);
                return Ok(Some(rendered));
            }
            self.pending.push(parse_formula_relaxed(line)?);
            return Ok(None);
        };

        if line == "show" {
            return Ok(Some(proof.to_string()));
        }
        if line == "rules" {
            return Ok(Some(rule_summary()));
        }
        if let Some(rest) = line.strip_prefix("remove ") {
            let number = rest
                .trim()
                .parse::<usize>()
                .map_err(|_| FormatError::NotANumber(rest.trim().to_string()))?;
            proof.remove_line(number)?;
            return Ok(Some(format!("removed line {number}")));
        }

        self.add_line(line)
    }

    fn add_line(&mut self, line: &str) -> Result<Option<String>, Error> {
        let fields: Vec<&str> = line.splitn(4, ';').collect();
        let [assumptions, formula, rule, references] = fields.as_slice() else {
            return Err(Error::MalformedEntry);
        };

        let assumptions = parse_line_set(assumptions)?;
        let formula = parse_formula_relaxed(formula.trim())?;
        let rule: Rule = rule.trim().parse()?;
        let references: References = parse_line_numbers(references)?.into_iter().collect();

        let proof = self.proof.as_mut().expect("called with an active proof");
        let accepted = proof.add_line(assumptions, formula, rule, references)?;
        Ok(Some(format!(
            "accepted line {}: {}",
            accepted.line, accepted.formula
        )))
    }
}

fn rule_summary() -> String {
    let mut summary = String::new();
    for rule in ALL_RULES {
        summary.push_str(rule.name());
        summary.push_str(": ");
        summary.push_str(rule.usage());
        summary.push('\n');
    }
    summary
}
