//! The proof aggregate: premises, accepted lines, target conclusion.

use crate::formula::Formula;
use crate::rules::Rule;
use crate::util::{IndexSet, ListDisplay};
use crate::Error;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// The set of line numbers a proof line depends on.
///
/// Duplicates are illegal; insertion order is irrelevant for validation but
/// kept for display.
pub type LineSet = IndexSet<usize>;

/// The lines a rule application cites, in the rule's required order. No rule
/// cites more than five lines.
pub type References = SmallVec<[usize; 5]>;

/// One justified step of a proof.
#[derive(Debug, Clone)]
pub struct ProofLine {
    /// 1-based line number, strictly increasing within a proof.
    pub line: usize,
    /// The line numbers this line depends on.
    pub assumptions: LineSet,
    pub formula: Formula,
    /// The rule justifying this line.
    pub rule: Rule,
    /// The lines cited as inputs to the rule.
    pub references: References,
}

impl ProofLine {
    /// A premise: an Assumption-Introduction line depending only on itself.
    pub fn premise(line: usize, formula: Formula) -> ProofLine {
        ProofLine {
            line,
            assumptions: LineSet::from_iter([line]),
            formula,
            rule: Rule::AssumptionIntro,
            references: References::new(),
        }
    }
}

impl Display for ProofLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let assumptions = format!("{{{}}}", ListDisplay(&self.assumptions, ","));
        write!(
            f,
            "{:>3}. {:<12} {:<24} {}",
            self.line,
            assumptions,
            self.formula.to_string(),
            self.rule
        )?;
        if !self.references.is_empty() {
            write!(f, " [{}]", ListDisplay(&self.references, ","))?;
        }
        Ok(())
    }
}

/// Raised by the line-entry surface when an assumption or reference list does
/// not parse, before any rule validation runs.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("'{0}' is not a line number")]
    NotANumber(String),
    #[error("line number {0} is listed twice")]
    Duplicate(usize),
}

/// Parses a whitespace- or comma-delimited list of line numbers.
pub fn parse_line_numbers(text: &str) -> Result<Vec<usize>, FormatError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| FormatError::NotANumber(part.to_string()))
        })
        .collect()
}

/// Parses a line-number list that must not contain duplicates, preserving
/// the order of entry.
pub fn parse_line_set(text: &str) -> Result<LineSet, FormatError> {
    let mut set = LineSet::default();
    for number in parse_line_numbers(text)? {
        if !set.insert(number) {
            return Err(FormatError::Duplicate(number));
        }
    }
    Ok(set)
}

/// A Fitch-style proof under construction.
///
/// The premises are fixed at creation; derived lines are appended one at a
/// time, each validated by its justifying rule before it is accepted. A
/// failed validation leaves the proof unchanged.
#[derive(Debug, Clone)]
pub struct Proof {
    lines: Vec<ProofLine>,
    premise_count: usize,
    conclusion: Formula,
}

impl Proof {
    /// Starts a proof from its premises and target conclusion.
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Proof {
        let lines: Vec<ProofLine> = premises
            .into_iter()
            .enumerate()
            .map(|(index, formula)| ProofLine::premise(index + 1, formula))
            .collect();
        Proof {
            premise_count: lines.len(),
            lines,
            conclusion,
        }
    }

    /// Builds a proof from user-entered formulas: the last one is the
    /// conclusion, everything before it a premise.
    pub fn from_formulas(mut formulas: Vec<Formula>) -> Result<Proof, Error> {
        let conclusion = formulas.pop().ok_or(Error::NoConclusion)?;
        Ok(Proof::new(formulas, conclusion))
    }

    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }

    /// All accepted lines, premises included, ordered by line number.
    pub fn lines(&self) -> &[ProofLine] {
        &self.lines
    }

    pub fn premises(&self) -> &[ProofLine] {
        &self.lines[..self.premise_count]
    }

    pub fn premise_count(&self) -> usize {
        self.premise_count
    }

    /// Looks a line up by its number. Line numbers are not indices: removing
    /// a line leaves a gap.
    pub fn line(&self, number: usize) -> Option<&ProofLine> {
        self.lines.iter().find(|line| line.line == number)
    }

    /// The number the next accepted line will get.
    pub fn next_line_number(&self) -> usize {
        self.lines.last().map_or(0, |line| line.line) + 1
    }

    /// Validates a proposed line against the cited lines and appends it on
    /// success. Every reference must name an existing line.
    pub fn add_line(
        &mut self,
        assumptions: LineSet,
        formula: Formula,
        rule: Rule,
        references: References,
    ) -> Result<&ProofLine, Error> {
        let mut window = Vec::with_capacity(references.len() + 1);
        for &reference in &references {
            let cited = self.line(reference).ok_or(Error::NoSuchLine(reference))?;
            window.push(cited.clone());
        }
        window.push(ProofLine {
            line: self.next_line_number(),
            assumptions,
            formula,
            rule,
            references,
        });

        if let Err(err) = rule.validate(&window) {
            log::debug!("rejected line {}: {err}", self.next_line_number());
            return Err(err.into());
        }

        let accepted = window.pop().expect("window holds the proposed line");
        log::info!("accepted line {}: {}", accepted.line, accepted.formula);
        self.lines.push(accepted);
        Ok(self.lines.last().expect("line was just appended"))
    }

    /// Removes a non-premise line. Premises stay for the life of the proof,
    /// and a complete proof is frozen.
    pub fn remove_line(&mut self, number: usize) -> Result<(), Error> {
        if self.is_complete() {
            return Err(Error::ProofComplete);
        }
        if number >= 1 && number <= self.premise_count {
            return Err(Error::RemovePremise(number));
        }
        let index = self
            .lines
            .iter()
            .position(|line| line.line == number)
            .ok_or(Error::NoSuchLine(number))?;
        self.lines.remove(index);
        Ok(())
    }

    /// True iff the last accepted line proves the conclusion and depends on
    /// nothing beyond the premises.
    pub fn is_complete(&self) -> bool {
        let Some(last) = self.lines.last() else {
            return false;
        };
        last.formula == self.conclusion
            && last
                .assumptions
                .iter()
                .all(|&assumption| assumption >= 1 && assumption <= self.premise_count)
    }
}

impl Display for Proof {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ⊢ {}",
            ListDisplay(self.premises().iter().map(|line| &line.formula), ", "),
            self.conclusion
        )?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
