//! The propositional formula tree.

use std::fmt::{self, Display, Formatter};

/// A propositional formula.
///
/// Formulas are immutable trees built by the parser. Equality is structural:
/// two formulas are equal iff they are the same variant and all children are
/// recursively equal. The derived `PartialEq` gives exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// The always-false constant `⊥`.
    Falsum,
    /// A propositional variable such as `A`.
    Atom(String),
    /// `¬φ`
    Negation(Box<Formula>),
    /// `(φ ∧ ψ)`
    Conjunction(Box<Formula>, Box<Formula>),
    /// `(φ ∨ ψ)`
    Disjunction(Box<Formula>, Box<Formula>),
    /// `(φ → ψ)`
    Implication(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Formula {
        Formula::Atom(name.into())
    }

    pub fn negation(inner: Formula) -> Formula {
        Formula::Negation(Box::new(inner))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Formula {
        Formula::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Formula, right: Formula) -> Formula {
        Formula::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn implication(left: Formula, right: Formula) -> Formula {
        Formula::Implication(Box::new(left), Box::new(right))
    }

    /// The immediate subformulas, left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Falsum | Formula::Atom(_) => vec![],
            Formula::Negation(inner) => vec![inner],
            Formula::Conjunction(left, right)
            | Formula::Disjunction(left, right)
            | Formula::Implication(left, right) => vec![left, right],
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Falsum => write!(f, "⊥"),
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Negation(inner) => write!(f, "¬{inner}"),
            Formula::Conjunction(left, right) => write!(f, "({left} ∧ {right})"),
            Formula::Disjunction(left, right) => write!(f, "({left} ∨ {right})"),
            Formula::Implication(left, right) => write!(f, "({left} → {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Formula;

    #[test]
    fn equality_is_structural() {
        let a = Formula::conjunction(Formula::atom("A"), Formula::atom("B"));
        let b = Formula::conjunction(Formula::atom("A"), Formula::atom("B"));
        assert_eq!(a, b);
        assert_ne!(a, Formula::conjunction(Formula::atom("B"), Formula::atom("A")));
        assert_ne!(Formula::atom("A"), Formula::atom("a"));
        assert_eq!(Formula::Falsum, Formula::Falsum);
    }

    #[test]
    fn display_is_canonical() {
        let f = Formula::implication(
            Formula::negation(Formula::disjunction(Formula::atom("A"), Formula::atom("B"))),
            Formula::Falsum,
        );
        assert_eq!(f.to_string(), "(¬(A ∨ B) → ⊥)");
    }

    #[test]
    fn children_in_order() {
        let f = Formula::disjunction(Formula::atom("A"), Formula::atom("B"));
        let children = f.children();
        assert_eq!(children, vec![&Formula::atom("A"), &Formula::atom("B")]);
        assert!(Formula::Falsum.children().is_empty());
    }
}
