//! Boolean expression data model
//!
//! The unit of the algebra is the [`Atom`], a named boolean variable formed
//! from a (header, state) pair and rendered as `header_state`. A [`Term`]
//! is a conjunction (AND) of atoms in column order; a [`SumOfProducts`] is
//! a disjunction (OR) of terms in row order.
//!
//! Atoms only ever appear positively: a failure table asserts which
//! failures are present in a combination, never their absence. Every
//! expression built here is therefore positive-unate, which the minimizer
//! relies on when it dualizes into product-of-sums form.

pub mod render;

pub use render::MinimizedForm;

use serde::{Serialize, Serializer};
use std::fmt;

/// A named boolean variable formed from a (header, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    pub header: String,
    pub state: String,
}

impl Atom {
    pub fn new(header: impl Into<String>, state: impl Into<String>) -> Self {
        Atom {
            header: header.into(),
            state: state.into(),
        }
    }

    /// The rendered identifier, `header_state`.
    pub fn identifier(&self) -> String {
        format!("{}_{}", self.header, self.state)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.header, self.state)
    }
}

/// A conjunction of atoms, in column order.
///
/// At most one atom per column by construction. An empty term is the
/// constant TRUE: a row with no required failure preconditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    atoms: Vec<Atom>,
}

impl Term {
    pub fn new() -> Self {
        Term::default()
    }

    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Term { atoms }
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Truth value under an assignment of the atoms.
    pub fn eval(&self, is_true: impl Fn(&Atom) -> bool) -> bool {
        self.atoms.iter().all(is_true)
    }
}

/// A disjunction of terms in first-seen row order.
///
/// An expression with no terms is the constant FALSE (the outcome never
/// occurs); one containing an empty term is the constant TRUE.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumOfProducts {
    terms: Vec<Term>,
}

impl SumOfProducts {
    pub fn new() -> Self {
        SumOfProducts::default()
    }

    pub fn from_terms(terms: Vec<Term>) -> Self {
        SumOfProducts { terms }
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any disjunct is the empty term, making the whole
    /// expression a tautology.
    pub fn has_true_term(&self) -> bool {
        self.terms.iter().any(Term::is_empty)
    }

    /// The distinct atoms of the expression, in first-seen order
    /// (terms in row order, atoms in column order within a term).
    pub fn atoms(&self) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = Vec::new();
        for term in &self.terms {
            for atom in term.atoms() {
                if !atoms.contains(atom) {
                    atoms.push(atom.clone());
                }
            }
        }
        atoms
    }

    /// Truth value under an assignment of the atoms.
    pub fn eval(&self, is_true: impl Fn(&Atom) -> bool) -> bool {
        self.terms.iter().any(|t| t.eval(&is_true))
    }
}

impl Serialize for SumOfProducts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
