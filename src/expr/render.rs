//! Rendering of expressions with explicit AND/OR tokens
//!
//! The minimized result of an analysis is either a constant (`TRUE`,
//! `FALSE`), a sum-of-products, or a product-of-sums. Both two-level
//! shapes render the same way with the connectives swapped: groups of two
//! or more atoms are parenthesized, single-atom groups are bare, and a
//! whole-expression single group is never parenthesized.
//!
//! Rendering is a pure function of the form. Atoms within a group are
//! sorted lexicographically by identifier and groups are sorted by
//! (size, atom sequence) at construction, so equal forms always produce
//! byte-identical output.

use super::{Atom, SumOfProducts};
use serde::{Serialize, Serializer};
use std::fmt;

const AND: &str = " AND ";
const OR: &str = " OR ";

/// A minimized boolean expression, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizedForm {
    /// The outcome is unconditionally reached.
    True,
    /// The outcome never occurs.
    False,
    /// OR of AND-groups.
    SumOfProducts(Vec<Vec<Atom>>),
    /// AND of OR-groups.
    ProductOfSums(Vec<Vec<Atom>>),
}

impl MinimizedForm {
    /// Build a sum-of-products form. No groups collapses to `False`; an
    /// empty group is an unconditional disjunct, collapsing to `True`.
    pub fn sum_of_products(groups: Vec<Vec<Atom>>) -> Self {
        if groups.is_empty() {
            return MinimizedForm::False;
        }
        if groups.iter().any(Vec::is_empty) {
            return MinimizedForm::True;
        }
        MinimizedForm::SumOfProducts(normalize(groups))
    }

    /// Build a product-of-sums form. No groups collapses to `True`; an
    /// empty clause is unsatisfiable, collapsing to `False`.
    pub fn product_of_sums(groups: Vec<Vec<Atom>>) -> Self {
        if groups.is_empty() {
            return MinimizedForm::True;
        }
        if groups.iter().any(Vec::is_empty) {
            return MinimizedForm::False;
        }
        MinimizedForm::ProductOfSums(normalize(groups))
    }

    /// Rendered character length, the measure the minimizer selects by.
    pub fn rendered_len(&self) -> usize {
        self.to_string().chars().count()
    }

    /// Truth value under an assignment of the atoms.
    pub fn eval(&self, is_true: impl Fn(&Atom) -> bool) -> bool {
        match self {
            MinimizedForm::True => true,
            MinimizedForm::False => false,
            MinimizedForm::SumOfProducts(groups) => {
                groups.iter().any(|g| g.iter().all(&is_true))
            }
            MinimizedForm::ProductOfSums(groups) => {
                groups.iter().all(|g| g.iter().any(&is_true))
            }
        }
    }
}

/// Sort atoms within each group by identifier, then groups by
/// (size, atom sequence), dropping exact duplicates.
fn normalize(mut groups: Vec<Vec<Atom>>) -> Vec<Vec<Atom>> {
    for group in &mut groups {
        group.sort_by_key(Atom::identifier);
        group.dedup();
    }
    groups.sort_by_key(|g| (g.len(), g.iter().map(Atom::identifier).collect::<Vec<_>>()));
    groups.dedup();
    groups
}

/// Write groups joined by `outer`, atoms within a group joined by
/// `inner`. Multi-atom groups are parenthesized unless the group is the
/// whole expression.
fn fmt_groups(
    f: &mut fmt::Formatter<'_>,
    groups: &[Vec<Atom>],
    outer: &str,
    inner: &str,
) -> fmt::Result {
    if let [only] = groups {
        return fmt_atoms(f, only, inner);
    }
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            f.write_str(outer)?;
        }
        if group.len() > 1 {
            f.write_str("(")?;
            fmt_atoms(f, group, inner)?;
            f.write_str(")")?;
        } else {
            fmt_atoms(f, group, inner)?;
        }
    }
    Ok(())
}

fn fmt_atoms(f: &mut fmt::Formatter<'_>, atoms: &[Atom], sep: &str) -> fmt::Result {
    for (i, atom) in atoms.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{atom}")?;
    }
    Ok(())
}

impl fmt::Display for MinimizedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizedForm::True => f.write_str("TRUE"),
            MinimizedForm::False => f.write_str("FALSE"),
            MinimizedForm::SumOfProducts(groups) => fmt_groups(f, groups, OR, AND),
            MinimizedForm::ProductOfSums(groups) => fmt_groups(f, groups, AND, OR),
        }
    }
}

impl Serialize for MinimizedForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw (pre-minimization) rendering: terms in row order, atoms in column
/// order, an empty term shown as `TRUE` and an empty expression as
/// `FALSE`.
impl fmt::Display for SumOfProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("FALSE");
        }
        let groups: Vec<Vec<Atom>> = self.terms().iter().map(|t| t.atoms().to_vec()).collect();
        if let [only] = groups.as_slice() {
            if only.is_empty() {
                return f.write_str("TRUE");
            }
            return fmt_atoms(f, only, AND);
        }
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                f.write_str(OR)?;
            }
            match group.len() {
                0 => f.write_str("TRUE")?,
                1 => fmt_atoms(f, group, AND)?,
                _ => {
                    f.write_str("(")?;
                    fmt_atoms(f, group, AND)?;
                    f.write_str(")")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Term;
    use pretty_assertions::assert_eq;

    fn atom(header: &str, state: &str) -> Atom {
        Atom::new(header, state)
    }

    #[test]
    fn test_constants() {
        assert_eq!(MinimizedForm::True.to_string(), "TRUE");
        assert_eq!(MinimizedForm::False.to_string(), "FALSE");
    }

    #[test]
    fn test_single_atom_unparenthesized() {
        let form = MinimizedForm::sum_of_products(vec![vec![atom("A", "F")]]);
        assert_eq!(form.to_string(), "A_F");
    }

    #[test]
    fn test_single_group_unparenthesized() {
        let form = MinimizedForm::sum_of_products(vec![vec![atom("B", "F"), atom("A", "F")]]);
        assert_eq!(form.to_string(), "A_F AND B_F");
    }

    #[test]
    fn test_dnf_rendering() {
        let form = MinimizedForm::sum_of_products(vec![
            vec![atom("C", "F"), atom("D", "F")],
            vec![atom("A", "F"), atom("B", "F")],
        ]);
        assert_eq!(form.to_string(), "(A_F AND B_F) OR (C_F AND D_F)");
    }

    #[test]
    fn test_cnf_rendering_singletons_first() {
        let form = MinimizedForm::product_of_sums(vec![
            vec![atom("B", "F"), atom("C", "F")],
            vec![atom("A", "F")],
        ]);
        assert_eq!(form.to_string(), "A_F AND (B_F OR C_F)");
    }

    #[test]
    fn test_singleton_groups_bare() {
        let form = MinimizedForm::sum_of_products(vec![
            vec![atom("D", "F")],
            vec![atom("B", "F")],
            vec![atom("A", "F")],
            vec![atom("C", "F")],
        ]);
        assert_eq!(form.to_string(), "A_F OR B_F OR C_F OR D_F");
    }

    #[test]
    fn test_collapse_to_constants() {
        assert_eq!(
            MinimizedForm::sum_of_products(vec![]),
            MinimizedForm::False
        );
        assert_eq!(
            MinimizedForm::sum_of_products(vec![vec![atom("A", "F")], vec![]]),
            MinimizedForm::True
        );
        assert_eq!(MinimizedForm::product_of_sums(vec![]), MinimizedForm::True);
        assert_eq!(
            MinimizedForm::product_of_sums(vec![vec![]]),
            MinimizedForm::False
        );
    }

    #[test]
    fn test_duplicate_groups_dropped() {
        let form = MinimizedForm::sum_of_products(vec![
            vec![atom("A", "F"), atom("B", "F")],
            vec![atom("B", "F"), atom("A", "F")],
        ]);
        assert_eq!(form.to_string(), "A_F AND B_F");
    }

    #[test]
    fn test_raw_rendering_preserves_row_order() {
        let expr = SumOfProducts::from_terms(vec![
            Term::from_atoms(vec![atom("C", "F"), atom("D", "F")]),
            Term::from_atoms(vec![atom("A", "F"), atom("B", "F")]),
        ]);
        assert_eq!(expr.to_string(), "(C_F AND D_F) OR (A_F AND B_F)");
    }

    #[test]
    fn test_raw_rendering_true_disjunct() {
        let expr = SumOfProducts::from_terms(vec![
            Term::from_atoms(vec![atom("A", "F")]),
            Term::new(),
        ]);
        assert_eq!(expr.to_string(), "A_F OR TRUE");
    }

    #[test]
    fn test_eval_matches_shape() {
        let dnf = MinimizedForm::sum_of_products(vec![
            vec![atom("A", "F"), atom("B", "F")],
            vec![atom("C", "F")],
        ]);
        assert!(dnf.eval(|a| a.header == "C"));
        assert!(!dnf.eval(|a| a.header == "A"));

        let cnf = MinimizedForm::product_of_sums(vec![
            vec![atom("A", "F")],
            vec![atom("B", "F"), atom("C", "F")],
        ]);
        assert!(cnf.eval(|a| a.header == "A" || a.header == "C"));
        assert!(!cnf.eval(|a| a.header == "A"));
    }
}
