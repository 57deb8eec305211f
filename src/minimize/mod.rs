//! # Boolean Minimizer
//!
//! Reduces a raw sum-of-products expression to the shortest known
//! equivalent rendering. Three candidates are computed and the shortest
//! rendered one wins, ties broken in candidate order DNF > general > CNF:
//!
//! 1. **Minimal DNF**: the expression's minterms are enumerated over its
//!    variable set and run through Quine–McCluskey (prime implicants plus
//!    minimal-cover selection).
//! 2. **Minimal CNF**: the complement's minterm set is minimized with the
//!    same routine, then De Morgan turns the result into a
//!    product-of-sums. Expressions here are positive-unate, so the
//!    complement's primes carry only complemented literals and the CNF
//!    comes out negation-free.
//! 3. **General simplified**: absorption and duplicate removal applied
//!    directly to the original terms, with no canonical expansion.
//!
//! Minterm enumeration is exponential in the variable count. Above
//! [`MAX_CANONICAL_VARS`] distinct atoms the canonical candidates are
//! skipped and the general candidate is returned as-is; minimization
//! still completes, it just stops chasing canonical forms.

pub mod cover;
pub mod cube;
pub mod qm;

pub use cover::Cover;
pub use cube::{Cube, CubeValue};

use crate::expr::{Atom, MinimizedForm, SumOfProducts};
use std::collections::BTreeSet;

/// Variable-count ceiling for the canonical (minterm-expanding)
/// candidates. The escape valve of the minimizer, not a hard limit.
pub const MAX_CANONICAL_VARS: usize = 16;

/// Minimize one expression to its shortest known equivalent form.
pub fn minimize(expr: &SumOfProducts) -> MinimizedForm {
    if expr.is_empty() {
        return MinimizedForm::False;
    }
    if expr.has_true_term() {
        return MinimizedForm::True;
    }

    let vars = expr.atoms();
    let general = general_simplified(expr);

    if vars.len() > MAX_CANONICAL_VARS {
        return general;
    }

    let var_names: Vec<String> = vars.iter().map(Atom::identifier).collect();
    let on_set = on_set_minterms(expr, &vars);
    let universe = 1u64 << vars.len();

    let mut candidates: Vec<MinimizedForm> = Vec::new();

    let primes = qm::prime_implicants(&on_set, vars.len());
    let dnf_cover = qm::minimum_cover(&primes, &on_set, &var_names);
    if let Some(dnf) = cover_to_sop(&dnf_cover, &vars) {
        candidates.push(dnf);
    }

    candidates.push(general);

    let off_set: BTreeSet<u64> = (0..universe).filter(|m| !on_set.contains(m)).collect();
    if !off_set.is_empty() {
        let comp_primes = qm::prime_implicants(&off_set, vars.len());
        let comp_cover = qm::minimum_cover(&comp_primes, &off_set, &var_names);
        if let Some(cnf) = cover_to_pos(&comp_cover, &vars) {
            candidates.push(cnf);
        }
    }

    shortest(candidates)
}

/// Absorption and duplicate removal on the original terms. With only
/// positive atoms, complementation never applies; absorption is the
/// whole of the non-canonical simplification.
fn general_simplified(expr: &SumOfProducts) -> MinimizedForm {
    let sets: Vec<BTreeSet<&Atom>> = expr
        .terms()
        .iter()
        .map(|t| t.atoms().iter().collect())
        .collect();

    let mut kept: Vec<Vec<Atom>> = Vec::new();
    for (i, set) in sets.iter().enumerate() {
        let absorbed = sets
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.is_subset(set) && (other != set || j < i));
        if !absorbed {
            kept.push(expr.terms()[i].atoms().to_vec());
        }
    }
    MinimizedForm::sum_of_products(kept)
}

/// The expression's minterm set over `vars`: each term constrains its
/// atoms true and leaves the rest free.
fn on_set_minterms(expr: &SumOfProducts, vars: &[Atom]) -> BTreeSet<u64> {
    let mut set = BTreeSet::new();
    for term in expr.terms() {
        let mut cube = Cube::new(vars.len());
        for atom in term.atoms() {
            if let Some(i) = vars.iter().position(|v| v == atom) {
                cube.set(i, CubeValue::One);
            }
        }
        set.extend(cube.minterms());
    }
    set
}

/// Read a cover as a sum-of-products over `vars`. `None` if any cube
/// carries a complemented literal, which plain AND/OR groups cannot
/// express.
fn cover_to_sop(cover: &Cover, vars: &[Atom]) -> Option<MinimizedForm> {
    let mut groups = Vec::with_capacity(cover.len());
    for cube in cover {
        let mut group = Vec::new();
        for (i, var) in vars.iter().enumerate() {
            match cube.value(i) {
                CubeValue::One => group.push(var.clone()),
                CubeValue::Zero => return None,
                CubeValue::DontCare => {}
            }
        }
        groups.push(group);
    }
    Some(MinimizedForm::sum_of_products(groups))
}

/// De Morgan a complement cover into a product-of-sums over `vars`:
/// each complemented literal contributes the positive atom to a clause.
/// `None` if any cube carries an uncomplemented literal.
fn cover_to_pos(cover: &Cover, vars: &[Atom]) -> Option<MinimizedForm> {
    let mut groups = Vec::with_capacity(cover.len());
    for cube in cover {
        let mut group = Vec::new();
        for (i, var) in vars.iter().enumerate() {
            match cube.value(i) {
                CubeValue::Zero => group.push(var.clone()),
                CubeValue::One => return None,
                CubeValue::DontCare => {}
            }
        }
        groups.push(group);
    }
    Some(MinimizedForm::product_of_sums(groups))
}

/// Shortest rendered candidate; the earliest wins ties.
fn shortest(candidates: Vec<MinimizedForm>) -> MinimizedForm {
    let mut best: Option<(usize, MinimizedForm)> = None;
    for form in candidates {
        let len = form.rendered_len();
        let better = match &best {
            None => true,
            Some((best_len, _)) => len < *best_len,
        };
        if better {
            best = Some((len, form));
        }
    }
    match best {
        Some((_, form)) => form,
        None => MinimizedForm::False,
    }
}
