//! Prime implicant generation and minimal cover selection
//!
//! Quine–McCluskey style: minterm cubes are merged pairwise (distance-1
//! consensus) until no merge applies; the surviving cubes are the prime
//! implicants. Cover selection takes essential primes first, then covers
//! the remaining minterms greedily with deterministic tie-breaking:
//! most newly covered minterms, then fewest literals, then the
//! lexicographically smallest rendered form.

use super::cover::Cover;
use super::cube::{Cube, CubeValue};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// All prime implicants of the given minterm set.
pub fn prime_implicants(minterms: &BTreeSet<u64>, num_vars: usize) -> Cover {
    let cubes: Vec<Cube> = minterms
        .iter()
        .map(|&m| Cube::from_minterm(m, num_vars))
        .collect();
    let mut current = Cover::from_cubes(cubes, num_vars);
    let mut primes = Cover::new(num_vars);

    loop {
        let cubes = current.cubes();
        let mut merged = vec![false; cubes.len()];
        let mut next = Cover::new(num_vars);

        for i in 0..cubes.len() {
            for j in (i + 1)..cubes.len() {
                if let Some(pos) = cubes[i].can_merge(&cubes[j]) {
                    let merged_cube = cubes[i].merge(pos);
                    if !next.cubes().contains(&merged_cube) {
                        next.add(merged_cube);
                    }
                    merged[i] = true;
                    merged[j] = true;
                }
            }
        }

        // Unmerged cubes cannot be generalized further: they are prime.
        for (i, was_merged) in merged.iter().enumerate() {
            if !was_merged {
                primes.add(cubes[i].clone());
            }
        }

        if next.is_empty() {
            break;
        }
        current = next;
    }

    primes.remove_redundant();
    primes
}

/// Select a minimal cover of `minterms` from `primes`.
///
/// `var_names` supplies the rendered variable identifiers used for the
/// final lexicographic tie-break; they never appear in the result.
pub fn minimum_cover(primes: &Cover, minterms: &BTreeSet<u64>, var_names: &[String]) -> Cover {
    let prime_cubes = primes.cubes();
    let coverage: Vec<BTreeSet<u64>> = prime_cubes
        .iter()
        .map(|c| {
            c.minterms()
                .into_iter()
                .filter(|m| minterms.contains(m))
                .collect()
        })
        .collect();

    let mut chosen = Cover::new(primes.num_vars());
    let mut selected = vec![false; prime_cubes.len()];
    let mut uncovered: BTreeSet<u64> = minterms.clone();

    // Essential primes: sole cover of some minterm.
    for &m in minterms {
        let mut holders = (0..prime_cubes.len()).filter(|&i| coverage[i].contains(&m));
        if let (Some(only), None) = (holders.next(), holders.next()) {
            selected[only] = true;
        }
    }
    for (i, cov) in coverage.iter().enumerate() {
        if selected[i] {
            chosen.add(prime_cubes[i].clone());
            for m in cov {
                uncovered.remove(m);
            }
        }
    }

    // Greedy cover of whatever the essentials left over.
    while !uncovered.is_empty() {
        let mut best_idx: Option<usize> = None;
        let mut best_key: Option<(Reverse<usize>, usize, String)> = None;

        for (i, cov) in coverage.iter().enumerate() {
            if selected[i] {
                continue;
            }
            let newly = cov.intersection(&uncovered).count();
            if newly == 0 {
                continue;
            }
            let key = (
                Reverse(newly),
                prime_cubes[i].literal_count(),
                literal_key(&prime_cubes[i], var_names),
            );
            if best_key.as_ref().is_none_or(|b| key < *b) {
                best_key = Some(key);
                best_idx = Some(i);
            }
        }

        let Some(i) = best_idx else {
            break;
        };
        selected[i] = true;
        chosen.add(prime_cubes[i].clone());
        for m in &coverage[i] {
            uncovered.remove(m);
        }
    }

    chosen
}

/// Tie-breaking key: the cube's literals rendered against the variable
/// names, complemented literals prefixed with `!`.
fn literal_key(cube: &Cube, var_names: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (i, name) in var_names.iter().enumerate() {
        match cube.value(i) {
            CubeValue::One => parts.push(name.clone()),
            CubeValue::Zero => parts.push(format!("!{name}")),
            CubeValue::DontCare => {}
        }
    }
    parts.join(" ")
}
