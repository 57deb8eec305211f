//! Cover representation - a collection of cubes
//!
//! A cover represents a Boolean function as a set of product terms
//! (cubes). The function is the OR of all cubes in the cover.

use super::cube::Cube;
use std::collections::BTreeSet;
use std::fmt;

/// A cover is a collection of cubes representing a Boolean function
#[derive(Debug, Clone, Default)]
pub struct Cover {
    cubes: Vec<Cube>,
    num_vars: usize,
}

impl Cover {
    /// Create an empty cover
    pub fn new(num_vars: usize) -> Self {
        Cover {
            cubes: Vec::new(),
            num_vars,
        }
    }

    pub fn from_cubes(cubes: Vec<Cube>, num_vars: usize) -> Self {
        Cover { cubes, num_vars }
    }

    /// Number of cubes in the cover
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Add a cube to the cover
    pub fn add(&mut self, cube: Cube) {
        self.cubes.push(cube);
    }

    pub fn get(&self, index: usize) -> Option<&Cube> {
        self.cubes.get(index)
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// Total literal count across all cubes
    pub fn literal_count(&self) -> usize {
        self.cubes.iter().map(|c| c.literal_count()).sum()
    }

    /// Check if some cube of this cover covers the given cube
    pub fn contains_cube(&self, cube: &Cube) -> bool {
        self.cubes.iter().any(|c| c.contains(cube))
    }

    /// Remove cubes that are covered by other cubes (absorption).
    /// Duplicate cubes keep a single representative.
    pub fn remove_redundant(&mut self) {
        let mut i = 0;
        while i < self.cubes.len() {
            let mut is_redundant = false;
            for j in 0..self.cubes.len() {
                if i != j && self.cubes[j].contains(&self.cubes[i]) {
                    is_redundant = true;
                    break;
                }
            }
            if is_redundant {
                self.cubes.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// All minterms covered by this cover
    pub fn minterms(&self) -> BTreeSet<u64> {
        let mut set = BTreeSet::new();
        for cube in &self.cubes {
            set.extend(cube.minterms());
        }
        set
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cube in &self.cubes {
            writeln!(f, "{cube}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Cover {
    type Item = Cube;
    type IntoIter = std::vec::IntoIter<Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Cube;
    type IntoIter = std::slice::Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.iter()
    }
}
