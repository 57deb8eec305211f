//! Cube representation for Boolean functions
//!
//! A cube represents a product term over the variable set of one
//! expression. Each variable can be in one of three states: must be 0,
//! must be 1, or don't care. A cube with no don't cares is a minterm.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Value of a single variable in a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeValue {
    /// Variable must be false (complemented)
    Zero,
    /// Variable must be true (uncomplemented)
    One,
    /// Variable can be either (don't care)
    DontCare,
}

impl CubeValue {
    pub fn from_char(c: char) -> Result<Self, Error> {
        match c {
            '0' => Ok(CubeValue::Zero),
            '1' => Ok(CubeValue::One),
            '-' | 'x' | 'X' => Ok(CubeValue::DontCare),
            _ => Err(Error::InvalidCube(format!(
                "invalid character '{c}' in cube"
            ))),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CubeValue::Zero => '0',
            CubeValue::One => '1',
            CubeValue::DontCare => '-',
        }
    }

    /// Check if this value is a literal (not don't care)
    pub fn is_literal(self) -> bool {
        matches!(self, CubeValue::Zero | CubeValue::One)
    }
}

/// A cube over a fixed variable set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    values: Vec<CubeValue>,
}

impl Cube {
    /// Create a new cube with all don't cares
    pub fn new(num_vars: usize) -> Self {
        Cube {
            values: vec![CubeValue::DontCare; num_vars],
        }
    }

    pub fn from_values(values: Vec<CubeValue>) -> Self {
        Cube { values }
    }

    /// The minterm cube for assignment `m`: bit `i` of `m` gives the
    /// value of variable `i`, every variable constrained.
    pub fn from_minterm(m: u64, num_vars: usize) -> Self {
        let values = (0..num_vars)
            .map(|i| {
                if m >> i & 1 == 1 {
                    CubeValue::One
                } else {
                    CubeValue::Zero
                }
            })
            .collect();
        Cube { values }
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Get value at index
    pub fn value(&self, i: usize) -> CubeValue {
        self.values[i]
    }

    /// Set value at index
    pub fn set(&mut self, i: usize, val: CubeValue) {
        self.values[i] = val;
    }

    pub fn values(&self) -> &[CubeValue] {
        &self.values
    }

    /// Count the number of literals (non-don't-care values)
    pub fn literal_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_literal()).count()
    }

    /// Check if this cube is a tautology (all don't cares)
    pub fn is_tautology(&self) -> bool {
        self.values.iter().all(|v| *v == CubeValue::DontCare)
    }

    /// Check if two cubes can be merged (same literals except a single
    /// complemented position). Returns the differing position.
    pub fn can_merge(&self, other: &Cube) -> Option<usize> {
        let mut diff_pos = None;
        for i in 0..self.values.len() {
            if self.values[i] != other.values[i] {
                let complemented = matches!(
                    (self.values[i], other.values[i]),
                    (CubeValue::Zero, CubeValue::One) | (CubeValue::One, CubeValue::Zero)
                );
                if !complemented || diff_pos.is_some() {
                    return None;
                }
                diff_pos = Some(i);
            }
        }
        diff_pos
    }

    /// Merge two cubes that differ in exactly one variable
    pub fn merge(&self, diff_pos: usize) -> Cube {
        let mut result = self.clone();
        result.values[diff_pos] = CubeValue::DontCare;
        result
    }

    /// Check if this cube contains (covers) another cube
    pub fn contains(&self, other: &Cube) -> bool {
        if self.values.len() != other.values.len() {
            return false;
        }
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| match a {
                CubeValue::DontCare => true,
                _ => a == b,
            })
    }

    /// All full assignments consistent with this cube, as minterm
    /// indices (bit `i` = value of variable `i`).
    pub fn minterms(&self) -> Vec<u64> {
        let free: Vec<usize> = (0..self.values.len())
            .filter(|&i| self.values[i] == CubeValue::DontCare)
            .collect();
        let base: u64 = (0..self.values.len())
            .filter(|&i| self.values[i] == CubeValue::One)
            .map(|i| 1u64 << i)
            .sum();

        let mut result = Vec::with_capacity(1 << free.len());
        for combo in 0..(1u64 << free.len()) {
            let mut m = base;
            for (bit, &pos) in free.iter().enumerate() {
                if combo >> bit & 1 == 1 {
                    m |= 1 << pos;
                }
            }
            result.push(m);
        }
        result
    }
}

impl FromStr for Cube {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let values: Result<Vec<CubeValue>, Error> = s.chars().map(CubeValue::from_char).collect();
        Ok(Cube { values: values? })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", v.to_char())?;
        }
        Ok(())
    }
}
