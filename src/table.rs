//! Failure table model and delimited-text ingestion
//!
//! A failure table is rectangular: a header row, then one row per
//! failure combination. Every column but the last holds a component
//! state; the last column holds the outcome (failure condition) that
//! combination produces. Cells are trimmed on read. This layer parses
//! and shape-checks; it knows nothing about boolean expressions.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One table row: component states in column order plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub states: Vec<String>,
    pub outcome: String,
}

/// A parsed, shape-checked failure table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureTable {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl FailureTable {
    /// Build a table from pre-split rows. The header row includes the
    /// outcome column.
    pub fn new(headers: Vec<String>, rows: Vec<TableRow>) -> Result<Self> {
        if headers.len() < 2 {
            return Err(Error::NoStateColumns);
        }
        Ok(FailureTable { headers, rows })
    }

    /// Parse delimited text. The first non-blank line is the header
    /// row; every following non-blank line must have the same cell
    /// count. Line numbers in errors are 1-based file positions.
    pub fn from_delimited(text: &str, delimiter: char) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header_line) = lines.next().ok_or(Error::EmptyTable)?;
        let headers: Vec<String> = split_cells(header_line, delimiter);
        if headers.len() < 2 {
            return Err(Error::NoStateColumns);
        }

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let cells = split_cells(line, delimiter);
            if cells.len() != headers.len() {
                return Err(Error::RaggedRow {
                    line: idx + 1,
                    expected: headers.len(),
                    got: cells.len(),
                });
            }
            let mut states = cells;
            let outcome = states.pop().unwrap_or_default();
            rows.push(TableRow { states, outcome });
        }

        Ok(FailureTable { headers, rows })
    }

    /// Read and parse a table file.
    pub fn from_path(path: impl AsRef<Path>, delimiter: char) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_delimited(&text, delimiter)
    }

    /// Column names as they appear in the file, outcome column included.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of non-outcome columns.
    pub fn num_state_columns(&self) -> usize {
        self.headers.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|c| c.trim().to_string()).collect()
}

/// Spreadsheet-style default column name: `A..Z`, then `AA`, `AB`, ...
pub fn column_name(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_basic_table() {
        let table = FailureTable::from_delimited("a;b;Result\nF;O;Loss\nO;F;Loss\n", ';').unwrap();
        assert_eq!(table.headers(), ["a", "b", "Result"]);
        assert_eq!(table.num_state_columns(), 2);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].states, ["F", "O"]);
        assert_eq!(table.rows()[0].outcome, "Loss");
    }

    #[test]
    fn test_cells_trimmed() {
        let table = FailureTable::from_delimited("a; b ;Result\n F ;O; Loss \n", ';').unwrap();
        assert_eq!(table.headers()[1], "b");
        assert_eq!(table.rows()[0].states[0], "F");
        assert_eq!(table.rows()[0].outcome, "Loss");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = FailureTable::from_delimited("a;Result\n\nF;Loss\n\n", ';').unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_custom_delimiter() {
        let table = FailureTable::from_delimited("a,b,Result\nF,O,Loss\n", ',').unwrap();
        assert_eq!(table.num_state_columns(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            FailureTable::from_delimited("", ';'),
            Err(Error::EmptyTable)
        ));
        assert!(matches!(
            FailureTable::from_delimited("  \n\n", ';'),
            Err(Error::EmptyTable)
        ));
    }

    #[test]
    fn test_table_without_state_columns() {
        assert!(matches!(
            FailureTable::from_delimited("Result\nLoss\n", ';'),
            Err(Error::NoStateColumns)
        ));
    }

    #[test]
    fn test_ragged_row() {
        let err = FailureTable::from_delimited("a;b;Result\nF;Loss\n", ';').unwrap_err();
        match err {
            Error::RaggedRow {
                line,
                expected,
                got,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_data_rows_is_not_an_error() {
        let table = FailureTable::from_delimited("a;Result\n", ';').unwrap();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case(0, "A")]
    #[case(1, "B")]
    #[case(25, "Z")]
    #[case(26, "AA")]
    #[case(27, "AB")]
    #[case(51, "AZ")]
    #[case(52, "BA")]
    #[case(701, "ZZ")]
    #[case(702, "AAA")]
    fn test_column_name(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(column_name(index), expected);
    }
}
