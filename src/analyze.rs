//! Failure-condition analysis
//!
//! Turns a failure table into one minimized boolean expression per
//! outcome. Rows compile to conjunction terms (ignored states contribute
//! no atom), terms are unioned per outcome in first-seen order, and each
//! outcome's raw expression goes through the minimizer. The summary is
//! built in one pass and never mutated afterwards; the analyzer itself
//! holds only its configuration.

use crate::config::CoffeConfig;
use crate::error::{Error, Result};
use crate::expr::{Atom, MinimizedForm, SumOfProducts, Term};
use crate::minimize::minimize;
use crate::table::{column_name, FailureTable};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// One outcome's raw and minimized expressions.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary {
    pub outcome: String,
    pub raw: SumOfProducts,
    pub minimized: MinimizedForm,
}

impl OutcomeSummary {
    /// The minimized expression rendered per the output grammar.
    pub fn expression(&self) -> String {
        self.minimized.to_string()
    }
}

/// The result of one analysis run: outcomes in first-seen table order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub outcomes: Vec<OutcomeSummary>,
}

impl AnalysisSummary {
    /// `(outcome, minimized expression)` pairs in first-seen order.
    pub fn results(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.outcomes
            .iter()
            .map(|o| (o.outcome.as_str(), o.expression()))
    }

    pub fn get(&self, outcome: &str) -> Option<&OutcomeSummary> {
        self.outcomes.iter().find(|o| o.outcome == outcome)
    }

    /// The minimized expression for one outcome, if present.
    pub fn expression(&self, outcome: &str) -> Option<String> {
        self.get(outcome).map(OutcomeSummary::expression)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// A configured CoFFE (Combinational Functional Failure Effects)
/// analyzer.
///
/// ```
/// use coffea::{CoffeAnalyzer, CoffeConfig, FailureTable};
///
/// let table = FailureTable::from_delimited(
///     "a;b;Result\nF;O;Loss\nO;F;Loss\n",
///     ';',
/// )?;
/// let analyzer = CoffeAnalyzer::new(CoffeConfig {
///     ignored_states: vec!["O".into()],
///     ..CoffeConfig::default()
/// });
/// let summary = analyzer.analyze(&table)?;
/// assert_eq!(summary.expression("Loss").unwrap(), "A_F OR B_F");
/// # Ok::<(), coffea::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CoffeAnalyzer {
    config: CoffeConfig,
}

impl CoffeAnalyzer {
    pub fn new(config: CoffeConfig) -> Self {
        CoffeAnalyzer { config }
    }

    pub fn config(&self) -> &CoffeConfig {
        &self.config
    }

    /// Analyze a table: one minimized expression per outcome not in the
    /// ignored-results set. Fails with [`Error::HeaderMismatch`] before
    /// compiling any row when custom headers disagree with the table
    /// width; a failed call produces no partial summary.
    pub fn analyze(&self, table: &FailureTable) -> Result<AnalysisSummary> {
        let headers = self.resolve_headers(table)?;
        let ignored_states: HashSet<&str> =
            self.config.ignored_states.iter().map(String::as_str).collect();
        let ignored_results: HashSet<&str> =
            self.config.ignored_results.iter().map(String::as_str).collect();

        let mut order: Vec<String> = Vec::new();
        let mut expressions: Vec<SumOfProducts> = Vec::new();

        for row in table.rows() {
            let outcome = row.outcome.as_str();
            if ignored_results.contains(outcome) {
                continue;
            }
            let term = compile_row(&row.states, &headers, &ignored_states);
            match order.iter().position(|o| o == outcome) {
                Some(i) => expressions[i].push(term),
                None => {
                    order.push(outcome.to_string());
                    expressions.push(SumOfProducts::from_terms(vec![term]));
                }
            }
        }

        let outcomes = order
            .into_iter()
            .zip(expressions)
            .map(|(outcome, raw)| OutcomeSummary {
                minimized: minimize(&raw),
                outcome,
                raw,
            })
            .collect();

        Ok(AnalysisSummary { outcomes })
    }

    /// Read, parse, and analyze a table file using the configured
    /// delimiter.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisSummary> {
        let table = FailureTable::from_path(path, self.config.delimiter)?;
        self.analyze(&table)
    }

    /// The variable names for the table's non-outcome columns, resolved
    /// once per analysis.
    fn resolve_headers(&self, table: &FailureTable) -> Result<Vec<String>> {
        let expected = table.num_state_columns();
        match &self.config.custom_headers {
            Some(headers) if headers.len() != expected => Err(Error::HeaderMismatch {
                expected,
                got: headers.len(),
            }),
            Some(headers) => Ok(headers.clone()),
            None => Ok((0..expected).map(column_name).collect()),
        }
    }
}

/// Compile one row's states into a conjunction term. Ignored states
/// contribute no atom; column order is preserved. State values keep no
/// whitespace in the rendered identifier.
fn compile_row(states: &[String], headers: &[String], ignored_states: &HashSet<&str>) -> Term {
    let mut term = Term::new();
    for (i, state) in states.iter().enumerate() {
        let trimmed = state.trim();
        if ignored_states.contains(trimmed) {
            continue;
        }
        let compact: String = trimmed.split_whitespace().collect();
        term.push(Atom::new(headers[i].clone(), compact));
    }
    term
}

/// One-shot convenience over [`CoffeAnalyzer`].
pub fn analyze(table: &FailureTable, config: &CoffeConfig) -> Result<AnalysisSummary> {
    CoffeAnalyzer::new(config.clone()).analyze(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(states: &[&str], results: &[&str]) -> CoffeConfig {
        CoffeConfig {
            ignored_states: states.iter().map(|s| s.to_string()).collect(),
            ignored_results: results.iter().map(|s| s.to_string()).collect(),
            ..CoffeConfig::default()
        }
    }

    fn table(text: &str) -> FailureTable {
        FailureTable::from_delimited(text, ';').unwrap()
    }

    #[test]
    fn test_compile_row_skips_ignored_states() {
        let headers = vec!["A".to_string(), "B".to_string()];
        let ignored = HashSet::from(["O"]);
        let term = compile_row(
            &["F".to_string(), "O".to_string()],
            &headers,
            &ignored,
        );
        assert_eq!(term.atoms(), [Atom::new("A", "F")]);
    }

    #[test]
    fn test_compile_row_trims_and_compacts_states() {
        let headers = vec!["A".to_string()];
        let ignored = HashSet::from(["O"]);
        let term = compile_row(&[" partly failed ".to_string()], &headers, &ignored);
        assert_eq!(term.atoms()[0].identifier(), "A_partlyfailed");
    }

    #[test]
    fn test_outcomes_in_first_seen_order() {
        let t = table("a;b;Result\nF;O;Late\nO;F;Early\nF;F;Late\n");
        let summary = analyze(&t, &config(&["O"], &[])).unwrap();
        let outcomes: Vec<&str> = summary.outcomes.iter().map(|o| o.outcome.as_str()).collect();
        assert_eq!(outcomes, ["Late", "Early"]);
    }

    #[test]
    fn test_ignored_results_never_appear() {
        let t = table("a;Result\nF;Loss\nO;No Loss\n");
        let summary = analyze(&t, &config(&["O"], &["No Loss"])).unwrap();
        assert_eq!(summary.len(), 1);
        assert!(summary.get("No Loss").is_none());
    }

    #[test]
    fn test_default_headers_are_positional() {
        let t = table("one;two;Result\nF;F;Loss\n");
        let summary = analyze(&t, &config(&[], &[])).unwrap();
        assert_eq!(summary.expression("Loss").unwrap(), "A_F AND B_F");
    }

    #[test]
    fn test_custom_headers() {
        let t = table("one;two;Result\nF;F;Loss\n");
        let mut cfg = config(&[], &[]);
        cfg.custom_headers = Some(vec!["Pump".into(), "Valve".into()]);
        let summary = analyze(&t, &cfg).unwrap();
        assert_eq!(summary.expression("Loss").unwrap(), "Pump_F AND Valve_F");
    }

    #[test]
    fn test_header_mismatch_before_any_row() {
        let t = table("a;b;c;d;Result\nF;F;F;F;Loss\n");
        let mut cfg = config(&[], &[]);
        cfg.custom_headers = Some(vec!["A".into(), "B".into(), "C".into()]);
        let err = analyze(&t, &cfg).unwrap_err();
        match err {
            Error::HeaderMismatch { expected, got } => {
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("expected HeaderMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_all_ignored_row_is_constant_true() {
        let t = table("a;b;Result\nO;O;Loss\n");
        let summary = analyze(&t, &config(&["O"], &[])).unwrap();
        assert_eq!(summary.expression("Loss").unwrap(), "TRUE");
    }

    #[test]
    fn test_empty_table_yields_empty_summary() {
        let t = table("a;b;Result\n");
        let summary = analyze(&t, &config(&["O"], &[])).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_summary_serializes_rendered_expressions() {
        let t = table("a;b;Result\nF;F;Loss\n");
        let summary = analyze(&t, &config(&["O"], &[])).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["outcomes"][0]["outcome"], "Loss");
        assert_eq!(json["outcomes"][0]["minimized"], "A_F AND B_F");
        assert_eq!(json["outcomes"][0]["raw"], "A_F AND B_F");
    }

    #[test]
    fn test_wide_table_uses_spreadsheet_names() {
        let mut header: Vec<String> = (0..28).map(|i| format!("c{i}")).collect();
        header.push("Result".into());
        let mut row: Vec<String> = vec!["O".into(); 28];
        row[26] = "F".into();
        row.push("Loss".into());
        let text = format!("{}\n{}\n", header.join(";"), row.join(";"));

        let summary = analyze(&table(&text), &config(&["O"], &[])).unwrap();
        assert_eq!(summary.expression("Loss").unwrap(), "AA_F");
    }
}
