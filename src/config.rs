//! Analysis configuration
//!
//! Everything the analyzer is allowed to know beyond the table itself:
//! which state tokens are not failures, which outcomes are irrelevant,
//! and optional variable names overriding the default `A..Z, AA, ...`
//! column naming. Loadable from YAML for CLI use.

use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_delimiter() -> char {
    ';'
}

/// Construction-time configuration for a [`crate::CoffeAnalyzer`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CoffeConfig {
    /// State tokens that do not count as failures and contribute no atom
    /// (compared after trimming surrounding whitespace).
    #[serde(default)]
    pub ignored_states: Vec<String>,

    /// Outcome labels excluded from the result mapping entirely.
    #[serde(default)]
    pub ignored_results: Vec<String>,

    /// Variable names for the non-outcome columns. When absent,
    /// spreadsheet-style names are assigned positionally. When present,
    /// the length must equal the table's non-outcome column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<Vec<String>>,

    /// Cell delimiter for table files.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for CoffeConfig {
    fn default() -> Self {
        CoffeConfig {
            ignored_states: Vec::new(),
            ignored_results: Vec::new(),
            custom_headers: None,
            delimiter: default_delimiter(),
        }
    }
}

impl CoffeConfig {
    pub fn new() -> Self {
        CoffeConfig::default()
    }

    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = CoffeConfig::new();
        assert!(config.ignored_states.is_empty());
        assert!(config.ignored_results.is_empty());
        assert!(config.custom_headers.is_none());
        assert_eq!(config.delimiter, ';');
    }

    #[test]
    fn test_from_yaml() {
        let config = CoffeConfig::from_yaml(
            r#"
ignored_states: ["O"]
ignored_results: ["No Loss"]
custom_headers: [WBrake, GrndSpoiler, ThrustRev, Flap]
delimiter: ","
"#,
        )
        .unwrap();

        assert_eq!(config.ignored_states, ["O"]);
        assert_eq!(config.ignored_results, ["No Loss"]);
        assert_eq!(
            config.custom_headers.as_deref().unwrap(),
            ["WBrake", "GrndSpoiler", "ThrustRev", "Flap"]
        );
        assert_eq!(config.delimiter, ',');
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = CoffeConfig::from_yaml("ignored_states: [O]\n").unwrap();
        assert_eq!(config.ignored_states, ["O"]);
        assert_eq!(config.delimiter, ';');
        assert!(config.custom_headers.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = CoffeConfig::new();
        config.ignored_states.push("O".into());
        config.custom_headers = Some(vec!["A".into(), "B".into()]);

        let yaml = serde_norway::to_string(&config).unwrap();
        let back = CoffeConfig::from_yaml(&yaml).unwrap();
        assert_eq!(back.ignored_states, config.ignored_states);
        assert_eq!(back.custom_headers, config.custom_headers);
        assert_eq!(back.delimiter, config.delimiter);
    }
}
