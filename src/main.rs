//! COFFEA CLI - Command-line interface
//!
//! Commands:
//!   analyze  - Analyze a failure-effects table
//!   schema   - Print the JSON schema for config files
//!   version  - Print the version

use coffea::{CoffeAnalyzer, CoffeConfig, Error, Result, VERSION};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "analyze" => cmd_analyze(&args[2..]),
        "schema" => cmd_schema(),
        "version" | "--version" | "-v" => {
            println!("coffea {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn cmd_analyze(args: &[String]) -> Result<()> {
    let mut table_path: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut ignored_states: Vec<String> = Vec::new();
    let mut ignored_results: Vec<String> = Vec::new();
    let mut headers: Option<Vec<String>> = None;
    let mut delimiter: Option<char> = None;
    let mut json_output = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => config_path = Some(flag_value(args, &mut i, "--config")?),
            "--ignore-state" => {
                ignored_states.push(flag_value(args, &mut i, "--ignore-state")?.to_string());
            }
            "--ignore-result" => {
                ignored_results.push(flag_value(args, &mut i, "--ignore-result")?.to_string());
            }
            "--headers" => {
                let list = flag_value(args, &mut i, "--headers")?;
                headers = Some(list.split(',').map(|h| h.trim().to_string()).collect());
            }
            "--delimiter" => {
                let value = flag_value(args, &mut i, "--delimiter")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => delimiter = Some(c),
                    _ => {
                        return Err(Error::Config(format!(
                            "--delimiter takes a single character, got '{}'",
                            value
                        )))
                    }
                }
            }
            "--json" => json_output = true,
            arg if arg.starts_with('-') => {
                return Err(Error::Config(format!("unknown flag: {}", arg)));
            }
            arg => {
                if table_path.is_some() {
                    return Err(Error::Config(format!("unexpected argument: {}", arg)));
                }
                table_path = Some(arg);
            }
        }
        i += 1;
    }

    let table_path =
        table_path.ok_or("Usage: coffea analyze <table> [--config file.yaml] [options]")?;

    // Flags override anything loaded from the config file.
    let mut config = match config_path {
        Some(path) => CoffeConfig::load(path)?,
        None => CoffeConfig::default(),
    };
    if !ignored_states.is_empty() {
        config.ignored_states = ignored_states;
    }
    if !ignored_results.is_empty() {
        config.ignored_results = ignored_results;
    }
    if headers.is_some() {
        config.custom_headers = headers;
    }
    if let Some(d) = delimiter {
        config.delimiter = d;
    }

    let summary = CoffeAnalyzer::new(config).analyze_path(table_path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (outcome, expression) in summary.results() {
            println!("{}: {}", outcome, expression);
        }
    }

    Ok(())
}

fn cmd_schema() -> Result<()> {
    let schema = schemars::schema_for!(CoffeConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(format!("{} requires a value", flag)))
}

fn print_usage() {
    println!(
        r#"
COFFEA - Combinational Functional Failure Effects Analysis

USAGE:
    coffea <command> [options]

COMMANDS:
    analyze <table>     Minimize the boolean expression for each outcome
    schema              Print the JSON schema for config files
    version             Print the version
    help                Show this help

ANALYZE OPTIONS:
    --config <file>         YAML config (ignored_states, ignored_results,
                            custom_headers, delimiter)
    --ignore-state <s>      State that is not a failure (repeatable)
    --ignore-result <r>     Outcome to exclude from the report (repeatable)
    --headers <a,b,c>       Variable names for the state columns
    --delimiter <c>         Cell delimiter (default ';')
    --json                  Emit the full summary as JSON

EXAMPLES:
    coffea analyze table.csv --ignore-state O --ignore-result "No Loss"
    coffea analyze table.csv --config coffe.yaml --json
"#
    );
}
