// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # COFFEA — Combinational Functional Failure Effects Analysis
//!
//! COFFEA turns a failure-effects table into, for each distinct outcome
//! (failure condition), a minimal boolean expression over named failure
//! atoms that implies that outcome. The expressions support preliminary
//! fault-tree construction from a combinatorial failure-effects (CoFFE)
//! table of the kind described in SAE ARP4761.
//!
//! ## Core Concept
//!
//! Each table row is a combination of component failure states leading
//! to one outcome. Per outcome, COFFEA builds the sum-of-products of all
//! its rows' state combinations and then minimizes it, trying a minimal
//! DNF, a minimal CNF, and a general absorption-based simplification,
//! keeping whichever renders shortest.
//!
//! ## Quick Start
//!
//! ```rust
//! use coffea::{CoffeAnalyzer, CoffeConfig, FailureTable};
//!
//! let table = FailureTable::from_delimited(
//!     "\
//! a;b;c;d;Result
//! F;F;O;O;Total Loss
//! F;O;O;O;Partial Loss
//! O;F;O;O;Partial Loss
//! O;O;F;F;Total Loss
//! O;O;F;O;Partial Loss
//! O;O;O;F;Partial Loss
//! ",
//!     ';',
//! )?;
//!
//! let analyzer = CoffeAnalyzer::new(CoffeConfig {
//!     ignored_states: vec!["O".into()],
//!     ..CoffeConfig::default()
//! });
//!
//! let summary = analyzer.analyze(&table)?;
//! assert_eq!(
//!     summary.expression("Total Loss").unwrap(),
//!     "(A_F AND B_F) OR (C_F AND D_F)",
//! );
//! assert_eq!(
//!     summary.expression("Partial Loss").unwrap(),
//!     "A_F OR B_F OR C_F OR D_F",
//! );
//! # Ok::<(), coffea::Error>(())
//! ```
//!
//! ## Table Format
//!
//! Delimited text (default `;`): a header row, then one row per failure
//! combination. Every column but the last is a component state, the
//! last column is the outcome. Variable names come from an optional
//! `custom_headers` list or default to spreadsheet-style `A..Z, AA, …`
//! assigned positionally; the table's own header names are not used for
//! atoms.
//!
//! ## Semantics worth knowing
//!
//! - A row whose every state is ignored compiles to an empty term; that
//!   outcome becomes the constant `TRUE` (no required preconditions).
//! - An outcome with no retained rows would be the constant `FALSE`.
//! - Above [`minimize::MAX_CANONICAL_VARS`] distinct atoms per outcome,
//!   the canonical DNF/CNF candidates are skipped and the
//!   absorption-based simplification is used alone.

pub mod analyze;
pub mod config;
pub mod error;
pub mod expr;
pub mod minimize;
pub mod table;

pub use analyze::{analyze, AnalysisSummary, CoffeAnalyzer, OutcomeSummary};
pub use config::CoffeConfig;
pub use error::{Error, Result};
pub use expr::{Atom, MinimizedForm, SumOfProducts, Term};
pub use minimize::minimize;
pub use table::{column_name, FailureTable, TableRow};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
