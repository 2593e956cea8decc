//! Truth tables, classification and canonical normal forms for propositional
//! formulas.
//!
//! ```
//! use truth_nexus::{evaluate_formula, Classification, DEFAULT_OPTIONS};
//!
//! let table = evaluate_formula("p ∨ ¬p", &DEFAULT_OPTIONS).unwrap();
//! assert_eq!(table.classify(), Classification::Tautology);
//! ```

pub use expr_parser as parser;
pub use truth_nexus_core as core;

pub use truth_nexus_core::{
    build_normal_forms, classify, evaluate_formula, Classification, Error, ErrorKind, Formula, Options, Truth,
    TruthTable, DEFAULT_OPTIONS,
};
