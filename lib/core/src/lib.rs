pub mod assignment;
pub mod classify;
pub mod error;
pub mod eval;
pub mod formula;
pub mod normal_form;
pub mod options;
pub mod subexpr;
pub mod table;
pub mod truth;

pub use assignment::{generate_assignments, variable_set, Assignment, Assignments};
pub use classify::{classify, Classification};
pub use error::{Error, ErrorKind, Result};
pub use eval::evaluate;
pub use formula::Formula;
pub use normal_form::{
    build_normal_forms, Cnf, Conjunction, Disjunction, Dnf, Literal, NormalForms, CNF_NO_CLAUSES, DNF_NO_CLAUSES,
};
pub use options::{Options, DEFAULT_OPTIONS, MAX_VARIABLES};
pub use subexpr::extract_subexpressions;
pub use table::{evaluate_formula, Column, TruthTable};
pub use truth::Truth;
