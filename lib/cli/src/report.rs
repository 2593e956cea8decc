use serde::Serialize;

use truth_nexus_core::{Classification, NormalForms, TruthTable};

/// Everything computed for one submission, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    pub table: &'a TruthTable,
    pub classification: Classification,
    pub cnf: String,
    pub dnf: String,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a str, table: &'a TruthTable, forms: &NormalForms) -> Self {
        Report {
            input,
            table,
            classification: table.classify(),
            cnf: forms.cnf.to_string(),
            dnf: forms.dnf.to_string(),
        }
    }
}
