use itertools::Itertools;

use truth_nexus_core::{Classification, NormalForms, Truth, TruthTable};

fn pad(s: &str, width: usize) -> String {
    format!("{:^width$}", s, width = width)
}

/// Plain-text truth table: one column per variable, then one per expression.
///
/// ```txt
/// A | B | A → B
/// --+---+------
/// F | F |   T
/// ```
pub fn render_table(table: &TruthTable) -> String {
    let headers = table
        .variables()
        .iter()
        .map(String::as_str)
        .chain(table.columns().map(|c| c.expr.as_str()))
        .collect_vec();
    let widths = headers.iter().map(|h| h.chars().count()).collect_vec();

    let mut lines = Vec::with_capacity(table.num_rows() + 2);
    lines.push(headers.iter().zip(&widths).map(|(h, &w)| pad(h, w)).join(" | "));
    lines.push(widths.iter().map(|&w| "-".repeat(w)).join("-+-"));

    for (row, assignment) in table.assignments().iter().enumerate() {
        let cells = table
            .variables()
            .iter()
            .map(|v| Truth::from(assignment.value(v)))
            .chain(table.columns().map(|c| c.results[row]))
            .zip(&widths)
            .map(|(cell, &w)| pad(&cell.to_string(), w))
            .join(" | ");
        lines.push(cells);
    }

    lines.join("\n")
}

pub fn render_summary(classification: Classification, forms: &NormalForms) -> String {
    format!(
        "Classification: {}\nCNF: {}\nDNF: {}",
        classification, forms.cnf, forms.dnf
    )
}
