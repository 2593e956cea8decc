use log::{debug, info};
use serde::Serialize;
use snafu::ensure;

use crate::assignment::{generate_assignments, Assignment};
use crate::classify::{classify, Classification};
use crate::error::{Result, TooManyVariablesSnafu};
use crate::formula::Formula;
use crate::normal_form::{build_normal_forms, NormalForms};
use crate::options::Options;
use crate::subexpr::extract_subexpressions;
use crate::truth::Truth;

/// Results of one expression over every row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub expr: String,
    pub results: Vec<Truth>,
}

/// The truth table of a formula, optionally with its subexpressions.
///
/// Columns are in extraction order, with the formula itself always last.
#[derive(Debug, Clone, Serialize)]
pub struct TruthTable {
    variables: Vec<String>,
    assignments: Vec<Assignment>,
    subexpressions: Vec<Column>,
    formula: Column,
}

impl TruthTable {
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn num_rows(&self) -> usize {
        self.assignments.len()
    }

    /// Normalized text of the formula.
    pub fn formula(&self) -> &str {
        &self.formula.expr
    }

    pub fn formula_results(&self) -> &[Truth] {
        &self.formula.results
    }

    pub fn subexpressions(&self) -> &[Column] {
        &self.subexpressions
    }

    /// All columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.subexpressions.iter().chain(std::iter::once(&self.formula))
    }

    pub fn results_by_expression(&self) -> impl Iterator<Item = (&str, &[Truth])> {
        self.columns().map(|c| (c.expr.as_str(), c.results.as_slice()))
    }

    pub fn column(&self, expr: &str) -> Option<&[Truth]> {
        self.columns().find(|c| c.expr == expr).map(|c| c.results.as_slice())
    }

    pub fn classify(&self) -> Classification {
        classify(&self.formula.results)
    }

    pub fn normal_forms(&self) -> Result<NormalForms> {
        build_normal_forms(&self.variables, &self.assignments, &self.formula.results)
    }
}

/// Evaluate a subexpression on every row. Failures become `Undefined` cells
/// instead of aborting the whole table.
fn evaluate_column(text: String, assignments: &[Assignment]) -> Column {
    let results = match Formula::from_normalized(text.as_str()) {
        Ok(sub) => assignments
            .iter()
            .map(|a| sub.eval(a).map_or(Truth::Undefined, Truth::from))
            .collect(),
        Err(e) => {
            debug!("subexpression {:?} is not evaluable: {}", text, e);
            vec![Truth::Undefined; assignments.len()]
        }
    };
    Column { expr: text, results }
}

/// Build the full truth table for `input`.
///
/// Fails if the formula itself does not parse or has too many variables.
pub fn evaluate_formula(input: &str, options: &Options) -> Result<TruthTable> {
    let formula = Formula::parse(input)?;

    let count = formula.variables().len();
    let limit = options.variable_limit();
    ensure!(count <= limit, TooManyVariablesSnafu { count, limit });

    let variables = formula.variables().to_vec();
    let assignments = generate_assignments(&variables);

    let results = assignments
        .iter()
        .map(|a| formula.eval(a).map(Truth::from))
        .collect::<Result<Vec<_>>>()?;

    let subexpressions = if options.include_subexpressions {
        extract_subexpressions(formula.text())
            .into_iter()
            .filter(|s| s != formula.text())
            .map(|s| evaluate_column(s, &assignments))
            .collect()
    } else {
        Vec::new()
    };

    info!(
        "Evaluated {:?}: {} variables, {} rows, {} subexpressions",
        formula.text(),
        variables.len(),
        assignments.len(),
        subexpressions.len()
    );

    Ok(TruthTable {
        variables,
        assignments,
        subexpressions,
        formula: Column {
            expr: formula.text().to_string(),
            results,
        },
    })
}
