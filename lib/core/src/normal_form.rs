use std::fmt::{Display, Formatter};
use std::slice::Iter;

use itertools::Itertools;
use log::debug;
use snafu::ensure;

use crate::assignment::Assignment;
use crate::error::{MalformedExpressionSnafu, Result};
use crate::truth::Truth;

pub const CNF_NO_CLAUSES: &str = "no clauses (tautology)";
pub const DNF_NO_CLAUSES: &str = "no clauses (contradiction)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub name: String,
    pub negated: bool,
}

impl Literal {
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Literal {
            name: name.into(),
            negated,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "¬{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunction<T>(pub Vec<T>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disjunction<T>(pub Vec<T>);

impl<T> Conjunction<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Disjunction<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Display> Display for Conjunction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.iter().join(" ∧ "))
    }
}

impl<T: Display> Display for Disjunction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.iter().join(" ∨ "))
    }
}

/// Conjunction of clauses, one per falsifying row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf(pub Conjunction<Disjunction<Literal>>);

/// Disjunction of clauses, one per satisfying row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dnf(pub Disjunction<Conjunction<Literal>>);

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", CNF_NO_CLAUSES)
        } else {
            write!(f, "{}", self.0.iter().join(" ∧ "))
        }
    }
}

impl Display for Dnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", DNF_NO_CLAUSES)
        } else {
            write!(f, "{}", self.0.iter().join(" ∨ "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForms {
    pub cnf: Cnf,
    pub dnf: Dnf,
}

/// Read CNF and DNF off a truth table.
///
/// A false row contributes the clause that excludes it: each variable appears
/// positively if it is false in that row, negated otherwise. A true row
/// contributes the conjunction that describes it.
pub fn build_normal_forms(variables: &[String], assignments: &[Assignment], results: &[Truth]) -> Result<NormalForms> {
    ensure!(
        assignments.len() == results.len(),
        MalformedExpressionSnafu {
            reason: format!(
                "{} results do not match {} assignments",
                results.len(),
                assignments.len()
            ),
        }
    );

    let mut cnf = Vec::new();
    let mut dnf = Vec::new();
    for (row, (assignment, result)) in assignments.iter().zip(results).enumerate() {
        match result.bool() {
            Some(true) => {
                let literals = variables
                    .iter()
                    .map(|v| Literal::new(v.as_str(), !assignment.value(v)))
                    .collect_vec();
                dnf.push(Conjunction(literals));
            }
            Some(false) => {
                let literals = variables
                    .iter()
                    .map(|v| Literal::new(v.as_str(), assignment.value(v)))
                    .collect_vec();
                cnf.push(Disjunction(literals));
            }
            None => {
                return MalformedExpressionSnafu {
                    reason: format!("row {} has no defined value", row),
                }
                .fail();
            }
        }
    }

    debug!("normal forms: {} CNF clauses, {} DNF clauses", cnf.len(), dnf.len());
    Ok(NormalForms {
        cnf: Cnf(Conjunction(cnf)),
        dnf: Dnf(Disjunction(dnf)),
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::assignment::generate_assignments;
    use crate::error::ErrorKind;
    use Truth::*;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_implication() {
        // A → B
        let variables = vars(&["A", "B"]);
        let assignments = generate_assignments(&variables);
        let forms = build_normal_forms(&variables, &assignments, &[True, True, False, True]).unwrap();
        assert_eq!(forms.cnf.to_string(), "(¬A ∨ B)");
        assert_eq!(forms.dnf.to_string(), "(¬A ∧ ¬B) ∨ (¬A ∧ B) ∨ (A ∧ B)");
    }

    #[test]
    fn test_single_variable() {
        let variables = vars(&["p"]);
        let assignments = generate_assignments(&variables);
        let forms = build_normal_forms(&variables, &assignments, &[False, True]).unwrap();
        assert_eq!(forms.cnf.to_string(), "(p)");
        assert_eq!(forms.dnf.to_string(), "(p)");
    }

    #[test]
    fn test_tautology_has_no_cnf_clauses() {
        let variables = vars(&["A"]);
        let assignments = generate_assignments(&variables);
        let forms = build_normal_forms(&variables, &assignments, &[True, True]).unwrap();
        assert_eq!(forms.cnf.to_string(), CNF_NO_CLAUSES);
        assert_eq!(forms.dnf.to_string(), "(¬A) ∨ (A)");
    }

    #[test]
    fn test_contradiction_has_no_dnf_clauses() {
        let variables = vars(&["A"]);
        let assignments = generate_assignments(&variables);
        let forms = build_normal_forms(&variables, &assignments, &[False, False]).unwrap();
        assert_eq!(forms.cnf.to_string(), "(A) ∧ (¬A)");
        assert_eq!(forms.dnf.to_string(), DNF_NO_CLAUSES);
    }

    #[test]
    fn test_structure() {
        let variables = vars(&["A", "B"]);
        let assignments = generate_assignments(&variables);
        let forms = build_normal_forms(&variables, &assignments, &[False, False, False, True]).unwrap();
        assert_eq!(forms.dnf.0.len(), 1);
        assert_eq!(
            forms.dnf.0 .0[0],
            Conjunction(vec![Literal::new("A", false), Literal::new("B", false)])
        );
        assert_eq!(forms.cnf.0.len(), 3);
    }

    #[test]
    fn test_rejects_undefined() {
        let variables = vars(&["A"]);
        let assignments = generate_assignments(&variables);
        let err = build_normal_forms(&variables, &assignments, &[True, Undefined]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let variables = vars(&["A"]);
        let assignments = generate_assignments(&variables);
        let err = build_normal_forms(&variables, &assignments, &[True]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    }
}
