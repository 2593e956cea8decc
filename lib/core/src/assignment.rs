use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use expr_parser::{Token, TokenKind};
use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::options::MAX_VARIABLES;

/// A valuation of named variables, kept in insertion order.
///
/// Variables that were never set read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<(String, bool)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.iter().find(|(n, _)| n == name).map(|&(_, v)| v)
    }

    pub fn value(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S> FromIterator<(S, bool)> for Assignment
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (name, value) in iter {
            assignment.set(name, value);
        }
        assignment
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let body = self
            .iter()
            .map(|(n, v)| format!("{}={}", n, if v { 1 } else { 0 }))
            .join(", ");
        write!(f, "{{{}}}", body)
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

fn variable_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Distinct variable names among `tokens`, sorted case-insensitively
/// (ties by byte order, so `A` comes before `a`).
///
/// The same order is used for the table columns and for the bits of each row.
pub fn variable_set<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .filter(|t| t.kind() == TokenKind::Variable)
        .map(|t| t.text())
        .unique()
        .sorted_by(|a, b| variable_order(a, b))
        .map(str::to_owned)
        .collect()
}

/// Iterator over all `2^n` assignments of `n` variables.
///
/// Row `r` sets `variables[j]` to bit `n - 1 - j` of `r`, so the first
/// variable is the most significant one and row 0 is all-false.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    variables: &'a [String],
    row: usize,
    total: usize,
}

impl<'a> Assignments<'a> {
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_VARIABLES`] variables.
    pub fn new(variables: &'a [String]) -> Self {
        assert!(
            variables.len() <= MAX_VARIABLES,
            "at most {} variables are supported, got {}",
            MAX_VARIABLES,
            variables.len()
        );
        Self {
            variables,
            row: 0,
            total: 1 << variables.len(),
        }
    }

    fn build(&self, row: usize) -> Assignment {
        let n = self.variables.len();
        let values = self
            .variables
            .iter()
            .enumerate()
            .map(|(j, name)| (name.clone(), (row >> (n - 1 - j)) & 1 == 1))
            .collect();
        Assignment { values }
    }
}

impl<'a> Iterator for Assignments<'a> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.total {
            return None;
        }
        let assignment = self.build(self.row);
        self.row += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.row;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Assignments<'a> {}

/// All rows for `variables`, which must number at most [`MAX_VARIABLES`].
pub fn generate_assignments(variables: &[String]) -> Vec<Assignment> {
    Assignments::new(variables).collect()
}
