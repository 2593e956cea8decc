use itertools::Itertools;
use log::debug;

const NOT: char = '¬';

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Source substrings worth their own table column.
///
/// First every parenthesized group, in order of its closing paren (each `)`
/// is matched to the innermost unmatched `(`), then every `¬` directly
/// followed by a variable name. Duplicates collapse to their first occurrence.
pub fn extract_subexpressions(text: &str) -> Vec<String> {
    let mut open: Vec<usize> = Vec::new();
    let mut found: Vec<&str> = Vec::new();

    for (i, c) in text.char_indices() {
        match c {
            '(' => open.push(i),
            ')' => {
                if let Some(start) = open.pop() {
                    found.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    found.extend(atomic_negations(text));

    let subexpressions = found.into_iter().unique().map(str::to_owned).collect_vec();
    debug!("subexpressions of {:?} = {:?}", text, subexpressions);
    subexpressions
}

fn atomic_negations(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices(NOT).filter_map(move |(start, _)| {
        let rest = &text[start + NOT.len_utf8()..];
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
        Some(&text[start..start + NOT.len_utf8() + len])
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_parens_then_negations() {
        assert_eq!(extract_subexpressions("¬(A∧B)∨(¬A)"), vec!["(A∧B)", "(¬A)", "¬A"]);
    }

    #[test]
    fn test_nested_in_closing_order() {
        assert_eq!(
            extract_subexpressions("((A ∨ B) ∧ C) → D"),
            vec!["(A ∨ B)", "((A ∨ B) ∧ C)"]
        );
    }

    #[test]
    fn test_dedup_by_text() {
        assert_eq!(extract_subexpressions("(A ∧ B) ∨ ¬(A ∧ B) ∨ ¬C ∨ ¬C"), vec!["(A ∧ B)", "¬C"]);
    }

    #[test]
    fn test_negation_takes_whole_identifier() {
        assert_eq!(extract_subexpressions("¬x_10 ∧ ¬¬y"), vec!["¬x_10", "¬y"]);
    }

    #[test]
    fn test_spaced_negation_is_not_atomic() {
        assert!(extract_subexpressions("¬ A").is_empty());
    }

    #[test]
    fn test_unmatched_close_is_ignored() {
        assert_eq!(extract_subexpressions("A) ∧ (B)"), vec!["(B)"]);
    }

    #[test]
    fn test_no_subexpressions() {
        assert!(extract_subexpressions("A ∧ B").is_empty());
    }
}
