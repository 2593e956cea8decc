use itertools::Itertools;
use log::debug;

/// ASCII spellings and their canonical symbols.
///
/// Applied in order: `<->` and `->` go before the single-character `~`/`!`
/// rewrites, and `\/` before `/\`.
const REWRITES: &[(&str, &str)] = &[
    ("<->", "↔"),
    ("<=>", "↔"),
    ("->", "→"),
    ("~", "¬"),
    ("!", "¬"),
    ("\\/", "∨"),
    ("||", "∨"),
    ("/\\", "∧"),
    ("&&", "∧"),
];

/// Canonicalize free-form input: collapse whitespace runs into single spaces,
/// trim both ends, and rewrite ASCII operators into `¬ ∧ ∨ → ↔`.
///
/// Every rewrite replaces ASCII text by a non-ASCII symbol, so the result is
/// a fixed point: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(input: &str) -> String {
    let mut text = input.split_whitespace().join(" ");
    for (pattern, symbol) in REWRITES {
        if text.contains(pattern) {
            text = text.replace(pattern, symbol);
        }
    }
    debug!("normalize({:?}) = {:?}", input, text);
    text
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(normalize("  A \t\n ∧   B  "), "A ∧ B");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_iff_spellings() {
        assert_eq!(normalize("A <-> B"), "A ↔ B");
        assert_eq!(normalize("A <=> B"), "A ↔ B");
    }

    #[test]
    fn test_imply_is_not_shadowed() {
        assert_eq!(normalize("A -> B <-> C"), "A → B ↔ C");
    }

    #[test]
    fn test_negation_spellings() {
        assert_eq!(normalize("~A & !B"), "¬A & ¬B");
    }

    #[test]
    fn test_or_spellings() {
        assert_eq!(normalize("A \\/ B || C"), "A ∨ B ∨ C");
    }

    #[test]
    fn test_and_spellings() {
        assert_eq!(normalize("A /\\ B && C"), "A ∧ B ∧ C");
    }

    #[test]
    fn test_single_ampersand_is_kept() {
        assert_eq!(normalize("A&"), "A&");
    }

    #[test]
    fn test_already_normalized() {
        let s = "¬(p ∧ q) ↔ (¬p ∨ ¬q)";
        assert_eq!(normalize(s), s);
    }

    #[quickcheck]
    fn prop_idempotent(input: String) -> bool {
        let once = normalize(&input);
        normalize(&once) == once
    }

    #[quickcheck]
    fn prop_idempotent_on_operator_soup(picks: Vec<u8>) -> bool {
        const PIECES: &[&str] = &["<", "-", ">", "=", "~", "!", "\\", "/", "|", "&", " ", "A", "("];
        let input: String = picks.iter().map(|&i| PIECES[i as usize % PIECES.len()]).collect();
        let once = normalize(&input);
        normalize(&once) == once
    }
}
