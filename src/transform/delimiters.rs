//! Inline math delimiter conversion.
//!
//! Rewrites `$...$` pairs into the `\(...\)` form understood by PGML.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    /// Matches a pair of `$` around a non-empty interior that contains no `$`.
    static ref DOLLAR_PAIR: Regex = Regex::new(r"\$([^$]+)\$").unwrap();
}

/// Replace every `$...$` pair with `\(...\)`, keeping the interior as-is.
///
/// Pairs are taken left to right. A trailing unpaired `$` and an empty
/// `$$` are left untouched.
pub fn convert_delimiters(input: &str) -> String {
    let mut pairs = 0usize;
    let result = DOLLAR_PAIR.replace_all(input, |caps: &Captures| {
        pairs += 1;
        format!(r"\({}\)", &caps[1])
    });

    if pairs > 0 {
        debug!(pairs, "converting inline math delimiters");
    }
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_dollars_unchanged() {
        assert_eq!(convert_delimiters(""), "");
        assert_eq!(convert_delimiters("plain text"), "plain text");
        assert_eq!(convert_delimiters(r"\(x\)"), r"\(x\)");
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(convert_delimiters("$x$"), r"\(x\)");
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(convert_delimiters("$a$ and $b$"), r"\(a\) and \(b\)");
    }

    #[test]
    fn test_unpaired_dollar_left_alone() {
        assert_eq!(convert_delimiters("costs $5"), "costs $5");
        assert_eq!(convert_delimiters("$a$ then $b"), r"\(a\) then $b");
    }

    #[test]
    fn test_empty_pair_not_matched() {
        assert_eq!(convert_delimiters("$$"), "$$");
    }

    #[test]
    fn test_adjacent_pairs() {
        assert_eq!(convert_delimiters("$a$$b$"), r"\(a\)\(b\)");
        assert_eq!(convert_delimiters("$$a$"), r"$\(a\)");
    }

    #[test]
    fn test_interior_may_span_lines() {
        assert_eq!(convert_delimiters("$a +\nb$"), "\\(a +\nb\\)");
    }
}
