//! Literal shorthand expansion.

use tracing::debug;

/// Shorthand tokens and the canonical markup they expand to, applied in order.
///
/// No replacement reintroduces any of the tokens, so the order does not
/// change the result.
pub const SHORTHANDS: &[(&str, &str)] = &[
    (r"\bbR", r"\mathbb{R}"),
    (r"\spn", r"\text{span}"),
    (r"\image", r"\text{im}"),
];

/// Expand every shorthand token. Matching is exact and case-sensitive.
pub fn replace_symbols(input: &str) -> String {
    SHORTHANDS
        .iter()
        .fold(input.to_string(), |text, &(token, markup)| {
            let count = text.matches(token).count();
            if count == 0 {
                return text;
            }
            debug!(token, count, "expanding shorthand");
            text.replace(token, markup)
        })
}
