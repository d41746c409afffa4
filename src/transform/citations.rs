//! `\MathCite` macro removal.
//!
//! The bracketed form `\MathCite{key}[display]` collapses to `display`.
//! The bare form `\MathCite{key}` collapses to `key`, and by default also
//! eats the single character that follows it.

use super::options::BareCite;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    /// `\MathCite{key}[display]`, capturing the display text.
    static ref BRACKETED_CITE: Regex = Regex::new(
        r"\\MathCite\{[a-zA-Z0-9]+\}\[([^\]]+)\]"
    ).unwrap();

    /// `\MathCite{key}` plus one following character that is not `[`.
    static ref BARE_CITE_SWALLOW: Regex = Regex::new(
        r"\\MathCite\{([a-zA-Z0-9]+)\}[^\[]"
    ).unwrap();

    /// `\MathCite{key}` alone; the following character is checked by hand.
    static ref BARE_CITE: Regex = Regex::new(
        r"\\MathCite\{([a-zA-Z0-9]+)\}"
    ).unwrap();
}

/// Strip `\MathCite` wrappers, bracketed form first, then the bare form.
pub fn remove_citations(input: &str, bare: BareCite) -> String {
    let text = unwrap_group(&BRACKETED_CITE, input, "removing bracketed citations");

    match bare {
        BareCite::Swallow => unwrap_group(&BARE_CITE_SWALLOW, &text, "removing bare citations"),
        BareCite::Keep => unwrap_bare_keeping_next(&text),
    }
}

/// Replace each match of `re` with its first capture group.
fn unwrap_group(re: &Regex, text: &str, message: &str) -> String {
    let mut count = 0usize;
    let result = re.replace_all(text, |caps: &Captures| {
        count += 1;
        caps[1].to_string()
    });

    if count > 0 {
        debug!(count, "{}", message);
    }
    result.into_owned()
}

/// Bare-form removal that leaves the following character in place.
///
/// A macro directly followed by `[` is not touched, matching the swallowing
/// rule's refusal to match there.
fn unwrap_bare_keeping_next(text: &str) -> String {
    let mut count = 0usize;
    let result = BARE_CITE.replace_all(text, |caps: &Captures| {
        let end = caps.get(0).map_or(0, |m| m.end());
        if text[end..].starts_with('[') {
            caps[0].to_string()
        } else {
            count += 1;
            caps[1].to_string()
        }
    });

    if count > 0 {
        debug!(count, "removing bare citations");
    }
    result.into_owned()
}
