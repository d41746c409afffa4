//! The PGML header placed in front of every result.

use super::options::LineEnding;

/// Three PGML line breaks followed by a bold "LS:" label.
pub const HEADER: &str = "$BR $BR $BR $BBOLD LS: $EBOLD";

/// Put [`HEADER`] and a line ending in front of `input`.
pub fn prepend_header(input: &str, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut result = String::with_capacity(HEADER.len() + eol.len() + input.len());
    result.push_str(HEADER);
    result.push_str(eol);
    result.push_str(input);
    result
}
