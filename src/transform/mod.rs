//! Learning Standards to PGML text transformation.
//!
//! This module provides the rewrite pipeline:
//! - Convert `$...$` inline math into `\(...\)`
//! - Strip `\MathCite` citation macros
//! - Expand shorthand tokens such as `\bbR`
//! - Prepend the PGML "LS:" header
//!
//! Every step is a total function over text; input that matches nothing
//! passes through unchanged.

mod citations;
mod delimiters;
mod header;
mod options;
mod symbols;

pub use citations::remove_citations;
pub use delimiters::convert_delimiters;
pub use header::{HEADER, prepend_header};
pub use options::{BareCite, LineEnding, TransformOptions};
pub use symbols::{SHORTHANDS, replace_symbols};

use tracing::trace;

/// A single pipeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `$...$` to `\(...\)`.
    Delimiters,
    /// `\MathCite` removal.
    Citations,
    /// Shorthand expansion.
    Symbols,
    /// Header injection.
    Header,
}

impl Step {
    /// The steps in the order the pipeline runs them.
    pub const ALL: [Step; 4] = [Self::Delimiters, Self::Citations, Self::Symbols, Self::Header];

    pub fn name(self) -> &'static str {
        match self {
            Self::Delimiters => "delimiters",
            Self::Citations => "citations",
            Self::Symbols => "symbols",
            Self::Header => "header",
        }
    }
}

/// Run one step over `input`.
pub fn apply_step(step: Step, input: &str, options: &TransformOptions) -> String {
    trace!(step = step.name(), len = input.len(), "applying step");
    match step {
        Step::Delimiters => convert_delimiters(input),
        Step::Citations => remove_citations(input, options.bare_cite),
        Step::Symbols => replace_symbols(input),
        Step::Header => prepend_header(input, options.line_ending),
    }
}

/// Transform `text` with the default options.
pub fn process(text: &str) -> String {
    process_with(text, &TransformOptions::default())
}

/// Transform `text`, running every step in [`Step::ALL`] order.
pub fn process_with(text: &str, options: &TransformOptions) -> String {
    Step::ALL
        .iter()
        .fold(text.to_string(), |acc, &step| apply_step(step, &acc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_CRLF: &str = "$BR $BR $BR $BBOLD LS: $EBOLD\r\n";

    #[test]
    fn test_empty_input_yields_header_only() {
        assert_eq!(process(""), HEADER_CRLF);
    }

    #[test]
    fn test_full_pipeline() {
        let input = r"Let $T: \bbR^n \to \bbR^m$. Then $\image(T) = \spn(A)$ \MathCite{Lay}[Lay 4.2] and \MathCite{Strang}.";
        let expected = format!(
            "{}{}",
            HEADER_CRLF,
            r"Let \(T: \mathbb{R}^n \to \mathbb{R}^m\). Then \(\text{im}(T) = \text{span}(A)\) Lay 4.2 and Strang"
        );
        assert_eq!(process(input), expected);
    }

    #[test]
    fn test_delimiters_run_before_citations() {
        assert_eq!(
            process(r"$\MathCite{a}[b]$"),
            format!("{}{}", HEADER_CRLF, r"\(b\)")
        );
    }

    #[test]
    fn test_process_is_fold_of_steps() {
        let input = r"$x \in \bbR$ \MathCite{k} y";
        let options = TransformOptions::default();
        let mut folded = input.to_string();
        for step in Step::ALL {
            folded = apply_step(step, &folded, &options);
        }
        assert_eq!(process(input), folded);
    }

    #[test]
    fn test_deterministic() {
        let input = r"$a$ \MathCite{c} \spn";
        assert_eq!(process(input), process(input));
    }

    #[test]
    fn test_keep_and_lf_options() {
        let options = TransformOptions {
            bare_cite: BareCite::Keep,
            line_ending: LineEnding::Lf,
        };
        assert_eq!(
            process_with(r"\MathCite{foo} rest", &options),
            "$BR $BR $BR $BBOLD LS: $EBOLD\nfoo rest"
        );
    }

    #[test]
    fn test_step_order() {
        assert_eq!(
            Step::ALL.map(Step::name),
            ["delimiters", "citations", "symbols", "header"]
        );
    }
}
