//! Knobs for the two places where the pipeline has a choice.

use serde::Deserialize;

/// How a bare `\MathCite{key}` treats the character right after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BareCite {
    /// Drop the following character (unless it is `[`). A macro at the very
    /// end of the text is left alone.
    #[default]
    Swallow,
    /// Keep the following character.
    Keep,
}

/// Line ending written after the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Options threaded through the pipeline.
///
/// The default reproduces the macro's historical output byte for byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub bare_cite: BareCite,
    pub line_ending: LineEnding,
}
