//! Boundary between a clipboard host and the transformation.
//!
//! Hosts pass `None` when there is nothing to read and treat a `None` result
//! as "produce no output", which is not the same as an empty string.

use crate::transform::{TransformOptions, process_with};

/// Result handed back to a clipboard host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostOutput(Option<String>);

impl HostOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// No output; the host leaves the clipboard alone.
    pub fn none() -> Self {
        Self(None)
    }

    #[cfg(test)]
    fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Value to place on the clipboard, if any.
    pub fn into_clipboard(self) -> Option<String> {
        self.0
    }

    /// Value passed to the next action of a trigger chain.
    /// Absence becomes an empty string there.
    pub fn into_trigger_text(self) -> String {
        self.0.unwrap_or_default()
    }
}

/// Run the transformation for a host with the default options.
pub fn run_macro(text: Option<&str>) -> Option<String> {
    run_macro_with(text, &TransformOptions::default()).into_clipboard()
}

/// Run the transformation for a host. The result is never absent.
pub fn run_macro_with(text: Option<&str>, options: &TransformOptions) -> HostOutput {
    HostOutput::text(process_with(text.unwrap_or_default(), options))
}
