//! Rewrites LaTeX snippets copied from Learning Standards documents into
//! PGML markup that WeBWorK accepts.

pub mod config;
pub mod error;
pub mod host;
pub mod transform;

pub use error::{Error, Result};
pub use transform::{TransformOptions, process, process_with};
