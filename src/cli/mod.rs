//! CLI support for fauna-query
//!
//! Provides programmatic access to the `fq` commands so other tools can embed
//! them.

mod check;
mod keywords;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use keywords::{get_keyword_category, get_keywords_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Wire JSON could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] crate::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    /// Unknown keyword category
    #[error("Unknown category: '{0}'\nRun 'fq keywords' to see available categories.")]
    UnknownCategory(String),
}
