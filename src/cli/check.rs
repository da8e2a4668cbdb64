//! Decode wire JSON and print its canonical re-encoding

use super::CliError;
use crate::codec;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Wire JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate, don't print the re-encoding
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Input decoded cleanly
    Valid,
    /// Canonical re-encoding of the decoded value
    Success(serde_json::Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let json_str = options.input.as_deref().ok_or(CliError::NoInput)?;

    let value = codec::from_str(json_str)?;
    tracing::debug!(kind = value.type_name(), "decoded wire value");

    if options.syntax_only {
        return Ok(CheckResult::Valid);
    }
    Ok(CheckResult::Success(codec::encode(&value)))
}
