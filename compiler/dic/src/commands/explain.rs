//! The `explain` command: documentation for diagnostic codes.

use di_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Look up the documentation for a code string such as `DI1002`.
pub fn explain(code: &str) -> Result<&'static str, CliError> {
    let code = code
        .parse::<ErrorCode>()
        .map_err(|()| CliError::UnknownCode(code.to_string()))?;
    ErrorDocs::get(code).ok_or(CliError::NoDocs(code))
}
