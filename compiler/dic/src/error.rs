//! Infrastructure errors.
//!
//! Problems in the user's declarations are diagnostics and never reach this
//! type. A `CliError` means the command could not run at all.

use std::io;
use std::path::PathBuf;

use di_diagnostic::ErrorCode;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Bad command line; the message says what was expected.
    #[error("{0}")]
    Usage(String),

    #[error("unknown error code '{0}'")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    NoDocs(ErrorCode),
}

impl CliError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}
