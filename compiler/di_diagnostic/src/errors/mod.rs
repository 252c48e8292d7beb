//! Embedded error documentation for `--explain` support.
//!
//! Each error code has a markdown file in this directory explaining the
//! error, showing the offending declaration and how to fix it. The files are
//! embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `DIXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

/// Embedded documentation for each error code.
static DOCS: &[(ErrorCode, &str)] = &[
    // Constructor selection (DI1xxx)
    (ErrorCode::DI1001, include_str!("DI1001.md")),
    (ErrorCode::DI1002, include_str!("DI1002.md")),
    (ErrorCode::DI1003, include_str!("DI1003.md")),
    // Declaration intake (DI2xxx)
    (ErrorCode::DI2001, include_str!("DI2001.md")),
    (ErrorCode::DI2002, include_str!("DI2002.md")),
    // Registration ordering (DI3xxx)
    (ErrorCode::DI3001, include_str!("DI3001.md")),
];
