//! Error codes for all registration diagnostics.
//!
//! Each code is a unique identifier (e.g., `DI1001`) whose first digit names
//! the phase that reports it. Used for `--explain` lookups and documentation.

use std::fmt;

use crate::Severity;

/// Error codes for all registration diagnostics.
///
/// Format: DI#### where the first digit indicates phase:
/// - DI1xxx: Constructor selection
/// - DI2xxx: Declaration intake (attribute arguments)
/// - DI3xxx: Registration ordering
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Constructor Selection (DI1xxx)
    /// No public, non-static constructor
    DI1001,
    /// Several constructors tie at the greatest parameter count
    DI1002,
    /// More than one constructor carries the injection marker
    DI1003,

    // Declaration Intake (DI2xxx)
    /// Missing or invalid service-type argument
    DI2001,
    /// More than one lifetime marker on one class
    DI2002,

    // Registration Ordering (DI3xxx)
    /// Singletons depend on each other in a cycle
    DI3001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::DI1001,
        ErrorCode::DI1002,
        ErrorCode::DI1003,
        ErrorCode::DI2001,
        ErrorCode::DI2002,
        ErrorCode::DI3001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DI1001 => "DI1001",
            ErrorCode::DI1002 => "DI1002",
            ErrorCode::DI1003 => "DI1003",
            ErrorCode::DI2001 => "DI2001",
            ErrorCode::DI2002 => "DI2002",
            ErrorCode::DI3001 => "DI3001",
        }
    }

    /// Short rule name, as shown in JSON output and docs.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::DI1001 => "NoEligibleConstructor",
            ErrorCode::DI1002 => "AmbiguousConstructor",
            ErrorCode::DI1003 => "MultipleInjectionConstructors",
            ErrorCode::DI2001 => "MalformedAttributeArgument",
            ErrorCode::DI2002 => "ConflictingLifetimeMarkers",
            ErrorCode::DI3001 => "CyclicSingletonDependency",
        }
    }

    /// Message template; `{0}`, `{1}`, ... are filled from the diagnostic's
    /// arguments.
    pub fn message_template(&self) -> &'static str {
        match self {
            ErrorCode::DI1001 => {
                "Type '{0}' must have at least one public constructor for dependency injection"
            }
            ErrorCode::DI1002 => {
                "Type '{0}' has multiple constructors with {1} parameters; consider annotating one with [Constructor]"
            }
            ErrorCode::DI1003 => {
                "Type '{0}' has {1} constructors annotated with [Constructor]; only one may be annotated"
            }
            ErrorCode::DI2001 => "Type '{0}' has an invalid [{1}] attribute: {2}",
            ErrorCode::DI2002 => {
                "Type '{0}' declares more than one service lifetime: {1}"
            }
            ErrorCode::DI3001 => {
                "Singleton services depend on each other in a cycle: {0}"
            }
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            ErrorCode::DI1002 => Severity::Warning,
            ErrorCode::DI1001
            | ErrorCode::DI1003
            | ErrorCode::DI2001
            | ErrorCode::DI2002
            | ErrorCode::DI3001 => Severity::Error,
        }
    }

    /// Check if this is a constructor-selection diagnostic (DI1xxx range).
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::DI1001 | ErrorCode::DI1002 | ErrorCode::DI1003
        )
    }

    /// Check if this is a declaration-intake diagnostic (DI2xxx range).
    pub fn is_intake_error(&self) -> bool {
        matches!(self, ErrorCode::DI2001 | ErrorCode::DI2002)
    }

    /// Check if this is a registration-ordering diagnostic (DI3xxx range).
    pub fn is_ordering_error(&self) -> bool {
        matches!(self, ErrorCode::DI3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"DI1002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
