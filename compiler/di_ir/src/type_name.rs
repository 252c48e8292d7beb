//! Fully-qualified type names.

use std::fmt;

/// A type name exactly as the declaration source displays it.
///
/// Names are kept verbatim (for example `global::Game.Services.IBar`) so that
/// emitted code never has to guess which of several identically-named types
/// was meant. Surrounding whitespace is trimmed on construction.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name, trimming surrounding whitespace.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.len() == name.len() {
            TypeName(name)
        } else {
            TypeName(trimmed.to_string())
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last path segment, without generic arguments.
    ///
    /// `global::Game.Repo<Game.User>` becomes `Repo`.
    pub fn simple_name(&self) -> &str {
        let base = self.0.split('<').next().unwrap_or_default();
        base.rsplit(['.', ':']).next().unwrap_or(base)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        TypeName::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        TypeName::new(name)
    }
}
