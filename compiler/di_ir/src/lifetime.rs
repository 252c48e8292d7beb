//! Registration lifetimes.

use std::fmt;

/// How many instances of a service the container creates and shares.
///
/// Resolved once at the intake boundary from the attribute a class carries;
/// later phases only ever match on this enum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub enum Lifetime {
    /// A fresh instance on every resolution.
    Transient,
    /// One instance per active scope.
    Scoped,
    /// Exactly one instance, constructed eagerly at registration time.
    Singleton,
}

impl Lifetime {
    pub const ALL: [Lifetime; 3] = [Lifetime::Transient, Lifetime::Scoped, Lifetime::Singleton];

    pub fn as_str(self) -> &'static str {
        match self {
            Lifetime::Transient => "transient",
            Lifetime::Scoped => "scoped",
            Lifetime::Singleton => "singleton",
        }
    }

    /// Attribute name marking a class with this lifetime, without the
    /// `Attribute` suffix.
    pub fn marker_name(self) -> &'static str {
        match self {
            Lifetime::Transient => "TransientService",
            Lifetime::Scoped => "ScopedService",
            Lifetime::Singleton => "SingletonService",
        }
    }

    /// Inverse of [`Lifetime::marker_name`].
    pub fn from_marker_name(name: &str) -> Option<Lifetime> {
        Self::ALL
            .into_iter()
            .find(|lifetime| lifetime.marker_name() == name)
    }

    /// Whether the registration statement constructs the instance immediately.
    #[inline]
    pub fn is_eager(self) -> bool {
        matches!(self, Lifetime::Singleton)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
