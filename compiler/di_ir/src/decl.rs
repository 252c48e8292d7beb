//! Declarations handed to the pipeline by the intake boundary.
//!
//! A [`DeclarationBatch`] is the whole-program input of one compilation pass:
//! every class carrying a lifetime marker, plus every class tagged as a scope
//! root. Attribute names have already been resolved into [`Lifetime`] values
//! by the time a batch exists.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{Lifetime, Location, TypeName};

/// Declared accessibility of a constructor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    #[inline]
    pub fn is_private(self) -> bool {
        matches!(self, Accessibility::Private)
    }
}

/// One constructor of a candidate class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructorCandidate {
    pub accessibility: Accessibility,
    pub is_static: bool,
    /// Parameter types in declaration order.
    pub parameters: Vec<TypeName>,
    /// Carries the explicit injection-constructor marker.
    pub injection_marker: bool,
    pub location: Option<Location>,
}

impl ConstructorCandidate {
    pub fn new<I, T>(accessibility: Accessibility, parameters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        ConstructorCandidate {
            accessibility,
            is_static: false,
            parameters: parameters.into_iter().map(Into::into).collect(),
            injection_marker: false,
            location: None,
        }
    }

    /// A public instance constructor with the given parameter types.
    pub fn public<I, T>(parameters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        Self::new(Accessibility::Public, parameters)
    }

    /// Mark this constructor as the explicit injection constructor.
    #[must_use]
    pub fn marked(mut self) -> Self {
        self.injection_marker = true;
        self
    }

    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the container may call this constructor at all.
    #[inline]
    pub fn qualifies(&self) -> bool {
        !self.accessibility.is_private() && !self.is_static
    }
}

/// A class carrying exactly one lifetime marker.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ServiceDeclaration {
    /// The implementation class.
    pub class: TypeName,
    /// The service (interface) type the class is registered under.
    pub service_type: TypeName,
    pub lifetime: Lifetime,
    pub constructors: Vec<ConstructorCandidate>,
    pub location: Option<Location>,
}

impl ServiceDeclaration {
    pub fn new(
        class: impl Into<TypeName>,
        service_type: impl Into<TypeName>,
        lifetime: Lifetime,
    ) -> Self {
        ServiceDeclaration {
            class: class.into(),
            service_type: service_type.into(),
            lifetime,
            constructors: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorCandidate) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// A class whose runtime instances bound a DI scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeRootDeclaration {
    pub class: TypeName,
    pub location: Option<Location>,
}

impl ScopeRootDeclaration {
    pub fn new(class: impl Into<TypeName>) -> Self {
        ScopeRootDeclaration {
            class: class.into(),
            location: None,
        }
    }
}

/// All declarations of one compilation pass.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclarationBatch {
    pub services: Vec<ServiceDeclaration>,
    pub scope_roots: Vec<ScopeRootDeclaration>,
}

impl DeclarationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_service(mut self, service: ServiceDeclaration) -> Self {
        self.services.push(service);
        self
    }

    #[must_use]
    pub fn with_scope_root(mut self, root: ScopeRootDeclaration) -> Self {
        self.scope_roots.push(root);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.scope_roots.is_empty()
    }

    /// Stable hash of the whole batch.
    ///
    /// `FxHasher` is unseeded, so equal batches produce equal fingerprints
    /// across runs and processes.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
