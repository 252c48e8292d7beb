//! Service descriptors: the finalized output of resolution.

use crate::{Lifetime, TypeName};

/// How to construct and register one service.
///
/// Equality is structural over all four fields, which is what registration
/// deduplication relies on. Fields are private; a descriptor never changes
/// after it is built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ServiceDescriptor {
    implementation: TypeName,
    interface: TypeName,
    lifetime: Lifetime,
    parameter_types: Vec<TypeName>,
}

impl ServiceDescriptor {
    pub fn new(
        implementation: impl Into<TypeName>,
        interface: impl Into<TypeName>,
        lifetime: Lifetime,
        parameter_types: Vec<TypeName>,
    ) -> Self {
        ServiceDescriptor {
            implementation: implementation.into(),
            interface: interface.into(),
            lifetime,
            parameter_types,
        }
    }

    #[inline]
    pub fn implementation(&self) -> &TypeName {
        &self.implementation
    }

    #[inline]
    pub fn interface(&self) -> &TypeName {
        &self.interface
    }

    #[inline]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Dependencies in constructor parameter order.
    #[inline]
    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }

    /// Both the implementation and the interface are named.
    pub fn is_well_formed(&self) -> bool {
        !self.implementation.is_empty() && !self.interface.is_empty()
    }
}
