//! DI IR - declaration and descriptor types
//!
//! This crate contains the data model shared by every phase of the
//! registration compiler:
//! - Type names as supplied by the declaration source
//! - Lifetimes (the closed set of registration policies)
//! - Service and scope-root declarations with their constructor candidates
//! - Service descriptors, the finalized output of resolution
//! - Source locations for diagnostics
//!
//! # Equality and Hashing
//!
//! Every type derives `Clone, Eq, PartialEq, Hash, Debug`. Descriptors are
//! deduplicated by structural equality, and whole batches are fingerprinted
//! for memoization, so hashing must cover every field.

mod decl;
mod descriptor;
mod lifetime;
mod location;
mod type_name;

pub use decl::{
    Accessibility, ConstructorCandidate, DeclarationBatch, ScopeRootDeclaration,
    ServiceDeclaration,
};
pub use descriptor::ServiceDescriptor;
pub use lifetime::Lifetime;
pub use location::Location;
pub use type_name::TypeName;
