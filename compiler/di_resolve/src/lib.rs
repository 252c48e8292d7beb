//! Descriptor resolution for the registration compiler.
//!
//! Turns validated service declarations into the finalized, ordered list of
//! [`ServiceDescriptor`](di_ir::ServiceDescriptor)s:
//!
//! 1. [`select_constructor`] picks each class's injection constructor.
//! 2. [`build_descriptor`] combines the class, its service type, lifetime and
//!    the selected parameter types; [`dedup_descriptors`] collapses
//!    structural duplicates in first-seen order.
//! 3. [`order_registrations`] moves providers ahead of the singletons that
//!    need them at construction time.
//!
//! Every failure is a diagnostic. A class that cannot be resolved contributes
//! no descriptor; the pass always continues with the rest of the batch.

mod builder;
mod ordering;
mod selector;

pub use builder::{build_descriptor, dedup_descriptors, resolve_services};
pub use ordering::{order_registrations, OrderingPolicy};
pub use selector::{select_constructor, MarkerPolicy, SelectedConstructor, SelectionReason};
