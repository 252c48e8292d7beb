//! Diagnostic system for the registration compiler.
//!
//! Every problem the pipeline finds in user declarations is reported as a
//! [`Diagnostic`], never as a panic or an `Err`:
//! - Error codes for searchability (`dic --explain DI1002`)
//! - A message template plus positional arguments
//! - The declaring class's location, when the source knows it
//! - Notes and suggestions
//!
//! Diagnostics are accumulated by a [`DiagnosticCollector`] across the whole
//! batch and finalized into an immutable [`Diagnostics`] list.

pub mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use collector::{DiagnosticCollector, Diagnostics};
pub use diagnostic::{
    ambiguous_constructor, conflicting_lifetime_markers, cyclic_singleton_dependency,
    malformed_attribute_argument, multiple_injection_constructors, no_eligible_constructor,
    render_template, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
