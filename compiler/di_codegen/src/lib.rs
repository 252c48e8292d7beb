//! C# Source Generation
//!
//! Emits the partial `InjectionContainer` members the runtime container
//! calls at start-up:
//!
//! ```text
//! ordered ServiceDescriptors ──► emit_registrations    ──► Registry.generated.cs
//! ScopeRootDeclarations      ──► emit_scope_lifecycle  ──► ScopeLifecycle.generated.cs
//! EmitOptions                ──► emit_attribute_definitions ──► ServiceAttributes.generated.cs
//! ```
//!
//! Emission never fails. Input the emitters cannot express is skipped with a
//! warning; the diagnostics for it were reported by earlier phases.

mod attributes;
mod context;
mod options;
mod registration;
mod scope;

pub use attributes::{emit_attribute_definitions, ATTRIBUTES_HINT};
pub use context::CodegenContext;
pub use options::EmitOptions;
pub use registration::{emit_registrations, REGISTRATION_HINT};
pub use scope::{emit_scope_lifecycle, SCOPE_LIFECYCLE_HINT};

/// One generated source file.
///
/// `hint_name` is the file name handed to the host (unique per pass).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedSource {
    pub hint_name: String,
    pub text: String,
}

impl GeneratedSource {
    pub fn new(hint_name: impl Into<String>, text: String) -> Self {
        GeneratedSource {
            hint_name: hint_name.into(),
            text,
        }
    }
}
