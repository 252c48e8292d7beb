//! Result type for the portable compiler pipeline.

use di_codegen::GeneratedSource;
use di_diagnostic::Diagnostics;
use di_ir::ServiceDescriptor;

/// Result of one compilation pass.
///
/// Diagnostics never prevent output: classes that failed are simply absent
/// from `descriptors`, and the registration routine is always generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOutput {
    /// Finalized descriptors in emission order.
    pub descriptors: Vec<ServiceDescriptor>,
    /// Diagnostics from every phase, in report order.
    pub diagnostics: Diagnostics,
    /// Generated files, in a fixed order: attributes, registrations, scope
    /// lifecycle.
    pub sources: Vec<GeneratedSource>,
}

impl CompileOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Look up a generated file by its hint name.
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources
            .iter()
            .find(|source| source.hint_name == hint_name)
    }
}
