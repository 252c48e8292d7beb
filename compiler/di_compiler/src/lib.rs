//! Portable registration compiler driver.
//!
//! Provides an IO-free pipeline from declarations to generated C# sources,
//! suitable for the CLI, build integrations and test harnesses alike.
//!
//! # Usage
//!
//! ```ignore
//! use di_compiler::{compile_manifest, CompileConfig, Manifest};
//!
//! let manifest = Manifest::from_json(text)?;
//! let output = compile_manifest(&manifest, &CompileConfig::default());
//! for source in &output.sources {
//!     println!("{}", source.hint_name);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Manifest ──lower_manifest──► DeclarationBatch
//!                                    ↓
//!               select_constructor / build_descriptor / dedup   (di_resolve)
//!                                    ↓
//!                          order_registrations                  (di_resolve)
//!                                    ↓
//!      emit_registrations / emit_scope_lifecycle / attributes   (di_codegen)
//!                                    ↓
//!                              CompileOutput
//! ```

mod cache;
mod intake;
mod output;
mod pipeline;

pub use cache::IncrementalCompiler;
pub use intake::{
    lower_manifest, normalize_attribute_name, AttributeEntry, ClassEntry, ConstructorEntry,
    Manifest,
};
pub use output::CompileOutput;
pub use pipeline::{compile, compile_manifest, CompileConfig};

use di_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use di_diagnostic::Diagnostic;

/// Render diagnostics to a string in the terminal format.
///
/// Suitable for embedding in build logs or test assertions.
pub fn render_diagnostics(diagnostics: &[Diagnostic], color: ColorMode) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut buf, color, false);
        emitter.emit_all(diagnostics);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests;
