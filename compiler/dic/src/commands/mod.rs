//! Command handlers for the `dic` CLI.
//!
//! Handlers return their results instead of printing them; `main.rs`
//! decides where output goes and what the exit status is. Shared helpers
//! live here in the module root.

use std::fs;
use std::io::Write;
use std::path::Path;

use di_compiler::Manifest;
use di_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use di_diagnostic::Diagnostic;

use crate::{CliError, OutputFormat};

mod check;
mod explain;
mod generate;

pub use check::check;
pub use explain::explain;
pub use generate::{generate, GenerateReport};

/// Read and parse a JSON manifest.
pub fn load_manifest(path: &Path) -> Result<Manifest, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = Manifest::from_json(&text).map_err(|source| CliError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        classes = manifest.classes.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Write `diagnostics` to `writer` in the requested format.
///
/// The human format ends with an error/warning summary line; the JSON format
/// is always a complete array, empty when there is nothing to report.
pub fn report_diagnostics<W: Write>(
    diagnostics: &[Diagnostic],
    format: OutputFormat,
    color: ColorMode,
    is_tty: bool,
    writer: W,
) {
    match format {
        OutputFormat::Human => {
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            let warnings = diagnostics.iter().filter(|d| d.is_warning()).count();
            let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty);
            emitter.emit_all(diagnostics);
            emitter.emit_summary(errors, warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
        }
    }
}
