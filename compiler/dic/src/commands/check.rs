//! The `check` command: validate declarations without writing anything.

use std::path::Path;

use di_compiler::{compile_manifest, CompileConfig, CompileOutput};

use super::load_manifest;
use crate::CliError;

/// Run the full pipeline over the manifest at `path` and return its result.
pub fn check(path: &Path, config: &CompileConfig) -> Result<CompileOutput, CliError> {
    let manifest = load_manifest(path)?;
    let output = compile_manifest(&manifest, config);
    tracing::debug!(
        descriptors = output.descriptors.len(),
        diagnostics = output.diagnostics.len(),
        "check complete"
    );
    Ok(output)
}
