//! The `generate` command: compile a manifest and write the C# sources.

use std::fs;
use std::path::{Path, PathBuf};

use di_codegen::GeneratedSource;
use di_compiler::{compile_manifest, CompileConfig, CompileOutput};

use super::load_manifest;
use crate::CliError;

/// What `generate` did.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: CompileOutput,
    /// Files created or rewritten.
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content.
    pub unchanged: Vec<PathBuf>,
}

/// Compile the manifest at `path` and write every generated source into
/// `out_dir`, creating it if needed.
///
/// Sources are written even when there are error diagnostics: failing
/// classes are simply absent from them. A file whose content would not
/// change is left untouched so build tools do not see a spurious edit.
pub fn generate(
    path: &Path,
    out_dir: &Path,
    config: &CompileConfig,
) -> Result<GenerateReport, CliError> {
    let manifest = load_manifest(path)?;
    let output = compile_manifest(&manifest, config);

    fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let mut unchanged = Vec::new();
    for source in &output.sources {
        let target = out_dir.join(&source.hint_name);
        if write_if_changed(&target, source)? {
            written.push(target);
        } else {
            unchanged.push(target);
        }
    }

    tracing::debug!(
        out_dir = %out_dir.display(),
        written = written.len(),
        unchanged = unchanged.len(),
        "generate complete"
    );
    Ok(GenerateReport {
        output,
        written,
        unchanged,
    })
}

/// Returns whether the file was written.
fn write_if_changed(target: &Path, source: &GeneratedSource) -> Result<bool, CliError> {
    if fs::read_to_string(target).is_ok_and(|existing| existing == source.text) {
        tracing::trace!(path = %target.display(), "generated source unchanged");
        return Ok(false);
    }
    fs::write(target, &source.text).map_err(|error| CliError::Write {
        path: target.to_path_buf(),
        source: error,
    })?;
    Ok(true)
}
