//! Memoizing wrapper around [`compile`].
//!
//! Host toolchains re-run generators on every edit. When the declaration
//! batch has not changed, the previous output is returned as-is.

use std::sync::Arc;

use di_ir::DeclarationBatch;

use crate::output::CompileOutput;
use crate::pipeline::{compile, CompileConfig};

struct CachedPass {
    fingerprint: u64,
    batch: DeclarationBatch,
    output: Arc<CompileOutput>,
}

/// Compiler that remembers its last pass.
///
/// A hit needs both an equal fingerprint and a structurally equal batch, so
/// a fingerprint collision can never return stale output.
pub struct IncrementalCompiler {
    config: CompileConfig,
    last: Option<CachedPass>,
}

impl IncrementalCompiler {
    pub fn new(config: CompileConfig) -> Self {
        IncrementalCompiler { config, last: None }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Replace the configuration, dropping the cached pass if it changed.
    pub fn set_config(&mut self, config: CompileConfig) {
        if config != self.config {
            self.config = config;
            self.last = None;
        }
    }

    /// Compile `batch`, reusing the previous output when nothing changed.
    pub fn compile(&mut self, batch: &DeclarationBatch) -> Arc<CompileOutput> {
        let fingerprint = batch.fingerprint();

        if let Some(last) = &self.last {
            if last.fingerprint == fingerprint && last.batch == *batch {
                tracing::debug!(fingerprint, "declaration batch unchanged; reusing output");
                return Arc::clone(&last.output);
            }
        }

        tracing::debug!(fingerprint, "declaration batch changed; recompiling");
        let output = Arc::new(compile(batch, &self.config));
        self.last = Some(CachedPass {
            fingerprint,
            batch: batch.clone(),
            output: Arc::clone(&output),
        });
        output
    }
}
