//! Core compilation pipeline: intake → select → build → dedup → order → emit.
//!
//! Portable (no filesystem IO) and stateless between calls. Declarations come
//! in as a [`DeclarationBatch`] or a [`Manifest`], results come out as a
//! [`CompileOutput`].

use di_codegen::{
    emit_attribute_definitions, emit_registrations, emit_scope_lifecycle, EmitOptions,
};
use di_diagnostic::DiagnosticCollector;
use di_ir::{DeclarationBatch, Location, TypeName};
use di_resolve::{order_registrations, resolve_services, MarkerPolicy, OrderingPolicy};

use crate::intake::{lower_manifest, Manifest};
use crate::output::CompileOutput;

/// Configuration for a compilation run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompileConfig {
    /// Handling of several `[Constructor]` markers on one class.
    pub marker_policy: MarkerPolicy,
    /// Order of statements in the registration routine.
    pub ordering: OrderingPolicy,
    /// Names used by the generated C#.
    pub emit: EmitOptions,
    /// Also generate the attribute classes users annotate with.
    pub emit_attributes: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            marker_policy: MarkerPolicy::default(),
            ordering: OrderingPolicy::default(),
            emit: EmitOptions::default(),
            emit_attributes: true,
        }
    }
}

/// Full pipeline over an already-lowered batch.
pub fn compile(batch: &DeclarationBatch, config: &CompileConfig) -> CompileOutput {
    run(batch, config, DiagnosticCollector::new())
}

/// Full pipeline including manifest validation.
///
/// Intake diagnostics come first in the output, followed by resolution and
/// ordering diagnostics.
pub fn compile_manifest(manifest: &Manifest, config: &CompileConfig) -> CompileOutput {
    let mut diagnostics = DiagnosticCollector::new();
    let batch = lower_manifest(manifest, &mut diagnostics);
    run(&batch, config, diagnostics)
}

fn run(
    batch: &DeclarationBatch,
    config: &CompileConfig,
    mut diagnostics: DiagnosticCollector,
) -> CompileOutput {
    // Resolve
    let descriptors = resolve_services(&batch.services, config.marker_policy, &mut diagnostics);

    // Order
    let descriptors = order_registrations(
        descriptors,
        config.ordering,
        |class| locate(batch, class),
        &mut diagnostics,
    );

    // Emit
    let mut sources = Vec::with_capacity(3);
    if config.emit_attributes {
        sources.push(emit_attribute_definitions(&config.emit));
    }
    sources.push(emit_registrations(&descriptors, &config.emit));
    sources.extend(emit_scope_lifecycle(&batch.scope_roots, &config.emit));

    let diagnostics = diagnostics.finish();
    tracing::debug!(
        services = batch.services.len(),
        descriptors = descriptors.len(),
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        sources = sources.len(),
        "compilation pass complete"
    );

    CompileOutput {
        descriptors,
        diagnostics,
        sources,
    }
}

/// Location of the first declaration of `class`.
fn locate(batch: &DeclarationBatch, class: &TypeName) -> Option<Location> {
    batch
        .services
        .iter()
        .find(|service| &service.class == class)
        .and_then(|service| service.location.clone())
}
