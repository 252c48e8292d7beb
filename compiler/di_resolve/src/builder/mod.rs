//! Descriptor construction and deduplication.

use rustc_hash::FxHashSet;

use di_diagnostic::{malformed_attribute_argument, Diagnostic, DiagnosticCollector};
use di_ir::{ServiceDeclaration, ServiceDescriptor};

use crate::{select_constructor, MarkerPolicy, SelectedConstructor};

/// Combine a declaration with its selected constructor.
///
/// Parameter types keep the constructor's declaration order.
pub fn build_descriptor(
    declaration: &ServiceDeclaration,
    selected: &SelectedConstructor<'_>,
) -> ServiceDescriptor {
    ServiceDescriptor::new(
        declaration.class.clone(),
        declaration.service_type.clone(),
        declaration.lifetime,
        selected.constructor.parameters.clone(),
    )
}

/// Drop structural duplicates, keeping the first occurrence of each.
///
/// The hash set is only a membership test, so output order is exactly the
/// input order minus repeats.
pub fn dedup_descriptors(descriptors: Vec<ServiceDescriptor>) -> Vec<ServiceDescriptor> {
    let before = descriptors.len();
    let mut seen = FxHashSet::default();
    let mut unique = Vec::with_capacity(before);
    for descriptor in descriptors {
        if !seen.contains(&descriptor) {
            seen.insert(descriptor.clone());
            unique.push(descriptor);
        }
    }

    if unique.len() != before {
        tracing::debug!(
            removed = before - unique.len(),
            "collapsed duplicate descriptors"
        );
    }
    unique
}

/// Select a constructor for every service and build the deduplicated
/// descriptor list.
///
/// Unnamed declarations and selection failures go to `diagnostics` in batch
/// order; the failing class is skipped and resolution continues.
pub fn resolve_services(
    services: &[ServiceDeclaration],
    policy: MarkerPolicy,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<ServiceDescriptor> {
    let mut descriptors = Vec::with_capacity(services.len());

    for declaration in services {
        if let Some(diagnostic) = missing_name(declaration) {
            diagnostics.push(diagnostic);
            continue;
        }
        match select_constructor(declaration, policy) {
            Ok(selected) => {
                tracing::trace!(
                    class = %declaration.class,
                    reason = ?selected.reason,
                    arity = selected.constructor.arity(),
                    "selected constructor"
                );
                descriptors.push(build_descriptor(declaration, &selected));
            }
            Err(diagnostic) => {
                tracing::debug!(
                    class = %declaration.class,
                    code = %diagnostic.code,
                    "no descriptor for class"
                );
                diagnostics.push(diagnostic);
            }
        }
    }

    dedup_descriptors(descriptors)
}

/// A declaration without a class or service type cannot be registered.
fn missing_name(declaration: &ServiceDeclaration) -> Option<Diagnostic> {
    let problem = if declaration.class.is_empty() {
        "the class has no name"
    } else if declaration.service_type.is_empty() {
        "missing service type"
    } else {
        return None;
    };
    let class = if declaration.class.is_empty() {
        "<unnamed>"
    } else {
        declaration.class.simple_name()
    };
    Some(malformed_attribute_argument(
        class,
        declaration.lifetime.marker_name(),
        problem,
        declaration.location.as_ref(),
    ))
}
