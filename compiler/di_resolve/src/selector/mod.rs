//! Injection constructor selection.
//!
//! Rules, in order:
//! 1. Only non-private, non-static constructors qualify.
//! 2. A single explicitly marked constructor wins regardless of arity.
//! 3. Otherwise the constructor with the most parameters wins, provided no
//!    other qualifying constructor has the same count.

use di_diagnostic::{
    ambiguous_constructor, multiple_injection_constructors, no_eligible_constructor, Diagnostic,
};
use di_ir::{ConstructorCandidate, ServiceDeclaration};

/// What to do when several qualifying constructors carry the marker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MarkerPolicy {
    /// Report the conflict and produce no descriptor.
    #[default]
    Strict,
    /// Ignore the markers and fall back to greedy selection.
    FallThrough,
}

/// Why a constructor was chosen.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SelectionReason {
    /// The only constructor carrying the injection marker.
    Marked,
    /// The unique constructor with the greatest parameter count.
    Greedy,
}

/// A successfully selected constructor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SelectedConstructor<'a> {
    pub constructor: &'a ConstructorCandidate,
    pub reason: SelectionReason,
}

/// Select the constructor the container will call for `declaration`.
///
/// Deterministic in the declaration alone. The `Err` diagnostic is already
/// fully formed; its severity comes from its code (ambiguity is a warning,
/// everything else an error), but either way the class yields no descriptor.
pub fn select_constructor(
    declaration: &ServiceDeclaration,
    policy: MarkerPolicy,
) -> Result<SelectedConstructor<'_>, Diagnostic> {
    let location = declaration.location.as_ref();
    let qualifying: Vec<&ConstructorCandidate> = declaration
        .constructors
        .iter()
        .filter(|ctor| ctor.qualifies())
        .collect();

    if qualifying.is_empty() {
        return Err(no_eligible_constructor(&declaration.class, location));
    }

    let marked: Vec<&ConstructorCandidate> = qualifying
        .iter()
        .copied()
        .filter(|ctor| ctor.injection_marker)
        .collect();

    match (marked.as_slice(), policy) {
        ([only], _) => {
            return Ok(SelectedConstructor {
                constructor: *only,
                reason: SelectionReason::Marked,
            });
        }
        ([], _) | (_, MarkerPolicy::FallThrough) => {}
        (several, MarkerPolicy::Strict) => {
            let diagnostic = several.iter().filter_map(|ctor| ctor.location.clone()).fold(
                multiple_injection_constructors(&declaration.class, several.len(), location),
                |diag, at| diag.with_label(at, "annotated with [Constructor]"),
            );
            return Err(diagnostic);
        }
    }

    let max_arity = qualifying
        .iter()
        .map(|ctor| ctor.arity())
        .max()
        .unwrap_or_default();
    let greedy: Vec<&ConstructorCandidate> = qualifying
        .into_iter()
        .filter(|ctor| ctor.arity() == max_arity)
        .collect();

    match greedy.as_slice() {
        [only] => Ok(SelectedConstructor {
            constructor: *only,
            reason: SelectionReason::Greedy,
        }),
        tied => Err(ambiguous_constructor(
            &declaration.class,
            max_arity,
            tied.len(),
            location,
        )),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
