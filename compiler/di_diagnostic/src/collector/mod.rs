//! Diagnostic collection across a whole compilation pass.
//!
//! Phases push into a [`DiagnosticCollector`] as they run; nothing is ever
//! removed or reordered. [`DiagnosticCollector::finish`] freezes the result
//! into a cheaply clonable [`Diagnostics`] list.

use std::ops::Deref;
use std::sync::Arc;

use crate::Diagnostic;

/// Append-only diagnostic sink, preserving report order.
#[derive(Default, Debug)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic after everything reported so far.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        } else if diagnostic.is_warning() {
            self.warning_count += 1;
        }
        tracing::debug!(code = %diagnostic.code, "diagnostic reported");
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Freeze the collected diagnostics.
    pub fn finish(self) -> Diagnostics {
        Diagnostics {
            items: Arc::from(self.diagnostics),
            error_count: self.error_count,
            warning_count: self.warning_count,
        }
    }
}

/// Immutable, ordered diagnostics of one pass.
///
/// Clones share the same allocation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostics {
    items: Arc<[Diagnostic]>,
    error_count: usize,
    warning_count: usize,
}

impl Diagnostics {
    pub fn empty() -> Self {
        DiagnosticCollector::new().finish()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Diagnostics {
    type Target = [Diagnostic];

    fn deref(&self) -> &[Diagnostic] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
