//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`Label`] and [`Severity`], plus one constructor
//! function per error code so every phase reports a given problem the same
//! way.

use std::fmt;

use di_ir::{Location, TypeName};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A location with a message, pointing at related declarations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub location: Location,
    pub message: String,
}

impl Label {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
        }
    }
}

/// A structured diagnostic.
///
/// The message is kept as a template plus arguments, as the host reporting
/// surface expects; [`Diagnostic::message`] renders it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Message template with `{n}` placeholders.
    pub template: &'static str,
    /// Positional arguments for the template.
    pub args: Vec<String>,
    /// Location of the declaring class, when known.
    pub location: Option<Location>,
    /// Related locations (e.g. each conflicting constructor).
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Human-readable suggestions for fixing the problem.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default severity and template.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            template: code.message_template(),
            args: Vec::new(),
            location: None,
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Append a positional template argument.
    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    pub fn with_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(location, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The template with its arguments substituted.
    pub fn message(&self) -> String {
        render_template(self.template, &self.args)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message())?;

        if let Some(location) = &self.location {
            write!(f, "\n  --> {location}")?;
        }

        for label in &self.labels {
            write!(f, "\n      {}: {}", label.location, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

/// Substitute `{n}` placeholders with `args[n]`.
///
/// Placeholders without a matching argument are left as written, so a
/// malformed template degrades to readable text instead of failing.
pub fn render_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Create a "no eligible constructor" diagnostic.
pub fn no_eligible_constructor(class: &TypeName, location: Option<&Location>) -> Diagnostic {
    Diagnostic::new(ErrorCode::DI1001)
        .with_arg(class.simple_name())
        .with_location(location.cloned())
        .with_note("private and static constructors cannot be used for injection")
}

/// Create an "ambiguous constructor" diagnostic.
///
/// `arity` is the tied parameter count; `tied` is how many constructors share it.
pub fn ambiguous_constructor(
    class: &TypeName,
    arity: usize,
    tied: usize,
    location: Option<&Location>,
) -> Diagnostic {
    Diagnostic::new(ErrorCode::DI1002)
        .with_arg(class.simple_name())
        .with_arg(arity)
        .with_location(location.cloned())
        .with_note(format!("{tied} constructors take {arity} parameters"))
        .with_suggestion("annotate the constructor to use with [Constructor]")
}

/// Create a "multiple injection constructors" diagnostic.
pub fn multiple_injection_constructors(
    class: &TypeName,
    marked: usize,
    location: Option<&Location>,
) -> Diagnostic {
    Diagnostic::new(ErrorCode::DI1003)
        .with_arg(class.simple_name())
        .with_arg(marked)
        .with_location(location.cloned())
        .with_suggestion("remove [Constructor] from all but one constructor")
}

/// Create a "malformed attribute argument" diagnostic.
pub fn malformed_attribute_argument(
    class: &str,
    attribute: &str,
    problem: &str,
    location: Option<&Location>,
) -> Diagnostic {
    Diagnostic::new(ErrorCode::DI2001)
        .with_arg(class)
        .with_arg(attribute)
        .with_arg(problem)
        .with_location(location.cloned())
}

/// Create a "conflicting lifetime markers" diagnostic.
pub fn conflicting_lifetime_markers(
    class: &TypeName,
    markers: &[&str],
    location: Option<&Location>,
) -> Diagnostic {
    Diagnostic::new(ErrorCode::DI2002)
        .with_arg(class.simple_name())
        .with_arg(markers.join(", "))
        .with_location(location.cloned())
        .with_suggestion("keep exactly one of [TransientService], [ScopedService], [SingletonService]")
}

/// Create a "cyclic singleton dependency" diagnostic.
///
/// `chain` starts and ends with the same implementation.
pub fn cyclic_singleton_dependency(chain: &[TypeName], location: Option<&Location>) -> Diagnostic {
    let rendered = chain
        .iter()
        .map(TypeName::simple_name)
        .collect::<Vec<_>>()
        .join(" -> ");
    Diagnostic::new(ErrorCode::DI3001)
        .with_arg(rendered)
        .with_location(location.cloned())
        .with_note("singletons are constructed eagerly, so none of them can be registered first")
        .with_suggestion("register one of the services as transient or scoped to break the cycle")
}
