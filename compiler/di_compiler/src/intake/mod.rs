//! Declaration intake.
//!
//! The symbol model of the host compiler is outside this crate. It hands
//! over a [`Manifest`]: every candidate class with its attributes (by name,
//! arguments as written) and constructors. [`lower_manifest`] resolves
//! attribute names into [`Lifetime`]s exactly once, so no later phase ever
//! compares attribute strings.

use serde::{Deserialize, Serialize};

use di_diagnostic::{
    conflicting_lifetime_markers, malformed_attribute_argument, DiagnosticCollector,
};
use di_ir::{
    Accessibility, ConstructorCandidate, DeclarationBatch, Lifetime, Location,
    ScopeRootDeclaration, ServiceDeclaration, TypeName,
};

const SCOPE_ROOT: &str = "ScopeRoot";
const CONSTRUCTOR_MARKERS: [&str; 2] = ["Constructor", "InjectionConstructor"];
const UNNAMED_CLASS: &str = "<unnamed>";

/// Declarations as reported by the host, before validation.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

/// One class declaration.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Fully-qualified class name.
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub constructors: Vec<ConstructorEntry>,
}

/// An attribute application: name plus constructor arguments as written.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<String>,
}

/// One constructor declaration.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ConstructorEntry {
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    /// Fully-qualified parameter types in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Manifest, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Strip a namespace qualifier and the `Attribute` suffix.
///
/// `global::GodotDiSourceGenerator.SingletonServiceAttribute` becomes
/// `SingletonService`.
pub fn normalize_attribute_name(name: &str) -> &str {
    let name = name.trim();
    let simple = name.rsplit(['.', ':']).next().unwrap_or(name);
    match simple.strip_suffix("Attribute") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => simple,
    }
}

/// The service type named by a lifetime attribute's first argument.
///
/// Accepts `IFoo` and `typeof(IFoo)`; anything empty is missing.
fn service_type_argument(attribute: &AttributeEntry) -> Option<TypeName> {
    let raw = attribute.arguments.first()?.trim();
    let inner = raw
        .strip_prefix("typeof(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(raw);
    let name = TypeName::new(inner);
    (!name.is_empty()).then_some(name)
}

/// Validate the manifest and lower it into a declaration batch.
///
/// A class with a malformed or conflicting lifetime attribute is reported and
/// contributes nothing; the rest of the manifest is still lowered.
pub fn lower_manifest(
    manifest: &Manifest,
    diagnostics: &mut DiagnosticCollector,
) -> DeclarationBatch {
    let mut batch = DeclarationBatch::new();

    for class in &manifest.classes {
        lower_class(class, &mut batch, diagnostics);
    }

    tracing::debug!(
        classes = manifest.classes.len(),
        services = batch.services.len(),
        scope_roots = batch.scope_roots.len(),
        "lowered manifest"
    );
    batch
}

fn lower_class(
    class: &ClassEntry,
    batch: &mut DeclarationBatch,
    diagnostics: &mut DiagnosticCollector,
) {
    let location = class.location.as_ref();
    let markers: Vec<(Lifetime, &AttributeEntry)> = class
        .attributes
        .iter()
        .filter_map(|attribute| {
            Lifetime::from_marker_name(normalize_attribute_name(&attribute.name))
                .map(|lifetime| (lifetime, attribute))
        })
        .collect();
    let is_scope_root = class
        .attributes
        .iter()
        .any(|attribute| normalize_attribute_name(&attribute.name) == SCOPE_ROOT);

    if markers.is_empty() && !is_scope_root {
        return;
    }

    let name = TypeName::new(class.name.as_str());
    if name.is_empty() {
        let attribute = markers
            .first()
            .map_or(SCOPE_ROOT, |(lifetime, _)| lifetime.marker_name());
        diagnostics.push(malformed_attribute_argument(
            UNNAMED_CLASS,
            attribute,
            "the class has no name",
            location,
        ));
        return;
    }

    let service = match markers.as_slice() {
        [] => None,
        [(lifetime, attribute)] => match service_type_argument(attribute) {
            Some(service_type) => {
                Some(lower_service(class, name.clone(), service_type, *lifetime))
            }
            None => {
                diagnostics.push(malformed_attribute_argument(
                    name.simple_name(),
                    lifetime.marker_name(),
                    "missing service type",
                    location,
                ));
                return;
            }
        },
        several => {
            let names: Vec<&str> = several
                .iter()
                .map(|(lifetime, _)| lifetime.marker_name())
                .collect();
            diagnostics.push(conflicting_lifetime_markers(&name, &names, location));
            return;
        }
    };

    if let Some(service) = service {
        batch.services.push(service);
    }
    if is_scope_root {
        let mut root = ScopeRootDeclaration::new(name);
        root.location = class.location.clone();
        batch.scope_roots.push(root);
    }
}

fn lower_service(
    class: &ClassEntry,
    name: TypeName,
    service_type: TypeName,
    lifetime: Lifetime,
) -> ServiceDeclaration {
    let mut service = ServiceDeclaration::new(name, service_type, lifetime);
    service.location = class.location.clone();
    service.constructors = class.constructors.iter().map(lower_constructor).collect();
    tracing::trace!(
        class = %service.class,
        %lifetime,
        constructors = service.constructors.len(),
        "lowered service"
    );
    service
}

fn lower_constructor(entry: &ConstructorEntry) -> ConstructorCandidate {
    let mut ctor = ConstructorCandidate::new(
        entry.accessibility,
        entry.parameters.iter().map(String::as_str),
    );
    ctor.is_static = entry.is_static;
    ctor.injection_marker = entry.attributes.iter().any(|attribute| {
        CONSTRUCTOR_MARKERS.contains(&normalize_attribute_name(&attribute.name))
    });
    ctor.location = entry.location.clone();
    ctor
}
