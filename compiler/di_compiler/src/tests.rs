use pretty_assertions::assert_eq;

use di_codegen::{ATTRIBUTES_HINT, REGISTRATION_HINT, SCOPE_LIFECYCLE_HINT};
use di_diagnostic::emitter::ColorMode;
use di_diagnostic::ErrorCode;
use di_ir::{
    ConstructorCandidate, DeclarationBatch, Lifetime, Location, ScopeRootDeclaration,
    ServiceDeclaration, ServiceDescriptor, TypeName,
};
use di_resolve::{MarkerPolicy, OrderingPolicy};

use crate::{compile, compile_manifest, render_diagnostics, CompileConfig, Manifest};

fn service(class: &str, lifetime: Lifetime, ctors: &[&[&str]]) -> ServiceDeclaration {
    ctors.iter().fold(
        ServiceDeclaration::new(class, format!("I{class}"), lifetime),
        |decl, params| decl.with_constructor(ConstructorCandidate::public(params.iter().copied())),
    )
}

fn body(text: &str) -> Vec<&str> {
    text.lines()
        .skip_while(|line| !line.contains("RegisterGeneratedServices"))
        .skip(2)
        .take_while(|line| line.trim() != "}")
        .map(str::trim)
        .collect()
}

fn registry(output: &crate::CompileOutput) -> &str {
    output
        .source(REGISTRATION_HINT)
        .map_or("", |source| source.text.as_str())
}

// Scenario tests

#[test]
fn scenario_a_transient_with_one_dependency() {
    let batch = DeclarationBatch::new().with_service(service("Foo", Lifetime::Transient, &[&["IBar"]]));
    let output = compile(&batch, &CompileConfig::default());

    assert!(output.diagnostics.is_empty());
    assert_eq!(
        output.descriptors,
        vec![ServiceDescriptor::new(
            "Foo",
            "IFoo",
            Lifetime::Transient,
            vec![TypeName::from("IBar")]
        )]
    );
    assert_eq!(
        body(registry(&output)),
        vec!["Register<IFoo>(() => new Foo(Resolve<IBar>()));"]
    );
}

#[test]
fn scenario_b_singleton_greedy_selection() {
    let batch = DeclarationBatch::new().with_service(service(
        "Baz",
        Lifetime::Singleton,
        &[&[], &["IA", "IB"]],
    ));
    let output = compile(&batch, &CompileConfig::default());

    assert!(output.diagnostics.is_empty());
    assert_eq!(
        body(registry(&output)),
        vec![
            "var instance_IBaz = new Baz(Resolve<IA>(), Resolve<IB>());",
            "RegisterSingleton<IBaz>(instance_IBaz);",
        ]
    );
}

#[test]
fn scenario_c_ambiguous_constructor() {
    let batch = DeclarationBatch::new().with_service(
        service("Qux", Lifetime::Transient, &[&["IA"], &["IB"]])
            .with_location(Location::new("Qux.cs", 2, 14)),
    );
    let output = compile(&batch, &CompileConfig::default());

    assert!(output.descriptors.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::DI1002);
    assert_eq!(diag.args, vec!["Qux".to_string(), "1".to_string()]);
    assert_eq!(diag.location, Some(Location::new("Qux.cs", 2, 14)));
    assert!(!output.has_errors());
    assert!(body(registry(&output)).is_empty());
}

#[test]
fn scenario_d_scope_root_lifecycle() {
    let batch = DeclarationBatch::new().with_scope_root(ScopeRootDeclaration::new("RootScreen"));
    let output = compile(&batch, &CompileConfig::default());

    let lifecycle = output
        .source(SCOPE_LIFECYCLE_HINT)
        .map_or("", |source| source.text.as_str());
    assert!(lifecycle.contains("if (node is RootScreen)\n        {\n            _scopedRoots[node] = CreateScope();"));
    assert!(lifecycle.contains("if (_scopedRoots.Remove(node, out var scope))\n        {\n            scope.Dispose();"));
    // Untracked nodes fall through the Remove guard.
    assert_eq!(lifecycle.matches("Dispose()").count(), 1);
}

// Pipeline behaviour

#[test]
fn sources_are_generated_in_fixed_order() {
    let batch = DeclarationBatch::new()
        .with_service(service("Foo", Lifetime::Transient, &[&[]]))
        .with_scope_root(ScopeRootDeclaration::new("Level"));
    let output = compile(&batch, &CompileConfig::default());
    let hints: Vec<&str> = output.sources.iter().map(|s| s.hint_name.as_str()).collect();
    assert_eq!(hints, vec![ATTRIBUTES_HINT, REGISTRATION_HINT, SCOPE_LIFECYCLE_HINT]);
}

#[test]
fn empty_batch_still_emits_registry() {
    let config = CompileConfig {
        emit_attributes: false,
        ..CompileConfig::default()
    };
    let output = compile(&DeclarationBatch::new(), &config);
    let hints: Vec<&str> = output.sources.iter().map(|s| s.hint_name.as_str()).collect();
    assert_eq!(hints, vec![REGISTRATION_HINT]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn failing_classes_do_not_stop_the_pass() {
    let batch = DeclarationBatch::new()
        .with_service(service("NoCtor", Lifetime::Transient, &[]))
        .with_service(service("Foo", Lifetime::Transient, &[&["IBar"]]))
        .with_service(service("Qux", Lifetime::Scoped, &[&["IA"], &["IB"]]));
    let output = compile(&batch, &CompileConfig::default());

    let codes: Vec<ErrorCode> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::DI1001, ErrorCode::DI1002]);
    assert!(output.has_errors());
    assert_eq!(output.descriptors.len(), 1);
}

#[test]
fn reprocessed_class_yields_one_registration() {
    let foo = service("Foo", Lifetime::Transient, &[&["IBar"]]);
    let batch = DeclarationBatch::new().with_service(foo.clone()).with_service(foo);
    let output = compile(&batch, &CompileConfig::default());
    assert_eq!(body(registry(&output)).len(), 1);
}

#[test]
fn singletons_are_registered_after_their_dependencies() {
    let batch = DeclarationBatch::new()
        .with_service(service("Cache", Lifetime::Singleton, &[&["ILog"]]))
        .with_service(service("Log", Lifetime::Singleton, &[&[]]));

    let ordered = compile(&batch, &CompileConfig::default());
    assert_eq!(
        body(registry(&ordered)),
        vec![
            "var instance_ILog = new Log();",
            "RegisterSingleton<ILog>(instance_ILog);",
            "var instance_ICache = new Cache(Resolve<ILog>());",
            "RegisterSingleton<ICache>(instance_ICache);",
        ]
    );

    let kept = compile(
        &batch,
        &CompileConfig {
            ordering: OrderingPolicy::FirstSeen,
            ..CompileConfig::default()
        },
    );
    assert_eq!(body(registry(&kept))[0], "var instance_ICache = new Cache(Resolve<ILog>());");
}

#[test]
fn singleton_cycle_is_reported_at_the_first_class() {
    let batch = DeclarationBatch::new()
        .with_service(service("A", Lifetime::Singleton, &[&["IB"]]).with_location(Location::new("A.cs", 1, 1)))
        .with_service(service("B", Lifetime::Singleton, &[&["IA"]]));
    let output = compile(&batch, &CompileConfig::default());

    assert_eq!(output.descriptors.len(), 2);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::DI3001);
    assert_eq!(output.diagnostics[0].location, Some(Location::new("A.cs", 1, 1)));
}

#[test]
fn lone_self_dependent_singleton_is_reported() {
    let batch = DeclarationBatch::new().with_service(
        service("Loop", Lifetime::Singleton, &[&["ILoop"]])
            .with_location(Location::new("Loop.cs", 5, 14)),
    );
    let output = compile(&batch, &CompileConfig::default());

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::DI3001);
    assert_eq!(output.diagnostics[0].args, vec!["Loop -> Loop".to_string()]);
    assert_eq!(output.diagnostics[0].location, Some(Location::new("Loop.cs", 5, 14)));
    assert_eq!(output.descriptors.len(), 1);
}

#[test]
fn declaration_without_service_type_yields_no_descriptor() {
    let batch = DeclarationBatch::new().with_service(
        ServiceDeclaration::new("Foo", "", Lifetime::Transient)
            .with_constructor(ConstructorCandidate::public(["IBar"])),
    );
    let output = compile(&batch, &CompileConfig::default());

    assert!(output.descriptors.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, ErrorCode::DI2001);
    assert!(body(registry(&output)).is_empty());
}

#[test]
fn marker_policy_is_honoured() {
    let batch = DeclarationBatch::new().with_service(
        ServiceDeclaration::new("Clock", "IClock", Lifetime::Transient)
            .with_constructor(ConstructorCandidate::public(Vec::<&str>::new()).marked())
            .with_constructor(ConstructorCandidate::public(["ISource"]).marked()),
    );

    let strict = compile(&batch, &CompileConfig::default());
    assert_eq!(strict.diagnostics[0].code, ErrorCode::DI1003);
    assert!(strict.descriptors.is_empty());

    let lenient = compile(
        &batch,
        &CompileConfig {
            marker_policy: MarkerPolicy::FallThrough,
            ..CompileConfig::default()
        },
    );
    assert!(lenient.diagnostics.is_empty());
    assert_eq!(
        body(registry(&lenient)),
        vec!["Register<IClock>(() => new Clock(Resolve<ISource>()));"]
    );
}

#[test]
fn compile_manifest_reports_intake_first() {
    let manifest = Manifest::from_json(
        r#"{
            "classes": [
                { "name": "Orphan", "attributes": [{ "name": "TransientService" }] },
                { "name": "NoCtor", "attributes": [{ "name": "TransientService", "arguments": ["INoCtor"] }] },
                { "name": "Foo", "attributes": [{ "name": "TransientService", "arguments": ["typeof(IFoo)"] }],
                  "constructors": [{ "parameters": ["IBar"] }] }
            ]
        }"#,
    );
    let Ok(manifest) = manifest else {
        panic!("manifest should parse");
    };
    let output = compile_manifest(&manifest, &CompileConfig::default());

    let codes: Vec<ErrorCode> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::DI2001, ErrorCode::DI1001]);
    assert_eq!(
        body(registry(&output)),
        vec!["Register<IFoo>(() => new Foo(Resolve<IBar>()));"]
    );
}

#[test]
fn emission_is_byte_identical_across_runs() {
    let batch = DeclarationBatch::new()
        .with_service(service("A", Lifetime::Singleton, &[&["IB"], &["IC"]]))
        .with_service(service("B", Lifetime::Scoped, &[&["IC"]]))
        .with_service(service("C", Lifetime::Singleton, &[&[]]))
        .with_scope_root(ScopeRootDeclaration::new("Level"))
        .with_scope_root(ScopeRootDeclaration::new("Menu"));
    let config = CompileConfig::default();
    assert_eq!(compile(&batch, &config), compile(&batch, &config));
}

// render_diagnostics

#[test]
fn render_diagnostics_uses_terminal_format() {
    let batch = DeclarationBatch::new().with_service(service("NoCtor", Lifetime::Transient, &[]));
    let output = compile(&batch, &CompileConfig::default());
    let rendered = render_diagnostics(&output.diagnostics, ColorMode::Never);
    assert!(rendered.starts_with(
        "error[DI1001]: Type 'NoCtor' must have at least one public constructor for dependency injection\n"
    ));
}

#[test]
fn render_diagnostics_empty() {
    assert_eq!(render_diagnostics(&[], ColorMode::Never), "");
}
