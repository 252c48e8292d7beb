use pretty_assertions::assert_eq;

use di_diagnostic::{ErrorCode, Severity};
use di_ir::{Accessibility, ConstructorCandidate, Lifetime, Location, ServiceDeclaration, TypeName};

use super::*;

fn service(constructors: Vec<ConstructorCandidate>) -> ServiceDeclaration {
    constructors.into_iter().fold(
        ServiceDeclaration::new("Game.Qux", "Game.IQux", Lifetime::Transient)
            .with_location(Location::new("Game/Qux.cs", 3, 14)),
        ServiceDeclaration::with_constructor,
    )
}

fn params<'a>(selected: &SelectedConstructor<'a>) -> Vec<&'a str> {
    selected
        .constructor
        .parameters
        .iter()
        .map(TypeName::as_str)
        .collect()
}

#[test]
fn no_constructors_is_no_eligible_constructor() {
    let decl = service(vec![]);
    let diag = select_constructor(&decl, MarkerPolicy::Strict).unwrap_err();
    assert_eq!(diag.code, ErrorCode::DI1001);
    assert_eq!(diag.args, vec!["Qux".to_string()]);
    assert_eq!(diag.location, Some(Location::new("Game/Qux.cs", 3, 14)));
}

#[test]
fn private_and_static_constructors_do_not_qualify() {
    let decl = service(vec![
        ConstructorCandidate::new(Accessibility::Private, ["IA"]),
        ConstructorCandidate::public(["IA", "IB"]).with_static(),
    ]);
    let diag = select_constructor(&decl, MarkerPolicy::Strict).unwrap_err();
    assert_eq!(diag.code, ErrorCode::DI1001);
    assert_eq!(diag.severity, Severity::Error);
}

#[test]
fn greedy_picks_unique_max_arity() {
    let decl = service(vec![
        ConstructorCandidate::public(["IA"]),
        ConstructorCandidate::public(["IA", "IB"]),
        ConstructorCandidate::new(Accessibility::Private, ["IA", "IB", "IC"]),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert_eq!(selected.reason, SelectionReason::Greedy);
    assert_eq!(params(&selected), vec!["IA", "IB"]);
}

#[test]
fn non_public_but_visible_constructors_qualify() {
    let decl = service(vec![ConstructorCandidate::new(
        Accessibility::Internal,
        ["IA"],
    )]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert_eq!(params(&selected), vec!["IA"]);
}

#[test]
fn tie_at_max_arity_is_ambiguous() {
    let decl = service(vec![
        ConstructorCandidate::public(["IA"]),
        ConstructorCandidate::public(["IB"]),
    ]);
    let diag = select_constructor(&decl, MarkerPolicy::Strict).unwrap_err();
    assert_eq!(diag.code, ErrorCode::DI1002);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.args, vec!["Qux".to_string(), "1".to_string()]);
    assert_eq!(diag.notes, vec!["2 constructors take 1 parameters".to_string()]);
}

#[test]
fn tie_below_max_arity_is_not_ambiguous() {
    let decl = service(vec![
        ConstructorCandidate::public(["IA"]),
        ConstructorCandidate::public(["IB"]),
        ConstructorCandidate::public(["IA", "IB"]),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert_eq!(params(&selected), vec!["IA", "IB"]);
}

#[test]
fn single_marker_beats_arity() {
    let decl = service(vec![
        ConstructorCandidate::public(["IA"]).marked(),
        ConstructorCandidate::public(["IA", "IB", "IC"]),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert_eq!(selected.reason, SelectionReason::Marked);
    assert_eq!(params(&selected), vec!["IA"]);
}

#[test]
fn single_marker_resolves_a_tie() {
    let decl = service(vec![
        ConstructorCandidate::public(["IA"]),
        ConstructorCandidate::public(["IB"]).marked(),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::FallThrough).unwrap();
    assert_eq!(params(&selected), vec!["IB"]);
}

#[test]
fn marker_on_non_qualifying_constructor_is_ignored() {
    let decl = service(vec![
        ConstructorCandidate::new(Accessibility::Private, ["IA", "IB"]).marked(),
        ConstructorCandidate::public(["IC"]),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert_eq!(selected.reason, SelectionReason::Greedy);
    assert_eq!(params(&selected), vec!["IC"]);
}

#[test]
fn multiple_markers_are_rejected_when_strict() {
    let decl = service(vec![
        ConstructorCandidate::public(Vec::<&str>::new())
            .marked()
            .with_location(Location::new("Game/Qux.cs", 5, 5)),
        ConstructorCandidate::public(["IA"])
            .marked()
            .with_location(Location::new("Game/Qux.cs", 6, 5)),
    ]);
    let diag = select_constructor(&decl, MarkerPolicy::Strict).unwrap_err();
    assert_eq!(diag.code, ErrorCode::DI1003);
    assert_eq!(diag.args, vec!["Qux".to_string(), "2".to_string()]);
    let lines: Vec<u32> = diag.labels.iter().map(|l| l.location.line).collect();
    assert_eq!(lines, vec![5, 6]);
}

#[test]
fn multiple_markers_fall_through_to_greedy() {
    let decl = service(vec![
        ConstructorCandidate::public(Vec::<&str>::new()).marked(),
        ConstructorCandidate::public(["IA"]).marked(),
    ]);
    let selected = select_constructor(&decl, MarkerPolicy::FallThrough).unwrap();
    assert_eq!(selected.reason, SelectionReason::Greedy);
    assert_eq!(params(&selected), vec!["IA"]);
}

#[test]
fn parameterless_constructor_is_selected() {
    let decl = service(vec![ConstructorCandidate::public(Vec::<&str>::new())]);
    let selected = select_constructor(&decl, MarkerPolicy::Strict).unwrap();
    assert!(params(&selected).is_empty());
}
