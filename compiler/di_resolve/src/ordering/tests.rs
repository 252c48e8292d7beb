use pretty_assertions::assert_eq;

use di_diagnostic::ErrorCode;
use di_ir::Lifetime;

use super::*;

fn desc(class: &str, lifetime: Lifetime, params: &[&str]) -> ServiceDescriptor {
    ServiceDescriptor::new(
        class,
        format!("I{class}"),
        lifetime,
        params.iter().map(|p| TypeName::from(*p)).collect(),
    )
}

fn order(
    descriptors: Vec<ServiceDescriptor>,
    policy: OrderingPolicy,
) -> (Vec<String>, DiagnosticCollector) {
    let mut collector = DiagnosticCollector::new();
    let ordered = order_registrations(
        descriptors,
        policy,
        |class| Some(Location::new(format!("{class}.cs"), 1, 1)),
        &mut collector,
    );
    let names = ordered
        .iter()
        .map(|d| d.implementation().to_string())
        .collect();
    (names, collector)
}

#[test]
fn valid_order_is_unchanged() {
    let (names, collector) = order(
        vec![
            desc("Log", Lifetime::Singleton, &[]),
            desc("Foo", Lifetime::Transient, &["IBar"]),
            desc("Cache", Lifetime::Singleton, &["ILog"]),
            desc("Bar", Lifetime::Scoped, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Log", "Foo", "Cache", "Bar"]);
    assert!(collector.is_empty());
}

#[test]
fn singleton_moves_after_later_singleton() {
    let (names, _) = order(
        vec![
            desc("Cache", Lifetime::Singleton, &["ILog"]),
            desc("Foo", Lifetime::Transient, &[]),
            desc("Log", Lifetime::Singleton, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Foo", "Log", "Cache"]);
}

#[test]
fn singleton_waits_for_lazy_providers_it_reaches() {
    // Cache -> IRepo (transient) -> IDb (scoped): both factories must be
    // registered before Cache is constructed.
    let (names, collector) = order(
        vec![
            desc("Cache", Lifetime::Singleton, &["IRepo"]),
            desc("Repo", Lifetime::Transient, &["IDb"]),
            desc("Db", Lifetime::Scoped, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Repo", "Db", "Cache"]);
    assert!(collector.is_empty());
}

#[test]
fn lazy_registrations_are_never_moved_for_their_own_dependencies() {
    let (names, _) = order(
        vec![
            desc("Foo", Lifetime::Transient, &["IBar"]),
            desc("Bar", Lifetime::Transient, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Foo", "Bar"]);
}

#[test]
fn unregistered_dependencies_impose_nothing() {
    let (names, collector) = order(
        vec![
            desc("B", Lifetime::Singleton, &["global::Godot.Node", "IMissing"]),
            desc("A", Lifetime::Singleton, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["B", "A"]);
    assert!(collector.is_empty());
}

#[test]
fn two_singleton_cycle_is_reported_once_and_both_are_kept() {
    let (names, collector) = order(
        vec![
            desc("A", Lifetime::Singleton, &["IB"]),
            desc("Free", Lifetime::Transient, &[]),
            desc("B", Lifetime::Singleton, &["IA"]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Free", "A", "B"]);

    let diagnostics = collector.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::DI3001);
    assert_eq!(diagnostics[0].args, vec!["A -> B -> A".to_string()]);
    assert_eq!(diagnostics[0].location, Some(Location::new("A.cs", 1, 1)));
}

#[test]
fn cycle_through_a_lazy_factory_is_reported() {
    let (names, collector) = order(
        vec![
            desc("A", Lifetime::Singleton, &["IB"]),
            desc("B", Lifetime::Transient, &["IA"]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["B", "A"]);

    let diagnostics = collector.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].args, vec!["A -> B -> A".to_string()]);
}

#[test]
fn self_dependent_singleton_is_a_cycle() {
    let (names, collector) = order(
        vec![
            desc("Other", Lifetime::Transient, &[]),
            desc("Loop", Lifetime::Singleton, &["ILoop"]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Other", "Loop"]);
    let diagnostics = collector.finish();
    assert_eq!(diagnostics[0].args, vec!["Loop -> Loop".to_string()]);
}

#[test]
fn registrations_blocked_by_a_cycle_are_appended_without_extra_reports() {
    let (names, collector) = order(
        vec![
            desc("C", Lifetime::Singleton, &["IA"]),
            desc("A", Lifetime::Singleton, &["IB"]),
            desc("B", Lifetime::Singleton, &["IA"]),
            desc("D", Lifetime::Transient, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["D", "C", "A", "B"]);
    assert_eq!(collector.error_count(), 1);
}

#[test]
fn first_seen_policy_keeps_order_and_reports_nothing() {
    let input = vec![
        desc("A", Lifetime::Singleton, &["IB"]),
        desc("B", Lifetime::Singleton, &["IA"]),
    ];
    let (names, collector) = order(input, OrderingPolicy::FirstSeen);
    assert_eq!(names, vec!["A", "B"]);
    assert!(collector.is_empty());
}

#[test]
fn every_provider_of_a_shared_interface_comes_first() {
    let (names, _) = order(
        vec![
            desc("Consumer", Lifetime::Singleton, &["IShared"]),
            ServiceDescriptor::new("SharedA", "IShared", Lifetime::Transient, Vec::new()),
            ServiceDescriptor::new("SharedB", "IShared", Lifetime::Singleton, Vec::new()),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["SharedA", "SharedB", "Consumer"]);
}

#[test]
fn three_singleton_cycle_reports_the_full_chain() {
    let (names, collector) = order(
        vec![
            desc("A", Lifetime::Singleton, &["IB"]),
            desc("B", Lifetime::Singleton, &["IC"]),
            desc("C", Lifetime::Singleton, &["IA"]),
            desc("Free", Lifetime::Scoped, &[]),
        ],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Free", "A", "B", "C"]);

    let diagnostics = collector.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::DI3001);
    assert_eq!(diagnostics[0].args, vec!["A -> B -> C -> A".to_string()]);
}

#[test]
fn lone_self_dependent_singleton_is_a_cycle() {
    let (names, collector) = order(
        vec![desc("Loop", Lifetime::Singleton, &["ILoop"])],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Loop"]);

    let diagnostics = collector.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::DI3001);
    assert_eq!(diagnostics[0].args, vec!["Loop -> Loop".to_string()]);
}

#[test]
fn lone_acyclic_registration_is_untouched() {
    let (names, collector) = order(
        vec![desc("Log", Lifetime::Singleton, &["IClock"])],
        OrderingPolicy::DependencyOrder,
    );
    assert_eq!(names, vec!["Log"]);
    assert!(collector.is_empty());
}
