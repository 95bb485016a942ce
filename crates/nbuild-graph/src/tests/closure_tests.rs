//! Module closure resolution.

use std::sync::Arc;

use super::{module, registry_of};
use crate::{Dependency, DependencyType, ErrorKind, GraphError, Module};

fn targets(closure: &crate::Closure) -> Vec<&str> {
    closure.targets().collect()
}

#[test]
fn recursive_edge_pulls_in_target_main_closure() {
    let registry = registry_of(vec![
        module("X", vec![Dependency::new("Y").recursive()]),
        Module::builder("Y")
            .main_dependency(Dependency::new("Z"))
            .test_dependency("unit", Dependency::new("junit"))
            .build()
            .unwrap(),
        module("Z", vec![]),
    ]);

    let closure = registry.closure("X", DependencyType::Main).unwrap();
    assert_eq!(targets(&closure), vec!["Y", "Z"]);
    assert!(!closure.contains("junit"));
}

#[test]
fn non_recursive_edge_is_not_expanded() {
    let registry = registry_of(vec![
        module("X", vec![Dependency::new("Y")]),
        module("Y", vec![Dependency::new("Z")]),
    ]);

    let closure = registry.closure("X", DependencyType::Main).unwrap();
    assert_eq!(targets(&closure), vec!["Y"]);
}

#[test]
fn non_recursive_edge_to_unknown_module_is_kept() {
    let registry = registry_of(vec![module("X", vec![Dependency::new("external.lib")])]);

    let closure = registry.closure("X", DependencyType::Main).unwrap();
    assert_eq!(targets(&closure), vec!["external.lib"]);
}

#[test]
fn test_flagged_edge_uses_target_unit_closure() {
    let registry = registry_of(vec![
        Module::builder("X")
            .test_dependency("unit", Dependency::new("Y").recursive().test())
            .build()
            .unwrap(),
        Module::builder("Y")
            .main_dependency(Dependency::new("main-only"))
            .test_dependency("unit", Dependency::new("junit"))
            .build()
            .unwrap(),
    ]);

    let closure = registry.closure("X", DependencyType::TestUnit).unwrap();
    assert_eq!(targets(&closure), vec!["Y", "junit"]);
}

#[test]
fn missing_test_configuration_yields_empty_closure() {
    let registry = registry_of(vec![module("X", vec![Dependency::new("Y")])]);

    let closure = registry.closure("X", DependencyType::TestUnit).unwrap();
    assert!(closure.is_empty());
}

#[test]
fn only_unit_configuration_is_consumed() {
    let registry = registry_of(vec![
        Module::builder("X")
            .test_dependency("qa-functional", Dependency::new("jemmy"))
            .build()
            .unwrap(),
    ]);

    let closure = registry.closure("X", DependencyType::TestUnit).unwrap();
    assert!(closure.is_empty());
}

#[test]
fn unregistered_recursive_target_fails_whole_closure() {
    let registry = registry_of(vec![module(
        "X",
        vec![Dependency::new("A"), Dependency::new("ghost").recursive()],
    )]);

    let err = registry.closure("X", DependencyType::Main).unwrap_err();
    assert_eq!(err, GraphError::unresolved("ghost", "X"));
    assert_eq!(err.kind(), ErrorKind::UnresolvedDependency);
}

#[test]
fn unresolved_error_names_the_requesting_module() {
    // The failing edge lives on Y, reached through X
    let registry = registry_of(vec![
        module("X", vec![Dependency::new("Y").recursive()]),
        module("Y", vec![Dependency::new("ghost").recursive()]),
    ]);

    let err = registry.closure("X", DependencyType::Main).unwrap_err();
    assert_eq!(err, GraphError::unresolved("ghost", "Y"));
}

#[test]
fn failed_closure_is_not_cached() {
    let registry = registry_of(vec![module("X", vec![Dependency::new("ghost").recursive()])]);

    assert!(registry.closure("X", DependencyType::Main).is_err());
    assert!(registry.closure("X", DependencyType::Main).is_err());
    let module = registry.resolve_module("X").unwrap();
    assert!(module.cached_closure(DependencyType::Main).is_none());
}

#[test]
fn self_edge_is_included_but_not_expanded() {
    let registry = registry_of(vec![module(
        "X",
        vec![Dependency::new("X").recursive(), Dependency::new("Y")],
    )]);

    let closure = registry.closure("X", DependencyType::Main).unwrap();
    assert_eq!(targets(&closure), vec!["X", "Y"]);
}

#[test]
fn recursive_module_loop_is_reported() {
    let registry = registry_of(vec![
        module("A", vec![Dependency::new("B").recursive()]),
        module("B", vec![Dependency::new("C").recursive()]),
        module("C", vec![Dependency::new("A").recursive()]),
    ]);

    let err = registry.closure("A", DependencyType::Main).unwrap_err();
    match &err {
        GraphError::CircularModuleDependency {
            dependency,
            required_by,
            path,
        } => {
            assert_eq!(dependency, "A");
            assert_eq!(required_by, "C");
            assert_eq!(path, "A -> B -> C -> A");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::UnresolvedDependency);
}

#[test]
fn main_and_test_closures_of_same_module_do_not_loop() {
    // X's tests need X's main closure; that is not a cycle
    let registry = registry_of(vec![
        Module::builder("X")
            .main_dependency(Dependency::new("Y"))
            .test_dependency("unit", Dependency::new("X").recursive())
            .test_dependency("unit", Dependency::new("W").recursive())
            .build()
            .unwrap(),
        module("W", vec![Dependency::new("X").recursive()]),
    ]);

    let closure = registry.closure("X", DependencyType::TestUnit).unwrap();
    assert_eq!(targets(&closure), vec!["X", "W", "Y"]);
}

#[test]
fn first_reached_attributes_win() {
    // Y's closure reaches Z without the test flag before X's own Z edge
    let registry = registry_of(vec![
        module(
            "X",
            vec![
                Dependency::new("Y").recursive(),
                Dependency::new("Z").test(),
            ],
        ),
        module("Y", vec![Dependency::new("Z").specification_version("1.0")]),
    ]);

    let closure = registry.closure("X", DependencyType::Main).unwrap();
    let z = closure.get("Z").unwrap();
    assert!(!z.test);
    assert_eq!(z.specification_version.as_deref(), Some("1.0"));
}

#[test]
fn diamond_of_modules_counts_shared_dependency_once() {
    let registry = registry_of(vec![
        module(
            "A",
            vec![Dependency::new("B").recursive(), Dependency::new("C").recursive()],
        ),
        module("B", vec![Dependency::new("D").recursive()]),
        module("C", vec![Dependency::new("D").recursive()]),
        module("D", vec![Dependency::new("E")]),
    ]);

    let closure = registry.closure("A", DependencyType::Main).unwrap();
    assert_eq!(targets(&closure), vec!["B", "D", "E", "C"]);
}

#[test]
fn closure_is_memoized() {
    let registry = registry_of(vec![
        module("X", vec![Dependency::new("Y").recursive()]),
        module("Y", vec![Dependency::new("Z")]),
    ]);

    let first = registry.closure("X", DependencyType::Main).unwrap();
    let second = registry.closure("X", DependencyType::Main).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // Nested closures are cached too
    let y = registry.resolve_module("Y").unwrap();
    assert!(y.cached_closure(DependencyType::Main).is_some());
    assert!(y.cached_closure(DependencyType::TestUnit).is_none());
}

#[test]
fn unknown_module_query_fails() {
    let registry = registry_of(vec![]);
    let err = registry.closure("nope", DependencyType::Main).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unknown);
}

#[test]
fn custom_unit_configuration_name_is_honoured() {
    let mut builder = crate::RegistryBuilder::new();
    builder
        .options(crate::ResolverOptions {
            unit_test_configuration: "junit5".to_string(),
            ..Default::default()
        })
        .add_module(
            Module::builder("X")
                .test_dependency("unit", Dependency::new("old"))
                .test_dependency("junit5", Dependency::new("new"))
                .build()
                .unwrap(),
        );
    let registry = builder.build();

    let closure = registry.closure("X", DependencyType::TestUnit).unwrap();
    assert_eq!(targets(&closure), vec!["new"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_queries_agree() {
    let registry = registry_of(vec![
        module(
            "app",
            vec![Dependency::new("lib").recursive(), Dependency::new("util").recursive()],
        ),
        module("lib", vec![Dependency::new("util").recursive()]),
        module("util", vec![Dependency::new("base")]),
    ]);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry
                .closure("app", DependencyType::Main)
                .map(|closure| closure.targets().map(String::from).collect::<Vec<_>>())
        }));
    }

    for handle in handles {
        let targets = handle.await.unwrap().unwrap();
        assert_eq!(targets, vec!["lib", "util", "base"]);
    }
}
