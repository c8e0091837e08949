//! Destroyer Tests

use capsule::{Error, Recipe};

use crate::test_utils::{Service, ServiceTwo, container, id};

fn bound_container() -> capsule::Container {
    let mut capsule = container();
    capsule
        .bind("service", id::<Service>(), Recipe::constructor(|_| Ok(Service::default())))
        .unwrap();
    capsule
}

#[test]
fn test_destroy_with_fake_name() {
    let mut capsule = container();
    let error = capsule.destroy("Fake").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Can not destroy 'Fake' because it does not exist"
    );
}

#[test]
fn test_destroying_instance() {
    let mut capsule = bound_container();
    assert_eq!(capsule.names().collect::<Vec<_>>(), vec!["service"]);
    capsule.destroy("service").unwrap();
    assert_eq!(capsule.len(), 0);

    let error = capsule.get("service").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Can not retrieve non-existent instance 'service' from the container"
    );
}

#[test]
fn test_destroying_instance_with_namespace() {
    let mut capsule = bound_container();
    capsule.destroy(id::<Service>()).unwrap();

    assert!(!capsule.has("service"));
    assert!(!capsule.has_namespace(id::<Service>()));
    match capsule.get(id::<Service>()).unwrap_err() {
        Error::NotFound { name, .. } => assert_eq!(name, id::<Service>()),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[test]
fn test_destroy_twice_fails() {
    let mut capsule = bound_container();
    capsule.destroy("service").unwrap();
    assert!(capsule.destroy("service").unwrap_err().is_not_found());
}

#[test]
fn test_destroyed_singleton_can_be_rebound() {
    let mut capsule = container();
    capsule
        .singleton("service", id::<Service>(), Recipe::constructor(|_| Ok(Service::default())))
        .unwrap();
    let first = capsule.get("service").unwrap();

    capsule.destroy("service").unwrap();
    assert!(!capsule.is_resolved("service"));
    assert!(!capsule.is_singleton("service"));

    capsule
        .singleton("service", id::<Service>(), Recipe::constructor(|_| Ok(Service::default())))
        .unwrap();
    let second = capsule.get("service").unwrap();
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_destroy_removes_alias_of_name() {
    let mut capsule = container();
    capsule
        .bind("service", id::<Service>(), Recipe::constructor(|_| Ok(Service::default())))
        .unwrap();
    capsule
        .bind(
            "service",
            id::<ServiceTwo>(),
            Recipe::constructor(|_| Ok(ServiceTwo::default())),
        )
        .unwrap();
    assert!(capsule.has_namespace(id::<ServiceTwo>()));

    capsule.destroy("service").unwrap();
    assert!(!capsule.has_namespace(id::<Service>()));
    assert!(!capsule.has_namespace(id::<ServiceTwo>()));
}
