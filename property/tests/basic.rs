mod common;
use common::{init_tracing, watcher};
use observable_property::*;
use std::sync::{Arc, Mutex};

#[test]
fn test_integer_scenario() {
    init_tracing();
    let count = Int::default();
    assert_eq!(count.get(), 0);

    count.set(5);
    assert_eq!(count.get(), 5);

    let (accumulate, check) = watcher();
    let _handle = count.observe(move |old, new| accumulate((*old, *new)));
    count.set(7);
    assert_eq!(check(), [(5, 7)]);
}

#[test]
fn test_release_before_set() {
    init_tracing();
    let property = Property::new("a");
    let (accumulate, check) = watcher();
    let handle = property.observe(move |_, new| accumulate(*new));

    handle.release();
    property.set("b");
    property.set("c");
    assert_eq!(check(), [] as [&str; 0]);

    // second release is still a no-op
    handle.release();
    assert_eq!(property.get(), Some("c"));
}

#[test]
fn test_nested_registration_starts_next_pass() {
    init_tracing();
    let property = Property::new(0);
    let (accumulate, check) = watcher::<String>();
    let accumulate = Arc::new(accumulate);
    let nested: Arc<Mutex<Vec<Handle>>> = Arc::new(Mutex::new(Vec::new()));

    let _outer = {
        let property_ref = property.clone();
        let accumulate = accumulate.clone();
        let nested = nested.clone();
        property.observe(move |_, new| {
            accumulate(format!("outer {new}"));
            if nested.lock().unwrap().is_empty() {
                let accumulate = accumulate.clone();
                let handle = property_ref.observe(move |_, new| accumulate(format!("inner {new}")));
                nested.lock().unwrap().push(handle);
            }
        })
    };

    property.set(1);
    assert_eq!(check(), ["outer 1"]);

    property.set(2);
    assert_eq!(check(), ["outer 2", "inner 2"]);
}

#[test]
fn test_bind_text() {
    init_tracing();
    let text = Text::new("a".to_string());
    let destination = Arc::new(Mutex::new(String::new()));

    let _binding = text.bind(destination.clone());
    assert_eq!(*destination.lock().unwrap(), "a");

    text.set("b".to_string());
    assert_eq!(*destination.lock().unwrap(), "b");
}

#[test]
fn test_toggle_from_false() {
    init_tracing();
    let flag = Bool::new(false);
    let (accumulate, check) = watcher();
    let _handle = flag.observe(move |old, new| accumulate((*old, *new)));

    flag.toggle();
    assert_eq!(check(), [(false, true)]);
}

#[test]
fn test_guard_scope() {
    init_tracing();
    let property = Property::new(0u64);
    let (accumulate, check) = watcher();
    {
        let _guard = property.observe(move |_, new| accumulate(*new)).into_guard();
        property.set(1);
    }
    property.set(2);
    assert_eq!(check(), [1]);
}
