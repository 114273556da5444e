// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Emitter, EventideError, Listener};
use eventide_test_utils::{person_alice, person_bob, CallRecorder, Person};

#[test]
fn test_emit_invokes_listeners_in_registration_order() {
    // Arrange
    let emitter = Emitter::<String, i32>::new();
    let recorder = CallRecorder::<(&str, i32)>::new();
    for tag in ["first", "second", "third", "fourth"] {
        emitter.on("x", recorder.listener(tag)).unwrap();
    }

    // Act
    let invoked = emitter.emit("x", &7).unwrap();

    // Assert
    assert_eq!(invoked, 4);
    assert_eq!(recorder.tags(), vec!["first", "second", "third", "fourth"]);
    assert!(recorder.calls().iter().all(|(_, value)| *value == 7));
}

#[test]
fn test_emit_without_listeners_is_noop() {
    let emitter = Emitter::<String, i32>::new();

    assert_eq!(emitter.emit("nobody", &1).unwrap(), 0);
    assert!(!emitter.has_listeners("nobody"));
}

#[test]
fn test_off_then_emit_only_remaining_listener_runs() {
    // Arrange
    let emitter = Emitter::<String, i32>::new();
    let recorder = CallRecorder::<(&str, i32)>::new();
    let l1 = Listener::new(recorder.listener("L1"));
    let l2 = Listener::new(recorder.listener("L2"));
    emitter.on_listener("x", &l1).unwrap();
    emitter.on_listener("x", &l2).unwrap();

    // Act
    emitter.emit("x", &1).unwrap();
    let removed = emitter.off("x", &l1);
    emitter.emit("x", &2).unwrap();

    // Assert
    assert!(removed);
    assert_eq!(recorder.calls(), vec![("L1", 1), ("L2", 1), ("L2", 2)]);
}

#[test]
fn test_off_unknown_event_or_listener_is_noop() {
    let emitter = Emitter::<String, i32>::new();
    let registered = Listener::new(|_: &i32| {});
    let stranger = Listener::new(|_: &i32| {});
    emitter.on_listener("x", &registered).unwrap();

    assert!(!emitter.off("missing", &registered));
    assert!(!emitter.off("x", &stranger));
    assert_eq!(emitter.listener_count("x"), 1);
}

#[test]
fn test_off_matches_clones_of_the_same_listener() {
    let emitter = Emitter::<String, i32>::new();
    let listener = Listener::new(|_: &i32| {});
    emitter.on_listener("x", &listener).unwrap();

    assert!(emitter.off("x", &listener.clone()));
    assert!(!emitter.has_listeners("x"));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let emitter = Emitter::<String, i32>::new();
    let listener = Listener::new(|_: &i32| {});
    emitter.on_listener("x", &listener).unwrap();

    let err = emitter.on_listener("x", &listener).unwrap_err();
    assert!(matches!(err, EventideError::InvalidListener { .. }));
    assert!(err.is_permanent());

    let err = emitter.once_listener("x", &listener).unwrap_err();
    assert!(matches!(err, EventideError::InvalidListener { .. }));
    assert_eq!(emitter.listener_count("x"), 1);
}

#[test]
fn test_same_listener_may_serve_different_events() {
    let emitter = Emitter::<String, i32>::new();
    let recorder = CallRecorder::<(&str, i32)>::new();
    let listener = Listener::new(recorder.listener("shared"));

    emitter.on_listener("a", &listener).unwrap();
    emitter.on_listener("b", &listener).unwrap();
    emitter.emit("a", &1).unwrap();
    emitter.emit("b", &2).unwrap();

    assert_eq!(recorder.calls(), vec![("shared", 1), ("shared", 2)]);
}

#[test]
fn test_unsubscribe_removes_only_that_registration() {
    // Arrange
    let emitter = Emitter::<String, i32>::new();
    let recorder = CallRecorder::<(&str, i32)>::new();
    let first = emitter.on("x", recorder.listener("first")).unwrap();
    emitter.on("x", recorder.listener("second")).unwrap();

    // Act
    let removed = emitter.unsubscribe(&first);
    let removed_again = emitter.unsubscribe(&first);
    emitter.emit("x", &3).unwrap();

    // Assert
    assert!(removed);
    assert!(!removed_again);
    assert_eq!(first.event(), "x");
    assert_eq!(recorder.tags(), vec!["second"]);
}

#[test]
fn test_every_listener_receives_the_same_arguments() {
    let emitter = Emitter::<String, (Person, Person, u32)>::new();
    let recorder = CallRecorder::<(&str, (Person, Person, u32))>::new();
    emitter.on("meet", recorder.listener("a")).unwrap();
    emitter.on("meet", recorder.listener("b")).unwrap();

    emitter
        .emit("meet", &(person_alice(), person_bob(), 3))
        .unwrap();

    let expected = (person_alice(), person_bob(), 3);
    assert_eq!(
        recorder.calls(),
        vec![("a", expected.clone()), ("b", expected)]
    );
}

#[test]
fn test_events_are_independent() {
    let emitter = Emitter::<String, i32>::new();
    let recorder = CallRecorder::<(&str, i32)>::new();
    emitter.on("a", recorder.listener("a")).unwrap();
    emitter.on("b", recorder.listener("b")).unwrap();

    emitter.emit("b", &1).unwrap();

    assert_eq!(recorder.calls(), vec![("b", 1)]);
}

#[test]
fn test_introspection_and_bulk_removal() {
    let emitter = Emitter::<String, i32>::new();
    emitter.on("a", |_: &i32| {}).unwrap();
    emitter.on("a", |_: &i32| {}).unwrap();
    emitter.on("b", |_: &i32| {}).unwrap();

    let mut names = emitter.event_names();
    names.sort();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(emitter.listener_count("a"), 2);

    assert_eq!(emitter.remove_all_listeners("a"), 2);
    assert_eq!(emitter.remove_all_listeners("a"), 0);
    assert_eq!(emitter.event_names(), vec!["b".to_string()]);

    emitter.clear();
    assert!(emitter.event_names().is_empty());
}

#[test]
fn test_removing_last_listener_forgets_the_event() {
    let emitter = Emitter::<String, i32>::new();
    let sub = emitter.on("x", |_: &i32| {}).unwrap();

    emitter.unsubscribe(&sub);

    assert!(emitter.event_names().is_empty());
}

#[test]
fn test_clones_share_registrations() {
    let emitter = Emitter::<String, i32>::new();
    let clone = emitter.clone();
    let recorder = CallRecorder::<(&str, i32)>::new();

    clone.on("x", recorder.listener("via-clone")).unwrap();
    emitter.emit("x", &5).unwrap();

    assert_eq!(recorder.calls(), vec![("via-clone", 5)]);
}

#[test]
fn test_unsized_arguments() {
    let emitter = Emitter::<String, str>::new();
    let recorder = CallRecorder::<String>::new();
    let sink = recorder.clone();
    emitter
        .on("say", move |text: &str| sink.record(text.to_uppercase()))
        .unwrap();

    emitter.emit("say", "hello").unwrap();

    assert_eq!(recorder.calls(), vec!["HELLO".to_string()]);
}

#[test]
fn test_emitter_is_usable_across_threads() {
    let emitter = Emitter::<String, u32>::new();
    let recorder = CallRecorder::<(&str, u32)>::new();
    emitter.on("tick", recorder.listener("tick")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let emitter = emitter.clone();
            std::thread::spawn(move || emitter.emit("tick", &i).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }

    assert_eq!(recorder.len(), 4);
}

#[test]
fn test_debug_lists_listener_counts() {
    let emitter = Emitter::<String, i32>::new();
    emitter.on("x", |_: &i32| {}).unwrap();

    assert_eq!(format!("{emitter:?}"), "{\"x\": 1}");
}
