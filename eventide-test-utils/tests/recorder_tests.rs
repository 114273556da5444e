// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_test_utils::{person_alice, CallRecorder, Person, TestError};
use std::thread;

#[test]
fn test_recorder_keeps_order() {
    let recorder = CallRecorder::new();
    recorder.record(1);
    recorder.record(2);
    recorder.record(3);

    assert_eq!(recorder.calls(), vec![1, 2, 3]);
    assert_eq!(recorder.len(), 3);
}

#[test]
fn test_recorder_clones_share_log() {
    let recorder = CallRecorder::new();
    let clone = recorder.clone();

    clone.record("a");
    assert_eq!(recorder.calls(), vec!["a"]);

    recorder.clear();
    assert!(clone.is_empty());
}

#[test]
fn test_tagged_listener_records_args() {
    let recorder = CallRecorder::<(&str, Person)>::new();
    let listener = recorder.listener("greet");

    listener(&person_alice());

    assert_eq!(recorder.tags(), vec!["greet"]);
    assert_eq!(recorder.calls()[0].1, person_alice());
}

#[test]
fn test_recorder_across_threads() {
    let recorder = CallRecorder::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let recorder = recorder.clone();
            thread::spawn(move || recorder.record(i))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut calls = recorder.calls();
    calls.sort_unstable();
    assert_eq!(calls, vec![0, 1, 2, 3]);
}

#[test]
fn test_error_display() {
    assert_eq!(TestError::new("boom").to_string(), "test error: boom");
}
