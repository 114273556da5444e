// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the eventide workspace.
//!
//! Designed for use in tests and benches only.
//!
//! # Key Types
//!
//! ## `CallRecorder<T>`
//!
//! A thread-safe, ordered log of listener invocations:
//!
//! ```rust
//! use eventide_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::<(&str, i32)>::new();
//! let first = recorder.listener("first");
//! let second = recorder.listener("second");
//!
//! first(&1);
//! second(&1);
//!
//! assert_eq!(recorder.calls(), vec![("first", 1), ("second", 1)]);
//! ```
//!
//! ## Fixtures
//!
//! - `person` - a small non-`Copy` payload with `person_alice()` and friends
//! - `test_error` - `TestError`, returned by failing listeners and steps

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod person;
pub mod recorder;
pub mod test_error;

pub use person::{person_alice, person_bob, person_charlie, Person};
pub use recorder::CallRecorder;
pub use test_error::TestError;
