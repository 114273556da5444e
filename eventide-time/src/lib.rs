// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Time-based callback wrappers.
//!
//! - [`Debounced`] delays a callback until calls stop arriving for a quiet period.
//! - [`Throttled`] lets at most one call through per time window.
//!
//! Both are cheap to clone and can be registered as emitter listeners by
//! forwarding to [`Debounced::call`] or [`Throttled::call`].

pub mod debounce;
pub mod prelude;
pub mod throttle;

pub use debounce::Debounced;
pub use throttle::Throttled;
