// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Eventide
//!
//! A named-channel event emitter plus a handful of small async helpers built
//! around it.
//!
//! ## Overview
//!
//! - [`Emitter`]: listeners registered per event name, invoked synchronously in
//!   registration order, optionally one-shot, with a configurable
//!   [`FailurePolicy`]
//! - [`Debounced`] and [`Throttled`]: rate-limiting wrappers for callbacks,
//!   typically used as listeners
//! - [`run_sequential`]: async steps awaited strictly one after another
//! - [`deep_merge`]: recursive merge of JSON values
//!
//! ## Quick Start
//!
//! ```rust
//! use eventide::prelude::*;
//!
//! let emitter = Emitter::<String, String>::new();
//!
//! emitter.on("greet", |name: &String| println!("Hello, {name}!")).unwrap();
//! emitter.once("greet", |_: &String| println!("first greeting")).unwrap();
//!
//! assert_eq!(emitter.emit("greet", &"Ada".to_string()).unwrap(), 2);
//! assert_eq!(emitter.emit("greet", &"Alan".to_string()).unwrap(), 1);
//! ```

pub use eventide_core::{
    CancellationToken, Emitter, EmitterConfig, FailurePolicy, Listener, ListenerId,
    ListenerOutcome, Subscription,
};
pub use eventide_error::{BoxError, EventideError, IntoEventideError, Result, ResultExt};
pub use eventide_exec::{run_sequential, run_sequential_with_cancel, step, Step};
pub use eventide_merge::{deep_merge, merged};
pub use eventide_runtime::{Runtime, Timer};
pub use eventide_time::{Debounced, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use eventide_runtime::{DefaultRuntime, TokioRuntime, TokioTimer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        deep_merge, merged, run_sequential, run_sequential_with_cancel, step,
        CancellationToken, Debounced, Emitter, EmitterConfig, EventideError, FailurePolicy,
        Listener, Subscription, Throttled,
    };
}
