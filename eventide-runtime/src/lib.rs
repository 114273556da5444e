// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction used by the debounce and throttle wrappers.
//!
//! [`Timer`] supplies a monotonic clock and sleep futures, [`Runtime`] adds task
//! spawning. The tokio implementation lives behind the `runtime-tokio` feature.

pub mod impls;
pub mod runtime;
pub mod timer;

pub use runtime::Runtime;
pub use timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioRuntime, TokioTimer};

/// Runtime picked by the enabled feature.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;
