// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential execution of async steps.
//!
//! [`run_sequential`] awaits each step to completion before starting the next
//! one and collects the outputs in order. The first failing step stops the run.
//! [`run_sequential_with_cancel`] additionally observes a [`CancellationToken`].

#[macro_use]
mod logging;

pub mod sequential;

pub use eventide_core::CancellationToken;
pub use sequential::{run_sequential, run_sequential_with_cancel, step, Step};
