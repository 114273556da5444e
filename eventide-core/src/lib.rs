// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types of the eventide toolkit.
//!
//! The central type is [`Emitter`], a named-channel publish/subscribe hub.
//! Listeners are registered per event name, fire synchronously in registration
//! order and can be one-shot. See the [`emitter`] module for the emission policy.

#[macro_use]
mod logging;

pub mod cancellation_token;
pub mod config;
pub mod emitter;
pub mod listener;
pub mod subscription;

pub use self::cancellation_token::CancellationToken;
pub use self::config::{EmitterConfig, FailurePolicy};
pub use self::emitter::Emitter;
pub use self::listener::{Listener, ListenerOutcome};
pub use self::subscription::{ListenerId, Subscription};
pub use eventide_error::{EventideError, Result};
