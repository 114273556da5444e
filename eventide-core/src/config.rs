// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emitter configuration.

/// Default number of listeners per event before a leak warning is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// What `emit` does when a listener fails.
///
/// A failure is either an error returned by the listener or, when
/// [`EmitterConfig::catch_panics`] is enabled, a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and keep invoking the remaining listeners. `emit` succeeds.
    #[default]
    LogAndContinue,
    /// Invoke every listener, then return the failures as one error.
    Collect,
    /// Return the first failure and skip the remaining listeners.
    FailFast,
}

/// Configuration of an [`Emitter`](crate::Emitter).
///
/// ```
/// use eventide_core::{EmitterConfig, FailurePolicy};
///
/// let config = EmitterConfig::default()
///     .with_failure_policy(FailurePolicy::Collect)
///     .with_max_listeners(None);
///
/// assert_eq!(config.failure_policy(), FailurePolicy::Collect);
/// assert_eq!(config.max_listeners(), None);
/// assert!(config.catch_panics());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    failure_policy: FailurePolicy,
    catch_panics: bool,
    max_listeners: Option<usize>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            catch_panics: true,
            max_listeners: Some(DEFAULT_MAX_LISTENERS),
        }
    }
}

impl EmitterConfig {
    /// Set the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Convert listener panics into errors (`true`) or let them unwind (`false`).
    #[must_use]
    pub const fn with_catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Set the per-event listener count above which a warning is logged.
    ///
    /// `None` disables the warning.
    #[must_use]
    pub const fn with_max_listeners(mut self, max_listeners: Option<usize>) -> Self {
        self.max_listeners = max_listeners;
        self
    }

    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    #[must_use]
    pub const fn catch_panics(&self) -> bool {
        self.catch_panics
    }

    #[must_use]
    pub const fn max_listeners(&self) -> Option<usize> {
        self.max_listeners
    }
}
