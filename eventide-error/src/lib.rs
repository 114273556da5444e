// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the eventide toolkit
//!
//! This crate defines the root [`EventideError`] type shared by the emitter, the
//! sequential runner and the time-based wrappers. Registration problems, listener
//! failures raised during an emission and step failures of a sequential run each
//! have their own variant so callers can react to them individually.
//!
//! # Examples
//!
//! ```
//! use eventide_error::{EventideError, Result};
//!
//! fn register() -> Result<()> {
//!     Err(EventideError::invalid_listener("\"ready\"", "already registered"))
//! }
//!
//! assert!(register().is_err());
//! ```

/// Boxed error produced by user code (listeners, sequential steps).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Root error type for all eventide operations
#[derive(Debug, thiserror::Error)]
pub enum EventideError {
    /// A listener was rejected at registration time
    ///
    /// Raised when the same listener identity is registered twice for one event.
    #[error("Invalid listener for event {event}: {reason}")]
    InvalidListener {
        /// Debug rendering of the event name
        event: String,
        /// Why the registration was refused
        reason: String,
    },

    /// A listener returned an error during an emission
    #[error("Listener #{index} failed for event {event}: {source}")]
    ListenerFailure {
        /// Debug rendering of the event name
        event: String,
        /// Position of the listener inside the emission snapshot
        index: usize,
        /// The error returned by the listener
        #[source]
        source: BoxError,
    },

    /// A listener panicked during an emission
    ///
    /// The panic is caught at the emission boundary and converted to this variant.
    #[error("Listener #{index} panicked for event {event}: {context}")]
    CallbackPanic {
        /// Debug rendering of the event name
        event: String,
        /// Position of the listener inside the emission snapshot
        index: usize,
        /// The panic payload, when it was a string
        context: String,
    },

    /// Multiple errors occurred
    ///
    /// Produced when several listeners of one emission fail under the collecting policy.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<EventideError>,
    },

    /// A step of a sequential run failed
    #[error("Step {step} failed: {source}")]
    StepFailed {
        /// Zero-based index of the failing step
        step: usize,
        /// The error returned by the step
        #[source]
        source: BoxError,
    },

    /// A sequential run was cancelled before finishing
    #[error("Cancelled after {completed} completed steps")]
    Cancelled {
        /// Number of steps that finished before cancellation was observed
        completed: usize,
    },

    /// General processing error carrying context
    #[error("Processing error: {context}")]
    ProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] BoxError),
}

impl EventideError {
    /// Create an invalid listener error
    pub fn invalid_listener(event: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidListener {
            event: event.into(),
            reason: reason.into(),
        }
    }

    /// Create a listener failure from the error a listener returned
    pub fn listener_failure(event: impl Into<String>, index: usize, source: BoxError) -> Self {
        Self::ListenerFailure {
            event: event.into(),
            index,
            source,
        }
    }

    /// Create a callback panic error
    pub fn callback_panic(
        event: impl Into<String>,
        index: usize,
        context: impl Into<String>,
    ) -> Self {
        Self::CallbackPanic {
            event: event.into(),
            index,
            context: context.into(),
        }
    }

    /// Create a step failure of a sequential run
    pub fn step_failed(step: usize, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StepFailed {
            step,
            source: Box::new(source),
        }
    }

    /// Create a processing error with the given context
    pub fn processing_error(context: impl Into<String>) -> Self {
        Self::ProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Fold the failures of one emission into a single error
    ///
    /// Returns `None` for an empty list, the error itself for a single failure and
    /// `MultipleErrors` otherwise.
    ///
    /// ```
    /// use eventide_error::EventideError;
    ///
    /// let single = EventideError::from_failures(vec![EventideError::processing_error("a")]);
    /// assert!(matches!(single, Some(EventideError::ProcessingError { .. })));
    ///
    /// let many = EventideError::from_failures(vec![
    ///     EventideError::processing_error("a"),
    ///     EventideError::processing_error("b"),
    /// ]);
    /// assert!(matches!(many, Some(EventideError::MultipleErrors { count: 2, .. })));
    /// ```
    #[must_use]
    pub fn from_failures(mut errors: Vec<EventideError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            count => Some(Self::MultipleErrors { count, errors }),
        }
    }

    /// Check if this error was raised by a listener during an emission
    #[must_use]
    pub fn is_listener_failure(&self) -> bool {
        match self {
            Self::ListenerFailure { .. } | Self::CallbackPanic { .. } => true,
            Self::MultipleErrors { errors, .. } => errors.iter().all(Self::is_listener_failure),
            _ => false,
        }
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Registration errors are permanent; retrying the same call fails again.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::InvalidListener { .. })
    }
}

/// Specialized Result type for eventide operations
pub type Result<T> = std::result::Result<T, EventideError>;

/// Extension trait for converting foreign errors into `EventideError`
pub trait IntoEventideError {
    /// Convert this error into an `EventideError`
    fn into_eventide(self) -> EventideError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoEventideError for E {
    fn into_eventide(self) -> EventideError {
        EventideError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(EventideError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(EventideError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<EventideError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap_user_error(e.into(), context.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap_user_error(e.into(), f()))
    }
}

// Only user errors are rewrapped, library variants keep their shape.
fn wrap_user_error(error: EventideError, context: String) -> EventideError {
    match error {
        EventideError::UserError(inner) => EventideError::ProcessingError {
            context: format!("{context}: {inner}"),
        },
        other => other,
    }
}
