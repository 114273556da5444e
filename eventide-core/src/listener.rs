// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Listener handles.
//!
//! A [`Listener`] wraps a shared callable. Cloning a listener keeps its identity,
//! which is what [`Emitter::off`](crate::Emitter::off) compares against.

use eventide_error::BoxError;
use std::fmt;
use std::sync::Arc;

type ListenerFn<A> = dyn Fn(&A) -> Result<(), BoxError> + Send + Sync;

/// Return types a listener callable may produce.
///
/// Plain `()` listeners never fail. Listeners returning `Result<(), E>` report
/// their errors to the emitter, which handles them according to its
/// [`FailurePolicy`](crate::FailurePolicy).
pub trait ListenerOutcome {
    /// Normalize the listener's return value.
    ///
    /// # Errors
    /// Returns the listener's own error, boxed.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl ListenerOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> ListenerOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// A cloneable handle to a listener callable.
///
/// ```
/// use eventide_core::Listener;
///
/// let a = Listener::new(|value: &i32| println!("{value}"));
/// let b = a.clone();
/// let c = Listener::new(|value: &i32| println!("{value}"));
///
/// assert!(a.same_as(&b));
/// assert!(!a.same_as(&c));
/// ```
pub struct Listener<A: ?Sized> {
    callable: Arc<ListenerFn<A>>,
}

impl<A: ?Sized + 'static> Listener<A> {
    /// Wrap a callable into a listener with a fresh identity.
    pub fn new<F, R>(callable: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: ListenerOutcome,
    {
        Self {
            callable: Arc::new(move |args: &A| callable(args).into_outcome()),
        }
    }

    /// Returns `true` when both handles refer to the same callable.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callable), Arc::as_ptr(&other.callable))
    }

    pub(crate) fn call(&self, args: &A) -> Result<(), BoxError> {
        (self.callable)(args)
    }
}

impl<A: ?Sized> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callable: Arc::clone(&self.callable),
        }
    }
}

impl<A: ?Sized> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callable", &Arc::as_ptr(&self.callable).cast::<()>())
            .finish()
    }
}
