// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Named-channel event emitter.
//!
//! An [`Emitter`] maps event names to ordered listener lists.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `emit` runs every listener on the caller's thread, in
//!   registration order, before returning.
//! - **Snapshot emission**: the listener list is captured when `emit` starts.
//!   Listeners added during an emission fire from the next emission on, listeners
//!   removed during an emission still run in the in-flight one.
//! - **One-shot listeners**: a `once` listener is removed right before its
//!   first invocation, so a re-entrant `emit` cannot fire it twice. A one-shot
//!   listener the emission never reached (fail-fast, unwinding panic) stays
//!   registered.
//! - **Re-entrant**: the internal lock is released before listeners run, so a
//!   listener may call `on`, `off`, `once` or `emit` on the same emitter.
//! - **Shared**: cheap to clone; all clones share the same registrations.
//!
//! ## Example
//!
//! ```
//! use eventide_core::{Emitter, Listener};
//! use std::sync::{Arc, Mutex};
//!
//! let emitter = Emitter::<String, i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let greet = Listener::new({
//!     let seen = seen.clone();
//!     move |value: &i32| seen.lock().unwrap().push(*value)
//! });
//!
//! emitter.on_listener("x", &greet).unwrap();
//! emitter.emit("x", &1).unwrap();
//!
//! emitter.off("x", &greet);
//! emitter.emit("x", &2).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! ```

use crate::config::{EmitterConfig, FailurePolicy};
use crate::listener::{Listener, ListenerOutcome};
use crate::subscription::{ListenerId, Subscription};
use eventide_error::{EventideError, Result};
use parking_lot::Mutex;
use std::any::Any;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

struct Entry<A: ?Sized> {
    id: ListenerId,
    listener: Listener<A>,
    once: bool,
}

struct EmitterState<K, A: ?Sized> {
    listeners: HashMap<K, Vec<Entry<A>>>,
    // Events that already produced a max-listeners warning.
    warned: HashSet<K>,
    next_id: u64,
}

impl<K, A: ?Sized> EmitterState<K, A>
where
    K: Eq + Hash,
{
    fn drop_event<Q>(&mut self, event: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.listeners.remove(event);
        self.warned.remove(event);
    }
}

/// Named-channel publish/subscribe hub.
///
/// `K` is the event name type (typically `String`, queried with `&str`), `A` the
/// argument type handed by reference to every listener of an emission.
///
/// See the [module documentation](self) for the emission policy.
pub struct Emitter<K, A: ?Sized> {
    state: Arc<Mutex<EmitterState<K, A>>>,
    config: EmitterConfig,
}

impl<K, A> Emitter<K, A>
where
    K: Eq + Hash + Clone + Debug,
    A: ?Sized + 'static,
{
    /// Creates an emitter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    #[must_use]
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(EmitterState {
                listeners: HashMap::new(),
                warned: HashSet::new(),
                next_id: 0,
            })),
            config,
        }
    }

    /// The configuration this emitter was built with.
    pub const fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Registers a callable under `event`, after all listeners already present.
    ///
    /// The callable gets a fresh identity; use the returned [`Subscription`] to
    /// remove it, or [`on_listener`](Self::on_listener) when removal by listener
    /// reference is wanted.
    ///
    /// # Errors
    /// Never fails for a fresh callable; the `Result` mirrors
    /// [`on_listener`](Self::on_listener).
    pub fn on<F, R>(&self, event: impl Into<K>, callable: F) -> Result<Subscription<K>>
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: ListenerOutcome,
    {
        self.register(event.into(), Listener::new(callable), false)
    }

    /// Registers a callable that is removed right before its first invocation.
    ///
    /// # Errors
    /// Never fails for a fresh callable.
    pub fn once<F, R>(&self, event: impl Into<K>, callable: F) -> Result<Subscription<K>>
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: ListenerOutcome,
    {
        self.register(event.into(), Listener::new(callable), true)
    }

    /// Registers an existing listener handle under `event`.
    ///
    /// # Errors
    /// Returns [`EventideError::InvalidListener`] if the same listener is already
    /// registered for `event`.
    pub fn on_listener(&self, event: impl Into<K>, listener: &Listener<A>) -> Result<Subscription<K>> {
        self.register(event.into(), listener.clone(), false)
    }

    /// One-shot variant of [`on_listener`](Self::on_listener).
    ///
    /// # Errors
    /// Returns [`EventideError::InvalidListener`] if the same listener is already
    /// registered for `event`.
    pub fn once_listener(
        &self,
        event: impl Into<K>,
        listener: &Listener<A>,
    ) -> Result<Subscription<K>> {
        self.register(event.into(), listener.clone(), true)
    }

    fn register(&self, event: K, listener: Listener<A>, once: bool) -> Result<Subscription<K>> {
        let mut state = self.state.lock();

        if state
            .listeners
            .get(&event)
            .is_some_and(|entries| entries.iter().any(|e| e.listener.same_as(&listener)))
        {
            return Err(EventideError::invalid_listener(
                format!("{event:?}"),
                "listener is already registered for this event",
            ));
        }

        let id = ListenerId(state.next_id);
        state.next_id += 1;

        let entries = state.listeners.entry(event.clone()).or_default();
        entries.push(Entry { id, listener, once });
        let count = entries.len();

        if let Some(max) = self.config.max_listeners() {
            if count > max && state.warned.insert(event.clone()) {
                warn!(
                    "possible listener leak: {} listeners registered for event {:?} (max {})",
                    count, event, max
                );
            }
        }

        debug!("registered {} for event {:?} (once: {})", id, event, once);
        Ok(Subscription::new(event, id))
    }

    /// Removes `listener` from `event`.
    ///
    /// Returns `true` if a registration was removed. Unknown events and listeners
    /// that are not registered are a no-op.
    pub fn off<Q>(&self, event: &Q, listener: &Listener<A>) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_where(event, |entry| entry.listener.same_as(listener))
    }

    /// Removes the registration behind `subscription`.
    ///
    /// Returns `false` if it was already removed (including a fired `once` listener).
    pub fn unsubscribe(&self, subscription: &Subscription<K>) -> bool {
        let id = subscription.id();
        self.remove_where(subscription.event(), |entry| entry.id == id)
    }

    fn remove_where<Q>(&self, event: &Q, matches: impl Fn(&Entry<A>) -> bool) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut state = self.state.lock();
        let Some(entries) = state.listeners.get_mut(event) else {
            return false;
        };

        let Some(position) = entries.iter().position(|e| matches(e)) else {
            return false;
        };

        entries.remove(position);
        if entries.is_empty() {
            state.drop_event(event);
        }
        true
    }

    /// Removes every listener of `event`, returning how many were removed.
    pub fn remove_all_listeners<Q>(&self, event: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut state = self.state.lock();
        let removed = state.listeners.get(event).map_or(0, Vec::len);
        state.drop_event(event);
        removed
    }

    /// Removes every listener of every event.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.listeners.clear();
        state.warned.clear();
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count<Q>(&self, event: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.lock().listeners.get(event).map_or(0, Vec::len)
    }

    /// Returns `true` if at least one listener is registered for `event`.
    pub fn has_listeners<Q>(&self, event: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.listener_count(event) > 0
    }

    /// Names of all events that currently have listeners, in no particular order.
    #[must_use]
    pub fn event_names(&self) -> Vec<K> {
        self.state.lock().listeners.keys().cloned().collect()
    }

    /// Invokes every listener registered for `event` with `args`.
    ///
    /// Listeners run synchronously, in registration order, over the snapshot taken
    /// when the call starts. An event without listeners is a no-op.
    ///
    /// Returns the number of listeners invoked.
    ///
    /// # Errors
    /// Depends on the configured [`FailurePolicy`]:
    /// - `LogAndContinue`: never fails.
    /// - `Collect`: after all listeners ran, returns the single failure or
    ///   [`EventideError::MultipleErrors`].
    /// - `FailFast`: returns the first failure; later listeners are skipped.
    ///
    /// # Panics
    /// Re-raises a listener panic when `catch_panics` is disabled.
    pub fn emit<Q>(&self, event: &Q, args: &A) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let snapshot = self.snapshot(event);
        if snapshot.is_empty() {
            return Ok(0);
        }

        let mut failures = Vec::new();
        let mut invoked = 0;

        for (index, (id, listener, once)) in snapshot.iter().enumerate() {
            // Already fired by a nested emission, or removed since the snapshot.
            if *once && !self.claim(event, *id) {
                continue;
            }

            invoked += 1;
            let Err(failure) = self.invoke(event, index, listener, args) else {
                continue;
            };

            match self.config.failure_policy() {
                FailurePolicy::LogAndContinue => log_failure(&failure),
                FailurePolicy::Collect => failures.push(failure),
                FailurePolicy::FailFast => return Err(failure),
            }
        }

        EventideError::from_failures(failures).map_or(Ok(invoked), Err)
    }

    // Captures the listeners to run, in registration order.
    fn snapshot<Q>(&self, event: &Q) -> Vec<(ListenerId, Listener<A>, bool)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.lock().listeners.get(event).map_or_else(Vec::new, |entries| {
            entries
                .iter()
                .map(|e| (e.id, e.listener.clone(), e.once))
                .collect()
        })
    }

    // Removes a one-shot entry right before it runs. Returns `false` if it is gone.
    fn claim<Q>(&self, event: &Q, id: ListenerId) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_where(event, |entry| entry.id == id)
    }

    fn invoke<Q>(&self, event: &Q, index: usize, listener: &Listener<A>, args: &A) -> Result<()>
    where
        Q: Debug + ?Sized,
    {
        if !self.config.catch_panics() {
            return listener
                .call(args)
                .map_err(|source| EventideError::listener_failure(format!("{event:?}"), index, source));
        }

        match panic::catch_unwind(AssertUnwindSafe(|| listener.call(args))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(EventideError::listener_failure(
                format!("{event:?}"),
                index,
                source,
            )),
            Err(payload) => Err(EventideError::callback_panic(
                format!("{event:?}"),
                index,
                panic_message(payload.as_ref()),
            )),
        }
    }
}

fn log_failure(failure: &EventideError) {
    match failure {
        EventideError::CallbackPanic { .. } => error!("{}", failure),
        _ => warn!("{}", failure),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

impl<K, A> Default for Emitter<K, A>
where
    K: Eq + Hash + Clone + Debug,
    A: ?Sized + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A: ?Sized> Clone for Emitter<K, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            config: self.config.clone(),
        }
    }
}

impl<K, A: ?Sized> Debug for Emitter<K, A>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        let mut map = f.debug_map();
        for (event, entries) in &state.listeners {
            map.entry(event, &entries.len());
        }
        map.finish()
    }
}
