// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced callbacks.
//!
//! A burst of calls separated by less than `wait` collapses into a single
//! invocation.
//!
//! - **Trailing** (default): the callback runs `wait` after the last call of the
//!   burst, with that call's arguments. Earlier calls of the burst are dropped.
//! - **Leading**: the first call of a burst runs the callback immediately, on the
//!   caller's thread. Later calls only extend the quiet period and nothing runs at
//!   its end.
//!
//! The trailing invocation runs on a task spawned on the [`Runtime`]; with the
//! default runtime, `call` must happen inside a tokio runtime. Dropping the
//! wrapper does not cancel a pending invocation, [`Debounced::cancel`] does.
//!
//! # Example
//!
//! ```rust,no_run
//! use eventide_time::Debounced;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let search = Debounced::new(
//!     |query: String| println!("searching for {query}"),
//!     Duration::from_millis(500),
//! );
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//!
//! // Only "rust" is searched, 500ms after the last keystroke.
//! tokio::time::sleep(Duration::from_millis(600)).await;
//! # }
//! ```

use eventide_core::CancellationToken;
use eventide_runtime::{Runtime, Timer};
use futures::future::{self, Either};
use parking_lot::Mutex;
use std::fmt;
use std::marker::PhantomData;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use eventide_runtime::DefaultRuntime;

type Callback<A> = dyn Fn(A) + Send + Sync;

#[derive(Default)]
struct DebounceState {
    // Token of the quiet period in progress, if any.
    pending: Option<CancellationToken>,
}

/// A callback wrapper that waits for calls to settle before running.
///
/// See the [module documentation](self) for the trailing and leading modes.
pub struct Debounced<A, R: Runtime> {
    callback: Arc<Callback<A>>,
    wait: Duration,
    leading: bool,
    state: Arc<Mutex<DebounceState>>,
    timer: R::Timer,
    _runtime: PhantomData<fn() -> R>,
}

#[cfg(feature = "runtime-tokio")]
impl<A> Debounced<A, DefaultRuntime>
where
    A: Send + 'static,
{
    /// Trailing debounce of `callback` on the default runtime.
    pub fn new<F>(callback: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_runtime(callback, wait)
    }
}

impl<A, R> Debounced<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Trailing debounce of `callback` on runtime `R`.
    pub fn with_runtime<F>(callback: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            leading: false,
            state: Arc::new(Mutex::new(DebounceState::default())),
            timer: R::Timer::default(),
            _runtime: PhantomData,
        }
    }

    /// Switch between leading (`true`) and trailing (`false`) invocation.
    #[must_use]
    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    #[must_use]
    pub const fn is_leading(&self) -> bool {
        self.leading
    }

    /// Returns `true` while a quiet period is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Register one call.
    ///
    /// Restarts the quiet period. In trailing mode `args` replaces the arguments
    /// of any earlier pending call; in leading mode the callback runs now if no
    /// quiet period was running, otherwise `args` is dropped.
    pub fn call(&self, args: A) {
        let token = CancellationToken::new();
        let fire_now = {
            let mut state = self.state.lock();
            let previous = state.pending.replace(token.clone());
            let quiet = previous.is_none();
            if let Some(previous) = previous {
                previous.cancel();
            }
            self.leading && quiet
        };

        let trailing = if self.leading {
            if fire_now {
                (self.callback)(args);
            }
            None
        } else {
            Some(args)
        };

        let sleep = self.timer.sleep_future(self.wait);
        let state = Arc::clone(&self.state);
        let callback = Arc::clone(&self.callback);

        R::spawn(async move {
            let sleep = pin!(sleep);
            let cancelled = pin!(token.cancelled());
            if let Either::Right(_) = future::select(sleep, cancelled).await {
                return;
            }

            {
                let mut state = state.lock();
                // Superseded between the wake-up and the lock.
                if token.is_cancelled() {
                    return;
                }
                state.pending = None;
            }

            if let Some(args) = trailing {
                callback(args);
            }
        });
    }

    /// Drop the pending invocation, if any, and end the quiet period.
    pub fn cancel(&self) {
        if let Some(token) = self.state.lock().pending.take() {
            token.cancel();
        }
    }
}

impl<A, R: Runtime> Clone for Debounced<A, R> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            wait: self.wait,
            leading: self.leading,
            state: Arc::clone(&self.state),
            timer: self.timer.clone(),
            _runtime: PhantomData,
        }
    }
}

impl<A, R: Runtime> fmt::Debug for Debounced<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("leading", &self.leading)
            .field("pending", &self.state.lock().pending.is_some())
            .finish_non_exhaustive()
    }
}
