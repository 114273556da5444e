// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttled callbacks.
//!
//! This implements **leading throttle** semantics:
//! - When a call arrives and no window is open:
//!   - Run the callback immediately, on the caller's thread
//!   - Open a window of `limit`
//! - Calls arriving while the window is open are dropped
//! - Once `limit` has elapsed the next call is accepted again
//!
//! No task is spawned; the window is measured with the [`Timer`] clock.
//!
//! # Example
//!
//! ```rust
//! use eventide_time::Throttled;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let on_scroll = Throttled::new(|offset: u32| println!("scrolled to {offset}"), Duration::from_millis(200));
//!
//! assert!(on_scroll.call(10));
//! assert!(!on_scroll.call(20)); // inside the 200ms window
//! # }
//! ```

use eventide_runtime::Timer;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use eventide_runtime::TokioTimer;

type Callback<A> = dyn Fn(A) + Send + Sync;

/// A callback wrapper running at most once per `limit`.
pub struct Throttled<A, T: Timer> {
    callback: Arc<Callback<A>>,
    limit: Duration,
    last_call: Arc<Mutex<Option<T::Instant>>>,
    timer: T,
}

#[cfg(feature = "runtime-tokio")]
impl<A> Throttled<A, TokioTimer> {
    /// Throttle `callback` using tokio's clock.
    pub fn new<F>(callback: F, limit: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_timer(callback, limit, TokioTimer)
    }
}

impl<A, T: Timer> Throttled<A, T> {
    /// Throttle `callback` using the clock of `timer`.
    pub fn with_timer<F>(callback: F, limit: Duration, timer: T) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            limit,
            last_call: Arc::new(Mutex::new(None)),
            timer,
        }
    }

    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Run the callback with `args` unless a window is open.
    ///
    /// Returns `true` if the callback ran.
    pub fn call(&self, args: A) -> bool {
        let now = self.timer.now();
        {
            let mut last_call = self.last_call.lock();
            if last_call.is_some_and(|previous| now - previous < self.limit) {
                return false;
            }
            *last_call = Some(now);
        }

        (self.callback)(args);
        true
    }

    /// Close the current window so the next call runs immediately.
    pub fn reset(&self) {
        *self.last_call.lock() = None;
    }
}

impl<A, T: Timer> Clone for Throttled<A, T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            limit: self.limit,
            last_call: Arc::clone(&self.last_call),
            timer: self.timer.clone(),
        }
    }
}

impl<A, T: Timer> fmt::Debug for Throttled<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("limit", &self.limit)
            .field("last_call", &*self.last_call.lock())
            .finish_non_exhaustive()
    }
}
