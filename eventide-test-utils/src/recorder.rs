// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Ordered, shareable log of calls.
///
/// Clones share the same log.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, call: T) {
        self.calls.lock().push(call);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<T: Clone> CallRecorder<T> {
    /// Copy of every call recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<A> CallRecorder<(&'static str, A)>
where
    A: Clone + Send + 'static,
{
    /// A callable recording `(tag, args)` each time it is invoked.
    pub fn listener(&self, tag: &'static str) -> impl Fn(&A) + Send + Sync + 'static {
        let recorder = self.clone();
        move |args: &A| recorder.record((tag, args.clone()))
    }

    /// Tags of the recorded calls, oldest first.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(|(tag, _)| *tag).collect()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
