// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// Identifier of one registration, unique within its emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Handle returned by [`Emitter::on`](crate::Emitter::on) and friends.
///
/// Pass it to [`Emitter::unsubscribe`](crate::Emitter::unsubscribe) to remove the
/// registration. Dropping the handle does not unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription<K> {
    event: K,
    id: ListenerId,
}

impl<K> Subscription<K> {
    pub(crate) const fn new(event: K, id: ListenerId) -> Self {
        Self { event, id }
    }

    /// The event name the listener was registered under.
    pub const fn event(&self) -> &K {
        &self.event
    }

    /// The registration id.
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }
}
