// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use std::future::Future;

pub trait Runtime: Send + Sync + 'static {
    type Timer: Timer + Default;

    /// Run `future` to completion in the background, detached from the caller.
    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
