// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{runtime::Runtime, timer::Timer};
use std::future::Future;
use std::time::Duration;

/// Tokio-backed runtime. Spawning requires an ambient tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Timer = TokioTimer;

    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(tokio::spawn(future));
    }
}

// Uses tokio's clock so paused test time drives throttling too.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_now_follows_paused_clock() {
        let timer = TokioTimer;
        let start = timer.now();

        timer.sleep_future(Duration::from_millis(250)).await;

        assert!(timer.now() - start >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_future_runs() {
        let (tx, rx) = tokio::sync::oneshot::channel();

        TokioRuntime::spawn(async move {
            let _ = tx.send(7);
        });

        assert_eq!(rx.await.unwrap(), 7);
    }
}
