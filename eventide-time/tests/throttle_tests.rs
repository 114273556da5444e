// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_runtime::Timer;
use eventide_test_utils::CallRecorder;
use eventide_time::Throttled;
use parking_lot::Mutex;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::time::Duration;

const LIMIT: Duration = Duration::from_millis(200);

/// Clock advanced by hand; instants are offsets from its creation.
#[derive(Clone, Debug, Default)]
struct ManualTimer {
    now: Arc<Mutex<Duration>>,
}

impl ManualTimer {
    fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Timer for ManualTimer {
    type Sleep = Ready<()>;
    type Instant = Duration;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        self.advance(duration);
        ready(())
    }

    fn now(&self) -> Self::Instant {
        *self.now.lock()
    }
}

fn throttled(recorder: &CallRecorder<u32>, timer: &ManualTimer) -> Throttled<u32, ManualTimer> {
    let recorder = recorder.clone();
    Throttled::with_timer(move |value| recorder.record(value), LIMIT, timer.clone())
}

#[test]
fn test_first_call_runs_and_opens_window() {
    // Arrange
    let recorder = CallRecorder::new();
    let timer = ManualTimer::default();
    let throttle = throttled(&recorder, &timer);

    // Act
    let first = throttle.call(1);
    let second = throttle.call(2);

    // Assert
    assert!(first);
    assert!(!second);
    assert_eq!(recorder.calls(), vec![1]);
}

#[test]
fn test_call_accepted_once_limit_elapsed() {
    let recorder = CallRecorder::new();
    let timer = ManualTimer::default();
    let throttle = throttled(&recorder, &timer);

    throttle.call(1);
    timer.advance(LIMIT - Duration::from_millis(1));
    assert!(!throttle.call(2));

    timer.advance(Duration::from_millis(1));
    assert!(throttle.call(3));

    assert_eq!(recorder.calls(), vec![1, 3]);
}

#[test]
fn test_dropped_calls_do_not_extend_window() {
    let recorder = CallRecorder::new();
    let timer = ManualTimer::default();
    let throttle = throttled(&recorder, &timer);

    throttle.call(1);
    for value in 2..6 {
        timer.advance(Duration::from_millis(50));
        throttle.call(value);
    }

    // 200ms after the first accepted call
    assert_eq!(recorder.calls(), vec![1, 5]);
}

#[test]
fn test_reset_reopens_immediately() {
    let recorder = CallRecorder::new();
    let timer = ManualTimer::default();
    let throttle = throttled(&recorder, &timer);

    throttle.call(1);
    throttle.reset();

    assert!(throttle.call(2));
    assert_eq!(recorder.calls(), vec![1, 2]);
}

#[test]
fn test_clones_share_the_window() {
    let recorder = CallRecorder::new();
    let timer = ManualTimer::default();
    let throttle = throttled(&recorder, &timer);
    let clone = throttle.clone();

    assert!(throttle.call(1));
    assert!(!clone.call(2));
    assert_eq!(clone.limit(), LIMIT);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_drives_the_window() {
    let recorder = CallRecorder::new();
    let throttle = {
        let recorder = recorder.clone();
        Throttled::new(move |value: u32| recorder.record(value), LIMIT)
    };

    assert!(throttle.call(1));
    assert!(!throttle.call(2));

    tokio::time::advance(LIMIT).await;
    assert!(throttle.call(3));

    assert_eq!(recorder.calls(), vec![1, 3]);
}
