// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::CancellationToken;
use futures::FutureExt;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent_and_shared() {
    let token = CancellationToken::new();
    let clone = token.clone();

    clone.cancel();
    clone.cancel();

    assert!(token.is_cancelled());
}

#[test]
fn test_cancelled_is_ready_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    assert!(token.cancelled().now_or_never().is_some());
}

#[test]
fn test_cancelled_is_pending_until_cancel() {
    let token = CancellationToken::new();

    assert!(token.cancelled().now_or_never().is_none());
}

#[tokio::test]
async fn test_cancel_wakes_waiting_task() {
    // Arrange
    let token = CancellationToken::new();
    let waiter = tokio::spawn({
        let token = token.clone();
        async move { token.cancelled().await }
    });

    // Act
    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    // Assert
    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("waiter should be woken")
        .unwrap();
}
