// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::CancellationToken;
use eventide_error::{EventideError, Result};
use futures::future::{self, BoxFuture, Either, FutureExt};
use std::error::Error;
use std::future::Future;
use std::pin::pin;

/// A boxed, not yet started async step.
///
/// Steps of different closure types can share one `Vec<Step<T, E>>`; build them
/// with [`step`].
pub type Step<T, E> = Box<dyn FnOnce() -> BoxFuture<'static, std::result::Result<T, E>> + Send>;

/// Box `factory` into a [`Step`].
///
/// The future is created only when the runner reaches this step.
pub fn step<F, Fut, T, E>(factory: F) -> Step<T, E>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    Box::new(move || factory().boxed())
}

/// Run `steps` one after another and collect their outputs in order.
///
/// A step is started only after the previous one completed successfully.
///
/// # Errors
///
/// Returns [`EventideError::StepFailed`] with the zero-based position of the
/// first failing step. Later steps are never started.
///
/// # Examples
///
/// ```
/// use eventide_exec::{run_sequential, step};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let steps = vec![
///     step(|| async { Ok::<_, std::io::Error>(1) }),
///     step(|| async { Ok(2) }),
/// ];
///
/// assert_eq!(run_sequential(steps).await.unwrap(), vec![1, 2]);
/// # }
/// ```
pub async fn run_sequential<I, F, Fut, T, E>(steps: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    let mut outputs = Vec::new();

    for (index, factory) in steps.into_iter().enumerate() {
        debug!("running step {index}");
        match factory().await {
            Ok(output) => outputs.push(output),
            Err(error) => {
                warn!("step {index} failed: {error}");
                return Err(EventideError::step_failed(index, error));
            }
        }
    }

    Ok(outputs)
}

/// Like [`run_sequential`], stopping once `token` is cancelled.
///
/// The token is checked before each step starts. A step that is running when
/// the token is cancelled is dropped without completing.
///
/// # Errors
///
/// - [`EventideError::Cancelled`] carrying the number of steps that completed
/// - [`EventideError::StepFailed`] as for [`run_sequential`]
pub async fn run_sequential_with_cancel<I, F, Fut, T, E>(
    steps: I,
    token: &CancellationToken,
) -> Result<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    let mut outputs = Vec::new();

    for (index, factory) in steps.into_iter().enumerate() {
        if token.is_cancelled() {
            debug!("cancelled before step {index}");
            return Err(EventideError::Cancelled { completed: index });
        }

        let running = pin!(factory());
        let cancelled = pin!(token.cancelled());
        match future::select(running, cancelled).await {
            Either::Left((Ok(output), _)) => outputs.push(output),
            Either::Left((Err(error), _)) => {
                warn!("step {index} failed: {error}");
                return Err(EventideError::step_failed(index, error));
            }
            Either::Right(_) => {
                debug!("cancelled during step {index}");
                return Err(EventideError::Cancelled { completed: index });
            }
        }
    }

    Ok(outputs)
}
