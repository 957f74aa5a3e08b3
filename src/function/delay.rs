//! Deferred invocation.

use std::time::Duration;

use super::runtime::{Scheduler, TimerHandle, TokioScheduler};

/// Calls `function(arguments)` once, no earlier than `wait` from now.
///
/// Returns immediately. The call's return value is discarded; the returned
/// [`TimerHandle`] can cancel the call before it runs. Inside a tokio
/// runtime the call is a task on that runtime, otherwise on the global one
/// (see [`runtime`](super::runtime)).
///
/// # Examples
///
/// ```rust
/// use collectkit::function::delay;
/// use std::sync::mpsc;
/// use std::time::Duration;
///
/// let (sender, receiver) = mpsc::channel();
/// let _timer = delay(
///     move |(left, right): (&str, &str)| sender.send(format!("{left}{right}")),
///     Duration::from_millis(10),
///     ("a", "b"),
/// );
///
/// assert_eq!(receiver.recv().unwrap(), "ab");
/// ```
pub fn delay<A, R, F>(function: F, wait: Duration, arguments: A) -> TimerHandle
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    delay_on(&TokioScheduler::new(), function, wait, arguments)
}

/// [`delay`] on an explicit [`Scheduler`].
pub fn delay_on<S, A, R, F>(scheduler: &S, function: F, wait: Duration, arguments: A) -> S::Handle
where
    S: Scheduler,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!(?wait, "delay: scheduling deferred call");
    scheduler.schedule(
        move || {
            drop(function(arguments));
        },
        wait,
    )
}
