//! The timer facility behind [`delay`](super::delay) and
//! [`throttle`](super::throttle).
//!
//! Deferred calls run as tokio tasks. When the caller is already inside a
//! tokio runtime, that runtime is used, so paused test clocks and the
//! caller's task context apply. Outside any runtime a lazily-built global
//! multi-thread runtime takes the work.
//!
//! # Scheduling Contract
//!
//! A [`Scheduler`] runs a callback once, no earlier than a given delay, and
//! returns a handle that can cancel it. [`TokioScheduler`] is the provided
//! implementation.
//!
//! # Examples
//!
//! ```rust
//! use collectkit::function::{Cancel, Scheduler, TokioScheduler};
//! use std::time::Duration;
//!
//! let scheduler = TokioScheduler::new();
//! let timer = scheduler.schedule(|| println!("later"), Duration::from_secs(60));
//! timer.cancel();
//! ```

use std::cell::RefCell;
use std::sync::LazyLock;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

// =============================================================================
// Global Runtime
// =============================================================================

/// Global tokio runtime initialized lazily on first access.
///
/// Multi-thread scheduler with one worker per CPU core and the timer driver
/// enabled. Never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("collectkit-timer")
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns a reference to the global runtime.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

thread_local! {
    /// Per-thread clone of the global runtime's handle.
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns the current runtime's handle, or the global runtime's handle when
/// called outside any runtime.
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current_handle) = Handle::try_current() {
        return current_handle;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}

// =============================================================================
// Scheduling
// =============================================================================

/// A handle to a scheduled callback.
pub trait Cancel {
    /// Prevents the callback from running if it has not started yet.
    fn cancel(&self);

    /// Returns `true` once the callback has run or been cancelled.
    fn is_finished(&self) -> bool;
}

/// Runs a callback once after a delay.
pub trait Scheduler {
    /// The handle returned for each scheduled callback.
    type Handle: Cancel;

    /// Schedules `callback` to run no earlier than `delay` from now.
    fn schedule<C>(&self, callback: C, delay: Duration) -> Self::Handle
    where
        C: FnOnce() + Send + 'static;
}

/// [`Scheduler`] backed by tokio timers.
///
/// Without an explicit handle the runtime is resolved at each
/// [`schedule`](Scheduler::schedule) call via [`handle`].
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    runtime: Option<Handle>,
}

impl TokioScheduler {
    /// Creates a scheduler that uses whichever runtime is current when a
    /// callback is scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self { runtime: None }
    }

    /// Creates a scheduler pinned to the runtime behind `runtime`.
    #[must_use]
    pub const fn with_handle(runtime: Handle) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TimerHandle;

    fn schedule<C>(&self, callback: C, delay: Duration) -> TimerHandle
    where
        C: FnOnce() + Send + 'static,
    {
        let runtime = self.runtime.clone().unwrap_or_else(handle);
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        TimerHandle { task }
    }
}

/// Handle to a callback scheduled by [`TokioScheduler`].
///
/// Dropping the handle does not cancel the callback.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl Cancel for TimerHandle {
    fn cancel(&self) {
        self.task.abort();
    }

    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn handle_works_from_outside_runtime() {
        let obtained_handle = handle();
        let result = obtained_handle.block_on(async { 42 });
        assert_eq!(result, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_works_from_inside_runtime() {
        let obtained_handle = handle();
        let result = obtained_handle.spawn(async { 42 }).await.unwrap();
        assert_eq!(result, 42);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn scheduled_callback_runs_after_delay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&counter);
        let timer = TokioScheduler::new().schedule(
            move || {
                observed.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(100),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn cancelled_callback_never_runs() {
        let counter = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&counter);
        let timer = TokioScheduler::with_handle(Handle::current()).schedule(
            move || {
                observed.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(100),
        );
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
