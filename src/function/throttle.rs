//! Rate-limited invocation.
//!
//! A [`Throttled`] function runs at most once per window of `wait`:
//!
//! - A call made while no window is open runs immediately (leading edge) and
//!   opens a window of `wait`.
//! - Calls made while a window is open do not run. The most recent one's
//!   arguments are kept and run once when the window closes (trailing edge);
//!   earlier arguments from the same window are dropped.
//! - The trailing run opens a new window of its own.
//!
//! ```text
//! wait = 100ms
//! calls:  a@0   b@10   c@20            d@150
//! runs:   a@0                 c@100            d@200
//! ```
//!
//! `a` opens the window 0..100. `b` and `c` land inside it and `c` replaces
//! `b`, so only `c` runs, at 100, opening the window 100..200. `d` lands
//! inside that one and runs at 200.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::runtime::{Cancel, Scheduler, TokioScheduler};

/// What happened to a call made through [`Throttled::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrottleOutcome {
    /// The function ran during this call.
    Invoked,
    /// The call fell inside an open window; its arguments will run when the
    /// window closes unless a later call replaces them.
    Deferred,
}

struct ThrottleState<A, H> {
    window_start: Option<Instant>,
    pending: Option<A>,
    timer: Option<H>,
}

/// A function limited to one run per window of `wait`.
///
/// Deferred runs go through a [`Scheduler`], by default [`TokioScheduler`],
/// so the function and its arguments must be `Send + 'static`. Dropping the
/// wrapper cancels any deferred run.
///
/// # Examples
///
/// ```rust
/// use collectkit::function::{ThrottleOutcome, throttle};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let save = throttle(|document: String| println!("saving {document}"), Duration::from_secs(1));
///
/// assert_eq!(save.call("draft 1".into()), ThrottleOutcome::Invoked);
/// assert_eq!(save.call("draft 2".into()), ThrottleOutcome::Deferred);
/// assert_eq!(save.call("draft 3".into()), ThrottleOutcome::Deferred);
/// // "draft 3" is saved when the window closes; "draft 2" never is.
/// # tokio::time::sleep(Duration::from_secs(2)).await;
/// # }
/// ```
pub struct Throttled<A, F, S: Scheduler = TokioScheduler> {
    function: Arc<F>,
    wait: Duration,
    state: Arc<Mutex<ThrottleState<A, S::Handle>>>,
    scheduler: S,
}

impl<A, R, F> Throttled<A, F>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Wraps `function` with a window of `wait`.
    pub fn new(function: F, wait: Duration) -> Self {
        Self::with_scheduler(function, wait, TokioScheduler::new())
    }
}

impl<A, R, F, S> Throttled<A, F, S>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    S: Scheduler,
    S::Handle: Send + 'static,
{
    /// Wraps `function`, running deferred calls through `scheduler`.
    pub fn with_scheduler(function: F, wait: Duration, scheduler: S) -> Self {
        Self {
            function: Arc::new(function),
            wait,
            state: Arc::new(Mutex::new(ThrottleState {
                window_start: None,
                pending: None,
                timer: None,
            })),
            scheduler,
        }
    }

    /// Runs the function now if no window is open, otherwise defers it to
    /// the end of the current window with these arguments.
    pub fn call(&self, arguments: A) -> ThrottleOutcome {
        let now = Instant::now();
        let mut state = self.state.lock();

        let window_closed = state.timer.is_none()
            && state
                .window_start
                .is_none_or(|start| now.duration_since(start) >= self.wait);
        if window_closed {
            state.window_start = Some(now);
            drop(state);
            drop((self.function)(arguments));
            return ThrottleOutcome::Invoked;
        }

        if state.pending.replace(arguments).is_some() {
            tracing::trace!("throttle: replaced deferred arguments");
        }
        if state.timer.is_none() {
            let elapsed = state
                .window_start
                .map_or(self.wait, |start| now.duration_since(start));
            let remaining = self.wait.saturating_sub(elapsed);
            tracing::debug!(?remaining, "throttle: deferring call to window end");
            state.timer = Some(self.schedule_trailing(remaining));
        }
        ThrottleOutcome::Deferred
    }

    fn schedule_trailing(&self, remaining: Duration) -> S::Handle {
        let function = Arc::clone(&self.function);
        let shared = Arc::clone(&self.state);
        self.scheduler.schedule(
            move || {
                let arguments = {
                    let mut state = shared.lock();
                    state.timer = None;
                    let arguments = state.pending.take();
                    if arguments.is_some() {
                        state.window_start = Some(Instant::now());
                    }
                    arguments
                };
                if let Some(arguments) = arguments {
                    tracing::debug!("throttle: running deferred call");
                    drop(function(arguments));
                }
            },
            remaining,
        )
    }
}

impl<A, F, S: Scheduler> Throttled<A, F, S> {
    /// Drops any deferred call. The current window stays open.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        state.pending = None;
        if let Some(timer) = state.timer.take() {
            tracing::debug!("throttle: cancelling deferred call");
            timer.cancel();
        }
    }

    /// Returns `true` if a call is waiting for the window to close.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Returns the window length.
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A, F, S: Scheduler> Drop for Throttled<A, F, S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<A, F, S: Scheduler> std::fmt::Debug for Throttled<A, F, S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Throttled")
            .field("wait", &self.wait)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so it runs at most once per window of `wait`; see
/// [`Throttled`].
pub fn throttle<A, R, F>(function: F, wait: Duration) -> Throttled<A, F>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
{
    Throttled::new(function, wait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    type Queued = Vec<(Duration, Box<dyn FnOnce() + Send>, Arc<AtomicBool>)>;

    /// Queues callbacks until the test runs them by hand.
    #[derive(Default)]
    struct ManualScheduler {
        queue: Arc<StdMutex<Queued>>,
    }

    struct ManualHandle {
        cancelled: Arc<AtomicBool>,
    }

    impl Cancel for ManualHandle {
        fn cancel(&self) {
            self.cancelled.store(true, Ordering::SeqCst);
        }

        fn is_finished(&self) -> bool {
            self.cancelled.load(Ordering::SeqCst)
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule<C>(&self, callback: C, delay: Duration) -> ManualHandle
        where
            C: FnOnce() + Send + 'static,
        {
            let cancelled = Arc::new(AtomicBool::new(false));
            self.queue
                .lock()
                .unwrap()
                .push((delay, Box::new(callback), Arc::clone(&cancelled)));
            ManualHandle { cancelled }
        }
    }

    static_assertions::assert_impl_all!(Throttled<i32, fn(i32)>: Send, Sync);

    fn recorder() -> (Arc<StdMutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let calls = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |value| sink.lock().unwrap().push(value))
    }

    #[rstest]
    fn test_custom_scheduler_receives_trailing_call() {
        let (calls, record) = recorder();
        let scheduler = ManualScheduler::default();
        let queue = Arc::clone(&scheduler.queue);
        let throttled = Throttled::with_scheduler(record, Duration::from_secs(60), scheduler);

        assert_eq!(throttled.call(1), ThrottleOutcome::Invoked);
        assert_eq!(throttled.call(2), ThrottleOutcome::Deferred);
        assert_eq!(throttled.call(3), ThrottleOutcome::Deferred);

        let (delay, callback, cancelled) = {
            let mut queued = queue.lock().unwrap();
            assert_eq!(queued.len(), 1);
            queued.remove(0)
        };
        assert!(delay <= Duration::from_secs(60));
        assert!(!cancelled.load(Ordering::SeqCst));

        callback();
        assert_eq!(*calls.lock().unwrap(), vec![1, 3]);
        assert!(!throttled.is_pending());
    }

    #[rstest]
    fn test_dropping_wrapper_cancels_custom_handle() {
        let (_calls, record) = recorder();
        let scheduler = ManualScheduler::default();
        let queue = Arc::clone(&scheduler.queue);
        let throttled = Throttled::with_scheduler(record, Duration::from_secs(60), scheduler);
        throttled.call(1);
        throttled.call(2);
        drop(throttled);

        let queued = queue.lock().unwrap();
        assert!(queued[0].2.load(Ordering::SeqCst));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_window_start_is_measured_from_leading_call() {
        let (calls, record) = recorder();
        let throttled = throttle(record, Duration::from_millis(100));

        throttled.call(1);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(throttled.call(2), ThrottleOutcome::Deferred);

        // Fires at 100ms, 40ms after the deferral.
        tokio::time::sleep(Duration::from_millis(41)).await;
        assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_dropping_wrapper_cancels_deferred_call() {
        let (calls, record) = recorder();
        let throttled = throttle(record, Duration::from_millis(100));
        throttled.call(1);
        throttled.call(2);
        drop(throttled);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*calls.lock().unwrap(), vec![1]);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn test_is_pending_tracks_deferred_arguments() {
        let (_calls, record) = recorder();
        let throttled = throttle(record, Duration::from_millis(100));
        throttled.call(1);
        assert!(!throttled.is_pending());
        throttled.call(2);
        assert!(throttled.is_pending());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!throttled.is_pending());
    }
}
