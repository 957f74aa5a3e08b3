//! Function decorators.
//!
//! Each decorator takes a function and returns a new one with different
//! invocation semantics. Every returned wrapper owns its own state; two
//! wrappers built from the same function never share a cache or a window.
//!
//! # Overview
//!
//! - [`identity`]: the default iterator
//! - [`once`] / [`Once`]: run at most once, then return the cached result
//! - [`memoize`] / [`Memoized`]: cache results per argument value
//! - [`delay`]: run once after a wait (feature `timer`)
//! - [`throttle`] / [`Throttled`]: at most one run per window (feature `timer`)
//!
//! Wrapped functions take one argument; use a tuple for several.
//!
//! # Examples
//!
//! ```rust
//! use collectkit::function::{memoize, once};
//!
//! let initialize = once(|(): ()| "ready");
//! assert_eq!(initialize(()), "ready");
//!
//! let distance = memoize(|(x, y): (i64, i64)| x.abs() + y.abs());
//! assert_eq!(distance((3, -4)), 7);
//! ```

mod memoize;
mod once;
mod utils;

#[cfg(feature = "timer")]
mod delay;
#[cfg(feature = "timer")]
pub mod runtime;
#[cfg(feature = "timer")]
mod throttle;

pub use memoize::{Memoized, memoize};
pub use once::{Once, OnceState, once};
pub use utils::identity;

#[cfg(feature = "timer")]
pub use delay::{delay, delay_on};
#[cfg(feature = "timer")]
pub use runtime::{Cancel, Scheduler, TimerHandle, TokioScheduler};
#[cfg(feature = "timer")]
pub use throttle::{ThrottleOutcome, Throttled, throttle};
