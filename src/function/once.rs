//! Single-invocation functions.
//!
//! [`Once`] wraps a function so that it runs at most one time. The first
//! call runs it and caches the result; every later call returns a clone of
//! that result without running anything, whatever arguments it is given.
//!
//! # Examples
//!
//! ```rust
//! use collectkit::function::once;
//! use std::cell::Cell;
//!
//! let launches = Cell::new(0);
//! let launch = once(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch("moon"), "launched at moon");
//! assert_eq!(launch("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// Not called yet. Holds the wrapped function.
    Uncalled(F),
    /// The first call is in progress, or it panicked.
    Calling,
    /// The first call finished. Holds its result.
    Called(R),
}

/// A function that runs at most once.
///
/// Multiple arguments are passed as a tuple.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; it is meant for single-threaded use.
///
/// # Examples
///
/// ```rust
/// use collectkit::function::Once;
///
/// let add = Once::new(|(left, right): (i32, i32)| left + right);
/// assert!(!add.is_called());
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((10, 20)), 3);
/// assert!(add.is_called());
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

impl<F, R> Once<F, R> {
    /// Wraps `function`; it is not called until the first [`call`](Self::call).
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Uncalled(function)),
        }
    }

    /// Calls the wrapped function on the first invocation and returns the
    /// cached result on every later one.
    ///
    /// # Panics
    ///
    /// - If called again from inside the wrapped function's first run.
    /// - If the first run panicked; the wrapper is unusable afterwards.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        {
            let state = self.state.borrow();
            match &*state {
                OnceState::Called(result) => return result.clone(),
                OnceState::Calling => {
                    panic!("Once instance was re-entered or its first call panicked")
                }
                OnceState::Uncalled(_) => {}
            }
        }

        let OnceState::Uncalled(function) = self.state.replace(OnceState::Calling) else {
            unreachable!("Once state was checked to be uncalled");
        };
        tracing::trace!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }

    /// Returns `true` once the first call has finished.
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns the cached result, if the first call has finished.
    pub fn get(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Called(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => match &*state {
                OnceState::Uncalled(_) => formatter.write_str("Once(<uncalled>)"),
                OnceState::Calling => formatter.write_str("Once(<calling>)"),
                OnceState::Called(result) => {
                    formatter.debug_tuple("Once").field(result).finish()
                }
            },
            Err(_) => formatter.write_str("Once(<borrowed>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once; see [`Once`].
///
/// The returned closure owns its own cached result, so two wrappers made
/// from two calls to `once` never share state.
pub fn once<A, R, F>(function: F) -> impl Fn(A) -> R
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    let wrapper = Once::new(function);
    move |arguments| wrapper.call(arguments)
}
