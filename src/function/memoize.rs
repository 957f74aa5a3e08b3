//! Argument-keyed result caching.
//!
//! [`Memoized`] remembers the result of every distinct argument value it has
//! been called with. Arguments are compared structurally through `Hash` and
//! `Eq`, so several arguments are passed as a tuple and two calls with equal
//! tuples share one cache entry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A function with a private cache of its results, keyed by argument.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the cache lives in a `RefCell`.
///
/// # Examples
///
/// ```rust
/// use collectkit::function::Memoized;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = Memoized::new(|value: u64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(calls.get(), 1);
///
/// assert_eq!(square.call(5), 25);
/// assert_eq!(calls.get(), 2);
/// assert_eq!(square.len(), 2);
/// ```
pub struct Memoized<A, R, F> {
    function: F,
    cache: RefCell<HashMap<A, R>>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `arguments`, computing and storing it on
    /// the first call with that value.
    pub fn call(&self, arguments: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&arguments) {
            tracing::trace!(entries = self.cache.borrow().len(), "memoize: cache hit");
            return cached.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(arguments.clone());
        self.cache.borrow_mut().insert(arguments, result.clone());
        result
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Returns the number of cached argument values.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Forgets every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache.try_borrow().map(|cache| cache.len()).ok())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with a private argument-keyed cache; see [`Memoized`].
///
/// Each call to `memoize` creates an independent cache.
///
/// # Examples
///
/// ```rust
/// use collectkit::function::memoize;
///
/// let add = memoize(|(left, right): (i32, i32)| left + right);
/// assert_eq!(add((1, 2)), 3);
/// assert_eq!(add((1, 2)), 3);
/// ```
pub fn memoize<A, R, F>(function: F) -> impl Fn(A) -> R
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    let memoized = Memoized::new(function);
    move |arguments| memoized.call(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    static_assertions::assert_not_impl_any!(Memoized<i32, i32, fn(i32) -> i32>: Sync);

    #[test]
    fn test_clear_forces_recomputation() {
        let calls = Cell::new(0);
        let double = Memoized::new(|value: i32| {
            calls.set(calls.get() + 1);
            value * 2
        });
        double.call(1);
        double.clear();
        assert!(double.is_empty());
        double.call(1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_none_results_are_cached() {
        let calls = Cell::new(0);
        let lookup = Memoized::new(|_: &str| {
            calls.set(calls.get() + 1);
            None::<i32>
        });
        assert_eq!(lookup.call("missing"), None);
        assert_eq!(lookup.call("missing"), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_debug_reports_cache_size() {
        let identity = Memoized::new(|value: u8| value);
        identity.call(3);
        assert_eq!(format!("{identity:?}"), "Memoized { cached: Some(1), .. }");
    }
}
