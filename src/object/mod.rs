//! Merging key-value mappings.
//!
//! [`extend`] and [`defaults`] are the only operations in this crate that
//! mutate an argument: both write into `target` and hand it back so calls
//! can be chained.
//!
//! # Examples
//!
//! ```rust
//! use collectkit::object::{defaults, extend};
//! use std::collections::BTreeMap;
//!
//! let mut settings = BTreeMap::from([("a", 1)]);
//! extend(&mut settings, [&BTreeMap::from([("b", 2)]), &BTreeMap::from([("a", 3)])]);
//! assert_eq!(settings, BTreeMap::from([("a", 3), ("b", 2)]));
//!
//! let mut options = BTreeMap::from([("a", 1)]);
//! defaults(&mut options, [&BTreeMap::from([("a", 9), ("b", 2)])]);
//! assert_eq!(options, BTreeMap::from([("a", 1), ("b", 2)]));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A mutable key-value mapping.
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Stores `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Iterates over every entry.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Copies every entry of every source into `target`.
///
/// Sources are applied in order, so later sources overwrite earlier ones as
/// well as `target`'s own entries.
///
/// # Examples
///
/// ```rust
/// use collectkit::object::extend;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a", 1)]);
/// let result = extend(&mut target, [&HashMap::from([("b", 2)]), &HashMap::from([("a", 3)])]);
/// assert_eq!(result[&"a"], 3);
/// assert_eq!(result[&"b"], 2);
/// ```
pub fn extend<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        for (key, value) in source.entries() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fills in keys that `target` lacks, without overwriting anything.
///
/// A key is copied only if `target` did not have it before the call. When
/// several sources provide the same missing key, the first one wins.
///
/// # Examples
///
/// ```rust
/// use collectkit::object::defaults;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a", 1)]);
/// defaults(&mut target, [&HashMap::from([("a", 9), ("b", 2)]), &HashMap::from([("b", 7)])]);
/// assert_eq!(target, HashMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Key: Clone,
    M::Value: Clone,
    I: IntoIterator<Item = &'s M>,
{
    // Keys inserted here were absent originally, so later sources skip them
    // exactly as they skip the target's own keys.
    for source in sources {
        for (key, value) in source.entries() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
