//! The traversal primitive and the traits it dispatches through.
//!
//! A *collection* is either an ordered sequence (`[T]`, `Vec<T>`, `[T; N]`)
//! or a key-value mapping (`HashMap`, `BTreeMap`). [`Collection`] fixes one
//! traversal strategy for each shape, and [`each`] is the single entry point
//! that every other traversal-based operation in this crate goes through.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value that can be traversed element by element.
///
/// Sequences report each element with its `usize` index in ascending order.
/// Mappings report each value with a reference to its key; the order is
/// whatever the underlying map yields and is not part of the contract.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::Collection;
///
/// let mut seen = Vec::new();
/// vec!['a', 'b'].each(|value, index, _| seen.push((index, *value)));
/// assert_eq!(seen, vec![(0, 'a'), (1, 'b')]);
/// ```
pub trait Collection {
    /// The element (sequence) or value (mapping) type.
    type Item;

    /// The position handed to iterators: an index or a borrowed key.
    type Key<'a>
    where
        Self: 'a;

    /// Calls `iterator(value, key, self)` once for every element.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self);

    /// Returns the number of elements a traversal will visit.
    fn size(&self) -> usize;
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Calls `iterator(value, key_or_index, collection)` for every element.
///
/// For sequences the index runs from `0` to `len - 1` in ascending order. For
/// mappings every key is visited exactly once in an unspecified order. The
/// collection is only borrowed, so it comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::each;
/// use std::collections::HashMap;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
///
/// let ages = HashMap::from([("ada", 36), ("alan", 41)]);
/// let mut names = Vec::new();
/// each(&ages, |_, name, _| names.push(*name));
/// names.sort_unstable();
/// assert_eq!(names, vec!["ada", "alan"]);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.each(iterator);
}

/// Property lookup by key, the `element[key]` of a record-like value.
///
/// Implemented for mappings (any borrowed form of the key) and for sequences
/// (by index). Used by [`pluck`](super::pluck) and
/// [`sort_by_property`](super::sort_by_property).
pub trait Property<Q: ?Sized> {
    /// The type stored under a key.
    type Value;

    /// Returns the value stored under `key`, if any.
    fn property(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Property<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Property<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<P, Q> Property<Q> for &P
where
    P: Property<Q> + ?Sized,
    Q: ?Sized,
{
    type Value = P::Value;

    #[inline]
    fn property(&self, key: &Q) -> Option<&P::Value> {
        (**self).property(key)
    }
}

impl<T> Property<usize> for [T] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Property<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Property<usize> for [T; N] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}
