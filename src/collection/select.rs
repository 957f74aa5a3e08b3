//! Selection and transformation: picking, filtering, deduplicating and
//! mapping the elements of a collection.
//!
//! Every function here returns a fresh `Vec`; inputs are only borrowed.

use std::cmp::Ordering;

use super::traverse::{Collection, Property, each};
use super::truthy::Truthy;

/// Returns the first element of a sequence, or `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `min(count, len)` elements, in their original order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// assert_eq!(first_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element of a sequence, or `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `min(count, len)` elements, in their original order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len() - count.min(sequence.len())..].to_vec()
}

/// Returns the smallest index whose element equals `target`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    each(sequence, |item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });
    result
}

/// Returns the elements for which `predicate` is truthy, in order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |value| value % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<'a, T, P, R>(sequence: &'a [T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&'a T) -> R,
    R: Truthy,
{
    let mut passed = Vec::new();
    each(sequence, |item, _, _| {
        if predicate(item).is_truthy() {
            passed.push(item.clone());
        }
    });
    passed
}

/// Returns the elements that are not in `filter(sequence, predicate)`.
///
/// Exclusion is by value: once some element passes the predicate, every
/// element equal to it is rejected as well.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |value| value % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<'a, T, P, R>(sequence: &'a [T], predicate: P) -> Vec<T>
where
    T: Clone + PartialEq,
    P: FnMut(&'a T) -> R,
    R: Truthy,
{
    let excluded = filter(sequence, predicate);
    let mut kept = Vec::new();
    each(sequence, |item, _, _| {
        if !excluded.contains(item) {
            kept.push(item.clone());
        }
    });
    kept
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// This is the behaviour for input that is already sorted or whose order
/// should be kept.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    each(sequence, |item, _, _| {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    });
    unique
}

/// Sorts a copy ascending, then removes duplicates.
///
/// Use this when the input is not known to be sorted; the output is in
/// ascending order rather than input order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::uniq_sorted;
///
/// assert_eq!(uniq_sorted(&[3, 1, 2, 1, 3]), vec![1, 2, 3]);
/// ```
pub fn uniq_sorted<T: Clone + PartialOrd>(sequence: &[T]) -> Vec<T> {
    uniq(&sorted_ascending(sequence))
}

/// Sorts a copy ascending, then keeps one representative for each result of
/// `key`: the first element for which it returns `true` and the first for
/// which it returns `false`, in sorted order.
///
/// At most two elements come back.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::uniq_by;
///
/// let representatives = uniq_by(&[4, 3, 2, 1], |value| value % 2 == 0);
/// assert_eq!(representatives, vec![1, 2]);
/// ```
pub fn uniq_by<T, F>(sequence: &[T], mut key: F) -> Vec<T>
where
    T: Clone + PartialOrd,
    F: FnMut(&T) -> bool,
{
    let sorted = sorted_ascending(sequence);
    let mut seen_true = false;
    let mut seen_false = false;
    let mut representatives = Vec::with_capacity(2);
    each(&sorted, |item, _, _| {
        let seen = if key(item) {
            &mut seen_true
        } else {
            &mut seen_false
        };
        if !*seen {
            *seen = true;
            representatives.push(item.clone());
        }
    });
    representatives
}

/// Stable ascending sort of a copy.
pub(crate) fn sorted_ascending<T: Clone + PartialOrd>(sequence: &[T]) -> Vec<T> {
    let mut sorted = sequence.to_vec();
    sorted.sort_by(compare_ascending);
    sorted
}

/// Ascending order where values not comparable with themselves (NaN) sort
/// after everything else and equal to each other.
pub(crate) fn compare_ascending<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or_else(|| {
        let left_ordered = left.partial_cmp(left).is_some();
        let right_ordered = right.partial_cmp(right).is_some();
        right_ordered.cmp(&left_ordered)
    })
}

/// Applies `iterator(value, key_or_index, collection)` to every element and
/// collects the results in traversal order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value, _, _| value * 2), vec![2, 4, 6]);
/// assert_eq!(map(&['a', 'b'], |_, index, _| index), vec![0, 1]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C) -> U,
{
    let mut results = Vec::with_capacity(collection.size());
    each(collection, |value, key, collection| {
        results.push(iterator(value, key, collection));
    });
    results
}

/// [`map`] with the identity iterator: the collection's values as a `Vec`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::values;
/// use std::collections::BTreeMap;
///
/// let scores = BTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(values(&scores), vec![1, 2]);
/// ```
pub fn values<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
{
    map(collection, |value, _, _| value.clone())
}

/// Extracts `element[key]` from every element; `None` where it is missing.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "40")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some("40"), None]);
/// ```
pub fn pluck<C, Q>(collection: &C, key: &Q) -> Vec<Option<<C::Item as Property<Q>>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Property<Q>,
    <C::Item as Property<Q>>::Value: Clone,
    Q: ?Sized,
{
    map(collection, |element, _, _| element.property(key).cloned())
}
