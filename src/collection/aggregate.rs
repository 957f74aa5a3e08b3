//! Aggregation: folding a collection into one value and testing predicates
//! across all of its elements.

use super::traverse::{Collection, each};
use super::truthy::Truthy;
use crate::error::CollectionError;

/// Folds the collection into a single value, starting from `accumulator`.
///
/// `iterator(accumulator, item)` is called once per element, beginning with
/// the first, and its result becomes the accumulator for the next element.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::reduce;
///
/// let sum = reduce(&[1, 2, 3], |total, number| total + number, 0);
/// assert_eq!(sum, 6);
///
/// let joined = reduce(&["a", "b"], |mut text, piece| {
///     text.push_str(piece);
///     text
/// }, String::new());
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce<'a, C, A, F>(collection: &'a C, mut iterator: F, accumulator: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Item) -> A,
{
    let mut state = Some(accumulator);
    each(collection, |item, _, _| {
        state = state.take().map(|current| iterator(current, item));
    });
    match state {
        Some(result) => result,
        None => unreachable!("reduce: accumulator is restored after every step"),
    }
}

/// Folds the collection using its first element as the initial accumulator.
///
/// The first element is never passed to `iterator`; the fold starts with
/// `iterator(first, second)`. A single-element collection returns that
/// element without calling `iterator` at all.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyReduce`] if the collection is empty.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::reduce_first;
///
/// assert_eq!(reduce_first(&[1, 2, 3], |total, number| total + number), Ok(6));
///
/// // The iterator is never invoked for a single element.
/// assert_eq!(reduce_first(&[5], |total, number| total + number * number), Ok(5));
/// ```
pub fn reduce_first<'a, C, F>(collection: &'a C, mut iterator: F) -> Result<C::Item, CollectionError>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let mut state: Option<C::Item> = None;
    each(collection, |item, _, _| {
        state = Some(match state.take() {
            None => item.clone(),
            Some(current) => iterator(current, item),
        });
    });
    state.ok_or(CollectionError::EmptyReduce)
}

/// Returns `true` if any element (sequence) or value (mapping) equals
/// `target`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::contains;
/// use std::collections::HashMap;
///
/// assert!(contains(&[1, 2, 3], &3));
/// assert!(!contains(&[1, 2, 3], &4));
///
/// let colors = HashMap::from([("sky", "blue"), ("grass", "green")]);
/// assert!(contains(&colors, &"green"));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    let mut found = false;
    each(collection, |item, _, _| {
        found = found || item == target;
    });
    found
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// An empty collection passes vacuously. Pass
/// [`identity`](crate::function::identity) to test the elements themselves.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::every;
/// use collectkit::function::identity;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[1, 0, 2], identity));
///
/// let empty: [i32; 0] = [];
/// assert!(every(&empty, |_| false));
/// ```
pub fn every<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> R,
    R: Truthy,
{
    let mut passed = true;
    each(collection, |item, _, _| {
        if passed && !predicate(item).is_truthy() {
            passed = false;
        }
    });
    passed
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// Defined as the negation of [`every`] over the negated predicate, so an
/// empty collection gives `false`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::some;
/// use collectkit::function::identity;
///
/// assert!(some(&[1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&[0, 0], identity));
/// assert!(!some(&["", ""], identity));
/// ```
pub fn some<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> R,
    R: Truthy,
{
    !every(collection, |item| !predicate(item).is_truthy())
}
