//! Multi-array and ordering operations: shuffling, method invocation,
//! sorting by key, zipping, flattening and set-like combinations.

use std::cmp::Ordering;

use rand::Rng;

use super::select::{compare_ascending, map, uniq};
use super::traverse::{Collection, Property, each};

/// Returns a uniformly random permutation of a copy of `sequence`.
///
/// Uses the thread-local RNG; see [`shuffle_with`] for a reproducible
/// variant.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Fisher–Yates shuffle of a copy of `sequence` driven by `rng`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let first = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.gen_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}

/// Calls `method(element, args)` on every element and collects the results
/// in traversal order.
///
/// A method path such as `str::to_uppercase` works as well as a closure.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::invoke;
///
/// let words = ["ab", "cd"];
/// assert_eq!(invoke(&words, |word, _: &()| word.to_uppercase(), &()), vec!["AB", "CD"]);
///
/// let repeated = invoke(&words, |word, times| word.repeat(*times), &2);
/// assert_eq!(repeated, vec!["abab", "cdcd"]);
/// ```
pub fn invoke<'a, C, A, U, F>(collection: &'a C, mut method: F, args: &A) -> Vec<U>
where
    C: Collection + ?Sized,
    A: ?Sized,
    F: FnMut(&'a C::Item, &A) -> U,
{
    map(collection, |item, _, _| method(item, args))
}

/// Returns the elements sorted ascending by `key(element)`.
///
/// The sort is stable: elements with equal keys keep their traversal order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::sort_by;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<'a, C, K, F>(collection: &'a C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&'a C::Item) -> K,
{
    sort_by_optional(collection, |item| Some(key(item)))
}

/// Like [`sort_by`], but `key` may report no key; those elements sort after
/// every element with a key.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::sort_by_optional;
///
/// let values = [Some(3), None, Some(1)];
/// assert_eq!(sort_by_optional(&values, |value| *value), vec![Some(1), Some(3), None]);
/// ```
pub fn sort_by_optional<'a, C, K, F>(collection: &'a C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&'a C::Item) -> Option<K>,
{
    let mut keyed = map(collection, |item, _, _| (key(item), item));
    keyed.sort_by(|(left, _), (right, _)| compare_missing_last(left.as_ref(), right.as_ref()));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Returns the elements sorted ascending by `element[key]`; elements missing
/// the property sort last.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::sort_by_property;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", 3)]),
///     HashMap::from([("age", 30)]),
///     HashMap::from([("age", 20)]),
/// ];
/// let sorted = sort_by_property(&people, "age");
/// assert_eq!(sorted[0]["age"], 20);
/// assert_eq!(sorted[1]["age"], 30);
/// assert!(!sorted[2].contains_key("age"));
/// ```
pub fn sort_by_property<C, Q>(collection: &C, key: &Q) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Property<Q>,
    <C::Item as Property<Q>>::Value: PartialOrd,
    Q: ?Sized,
{
    sort_by_optional(collection, |element| element.property(key))
}

fn compare_missing_last<K: PartialOrd>(left: Option<&K>, right: Option<&K>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => compare_ascending(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Groups the elements at each index across `sequences`.
///
/// The result is as long as the longest input; positions past the end of a
/// shorter input are `None`.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::zip;
///
/// let zipped = zip(&[vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(zipped, vec![
///     vec![Some(1), Some(4)],
///     vec![Some(2), Some(5)],
///     vec![Some(3), None],
/// ]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// [`zip`] for two sequences of different element types.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::zip2;
///
/// let zipped = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(zipped[3], (Some('d'), None));
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// A value inside an arbitrarily nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A non-sequence value.
    Leaf(T),
    /// A nested sequence.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Builds a nested sequence from its items.
    pub fn seq<I: IntoIterator<Item = Self>>(items: I) -> Self {
        Self::Seq(items.into_iter().collect())
    }

    /// Returns `true` for [`Nested::Seq`].
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }
}

/// Collects every leaf of `nested`, depth-first and left to right.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::{Nested, flatten};
/// use Nested::Leaf;
///
/// let nested = vec![
///     Leaf(1),
///     Nested::seq([Leaf(2), Leaf(3), Nested::seq([Leaf(4)])]),
///     Leaf(5),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn collect_leaves<T: Clone>(nested: &[Nested<T>], leaves: &mut Vec<T>) {
        each(nested, |item, _, _| match item {
            Nested::Leaf(value) => leaves.push(value.clone()),
            Nested::Seq(items) => collect_leaves(items, leaves),
        });
    }

    let mut leaves = Vec::new();
    collect_leaves(nested, &mut leaves);
    leaves
}

/// Removes exactly one level of nesting.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::{Nested, flatten_shallow};
/// use Nested::Leaf;
///
/// let nested = vec![Leaf(1), Nested::seq([Leaf(2), Nested::seq([Leaf(3)])])];
/// assert_eq!(
///     flatten_shallow(&nested),
///     vec![Leaf(1), Leaf(2), Nested::seq([Leaf(3)])],
/// );
/// ```
pub fn flatten_shallow<T: Clone>(nested: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(nested.len());
    each(nested, |item, _, _| match item {
        Nested::Leaf(_) => flattened.push(item.clone()),
        Nested::Seq(items) => flattened.extend(items.iter().cloned()),
    });
    flattened
}

/// Returns the values present in every sequence, without duplicates, in the
/// order they first appear in the first sequence.
///
/// With no sequences at all the result is empty.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::intersection;
///
/// assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4], vec![2, 3, 5]]), vec![2, 3]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let mut shared = uniq(head.as_ref());
    shared.retain(|item| rest.iter().all(|other| other.as_ref().contains(item)));
    shared
}

/// Returns the elements of `sequence` that appear in none of `others`, in
/// their original order.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[[2, 4]]), vec![1, 3]);
/// ```
pub fn difference<T, S>(sequence: &[T], others: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let mut remaining = Vec::new();
    each(sequence, |item, _, _| {
        if !others.iter().any(|other| other.as_ref().contains(item)) {
            remaining.push(item.clone());
        }
    });
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let original = vec![1, 2, 3, 4, 5, 6];
        let snapshot = original.clone();
        let _ = shuffle_with(&original, &mut StdRng::seed_from_u64(1));
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_shuffle_of_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffle_with::<i32, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle_with(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_compare_missing_last() {
        assert_eq!(compare_missing_last(Some(&1), None), Ordering::Less);
        assert_eq!(compare_missing_last::<i32>(None, None), Ordering::Equal);
        assert_eq!(compare_missing_last(None, Some(&0)), Ordering::Greater);
    }

    #[test]
    fn test_flatten_shallow_of_leaves_is_unchanged() {
        let leaves = vec![Nested::Leaf('a'), Nested::Leaf('b')];
        assert_eq!(flatten_shallow(&leaves), leaves);
    }

    #[test]
    fn test_intersection_of_nothing_is_empty() {
        let none: [Vec<i32>; 0] = [];
        assert!(intersection(&none).is_empty());
    }

    #[test]
    fn test_intersection_deduplicates() {
        assert_eq!(intersection(&[vec![2, 2, 1], vec![1, 2]]), vec![2, 1]);
    }
}
