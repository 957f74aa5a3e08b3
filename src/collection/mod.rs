//! Operations over sequences and mappings.
//!
//! Every operation here is eager and borrows its input; results are fresh
//! `Vec`s. Sequences (`[T]`, `Vec<T>`, `[T; N]`) and mappings (`HashMap`,
//! `BTreeMap`) share one traversal primitive, [`each`], through the
//! [`Collection`] trait, so index order and key coverage are identical across
//! all traversal-based operations.
//!
//! # Overview
//!
//! - **Iteration**: [`each`]
//! - **Selection & transformation**: [`first`], [`first_n`], [`last`],
//!   [`last_n`], [`index_of`], [`filter`], [`reject`], [`uniq`],
//!   [`uniq_sorted`], [`uniq_by`], [`map`], [`values`], [`pluck`]
//! - **Aggregation**: [`reduce`], [`reduce_first`], [`contains`], [`every`],
//!   [`some`]
//! - **Advanced**: [`shuffle`], [`shuffle_with`], [`invoke`], [`sort_by`],
//!   [`sort_by_optional`], [`sort_by_property`], [`zip`], [`zip2`],
//!   [`flatten`], [`flatten_shallow`], [`intersection`], [`difference`]
//!
//! # Examples
//!
//! ```rust
//! use collectkit::collection::{filter, map, reduce, reject};
//!
//! let numbers = [1, 2, 3, 4];
//! assert_eq!(map(&numbers, |value, _, _| value * 2), vec![2, 4, 6, 8]);
//! assert_eq!(filter(&numbers, |value| value % 2 == 0), vec![2, 4]);
//! assert_eq!(reject(&numbers, |value| value % 2 == 0), vec![1, 3]);
//! assert_eq!(reduce(&numbers, |total, value| total + value, 0), 10);
//! ```
//!
//! # Laws
//!
//! - **Partition**: `filter(s, p)` and `reject(s, p)` together hold every
//!   element of `s` exactly once (for a predicate without side effects)
//! - **Idempotence**: `uniq(&uniq(s)) == uniq(s)`
//! - **Duality**: `some(s, p) == !every(s, |x| !p(x))`
//! - **Length**: `map(s, f).len() == s.len()`

mod advanced;
mod aggregate;
mod select;
mod traverse;
mod truthy;

pub use advanced::{
    Nested, difference, flatten, flatten_shallow, intersection, invoke, shuffle, shuffle_with,
    sort_by, sort_by_optional, sort_by_property, zip, zip2,
};
pub use aggregate::{contains, every, reduce, reduce_first, some};
pub use select::{
    filter, first, first_n, index_of, last, last_n, map, pluck, reject, uniq, uniq_by,
    uniq_sorted, values,
};
pub use traverse::{Collection, Property, each};
pub use truthy::Truthy;
