//! Error types for collection operations.
//!
//! Almost every operation in this crate is total: absence is reported as
//! `Option::None` and optional arguments have defaults. The cases collected
//! here are the ones with no well-defined result at all.

use thiserror::Error;

/// Errors returned by collection operations.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::reduce_first;
/// use collectkit::error::CollectionError;
///
/// let empty: Vec<i32> = Vec::new();
/// let result = reduce_first(&empty, |total, value| total + value);
/// assert_eq!(result, Err(CollectionError::EmptyReduce));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A reduction without an initial accumulator was asked to run over an
    /// empty collection, so there is no element to seed it with.
    #[error("reduce of empty collection with no initial accumulator")]
    EmptyReduce,
}
