//! # collectkit
//!
//! Generic collection operations and function decorators for Rust.
//!
//! ## Overview
//!
//! - **Collections**: iteration, selection, transformation, aggregation,
//!   deduplication and set-like operations over sequences and mappings
//! - **Objects**: merging mappings with `extend` and `defaults`
//! - **Functions**: `once`, `memoize`, `delay` and `throttle` decorators
//!
//! Everything is eager. Inputs are borrowed and results are fresh values;
//! the only operations that mutate an argument are [`object::extend`] and
//! [`object::defaults`].
//!
//! ## Feature Flags
//!
//! - `collection`: Sequence and mapping operations
//! - `object`: Mapping composition
//! - `function`: `once`, `memoize`, `identity`
//! - `timer`: `delay` and `throttle` on tokio timers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use collectkit::prelude::*;
//!
//! let people = vec![("moe", 40), ("larry", 50), ("curly", 60)];
//! let ages = map(&people, |(_, age), _, _| *age);
//! assert_eq!(reduce(&ages, |total, age| total + age, 0), 150);
//! assert!(every(&ages, |age| *age >= 40));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and traits.
///
/// # Usage
///
/// ```rust
/// use collectkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;
