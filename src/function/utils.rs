//! The identity function, the default iterator of this crate.

/// Returns the value unchanged.
///
/// Wherever an operation expects an iterator or predicate and the caller has
/// none in mind, `identity` stands in: `every(&values, identity)` asks whether
/// every element is itself truthy.
///
/// # Examples
///
/// ```
/// use collectkit::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use as a default predicate
///
/// ```
/// use collectkit::collection::{every, some};
/// use collectkit::function::identity;
///
/// assert!(every(&[true, true], identity));
/// assert!(some(&[0, 0, 7], identity));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_identity_preserves_reference() {
        let owned = String::from("owned string");
        let borrowed = identity(&owned);
        assert!(std::ptr::eq(borrowed, &owned));
    }
}
