//! Truthiness of predicate results.
//!
//! Predicates in this crate may return any [`Truthy`] value rather than only
//! `bool`, which lets [`identity`](crate::function::identity) serve as the
//! default predicate: `every(&[1, 0, 2], identity)` tests the elements
//! themselves.

/// A value that can be read as true or false.
///
/// - `bool` is itself.
/// - Integers are truthy unless zero.
/// - Floats are truthy unless zero or NaN.
/// - `str`, `String`, and `char` are truthy unless empty (`'\0'` for `char`).
/// - `Option<T>` is falsy when `None`, otherwise the inner value decides.
/// - `()` is always falsy.
/// - References delegate to the referenced value.
///
/// # Examples
///
/// ```rust
/// use collectkit::collection::Truthy;
///
/// assert!(1.is_truthy());
/// assert!(!0.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(!Some(0).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
