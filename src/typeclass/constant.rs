//! Const wrapper type - the constant functor.
//!
//! `Const<C, A>` holds a value of type `C` and only *pretends* to hold an
//! `A`. Mapping over it changes the phantom type and leaves the stored
//! value alone. Running a van Laarhoven lens in [`ConstF`] therefore reads:
//! whatever the focus function logs is carried out untouched while the
//! rebuild step is skipped.

use std::fmt;
use std::marker::PhantomData;

use super::{Functor, TypeConstructor};

/// The constant functor.
///
/// # Type Parameters
///
/// - `C`: The type of the carried value
/// - `A`: The phantom type the functor is "over"
///
/// # Examples
///
/// ```rust
/// use ixoptics::typeclass::{Const, ConstF, Functor};
///
/// let logged: Const<&str, i32> = Const::new("log");
/// let mapped: Const<&str, String> = ConstF::<&str>::fmap(logged, |n: i32| n.to_string());
/// assert_eq!(mapped.get_const(), "log");
/// ```
pub struct Const<C, A> {
    value: C,
    _phantom: PhantomData<fn() -> A>,
}

impl<C, A> Const<C, A> {
    /// Creates a new `Const` carrying `value`.
    #[inline]
    pub const fn new(value: C) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Consumes the `Const` and returns the carried value.
    #[inline]
    pub fn get_const(self) -> C {
        self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<C, B> {
        Const::new(self.value)
    }
}

impl<C: Clone, A> Clone for Const<C, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<C: Copy, A> Copy for Const<C, A> {}

impl<C: PartialEq, A> PartialEq for Const<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Eq, A> Eq for Const<C, A> {}

impl<C: fmt::Debug, A> fmt::Debug for Const<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Marker for the `Const<C, _>` type constructor.
pub struct ConstF<C>(PhantomData<fn() -> C>);

impl<C> fmt::Debug for ConstF<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ConstF")
    }
}

impl<C> TypeConstructor for ConstF<C> {
    type Applied<A> = Const<C, A>;
}

impl<C> Functor for ConstF<C> {
    #[inline]
    fn fmap<A, B, G>(fa: Const<C, A>, _function: G) -> Const<C, B>
    where
        G: FnOnce(A) -> B,
    {
        fa.retag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn const_fmap_never_calls_function() {
        let logged: Const<i32, String> = Const::new(7);
        let mapped: Const<i32, usize> =
            ConstF::<i32>::fmap(logged, |_: String| -> usize { unreachable!("Const never maps") });
        assert_eq!(mapped.get_const(), 7);
    }

    #[rstest]
    fn const_equality_ignores_phantom() {
        let left: Const<&str, i32> = Const::new("a");
        let right: Const<&str, i32> = Const::new("a");
        assert_eq!(left, right);
    }

    #[rstest]
    fn const_debug_shows_value() {
        let logged: Const<i32, ()> = Const::new(3);
        assert_eq!(format!("{logged:?}"), "Const(3)");
    }
}
