//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, which is the simplest possible
//! wrapper around a value, and its type-constructor marker [`IdentityF`].
//! Running a van Laarhoven lens in `IdentityF` performs a pure write: the
//! mapping context adds nothing, so what comes back is the rebuilt subject.

use super::{Functor, TypeConstructor};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use ixoptics::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixoptics::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Marker for the [`Identity`] type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityF;

impl TypeConstructor for IdentityF {
    type Applied<A> = Identity<A>;
}

impl Functor for IdentityF {
    #[inline]
    fn fmap<A, B, G>(fa: Identity<A>, function: G) -> Identity<B>
    where
        G: FnOnce(A) -> B,
    {
        Identity(function(fa.0))
    }
}
