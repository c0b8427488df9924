//! Functor type class - mapping over the value inside a context.
//!
//! This module provides the [`Functor`] trait, implemented by the marker of
//! a type constructor (see [`TypeConstructor`]). A functor can apply a
//! function to the value it wraps while preserving the surrounding context.
//!
//! Functors are the mapping contexts a van Laarhoven lens is generic over:
//! the same lens runs in [`IdentityF`](super::IdentityF) to write, in
//! [`ConstF`](super::ConstF) to read, and in [`OptionF`] or [`ResultF`] to
//! perform fallible updates.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Strictness
//!
//! `fmap` must apply its function before returning. `Applied<B>` never
//! mentions the function type, so an implementation has nowhere to store it.
//!
//! # Examples
//!
//! ```rust
//! use ixoptics::typeclass::{Functor, OptionF};
//!
//! let transformed = OptionF::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let untouched = OptionF::fmap(None, |n: i32| n.to_string());
//! assert_eq!(untouched, None);
//! ```

use super::higher::{OptionF, ResultF, TypeConstructor};

/// A type class for contexts that can have a function mapped over their
/// contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// F::fmap(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the context.
    ///
    /// # Arguments
    ///
    /// * `fa` - The value in context
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// The context with the transformed value
    fn fmap<A, B, G>(fa: Self::Applied<A>, function: G) -> Self::Applied<B>
    where
        G: FnOnce(A) -> B;

    /// Replaces the value inside the context with a constant.
    ///
    /// This is equivalent to `fmap(fa, |_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixoptics::typeclass::{Functor, OptionF};
    ///
    /// assert_eq!(OptionF::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionF::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::Applied<A>, value: B) -> Self::Applied<B> {
        Self::fmap(fa, |_: A| value)
    }

    /// Discards the value inside the context, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixoptics::typeclass::{Functor, ResultF};
    ///
    /// assert_eq!(ResultF::<String>::void(Ok::<i32, String>(5)), Ok(()));
    /// ```
    #[inline]
    fn void<A>(fa: Self::Applied<A>) -> Self::Applied<()> {
        Self::replace(fa, ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionF {
    #[inline]
    fn fmap<A, B, G>(fa: Option<A>, function: G) -> Option<B>
    where
        G: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<E> Functor for ResultF<E> {
    #[inline]
    fn fmap<A, B, G>(fa: Result<A, E>, function: G) -> Result<B, E>
    where
        G: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}
