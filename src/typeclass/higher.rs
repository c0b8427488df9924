//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for abstracting over type
//! constructors such as `Option<_>` or `Identity<_>` in Rust, which has no
//! native Higher-Kinded Types.
//!
//! # Background
//!
//! A type constructor `F<_>` is named by a *marker type* implementing
//! [`TypeConstructor`]. The marker never holds a value; it only maps every
//! type `A` to the applied type `F<A>` through the generic associated type
//! [`TypeConstructor::Applied`].
//!
//! Because the marker stands for the whole family `F<_>`, the family stays
//! the same when the argument changes: `<F as TypeConstructor>::Applied<A>`
//! and `<F as TypeConstructor>::Applied<B>` are always the same constructor.
//! This is what lets a van Laarhoven lens be written once for every mapping
//! context.
//!
//! # Example
//!
//! ```rust
//! use ixoptics::typeclass::{OptionF, TypeConstructor};
//!
//! fn nothing<F: TypeConstructor>() -> F::Applied<String>
//! where
//!     F::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = nothing::<OptionF>();
//! assert_eq!(none, None);
//! ```

use std::marker::PhantomData;

/// A type constructor, named by a marker type.
///
/// # Associated Types
///
/// - `Applied<A>`: The constructor applied to `A`.
///
/// # Laws
///
/// Implementations must be *parametric*: `Applied<A>` may not depend on
/// `A` except by containing values of it.
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    ///
    /// For [`OptionF`], `Applied<i32>` is `Option<i32>`.
    type Applied<A>;
}

/// Marker for the `Option<_>` type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionF;

/// Marker for the `Result<_, E>` type constructor.
///
/// The error type is fixed; only the success type varies.
pub struct ResultF<E>(PhantomData<fn() -> E>);

impl TypeConstructor for OptionF {
    type Applied<A> = Option<A>;
}

impl<E> TypeConstructor for ResultF<E> {
    type Applied<A> = Result<A, E>;
}

impl<E> std::fmt::Debug for ResultF<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultF")
    }
}
