//! Type class traits for functional programming abstractions.
//!
//! This module provides the mapping contexts that van Laarhoven optics are
//! generic over:
//!
//! - [`Functor`]: Mapping over the value inside a context
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! A type constructor is named by a marker type implementing
//! [`TypeConstructor`], whose generic associated type `Applied<A>` is the
//! constructor applied to `A`.
//!
//! ## Foundation Types
//!
//! - [`Identity`] / [`IdentityF`]: The identity functor (writes)
//! - [`Const`] / [`ConstF`]: The constant functor (reads)
//! - [`OptionF`], [`ResultF`]: Short-circuiting contexts
//!
//! # Examples
//!
//! ```rust
//! use ixoptics::typeclass::{Const, ConstF, Functor, Identity, IdentityF};
//!
//! let written = IdentityF::fmap(Identity(2), |n: i32| n * 10);
//! assert_eq!(written.into_inner(), 20);
//!
//! let read = ConstF::<&str>::fmap(Const::<_, i32>::new("kept"), |n: i32| n * 10);
//! assert_eq!(read.get_const(), "kept");
//! ```

mod constant;
mod functor;
mod higher;
mod identity;

pub use constant::{Const, ConstF};
pub use functor::Functor;
pub use higher::{OptionF, ResultF, TypeConstructor};
pub use identity::{Identity, IdentityF};
