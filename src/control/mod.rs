//! Control structures for functional programming.
//!
//! This module provides the sum types the standard optics are built on:
//!
//! - [`Either`]: A value in one of two branches
//! - [`Side`]: The name of a branch, without its payload
//! - [`Void`]: The type with no values
//!
//! # Examples
//!
//! ```rust
//! use ixoptics::control::{Either, Side, Void};
//!
//! let tagged: Either<&str, &str> = Either::Right("x");
//! assert_eq!(tagged.into_tagged(), (Side::Right, "x"));
//!
//! let nothing: Option<Void> = None;
//! assert_eq!(nothing.map(Void::absurd::<i32>), None);
//! ```

mod either;
mod void;

pub use either::{Either, Side};
pub use void::Void;
