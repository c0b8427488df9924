//! The uninhabited type.
//!
//! [`Void`] has no values. A function taking a `Void` can never be called,
//! so its body may promise any result type: [`Void::absurd`] is that
//! promise, written as a `match` with no arms.
//!
//! `Void` also serves as the error type of computations that cannot fail:
//! `Result<T, Void>` is always `Ok`.

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// A type with no values.
///
/// # Examples
///
/// Code that receives a `Void` is unreachable, and the compiler knows it:
///
/// ```rust
/// use ixoptics::control::Void;
///
/// fn never_called(void: Void) -> String {
///     void.absurd()
/// }
///
/// let cannot_fail: Result<i32, Void> = Ok(3);
/// let Ok(value) = cannot_fail;
/// assert_eq!(value, 3);
/// ```
///
/// There is no way to build one:
///
/// ```compile_fail
/// use ixoptics::control::Void;
///
/// let void = Void;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Void {}

impl Void {
    /// Eliminates an impossible value into any type.
    #[inline]
    pub const fn absurd<A>(self) -> A {
        match self {}
    }
}

impl From<Infallible> for Void {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl fmt::Display for Void {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl Error for Void {}
