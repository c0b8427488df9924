//! Either type - a value held in one of two branches.
//!
//! This module provides [`Either<L, R>`], a value that is either a `Left(L)`
//! or a `Right(R)`, and [`Side`], the tag naming a branch without its
//! payload.
//!
//! When both branches carry the same type, `Either<A, A>` is "an `A`
//! together with the branch it came from". The [`chosen`](crate::optics::chosen)
//! lens focuses on that `A` and reports the branch as its index.
//!
//! # Examples
//!
//! ```rust
//! use ixoptics::control::{Either, Side};
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.side(), Side::Right);
//!
//! let same: Either<i32, i32> = Either::from_side(Side::Left, 7);
//! assert_eq!(same.into_inner(), 7);
//! ```

use std::fmt;

/// The branch of an [`Either`], without its payload.
///
/// # Examples
///
/// ```rust
/// use ixoptics::control::Side;
///
/// assert!(Side::Left < Side::Right);
/// assert_eq!(Side::Right.to_string(), "right");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The `Left` branch.
    Left,
    /// The `Right` branch.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("left"),
            Self::Right => formatter.write_str("right"),
        }
    }
}

/// A value that can be one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use ixoptics::control::{Either, Side};
///
/// let tagged: Either<u8, u8> = Either::Left(3);
/// assert_eq!(tagged.into_tagged(), (Side::Left, 3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns the branch this value is in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixoptics::control::{Either, Side};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.side(), Side::Left);
    /// ```
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }
}

// =============================================================================
// Homogeneous Either
// =============================================================================

impl<A> Either<A, A> {
    /// Places `value` in the branch named by `side`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixoptics::control::{Either, Side};
    ///
    /// assert_eq!(Either::from_side(Side::Right, 1), Either::<i32, i32>::Right(1));
    /// ```
    #[inline]
    pub const fn from_side(side: Side, value: A) -> Self {
        match side {
            Side::Left => Self::Left(value),
            Side::Right => Self::Right(value),
        }
    }

    /// Returns the value regardless of branch.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }

    /// Splits into the branch tag and the value.
    ///
    /// Inverse of [`Either::from_side`].
    #[inline]
    pub fn into_tagged(self) -> (Side, A) {
        match self {
            Self::Left(value) => (Side::Left, value),
            Self::Right(value) => (Side::Right, value),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert_eq!(value.side(), Side::Left);
    }

    #[rstest]
    #[case(Side::Left)]
    #[case(Side::Right)]
    fn test_from_side_round_trip(#[case] side: Side) {
        let value = Either::from_side(side, "payload");
        assert_eq!(value.side(), side);
        assert_eq!(value.into_tagged(), (side, "payload"));
    }

    #[rstest]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
