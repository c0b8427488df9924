//! Index witnesses.
//!
//! An optic's index witness records, at the type level, how many indices it
//! reports and of which types. The witness decides which operations apply:
//! `iview`, `iover` and narrowing to the van Laarhoven form all require
//! exactly one index ([`HasSingleIndex`]).
//!
//! Composition concatenates witnesses through [`AppendIndices`]:
//!
//! ```text
//! NoIx      ++ X         = X
//! OneIx<I>  ++ NoIx      = OneIx<I>
//! OneIx<I>  ++ OneIx<J>  = TwoIx<I, J>
//! TwoIx<I,J> ++ NoIx     = TwoIx<I, J>
//! ```
//!
//! No other combination is provided. A third index must first be collapsed
//! with [`Optic::icompose`](super::Optic::icompose) or dropped with
//! [`Optic::noix`](super::Optic::noix).

use std::fmt;
use std::marker::PhantomData;

/// Runtime summary of an index witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexCount {
    /// The optic reports no index.
    Zero,
    /// The optic reports exactly one index.
    One,
    /// The optic reports a tuple of indices.
    Many,
}

impl fmt::Display for IndexCount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => formatter.write_str("no index"),
            Self::One => formatter.write_str("one index"),
            Self::Many => formatter.write_str("several indices"),
        }
    }
}

/// A type-level list of index types.
pub trait IndexList {
    /// How many indices the list holds.
    const COUNT: IndexCount;

    /// The value the indices are reported as.
    type Value;
}

/// No index. Reported as `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoIx {}

/// Exactly one index of type `I`.
pub struct OneIx<I>(PhantomData<fn() -> I>);

/// Two indices, reported as the pair `(I, J)`.
pub struct TwoIx<I, J>(PhantomData<fn() -> (I, J)>);

impl IndexList for NoIx {
    const COUNT: IndexCount = IndexCount::Zero;
    type Value = ();
}

impl<I> IndexList for OneIx<I> {
    const COUNT: IndexCount = IndexCount::One;
    type Value = I;
}

impl<I, J> IndexList for TwoIx<I, J> {
    const COUNT: IndexCount = IndexCount::Many;
    type Value = (I, J);
}

impl<I> fmt::Debug for OneIx<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OneIx")
    }
}

impl<I, J> fmt::Debug for TwoIx<I, J> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TwoIx")
    }
}

/// Witness of exactly one index, of type `I`.
///
/// Implemented only by [`OneIx<I>`].
pub trait HasSingleIndex<I>: IndexList<Value = I> {}

impl<I> HasSingleIndex<I> for OneIx<I> {}

/// Concatenation of index witnesses.
pub trait AppendIndices<Rhs: IndexList>: IndexList {
    /// The witness of the concatenated list.
    type Output: IndexList;

    /// Merges the reported index values.
    fn append(left: Self::Value, right: Rhs::Value) -> <Self::Output as IndexList>::Value;
}

impl<Rhs: IndexList> AppendIndices<Rhs> for NoIx {
    type Output = Rhs;

    #[inline]
    fn append((): (), right: Rhs::Value) -> Rhs::Value {
        right
    }
}

impl<I> AppendIndices<NoIx> for OneIx<I> {
    type Output = Self;

    #[inline]
    fn append(left: I, (): ()) -> I {
        left
    }
}

impl<I, J> AppendIndices<OneIx<J>> for OneIx<I> {
    type Output = TwoIx<I, J>;

    #[inline]
    fn append(left: I, right: J) -> (I, J) {
        (left, right)
    }
}

impl<I, J> AppendIndices<NoIx> for TwoIx<I, J> {
    type Output = Self;

    #[inline]
    fn append(left: (I, J), (): ()) -> (I, J) {
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count_of<Ix: IndexList>() -> IndexCount {
        Ix::COUNT
    }

    #[rstest]
    fn witnesses_report_their_count() {
        assert_eq!(count_of::<NoIx>(), IndexCount::Zero);
        assert_eq!(count_of::<OneIx<usize>>(), IndexCount::One);
        assert_eq!(count_of::<TwoIx<usize, char>>(), IndexCount::Many);
    }

    #[rstest]
    fn appending_pairs_single_indices() {
        let merged = <OneIx<usize> as AppendIndices<OneIx<char>>>::append(3, 'c');
        assert_eq!(merged, (3, 'c'));
    }

    #[rstest]
    fn no_index_is_neutral() {
        assert_eq!(<NoIx as AppendIndices<OneIx<u8>>>::append((), 9), 9);
        assert_eq!(<OneIx<u8> as AppendIndices<NoIx>>::append(9, ()), 9);
        assert_eq!(
            <TwoIx<u8, bool> as AppendIndices<NoIx>>::append((1, true), ()),
            (1, true)
        );
    }

    #[rstest]
    #[case(IndexCount::Zero, "no index")]
    #[case(IndexCount::One, "one index")]
    #[case(IndexCount::Many, "several indices")]
    fn index_count_display(#[case] count: IndexCount, #[case] expected: &str) {
        assert_eq!(count.to_string(), expected);
    }
}
