//! The tagged optic wrapper and the operations derived from it.
//!
//! [`Optic<K, Ix, R>`] pairs a van Laarhoven representation `R` with a
//! capability kind `K` and an index witness `Ix`. The tags are phantom: they
//! cost nothing at runtime and decide, at compile time, which operations are
//! available.
//!
//! | Operation | Requires |
//! |---|---|
//! | [`view`](Optic::view) | `K: Is<GetterKind>` |
//! | [`iview`](Optic::iview) | `K: Is<GetterKind>`, single index |
//! | [`to_list`](Optic::to_list) | `K: Is<FoldKind>` |
//! | [`ito_list`](Optic::ito_list) | `K: Is<FoldKind>`, index list matches `R::Index` |
//! | [`over`](Optic::over), [`set`](Optic::set) | `K: Is<SetterKind>` |
//! | [`iover`](Optic::iover) | `K: Is<SetterKind>`, single index |
//! | [`traverse`](Optic::traverse) | `K: Is<LensKind>` |
//! | [`itraverse`](Optic::itraverse) | `K: Is<LensKind>`, single index |
//!
//! # Examples
//!
//! ```
//! use ixoptics::optics::{ifst, GetterKind};
//!
//! let lens = ifst::<u8, char, u8>();
//! assert_eq!(lens.over((1, 'a'), |n| n + 1), (2, 'a'));
//!
//! let getter = lens.cast::<GetterKind>();
//! assert_eq!(getter.view((1, 'a')), 1);
//! ```
//!
//! Writing through a getter does not type-check:
//!
//! ```compile_fail
//! use ixoptics::optics::{ifst, GetterKind};
//!
//! let getter = ifst::<u8, char, u8>().cast::<GetterKind>();
//! let _ = getter.set((1, 'a'), 2);
//! ```
//!
//! Neither does composing a getter with a setter:
//!
//! ```compile_fail
//! use ixoptics::optics::{ifst, GetterKind, SetterKind};
//!
//! let getter = ifst::<(u8, char), bool, (u8, char)>().cast::<GetterKind>();
//! let setter = ifst::<u8, char, u8>().cast::<SetterKind>();
//! let _ = getter.compose(setter);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::compose::{Composed, IndexComposed, Reindexed, Unindexed};
use super::index::{AppendIndices, HasSingleIndex, IndexCount, IndexList, NoIx, OneIx, TwoIx};
use super::ix_lens::IxLensVl;
use super::kind::{FoldKind, GetterKind, Is, JoinKinds, KindTag, LensKind, OpticKind, SetterKind};
use crate::typeclass::{Const, ConstF, Functor, Identity, IdentityF};

/// An optic: a van Laarhoven representation tagged with a capability kind
/// and an index witness.
///
/// # Type Parameters
///
/// - `K`: The capability kind (see [`kind`](super::kind))
/// - `Ix`: The index witness (see [`index`](super::index))
/// - `R`: The representation, an [`IxLensVl`]
///
/// Optics are only built by this crate's constructors, so the tags always
/// describe what `R` can do.
pub struct Optic<K, Ix, R> {
    repr: R,
    _tags: PhantomData<fn() -> (K, Ix)>,
}

impl<K, Ix, R> Optic<K, Ix, R> {
    #[inline]
    pub(crate) const fn from_repr(repr: R) -> Self {
        Self {
            repr,
            _tags: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn into_repr(self) -> R {
        self.repr
    }

    /// Returns the representation.
    #[inline]
    pub const fn repr(&self) -> &R {
        &self.repr
    }
}

impl<K: OpticKind, Ix: IndexList, R> Optic<K, Ix, R> {
    /// Returns the capability kind as a runtime tag.
    #[inline]
    pub const fn kind(&self) -> KindTag {
        K::TAG
    }

    /// Returns how many indices the optic reports.
    #[inline]
    pub const fn index_count(&self) -> IndexCount {
        Ix::COUNT
    }

    /// Forgets capabilities, keeping only those of `K2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixoptics::optics::{isnd, KindTag, SetterKind};
    ///
    /// let setter = isnd::<u8, i32, i32>().cast::<SetterKind>();
    /// assert_eq!(setter.kind(), KindTag::Setter);
    /// assert_eq!(setter.set((0, 1), 2), (0, 2));
    /// ```
    #[inline]
    #[must_use]
    pub fn cast<K2: OpticKind>(self) -> Optic<K2, Ix, R>
    where
        K: Is<K2>,
    {
        log::trace!("casting {} optic to {}", K::TAG, K2::TAG);
        Optic::from_repr(self.repr)
    }

    /// Composes `self` (outer) with `other` (inner).
    ///
    /// The result has the joined kind of both optics and the concatenated
    /// index witness. Composition is associative.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixoptics::optics::{ifst, isnd, IndexCount};
    ///
    /// let nested = isnd::<&str, (i32, bool), (i32, bool)>().compose(ifst::<i32, bool, i32>());
    /// assert_eq!(nested.index_count(), IndexCount::Many);
    /// assert_eq!(nested.ito_list(("k", (1, true))), vec![(("k", true), 1)]);
    /// ```
    #[inline]
    #[must_use]
    pub fn compose<K2, Ix2, R2>(
        self,
        other: Optic<K2, Ix2, R2>,
    ) -> Optic<K::Output, Ix::Output, Composed<R, R2, Ix, Ix2>>
    where
        K: JoinKinds<K2>,
        K2: OpticKind,
        Ix: AppendIndices<Ix2>,
        Ix2: IndexList,
        Composed<R, R2, Ix, Ix2>: IxLensVl,
    {
        log::trace!(
            "composing {} optic ({}) with {} optic ({})",
            K::TAG,
            Ix::COUNT,
            K2::TAG,
            Ix2::COUNT
        );
        Optic::from_repr(Composed::new(self.repr, other.repr))
    }

    /// Forgets the index.
    #[inline]
    #[must_use]
    pub fn noix(self) -> Optic<K, NoIx, Unindexed<R>>
    where
        R: IxLensVl,
    {
        Optic::from_repr(Unindexed::new(self.repr))
    }
}

impl<K, Ix, R> Optic<K, Ix, R>
where
    K: OpticKind,
    R: IxLensVl,
    Ix: HasSingleIndex<R::Index>,
{
    /// Maps the single index through `reindex`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixoptics::optics::isnd;
    ///
    /// let by_length = isnd::<&str, u8, u8>().reindexed(|key: &str| key.len());
    /// assert_eq!(by_length.iview(("four", 1)), (4, 1));
    /// ```
    #[inline]
    #[must_use]
    pub fn reindexed<J, G>(self, reindex: G) -> Optic<K, OneIx<J>, Reindexed<R, G>>
    where
        G: Fn(R::Index) -> J,
    {
        Optic::from_repr(Reindexed::new(self.repr, reindex))
    }
}

impl<K, I, J, R> Optic<K, TwoIx<I, J>, R>
where
    K: OpticKind,
    R: IxLensVl<Index = (I, J)>,
{
    /// Collapses a pair of indices into one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixoptics::optics::{ifst, isnd};
    ///
    /// let nested = isnd::<u8, (i32, u8), (i32, u8)>()
    ///     .compose(ifst::<i32, u8, i32>())
    ///     .icompose(|outer, inner| outer + inner);
    /// assert_eq!(nested.iview((1, (10, 2))), (3, 10));
    /// ```
    ///
    /// Until the pair is collapsed, only [`ito_list`](Optic::ito_list) can
    /// read it:
    ///
    /// ```compile_fail
    /// use ixoptics::optics::{ifst, isnd};
    ///
    /// let nested = isnd::<u8, (i32, u8), (i32, u8)>().compose(ifst::<i32, u8, i32>());
    /// let _ = nested.iview((1, (10, 2)));
    /// ```
    #[inline]
    #[must_use]
    pub fn icompose<L, G>(self, merge: G) -> Optic<K, OneIx<L>, IndexComposed<R, G>>
    where
        G: Fn(I, J) -> L,
    {
        Optic::from_repr(IndexComposed::new(self.repr, merge))
    }
}

// =============================================================================
// Derived Operations
// =============================================================================

impl<K, Ix, R> Optic<K, Ix, R>
where
    K: OpticKind,
    R: IxLensVl,
{
    /// Reads the focus.
    #[inline]
    pub fn view(&self, source: R::Source) -> R::Focus
    where
        K: Is<GetterKind>,
    {
        self.repr
            .run_vl::<ConstF<R::Focus>, _>(
                |_index: R::Index, focus: R::Focus| Const::new(focus),
                source,
            )
            .get_const()
    }

    /// Reads the index together with the focus.
    #[inline]
    pub fn iview(&self, source: R::Source) -> (R::Index, R::Focus)
    where
        K: Is<GetterKind>,
        Ix: HasSingleIndex<R::Index>,
    {
        self.repr
            .run_vl::<ConstF<(R::Index, R::Focus)>, _>(
                |index: R::Index, focus: R::Focus| Const::new((index, focus)),
                source,
            )
            .get_const()
    }

    /// Collects every focus.
    #[inline]
    pub fn to_list(&self, source: R::Source) -> Vec<R::Focus>
    where
        K: Is<FoldKind>,
    {
        self.repr
            .run_vl::<ConstF<Vec<R::Focus>>, _>(
                |_index: R::Index, focus: R::Focus| Const::new(vec![focus]),
                source,
            )
            .get_const()
    }

    /// Collects every focus with its index.
    #[inline]
    pub fn ito_list(&self, source: R::Source) -> Vec<(R::Index, R::Focus)>
    where
        K: Is<FoldKind>,
        Ix: IndexList<Value = R::Index>,
    {
        self.repr
            .run_vl::<ConstF<Vec<(R::Index, R::Focus)>>, _>(
                |index: R::Index, focus: R::Focus| Const::new(vec![(index, focus)]),
                source,
            )
            .get_const()
    }

    /// Rebuilds the subject with the focus mapped through `function`.
    #[inline]
    pub fn over<G>(&self, source: R::Source, function: G) -> R::Target
    where
        K: Is<SetterKind>,
        G: FnOnce(R::Focus) -> R::Replacement,
    {
        self.repr
            .run_vl::<IdentityF, _>(
                |_index: R::Index, focus: R::Focus| Identity(function(focus)),
                source,
            )
            .into_inner()
    }

    /// Rebuilds the subject with the focus mapped through `function`, which
    /// also receives the index.
    #[inline]
    pub fn iover<G>(&self, source: R::Source, function: G) -> R::Target
    where
        K: Is<SetterKind>,
        Ix: HasSingleIndex<R::Index>,
        G: FnOnce(R::Index, R::Focus) -> R::Replacement,
    {
        self.repr
            .run_vl::<IdentityF, _>(
                |index: R::Index, focus: R::Focus| Identity(function(index, focus)),
                source,
            )
            .into_inner()
    }

    /// Rebuilds the subject with the focus replaced by `value`.
    #[inline]
    pub fn set(&self, source: R::Source, value: R::Replacement) -> R::Target
    where
        K: Is<SetterKind>,
    {
        self.over(source, move |_focus: R::Focus| value)
    }

    /// Runs an effectful update of the focus in the context `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixoptics::optics::ifst;
    /// use ixoptics::typeclass::ResultF;
    ///
    /// let lens = ifst::<&str, u8, i64>();
    /// let parsed =
    ///     lens.traverse::<ResultF<std::num::ParseIntError>, _>(("42", 0), |text| text.parse());
    /// assert_eq!(parsed, Ok((42, 0)));
    /// ```
    #[inline]
    pub fn traverse<F, G>(&self, source: R::Source, function: G) -> F::Applied<R::Target>
    where
        K: Is<LensKind>,
        F: Functor,
        G: FnOnce(R::Focus) -> F::Applied<R::Replacement>,
    {
        self.repr
            .run_vl::<F, _>(|_index: R::Index, focus: R::Focus| function(focus), source)
    }

    /// Runs an effectful update of the focus in the context `F`, passing
    /// the index.
    #[inline]
    pub fn itraverse<F, G>(&self, source: R::Source, function: G) -> F::Applied<R::Target>
    where
        K: Is<LensKind>,
        Ix: HasSingleIndex<R::Index>,
        F: Functor,
        G: FnOnce(R::Index, R::Focus) -> F::Applied<R::Replacement>,
    {
        self.repr.run_vl::<F, G>(function, source)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, Ix, R: Clone> Clone for Optic<K, Ix, R> {
    fn clone(&self) -> Self {
        Self::from_repr(self.repr.clone())
    }
}

impl<K, Ix, R: Copy> Copy for Optic<K, Ix, R> {}

impl<K: OpticKind, Ix: IndexList, R: fmt::Debug> fmt::Debug for Optic<K, Ix, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Optic")
            .field("kind", &K::TAG)
            .field("indices", &Ix::COUNT)
            .field("repr", &self.repr)
            .finish()
    }
}
