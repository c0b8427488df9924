//! Representations produced by composing and re-indexing optics.
//!
//! These are the `R` of the [`Optic`](super::Optic)s returned by
//! [`compose`](super::Optic::compose), [`reindexed`](super::Optic::reindexed),
//! [`icompose`](super::Optic::icompose) and [`noix`](super::Optic::noix).
//! Each runs the wrapped function(s) and only rewrites the index handed to
//! the focus function.

use std::fmt;
use std::marker::PhantomData;

use super::index::{AppendIndices, IndexList};
use super::ix_lens::IxLensVl;
use crate::typeclass::Functor;

/// Two van Laarhoven functions run one inside the other.
///
/// The indices of both are merged by the witnesses `Ix1` and `Ix2`.
pub struct Composed<R1, R2, Ix1, Ix2> {
    outer: R1,
    inner: R2,
    _indices: PhantomData<fn() -> (Ix1, Ix2)>,
}

impl<R1, R2, Ix1, Ix2> Composed<R1, R2, Ix1, Ix2> {
    pub(crate) const fn new(outer: R1, inner: R2) -> Self {
        Self {
            outer,
            inner,
            _indices: PhantomData,
        }
    }
}

impl<R1, R2, Ix1, Ix2> IxLensVl for Composed<R1, R2, Ix1, Ix2>
where
    R1: IxLensVl<Index = Ix1::Value, Focus = R2::Source, Replacement = R2::Target>,
    R2: IxLensVl<Index = Ix2::Value>,
    Ix1: AppendIndices<Ix2>,
    Ix2: IndexList,
{
    type Index = <Ix1::Output as IndexList>::Value;
    type Source = R1::Source;
    type Target = R1::Target;
    type Focus = R2::Focus;
    type Replacement = R2::Replacement;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        G: FnOnce(Self::Index, Self::Focus) -> F::Applied<Self::Replacement>,
    {
        let inner = &self.inner;
        self.outer.run_vl::<F, _>(
            move |outer_index: Ix1::Value, middle: R2::Source| {
                inner.run_vl::<F, _>(
                    move |inner_index: Ix2::Value, focus: R2::Focus| {
                        function(Ix1::append(outer_index, inner_index), focus)
                    },
                    middle,
                )
            },
            source,
        )
    }
}

impl<R1: Clone, R2: Clone, Ix1, Ix2> Clone for Composed<R1, R2, Ix1, Ix2> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<R1: Copy, R2: Copy, Ix1, Ix2> Copy for Composed<R1, R2, Ix1, Ix2> {}

impl<R1: fmt::Debug, R2: fmt::Debug, Ix1, Ix2> fmt::Debug for Composed<R1, R2, Ix1, Ix2> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// A function whose single index is mapped through `reindex`.
#[derive(Clone, Copy)]
pub struct Reindexed<R, G> {
    repr: R,
    reindex: G,
}

impl<R, G> Reindexed<R, G> {
    pub(crate) const fn new(repr: R, reindex: G) -> Self {
        Self { repr, reindex }
    }
}

impl<R, G, J> IxLensVl for Reindexed<R, G>
where
    R: IxLensVl,
    G: Fn(R::Index) -> J,
{
    type Index = J;
    type Source = R::Source;
    type Target = R::Target;
    type Focus = R::Focus;
    type Replacement = R::Replacement;

    #[inline]
    fn run_vl<F, H>(&self, function: H, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        H: FnOnce(J, R::Focus) -> F::Applied<R::Replacement>,
    {
        let reindex = &self.reindex;
        self.repr.run_vl::<F, _>(
            move |index: R::Index, focus: R::Focus| function(reindex(index), focus),
            source,
        )
    }
}

impl<R: fmt::Debug, G> fmt::Debug for Reindexed<R, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Reindexed")
            .field("repr", &self.repr)
            .finish_non_exhaustive()
    }
}

/// A function whose pair of indices is collapsed into one by `merge`.
#[derive(Clone, Copy)]
pub struct IndexComposed<R, G> {
    repr: R,
    merge: G,
}

impl<R, G> IndexComposed<R, G> {
    pub(crate) const fn new(repr: R, merge: G) -> Self {
        Self { repr, merge }
    }
}

impl<R, G, I, J, L> IxLensVl for IndexComposed<R, G>
where
    R: IxLensVl<Index = (I, J)>,
    G: Fn(I, J) -> L,
{
    type Index = L;
    type Source = R::Source;
    type Target = R::Target;
    type Focus = R::Focus;
    type Replacement = R::Replacement;

    #[inline]
    fn run_vl<F, H>(&self, function: H, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        H: FnOnce(L, R::Focus) -> F::Applied<R::Replacement>,
    {
        let merge = &self.merge;
        self.repr.run_vl::<F, _>(
            move |(outer, inner): (I, J), focus: R::Focus| function(merge(outer, inner), focus),
            source,
        )
    }
}

impl<R: fmt::Debug, G> fmt::Debug for IndexComposed<R, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexComposed")
            .field("repr", &self.repr)
            .finish_non_exhaustive()
    }
}

/// A function whose index is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Unindexed<R> {
    repr: R,
}

impl<R> Unindexed<R> {
    pub(crate) const fn new(repr: R) -> Self {
        Self { repr }
    }
}

impl<R: IxLensVl> IxLensVl for Unindexed<R> {
    type Index = ();
    type Source = R::Source;
    type Target = R::Target;
    type Focus = R::Focus;
    type Replacement = R::Replacement;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        G: FnOnce((), R::Focus) -> F::Applied<R::Replacement>,
    {
        self.repr
            .run_vl::<F, _>(move |_index: R::Index, focus: R::Focus| function((), focus), source)
    }
}
