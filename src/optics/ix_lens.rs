//! Indexed lenses in the concrete and van Laarhoven encodings.
//!
//! An indexed lens reads a focus *and* an index from a subject, and
//! rebuilds the subject from a replacement focus. Rebuilding never sees the
//! index: it is extra information attached to the read.
//!
//! # Two encodings
//!
//! The van Laarhoven form is a single function
//!
//! ```text
//! run_vl: (focus function: (I, A) -> F<B>, subject: S) -> F<T>    for every Functor F
//! ```
//!
//! modelled by [`IxLensVl::run_vl`], which is generic over `F`. Running it
//! in [`IdentityF`](crate::typeclass::IdentityF) writes, running it in
//! [`ConstF`](crate::typeclass::ConstF) reads.
//!
//! The concrete form, [`IxLens`], is such a function tagged with the lens
//! capability and a single-index witness. [`ilens_vl`] goes from the first
//! to the second and [`to_ix_lens_vl`] back.
//!
//! # Laws
//!
//! For a lawful lens, with `A == B` and `S == T`:
//!
//! 1. **GetSet**: `lens.set(s, lens.view(s)) == s`
//! 2. **SetGet**: `lens.view(lens.set(s, b)) == b`
//! 3. **SetSet**: `lens.set(lens.set(s, b1), b2) == lens.set(s, b2)`
//!
//! The index is not constrained by the laws.
//!
//! # Examples
//!
//! ```
//! use ixoptics::optics::{ilens, to_ix_lens_vl, IxLensVl};
//! use ixoptics::typeclass::{Identity, IdentityF};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Cell {
//!     row: usize,
//!     value: f64,
//! }
//!
//! let value = ilens(
//!     |cell: &Cell| (cell.row, cell.value),
//!     |cell: Cell, value: f64| Cell { value, ..cell },
//! );
//!
//! let cell = Cell { row: 4, value: 1.5 };
//! assert_eq!(value.iview(cell.clone()), (4, 1.5));
//!
//! let scaled = value.iover(cell.clone(), |row, value| value * row as f64);
//! assert_eq!(scaled, Cell { row: 4, value: 6.0 });
//!
//! // The same lens, as a function generic over the mapping context.
//! let vl = to_ix_lens_vl(value);
//! let written = vl.run_vl::<IdentityF, _>(|_row, _value| Identity(0.0), cell);
//! assert_eq!(written.into_inner(), Cell { row: 4, value: 0.0 });
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::index::{HasSingleIndex, OneIx};
use super::kind::{Is, LensKind};
use super::optic::Optic;
use crate::typeclass::Functor;

/// The van Laarhoven form of an indexed lens.
///
/// `run_vl` is generic over the mapping context `F`, so a single value can
/// be run to read, to write, or to perform effectful updates.
///
/// Implementations must call `function` exactly once and must rebuild the
/// subject only from the replacement produced inside `F`.
pub trait IxLensVl {
    /// The index reported alongside the focus.
    type Index;
    /// The subject before the update.
    type Source;
    /// The subject after the update.
    type Target;
    /// The focus read from the subject.
    type Focus;
    /// The focus written back.
    type Replacement;

    /// Runs the lens in the mapping context `F`.
    fn run_vl<F, G>(&self, function: G, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        G: FnOnce(Self::Index, Self::Focus) -> F::Applied<Self::Replacement>;
}

impl<R: IxLensVl + ?Sized> IxLensVl for &R {
    type Index = R::Index;
    type Source = R::Source;
    type Target = R::Target;
    type Focus = R::Focus;
    type Replacement = R::Replacement;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: Self::Source) -> F::Applied<Self::Target>
    where
        F: Functor,
        G: FnOnce(Self::Index, Self::Focus) -> F::Applied<Self::Replacement>,
    {
        (**self).run_vl::<F, G>(function, source)
    }
}

/// An indexed lens in concrete form.
pub type IxLens<I, R> = Optic<LensKind, OneIx<I>, R>;

/// The van Laarhoven function of an indexed lens built from a getter and a
/// setter.
///
/// # Type Parameters
///
/// - `I`: The index type
/// - `S`, `T`: The subject before and after the update
/// - `A`, `B`: The focus before and after the update
/// - `Get`: `Fn(&S) -> (I, A)`
/// - `Set`: `Fn(S, B) -> T`
pub struct IxGetSet<I, S, T, A, B, Get, Set> {
    getter: Get,
    setter: Set,
    _marker: PhantomData<fn(S, B) -> (I, A, T)>,
}

impl<I, S, T, A, B, Get, Set> IxGetSet<I, S, T, A, B, Get, Set>
where
    Get: Fn(&S) -> (I, A),
    Set: Fn(S, B) -> T,
{
    /// Pairs a getter with a setter.
    #[must_use]
    pub const fn new(getter: Get, setter: Set) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<I, S, T, A, B, Get, Set> IxLensVl for IxGetSet<I, S, T, A, B, Get, Set>
where
    Get: Fn(&S) -> (I, A),
    Set: Fn(S, B) -> T,
{
    type Index = I;
    type Source = S;
    type Target = T;
    type Focus = A;
    type Replacement = B;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: S) -> F::Applied<T>
    where
        F: Functor,
        G: FnOnce(I, A) -> F::Applied<B>,
    {
        let (index, focus) = (self.getter)(&source);
        let setter = &self.setter;
        F::fmap::<B, T, _>(function(index, focus), move |replacement: B| {
            setter(source, replacement)
        })
    }
}

impl<I, S, T, A, B, Get: Clone, Set: Clone> Clone for IxGetSet<I, S, T, A, B, Get, Set> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, S, T, A, B, Get: Copy, Set: Copy> Copy for IxGetSet<I, S, T, A, B, Get, Set> {}

impl<I, S, T, A, B, Get, Set> fmt::Debug for IxGetSet<I, S, T, A, B, Get, Set> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IxGetSet").finish_non_exhaustive()
    }
}

/// Builds an indexed lens from a getter and a setter.
///
/// `getter` returns the index together with the focus. `setter` rebuilds
/// the subject from a replacement focus and never receives the index.
///
/// # Examples
///
/// ```
/// use ixoptics::optics::ilens;
///
/// let second = ilens(
///     |pair: &(char, u32)| ("second", pair.1),
///     |pair: (char, u32), value: String| (pair.0, value),
/// );
///
/// assert_eq!(second.iview(('a', 7)), ("second", 7));
/// assert_eq!(second.set(('a', 7), "seven".to_string()), ('a', "seven".to_string()));
/// ```
#[must_use]
pub fn ilens<I, S, T, A, B, Get, Set>(
    getter: Get,
    setter: Set,
) -> IxLens<I, IxGetSet<I, S, T, A, B, Get, Set>>
where
    Get: Fn(&S) -> (I, A),
    Set: Fn(S, B) -> T,
{
    ilens_vl(IxGetSet::new(getter, setter))
}

/// Wraps a van Laarhoven function as an indexed lens.
///
/// The result behaves exactly like `repr`.
#[must_use]
pub const fn ilens_vl<R: IxLensVl>(repr: R) -> IxLens<R::Index, R> {
    Optic::from_repr(repr)
}

/// Narrows an optic to the van Laarhoven form of an indexed lens.
///
/// Accepts only optics that are at least lenses and report exactly one
/// index. Anything else is rejected at compile time.
///
/// # Examples
///
/// ```
/// use ixoptics::optics::{isnd, to_ix_lens_vl, IxLensVl};
/// use ixoptics::typeclass::OptionF;
///
/// let vl = to_ix_lens_vl(isnd::<&str, u8, u8>());
/// let checked = vl.run_vl::<OptionF, _>(|_key, value| value.checked_mul(2), ("k", 100));
/// assert_eq!(checked, Some(("k", 200)));
/// let overflowed = vl.run_vl::<OptionF, _>(|_key, value| value.checked_mul(3), ("k", 100));
/// assert_eq!(overflowed, None);
/// ```
///
/// A getter cannot be narrowed:
///
/// ```compile_fail
/// use ixoptics::optics::{ifst, to_ix_lens_vl, GetterKind};
///
/// let getter = ifst::<i32, i32, i32>().cast::<GetterKind>();
/// let _ = to_ix_lens_vl(getter);
/// ```
///
/// Neither can a lens that reports no index:
///
/// ```compile_fail
/// use ixoptics::optics::{ifst, to_ix_lens_vl};
///
/// let _ = to_ix_lens_vl(ifst::<i32, i32, i32>().noix());
/// ```
///
/// Nor one that reports two:
///
/// ```compile_fail
/// use ixoptics::optics::{ifst, isnd, to_ix_lens_vl};
///
/// let nested = isnd::<u8, (i32, char), (i32, char)>().compose(ifst::<i32, char, i32>());
/// let _ = to_ix_lens_vl(nested);
/// ```
pub fn to_ix_lens_vl<K, Ix, R>(optic: Optic<K, Ix, R>) -> R
where
    K: Is<LensKind>,
    Ix: HasSingleIndex<R::Index>,
    R: IxLensVl,
{
    log::trace!("narrowing {} optic to an indexed lens function", K::TAG);
    optic.into_repr()
}

/// Narrows an optic to an indexed lens function and hands it to `consumer`.
///
/// Same preconditions as [`to_ix_lens_vl`].
///
/// # Examples
///
/// ```
/// use ixoptics::control::{Either, Side};
/// use ixoptics::optics::{chosen, with_ix_lens_vl, IxLensVl};
/// use ixoptics::typeclass::{Const, ConstF};
///
/// let side = with_ix_lens_vl(chosen::<i32, i32>(), |vl| {
///     vl.run_vl::<ConstF<Side>, _>(|side, _value| Const::new(side), Either::Right(1))
///         .get_const()
/// });
/// assert_eq!(side, Side::Right);
/// ```
///
/// ```compile_fail
/// use ixoptics::optics::{isnd, with_ix_lens_vl, SetterKind};
///
/// let setter = isnd::<u8, i32, i32>().cast::<SetterKind>();
/// with_ix_lens_vl(setter, |_vl| ());
/// ```
pub fn with_ix_lens_vl<K, Ix, R, C, Out>(optic: Optic<K, Ix, R>, consumer: C) -> Out
where
    K: Is<LensKind>,
    Ix: HasSingleIndex<R::Index>,
    R: IxLensVl,
    C: FnOnce(R) -> Out,
{
    consumer(to_ix_lens_vl(optic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{GetterKind, KindTag};
    use crate::typeclass::{Const, ConstF, Identity, IdentityF, OptionF};
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        key: String,
        hits: u32,
    }

    fn hits_by_key() -> IxLens<
        String,
        impl IxLensVl<
            Index = String,
            Source = Entry,
            Target = Entry,
            Focus = u32,
            Replacement = u32,
        >,
    > {
        ilens(
            |entry: &Entry| (entry.key.clone(), entry.hits),
            |entry: Entry, hits: u32| Entry { hits, ..entry },
        )
    }

    fn entry() -> Entry {
        Entry {
            key: "home".to_string(),
            hits: 3,
        }
    }

    #[rstest]
    fn ilens_reads_exactly_the_getter_result() {
        assert_eq!(hits_by_key().iview(entry()), ("home".to_string(), 3));
        assert_eq!(hits_by_key().view(entry()), 3);
    }

    #[rstest]
    fn ilens_writes_exactly_the_setter_result() {
        let updated = hits_by_key().set(entry(), 10);
        assert_eq!(
            updated,
            Entry {
                key: "home".to_string(),
                hits: 10
            }
        );
    }

    #[rstest]
    fn iover_sees_index() {
        let updated = hits_by_key().iover(entry(), |key, hits| hits + key.len() as u32);
        assert_eq!(updated.hits, 7);
    }

    #[rstest]
    fn ilens_is_tagged_as_lens() {
        assert_eq!(hits_by_key().kind(), KindTag::Lens);
    }

    #[rstest]
    fn narrowing_then_rewrapping_behaves_identically() {
        let rewrapped = ilens_vl(to_ix_lens_vl(hits_by_key()));
        assert_eq!(rewrapped.iview(entry()), hits_by_key().iview(entry()));
        assert_eq!(rewrapped.set(entry(), 1), hits_by_key().set(entry(), 1));
    }

    #[rstest]
    fn narrowed_function_runs_in_every_context() {
        let vl = to_ix_lens_vl(hits_by_key());

        let read = vl
            .run_vl::<ConstF<(String, u32)>, _>(|key, hits| Const::new((key, hits)), entry())
            .get_const();
        assert_eq!(read, ("home".to_string(), 3));

        let written = vl.run_vl::<IdentityF, _>(|_, hits| Identity(hits * 2), entry());
        assert_eq!(written.into_inner().hits, 6);

        let refused = vl.run_vl::<OptionF, _>(|_, _| None, entry());
        assert_eq!(refused, None);
    }

    #[rstest]
    fn with_ix_lens_vl_passes_the_function() {
        let index = with_ix_lens_vl(hits_by_key(), |vl| {
            vl.run_vl::<ConstF<String>, _>(|key, _| Const::new(key), entry())
                .get_const()
        });
        assert_eq!(index, "home");
    }

    #[rstest]
    fn references_to_functions_are_functions() {
        let vl = to_ix_lens_vl(hits_by_key());
        let by_ref = ilens_vl(&vl);
        assert_eq!(by_ref.view(entry()), 3);
    }

    #[rstest]
    fn cast_lens_still_reads() {
        let getter = hits_by_key().cast::<GetterKind>();
        assert_eq!(getter.kind(), KindTag::Getter);
        assert_eq!(getter.iview(entry()).1, 3);
    }
}
