//! Standard indexed lenses.
//!
//! | Lens | Index | Subject | Focus |
//! |---|---|---|---|
//! | [`chosen`] | [`Side`] | `Either<A, A>` → `Either<B, B>` | `A` → `B` |
//! | [`devoid`] | any `I` | [`Void`] | any `A` → `B` |
//! | [`ifst`] | `I` | `(A, I)` → `(B, I)` | `A` → `B` |
//! | [`isnd`] | `I` | `(I, A)` → `(I, B)` | `A` → `B` |

use std::fmt;
use std::marker::PhantomData;

use super::ix_lens::{ilens, IxGetSet, IxLens, IxLensVl};
use super::optic::Optic;
use crate::control::{Either, Side, Void};
use crate::typeclass::Functor;

macro_rules! stateless_repr {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+> = $marker:ty;) => {
        $(#[$meta])*
        pub struct $name<$($param),+>(PhantomData<$marker>);

        impl<$($param),+> $name<$($param),+> {
            /// Creates the function. It holds no data.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

stateless_repr! {
    /// The function behind [`chosen`].
    Chosen<A, B> = fn(Either<A, A>) -> Either<B, B>;
}

stateless_repr! {
    /// The function behind [`ifst`].
    Ifst<A, I, B> = fn((A, I)) -> (B, I);
}

stateless_repr! {
    /// The function behind [`isnd`].
    Isnd<I, A, B> = fn((I, A)) -> (I, B);
}

impl<A, B> IxLensVl for Chosen<A, B> {
    type Index = Side;
    type Source = Either<A, A>;
    type Target = Either<B, B>;
    type Focus = A;
    type Replacement = B;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: Either<A, A>) -> F::Applied<Either<B, B>>
    where
        F: Functor,
        G: FnOnce(Side, A) -> F::Applied<B>,
    {
        let (side, focus) = source.into_tagged();
        F::fmap::<B, Either<B, B>, _>(function(side, focus), move |replacement: B| {
            Either::from_side(side, replacement)
        })
    }
}

impl<A, I: Clone, B> IxLensVl for Ifst<A, I, B> {
    type Index = I;
    type Source = (A, I);
    type Target = (B, I);
    type Focus = A;
    type Replacement = B;

    #[inline]
    fn run_vl<F, G>(&self, function: G, (focus, index): (A, I)) -> F::Applied<(B, I)>
    where
        F: Functor,
        G: FnOnce(I, A) -> F::Applied<B>,
    {
        F::fmap::<B, (B, I), _>(function(index.clone(), focus), move |replacement: B| {
            (replacement, index)
        })
    }
}

impl<I: Clone, A, B> IxLensVl for Isnd<I, A, B> {
    type Index = I;
    type Source = (I, A);
    type Target = (I, B);
    type Focus = A;
    type Replacement = B;

    #[inline]
    fn run_vl<F, G>(&self, function: G, (index, focus): (I, A)) -> F::Applied<(I, B)>
    where
        F: Functor,
        G: FnOnce(I, A) -> F::Applied<B>,
    {
        F::fmap::<B, (I, B), _>(function(index.clone(), focus), move |replacement: B| {
            (index, replacement)
        })
    }
}

/// Focuses on the value of an `Either` whose branches share a type.
///
/// The index tells which branch the value came from. Writing keeps the
/// branch.
///
/// # Examples
///
/// ```
/// use ixoptics::control::{Either, Side};
/// use ixoptics::optics::chosen;
///
/// let lens = chosen::<i32, String>();
/// assert_eq!(lens.iview(Either::Left(3)), (Side::Left, 3));
/// assert_eq!(lens.over(Either::Right(3), |n| n.to_string()), Either::Right("3".to_string()));
/// ```
#[must_use]
pub const fn chosen<A, B>() -> IxLens<Side, Chosen<A, B>> {
    Optic::from_repr(Chosen::new())
}

/// Focuses on the first component of a pair, indexed by the second.
///
/// # Examples
///
/// ```
/// use ixoptics::optics::ifst;
///
/// let lens = ifst::<u32, &str, bool>();
/// assert_eq!(lens.iview((7, "seven")), ("seven", 7));
/// assert_eq!(lens.iover((7, "seven"), |name, n| name.len() as u32 == n), (false, "seven"));
/// ```
#[must_use]
pub const fn ifst<A, I: Clone, B>() -> IxLens<I, Ifst<A, I, B>> {
    Optic::from_repr(Ifst::new())
}

/// Focuses on the second component of a pair, indexed by the first.
///
/// # Examples
///
/// ```
/// use ixoptics::optics::isnd;
///
/// let lens = isnd::<&str, i32, i32>();
/// assert_eq!(lens.iview(("answer", 42)), ("answer", 42));
/// assert_eq!(lens.set(("answer", 42), 0), ("answer", 0));
/// ```
#[must_use]
pub const fn isnd<I: Clone, A, B>() -> IxLens<I, Isnd<I, A, B>> {
    Optic::from_repr(Isnd::new())
}

/// The function behind [`devoid`].
pub type Devoid<I, A, B> = IxGetSet<I, Void, Void, A, B, fn(&Void) -> (I, A), fn(Void, B) -> Void>;

fn absurd_focus<I, A>(void: &Void) -> (I, A) {
    void.absurd()
}

fn keep_void<B>(void: Void, _replacement: B) -> Void {
    void
}

/// The lens into nothing.
///
/// Its subject type has no values, so neither its getter nor its setter can
/// ever run. Any index, focus and replacement types are valid. Composed
/// under a traversal it turns into an update that never touches anything.
///
/// # Examples
///
/// ```
/// use ixoptics::control::Void;
/// use ixoptics::optics::{devoid, OptionTraversal, Traversal};
///
/// let untouched = OptionTraversal::<Void>::new()
///     .then(devoid::<usize, String, String>())
///     .modify_all(None, |text| text + "!");
/// assert!(untouched.is_none());
/// ```
#[must_use]
pub fn devoid<I, A, B>() -> IxLens<I, Devoid<I, A, B>> {
    ilens(
        absurd_focus::<I, A> as fn(&Void) -> (I, A),
        keep_void::<B> as fn(Void, B) -> Void,
    )
}

static_assertions::assert_impl_all!(Chosen<String, Vec<u8>>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Ifst<String, usize, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Isnd<usize, String, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Devoid<usize, String, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(IxLens<Side, Chosen<String, String>>: Send, Sync, Copy);
