//! Plain (unindexed) lenses.
//!
//! A plain lens is an optic with the lens capability and no index. It
//! composes with indexed lenses: the indices of the other side pass through
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use ixoptics::lens;
//! use ixoptics::optics::isnd;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config {
//!     name: String,
//!     limit: (&'static str, u32),
//! }
//!
//! let limit = lens!(Config, limit).compose(isnd::<&str, u32, u32>());
//!
//! let config = Config { name: "api".to_string(), limit: ("requests", 10) };
//! assert_eq!(limit.iview(config.clone()), ("requests", 10));
//!
//! let raised = limit.over(config, |n| n * 2);
//! assert_eq!(raised.limit, ("requests", 20));
//! assert_eq!(raised.name, "api");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::index::NoIx;
use super::ix_lens::IxLensVl;
use super::kind::LensKind;
use super::optic::Optic;
use crate::typeclass::Functor;

/// A lens that reports no index.
pub type PlainLens<R> = Optic<LensKind, NoIx, R>;

/// The van Laarhoven function of a plain lens built from a getter and a
/// setter. Reports `()` as its index.
///
/// # Type Parameters
///
/// - `S`, `T`: The subject before and after the update
/// - `A`, `B`: The focus before and after the update
/// - `Get`: `Fn(&S) -> A`
/// - `Set`: `Fn(S, B) -> T`
pub struct GetSet<S, T, A, B, Get, Set> {
    getter: Get,
    setter: Set,
    _marker: PhantomData<fn(S, B) -> (A, T)>,
}

impl<S, T, A, B, Get, Set> GetSet<S, T, A, B, Get, Set>
where
    Get: Fn(&S) -> A,
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

impl<S, T, A, B, Get, Set> IxLensVl for GetSet<S, T, A, B, Get, Set>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, B) -> T,
{
    type Index = ();
    type Source = S;
    type Target = T;
    type Focus = A;
    type Replacement = B;

    #[inline]
    fn run_vl<F, G>(&self, function: G, source: S) -> F::Applied<T>
    where
        F: Functor,
        G: FnOnce((), A) -> F::Applied<B>,
    {
        let focus = (self.getter)(&source);
        let setter = &self.setter;
        F::fmap::<B, T, _>(function((), focus), move |replacement: B| {
            setter(source, replacement)
        })
    }
}

impl<S, T, A, B, Get: Clone, Set: Clone> Clone for GetSet<S, T, A, B, Get, Set> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, Get: Copy, Set: Copy> Copy for GetSet<S, T, A, B, Get, Set> {}

impl<S, T, A, B, Get, Set> fmt::Debug for GetSet<S, T, A, B, Get, Set> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("GetSet").finish_non_exhaustive()
    }
}

/// Builds a plain lens from a getter and a setter.
///
/// # Examples
///
/// ```
/// use ixoptics::optics::lens;
///
/// let celsius = lens(
///     |kelvin: &f64| kelvin - 273.15,
///     |_kelvin: f64, celsius: f64| celsius + 273.15,
/// );
/// assert!((celsius.view(300.0) - 26.85).abs() < 1e-9);
/// assert!((celsius.set(0.0, 0.0) - 273.15).abs() < 1e-9);
/// ```
#[must_use]
pub const fn lens<S, T, A, B, Get, Set>(
    getter: Get,
    setter: Set,
) -> PlainLens<GetSet<S, T, A, B, Get, Set>>
where
    Get: Fn(&S) -> A,
    Set: Fn(S, B) -> T,
{
    Optic::from_repr(GetSet::new(getter, setter))
}

/// Creates a plain lens for a struct field.
///
/// The field type must be `Clone`: reading returns an owned copy.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T>, field_name)
/// ```
///
/// # Examples
///
/// ```
/// use ixoptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.view(point.clone()), 10);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
///
/// Generic structs:
///
/// ```
/// use ixoptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Wrapper<T> { value: T }
///
/// let value_lens = lens!(Wrapper<i32>, value);
/// assert_eq!(value_lens.view(Wrapper { value: 42 }), 42);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
