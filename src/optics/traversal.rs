//! Type-preserving traversals over containers.
//!
//! A [`Traversal`] focuses on zero or more elements of a structure. The
//! adapters here cover the standard containers. [`Traversal::then`] runs a
//! lens under every traversed element, which is how a lens reaches into a
//! collection.
//!
//! # Laws
//!
//! 1. **Modify Identity Law**: `traversal.modify_all(source, |x| x) == source`
//! 2. **Modify Composition Law**:
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g)
//!        == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use ixoptics::optics::{isnd, Traversal, VecTraversal};
//!
//! let scores = vec![("ann", 3), ("bob", 5)];
//!
//! let each_score = VecTraversal::new().then(isnd::<&str, i32, i32>());
//! assert_eq!(each_score.get_all_owned(scores.clone()), vec![3, 5]);
//! assert_eq!(
//!     each_score.modify_all(scores, |score| score * 10),
//!     vec![("ann", 30), ("bob", 50)]
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::index::IndexList;
use super::ix_lens::IxLensVl;
use super::kind::{GetterKind, Is, OpticKind, SetterKind};
use super::optic::Optic;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A> {
    /// Returns all focused elements, taking ownership of the source.
    fn get_all_owned(&self, source: S) -> Vec<A>;

    /// Modifies all focused elements by applying a function.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize;

    /// Sets all focused elements to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use ixoptics::optics::{Traversal, VecTraversal};
    ///
    /// let traversal: VecTraversal<i32> = VecTraversal::new();
    /// assert_eq!(traversal.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Runs `optic` under every focused element.
    ///
    /// The optic must be able to both read and write.
    fn then<K, Ix, R>(self, optic: Optic<K, Ix, R>) -> ThenOptic<Self, K, Ix, R>
    where
        Self: Sized,
        K: Is<GetterKind> + Is<SetterKind>,
        R: IxLensVl<Source = A, Target = A>,
    {
        log::trace!("running {} optic under a traversal", <K as OpticKind>::TAG);
        ThenOptic {
            traversal: self,
            optic,
        }
    }
}

// =============================================================================
// VecTraversal - Traversal for Vec<A>
// =============================================================================

/// A Traversal that focuses on all elements of a `Vec`.
///
/// # Example
///
/// ```
/// use ixoptics::optics::{Traversal, VecTraversal};
///
/// let traversal: VecTraversal<i32> = VecTraversal::new();
/// let doubled = traversal.modify_all(vec![1, 2, 3], |x| x * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub struct VecTraversal<A> {
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

impl<A> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all_owned(&self, source: Vec<A>) -> Vec<A> {
        source
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

// =============================================================================
// OptionTraversal - Traversal for Option<A>
// =============================================================================

/// A Traversal that focuses on the value of an `Option`, if present.
///
/// # Example
///
/// ```
/// use ixoptics::optics::{OptionTraversal, Traversal};
///
/// let traversal: OptionTraversal<i32> = OptionTraversal::new();
/// assert_eq!(traversal.modify_all(Some(5), |x| x + 1), Some(6));
/// assert_eq!(traversal.modify_all(None, |x| x + 1), None);
/// ```
pub struct OptionTraversal<A> {
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> OptionTraversal<A> {
    /// Creates a new `OptionTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for OptionTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for OptionTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for OptionTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OptionTraversal").finish()
    }
}

impl<A> Traversal<Option<A>, A> for OptionTraversal<A> {
    fn get_all_owned(&self, source: Option<A>) -> Vec<A> {
        source.into_iter().collect()
    }

    fn modify_all<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }

    fn length(&self, source: &Option<A>) -> usize {
        usize::from(source.is_some())
    }
}

// =============================================================================
// ThenOptic - an optic run under each traversed element
// =============================================================================

/// A traversal followed by an optic. Built by [`Traversal::then`].
pub struct ThenOptic<T, K, Ix, R> {
    traversal: T,
    optic: Optic<K, Ix, R>,
}

impl<T: Clone, K, Ix, R: Clone> Clone for ThenOptic<T, K, Ix, R> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            optic: self.optic.clone(),
        }
    }
}

impl<T: fmt::Debug, K: OpticKind, Ix: IndexList, R: fmt::Debug> fmt::Debug
    for ThenOptic<T, K, Ix, R>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ThenOptic")
            .field("traversal", &self.traversal)
            .field("optic", &self.optic)
            .finish()
    }
}

impl<S, E, A, T, K, Ix, R> Traversal<S, A> for ThenOptic<T, K, Ix, R>
where
    T: Traversal<S, E>,
    K: Is<GetterKind> + Is<SetterKind>,
    R: IxLensVl<Source = E, Target = E, Focus = A, Replacement = A>,
{
    fn get_all_owned(&self, source: S) -> Vec<A> {
        self.traversal
            .get_all_owned(source)
            .into_iter()
            .map(|element| self.optic.view(element))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.traversal
            .modify_all(source, |element: E| self.optic.over(element, &mut function))
    }

    fn length(&self, source: &S) -> usize {
        self.traversal.length(source)
    }
}
