//! Indexed optics.
//!
//! This module provides indexed lenses in two equivalent encodings, the
//! capability and index tags that decide which operations an optic
//! supports, and the standard lenses.
//!
//! # Overview
//!
//! - [`IxLensVl`]: The van Laarhoven form, one function generic over every
//!   [`Functor`](crate::typeclass::Functor)
//! - [`Optic`]: A representation tagged with a [kind](kind) and an
//!   [index witness](index)
//! - [`IxLens`]: An optic with the lens kind and exactly one index
//! - [`PlainLens`]: An optic with the lens kind and no index
//!
//! # Building Indexed Lenses
//!
//! - [`ilens`]: From a getter returning `(index, focus)` and a setter
//! - [`ilens_vl`]: From any [`IxLensVl`]
//! - [`chosen`], [`devoid`], [`ifst`], [`isnd`]: Standard lenses
//!
//! # Going Back
//!
//! - [`to_ix_lens_vl`]: Recovers the van Laarhoven form
//! - [`with_ix_lens_vl`]: Recovers it and passes it to a function
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens <: Getter <: Fold
//! Iso <: Prism <: Traversal <: Fold
//! Lens <: Traversal <: Setter
//! ```
//!
//! # Example
//!
//! ```
//! use ixoptics::control::Either;
//! use ixoptics::optics::{chosen, ifst, to_ix_lens_vl, IxLensVl};
//! use ixoptics::typeclass::{Identity, IdentityF};
//!
//! // Focus on the first component of whichever branch is populated.
//! let nested = chosen::<(i32, char), (i32, char)>()
//!     .compose(ifst::<i32, char, i32>())
//!     .icompose(|side, tag| format!("{side}:{tag}"));
//!
//! let value = Either::Right((10, 'x'));
//! assert_eq!(nested.iview(value), ("right:x".to_string(), 10));
//! assert_eq!(nested.set(value, 0), Either::Right((0, 'x')));
//!
//! let vl = to_ix_lens_vl(nested);
//! let written = vl.run_vl::<IdentityF, _>(|index, n| Identity(n + index.len() as i32), value);
//! assert_eq!(written.into_inner(), Either::Right((17, 'x')));
//! ```
//!
//! # Lens Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Setting back what was read yields the original.
//!    ```text
//!    lens.set(source, lens.view(source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Reading after setting yields the set value.
//!    ```text
//!    lens.view(lens.set(source, value)) == value
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets equal the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```

mod compose;
pub mod index;
mod ix_lens;
pub mod kind;
mod lens;
mod optic;
mod standard_optics;
mod traversal;

// Re-export composition representations
pub use compose::Composed;
pub use compose::IndexComposed;
pub use compose::Reindexed;
pub use compose::Unindexed;

// Re-export index witnesses
pub use index::AppendIndices;
pub use index::HasSingleIndex;
pub use index::IndexCount;
pub use index::IndexList;
pub use index::NoIx;
pub use index::OneIx;
pub use index::TwoIx;

// Re-export indexed-lens types and functions
pub use ix_lens::IxGetSet;
pub use ix_lens::IxLens;
pub use ix_lens::IxLensVl;
pub use ix_lens::ilens;
pub use ix_lens::ilens_vl;
pub use ix_lens::to_ix_lens_vl;
pub use ix_lens::with_ix_lens_vl;

// Re-export kinds
pub use kind::FoldKind;
pub use kind::GetterKind;
pub use kind::Is;
pub use kind::IsoKind;
pub use kind::JoinKinds;
pub use kind::KindTag;
pub use kind::LensKind;
pub use kind::OpticKind;
pub use kind::PrismKind;
pub use kind::SetterKind;
pub use kind::TraversalKind;

// Re-export plain lenses
pub use lens::GetSet;
pub use lens::PlainLens;
pub use lens::lens;

pub use optic::Optic;

// Re-export standard optics
pub use standard_optics::Chosen;
pub use standard_optics::Devoid;
pub use standard_optics::Ifst;
pub use standard_optics::Isnd;
pub use standard_optics::chosen;
pub use standard_optics::devoid;
pub use standard_optics::ifst;
pub use standard_optics::isnd;

// Re-export traversal-related types and traits
pub use traversal::OptionTraversal;
pub use traversal::ThenOptic;
pub use traversal::Traversal;
pub use traversal::VecTraversal;
