//! Capability tags for optics.
//!
//! Every [`Optic`](super::Optic) carries a *kind*: a type-level marker
//! stating what the optic can do. Kinds are partially ordered by
//! capability. `K1: Is<K2>` holds when an optic of kind `K1` may be used
//! wherever a `K2` is expected.
//!
//! ```text
//! Iso       Is {Iso, Lens, Prism, Traversal, Getter, Fold, Setter}
//! Lens      Is {Lens, Traversal, Getter, Fold, Setter}
//! Prism     Is {Prism, Traversal, Fold, Setter}
//! Traversal Is {Traversal, Fold, Setter}
//! Getter    Is {Getter, Fold}
//! Fold      Is {Fold}
//! Setter    Is {Setter}
//! ```
//!
//! Composing two optics produces the most capable kind both coerce to
//! ([`JoinKinds`]). A getter and a setter have no such kind, so composing
//! them does not type-check.
//!
//! [`KindTag`] mirrors the marker types at runtime, for display and for
//! checks outside the type system.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A capability tag.
///
/// Sealed: the set of kinds is closed.
pub trait OpticKind: sealed::Sealed {
    /// The runtime mirror of this kind.
    const TAG: KindTag;
}

/// `Self` is at least as capable as `K`.
///
/// Reflexive and transitive.
pub trait Is<K: OpticKind>: OpticKind {}

/// The kind of the composition of a `Self` optic with a `K` optic.
pub trait JoinKinds<K: OpticKind>: OpticKind {
    /// The most capable kind both `Self` and `K` coerce to.
    type Output: OpticKind;
}

/// Runtime mirror of the optic kinds.
///
/// # Examples
///
/// ```rust
/// use ixoptics::optics::KindTag;
///
/// assert!(KindTag::Lens.is(KindTag::Getter));
/// assert!(!KindTag::Getter.is(KindTag::Lens));
/// assert_eq!(KindTag::Lens.join(KindTag::Prism), Some(KindTag::Traversal));
/// assert_eq!(KindTag::Getter.join(KindTag::Setter), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindTag {
    /// Lossless two-way conversion.
    Iso,
    /// Exactly one focus, readable and writable.
    Lens,
    /// At most one focus, writable and constructible.
    Prism,
    /// Any number of foci, readable and writable.
    Traversal,
    /// Exactly one focus, read-only.
    Getter,
    /// Any number of foci, read-only.
    Fold,
    /// Any number of foci, write-only.
    Setter,
}

impl KindTag {
    /// Every kind, most capable first.
    pub const ALL: [Self; 7] = [
        Self::Iso,
        Self::Lens,
        Self::Prism,
        Self::Traversal,
        Self::Getter,
        Self::Fold,
        Self::Setter,
    ];

    /// Returns `true` when `self` is at least as capable as `other`.
    pub const fn is(self, other: Self) -> bool {
        use KindTag::{Fold, Getter, Iso, Lens, Prism, Setter, Traversal};

        matches!(
            (self, other),
            (Iso, _)
                | (Lens, Lens | Traversal | Getter | Fold | Setter)
                | (Prism, Prism | Traversal | Fold | Setter)
                | (Traversal, Traversal | Fold | Setter)
                | (Getter, Getter | Fold)
                | (Fold, Fold)
                | (Setter, Setter)
        )
    }

    /// Returns the most capable kind both `self` and `other` are, if any.
    pub fn join(self, other: Self) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| self.is(*candidate) && other.is(*candidate))
    }

    /// Returns the kind's name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso => "Iso",
            Self::Lens => "Lens",
            Self::Prism => "Prism",
            Self::Traversal => "Traversal",
            Self::Getter => "Getter",
            Self::Fold => "Fold",
            Self::Setter => "Setter",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

macro_rules! optic_kinds {
    ($($(#[$meta:meta])* $kind:ident => $tag:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $kind {}

            impl sealed::Sealed for $kind {}

            impl OpticKind for $kind {
                const TAG: KindTag = KindTag::$tag;
            }
        )+
    };
}

macro_rules! is_at_least {
    ($($kind:ident => [$($weaker:ident),+];)+) => {
        $($(impl Is<$weaker> for $kind {})+)+
    };
}

macro_rules! join_kinds {
    ($($left:ident, $right:ident => $output:ident;)+) => {
        $(
            impl JoinKinds<$right> for $left {
                type Output = $output;
            }
        )+
    };
}

optic_kinds! {
    /// Tag of isomorphisms.
    IsoKind => Iso;
    /// Tag of lenses.
    LensKind => Lens;
    /// Tag of prisms.
    PrismKind => Prism;
    /// Tag of traversals.
    TraversalKind => Traversal;
    /// Tag of getters.
    GetterKind => Getter;
    /// Tag of folds.
    FoldKind => Fold;
    /// Tag of setters.
    SetterKind => Setter;
}

is_at_least! {
    IsoKind => [IsoKind, LensKind, PrismKind, TraversalKind, GetterKind, FoldKind, SetterKind];
    LensKind => [LensKind, TraversalKind, GetterKind, FoldKind, SetterKind];
    PrismKind => [PrismKind, TraversalKind, FoldKind, SetterKind];
    TraversalKind => [TraversalKind, FoldKind, SetterKind];
    GetterKind => [GetterKind, FoldKind];
    FoldKind => [FoldKind];
    SetterKind => [SetterKind];
}

join_kinds! {
    IsoKind, IsoKind => IsoKind;
    IsoKind, LensKind => LensKind;
    IsoKind, PrismKind => PrismKind;
    IsoKind, TraversalKind => TraversalKind;
    IsoKind, GetterKind => GetterKind;
    IsoKind, FoldKind => FoldKind;
    IsoKind, SetterKind => SetterKind;

    LensKind, IsoKind => LensKind;
    LensKind, LensKind => LensKind;
    LensKind, PrismKind => TraversalKind;
    LensKind, TraversalKind => TraversalKind;
    LensKind, GetterKind => GetterKind;
    LensKind, FoldKind => FoldKind;
    LensKind, SetterKind => SetterKind;

    PrismKind, IsoKind => PrismKind;
    PrismKind, LensKind => TraversalKind;
    PrismKind, PrismKind => PrismKind;
    PrismKind, TraversalKind => TraversalKind;
    PrismKind, GetterKind => FoldKind;
    PrismKind, FoldKind => FoldKind;
    PrismKind, SetterKind => SetterKind;

    TraversalKind, IsoKind => TraversalKind;
    TraversalKind, LensKind => TraversalKind;
    TraversalKind, PrismKind => TraversalKind;
    TraversalKind, TraversalKind => TraversalKind;
    TraversalKind, GetterKind => FoldKind;
    TraversalKind, FoldKind => FoldKind;
    TraversalKind, SetterKind => SetterKind;

    GetterKind, IsoKind => GetterKind;
    GetterKind, LensKind => GetterKind;
    GetterKind, PrismKind => FoldKind;
    GetterKind, TraversalKind => FoldKind;
    GetterKind, GetterKind => GetterKind;
    GetterKind, FoldKind => FoldKind;

    FoldKind, IsoKind => FoldKind;
    FoldKind, LensKind => FoldKind;
    FoldKind, PrismKind => FoldKind;
    FoldKind, TraversalKind => FoldKind;
    FoldKind, GetterKind => FoldKind;
    FoldKind, FoldKind => FoldKind;

    SetterKind, IsoKind => SetterKind;
    SetterKind, LensKind => SetterKind;
    SetterKind, PrismKind => SetterKind;
    SetterKind, TraversalKind => SetterKind;
    SetterKind, SetterKind => SetterKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_is<K1: Is<K2>, K2: OpticKind>() {
        assert!(K1::TAG.is(K2::TAG), "{} should be a {}", K1::TAG, K2::TAG);
    }

    fn assert_join<K1: JoinKinds<K2>, K2: OpticKind>() {
        assert_eq!(K1::TAG.join(K2::TAG), Some(<K1::Output as OpticKind>::TAG));
    }

    #[test]
    fn type_level_order_matches_runtime_order() {
        assert_is::<IsoKind, SetterKind>();
        assert_is::<LensKind, LensKind>();
        assert_is::<LensKind, GetterKind>();
        assert_is::<LensKind, TraversalKind>();
        assert_is::<PrismKind, FoldKind>();
        assert_is::<TraversalKind, SetterKind>();
        assert_is::<GetterKind, FoldKind>();
    }

    #[test]
    fn type_level_join_matches_runtime_join() {
        assert_join::<LensKind, LensKind>();
        assert_join::<LensKind, PrismKind>();
        assert_join::<GetterKind, LensKind>();
        assert_join::<PrismKind, GetterKind>();
        assert_join::<SetterKind, IsoKind>();
        assert_join::<TraversalKind, FoldKind>();
    }

    #[rstest]
    #[case(KindTag::Getter, KindTag::Setter)]
    #[case(KindTag::Fold, KindTag::Setter)]
    #[case(KindTag::Setter, KindTag::Getter)]
    fn incompatible_kinds_have_no_join(#[case] left: KindTag, #[case] right: KindTag) {
        assert_eq!(left.join(right), None);
    }

    #[test]
    fn runtime_order_is_reflexive_and_transitive() {
        for a in KindTag::ALL {
            assert!(a.is(a));
            for b in KindTag::ALL {
                for c in KindTag::ALL {
                    if a.is(b) && b.is(c) {
                        assert!(a.is(c), "{a} is {b} is {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn runtime_join_is_commutative() {
        for a in KindTag::ALL {
            for b in KindTag::ALL {
                assert_eq!(a.join(b), b.join(a));
            }
        }
    }
}
