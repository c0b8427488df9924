//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `F::fmap(fa, |x| x) == fa`
//! - **Composition Law**: `F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))`

use ixoptics::typeclass::{Const, ConstF, Functor, Identity, IdentityF, OptionF, ResultF};
use proptest::prelude::*;

// =============================================================================
// IdentityF
// =============================================================================

proptest! {
    /// Identity Law for Identity<i32>
    #[test]
    fn prop_identity_identity_law(value in any::<i32>()) {
        prop_assert_eq!(IdentityF::fmap(Identity(value), |x: i32| x), Identity(value));
    }

    /// Composition Law for Identity<i32>
    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = IdentityF::fmap(IdentityF::fmap(Identity(value), function1), function2);
        let right = IdentityF::fmap(Identity(value), |x: i32| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// ConstF
// =============================================================================

proptest! {
    /// Identity Law for Const<String, i32>
    #[test]
    fn prop_const_identity_law(log in ".*") {
        let fa: Const<String, i32> = Const::new(log);
        prop_assert_eq!(ConstF::<String>::fmap(fa.clone(), |x: i32| x), fa);
    }

    /// Composition Law for Const<String, i32>: the log is never touched
    #[test]
    fn prop_const_composition_law(log in ".*") {
        let fa: Const<String, i32> = Const::new(log);
        let shown = ConstF::<String>::fmap(fa.clone(), |n: i32| n.to_string());
        let left = ConstF::<String>::fmap(shown, |s: String| s.len());
        let right = ConstF::<String>::fmap(fa, |n: i32| n.to_string().len());

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// OptionF / ResultF
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionF::fmap(value, |x: i32| x), value);
    }

    /// Composition Law for Option<i32>
    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = OptionF::fmap(OptionF::fmap(value, function1), function2);
        let right = OptionF::fmap(value, |x: i32| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Result<i32, String>
    #[test]
    fn prop_result_identity_law(value in any::<Result<i32, String>>()) {
        prop_assert_eq!(ResultF::<String>::fmap(value.clone(), |x: i32| x), value);
    }

    /// Composition Law for Result<i32, String>
    #[test]
    fn prop_result_composition_law(value in any::<Result<i32, String>>()) {
        let function1 = |n: i32| n.wrapping_sub(3);
        let function2 = |n: i32| i64::from(n) * 2;

        let left =
            ResultF::<String>::fmap(ResultF::<String>::fmap(value.clone(), function1), function2);
        let right = ResultF::<String>::fmap(value, |x: i32| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}
