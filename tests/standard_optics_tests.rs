//! Tests for the standard indexed lenses: `chosen`, `devoid`, `ifst`, `isnd`.

use ixoptics::control::{Either, Side, Void};
use ixoptics::optics::{
    chosen, devoid, ifst, isnd, to_ix_lens_vl, IxLensVl, OptionTraversal, Traversal, VecTraversal,
};
use ixoptics::typeclass::{Const, ConstF, OptionF};
use rstest::rstest;

// =============================================================================
// chosen
// =============================================================================

#[rstest]
#[case(Either::Left(5), (Side::Left, 5))]
#[case(Either::Right(7), (Side::Right, 7))]
fn chosen_iview(#[case] source: Either<i32, i32>, #[case] expected: (Side, i32)) {
    assert_eq!(chosen::<i32, i32>().iview(source), expected);
}

#[rstest]
fn chosen_set_keeps_left() {
    assert_eq!(chosen::<i32, i32>().set(Either::Left(5), 9), Either::Left(9));
}

#[rstest]
fn chosen_iover_uses_side() {
    let lens = chosen::<&str, String>();
    let tagged = lens.iover(Either::Right("x"), |side, value| format!("{side}:{value}"));
    assert_eq!(tagged, Either::Right("right:x".to_string()));
}

// =============================================================================
// ifst / isnd
// =============================================================================

#[rstest]
fn ifst_iview_reports_second() {
    assert_eq!(ifst::<i32, &str, i32>().iview((5, "x")), ("x", 5));
}

#[rstest]
fn ifst_set_replaces_first() {
    assert_eq!(ifst::<i32, &str, i32>().set((5, "x"), 9), (9, "x"));
}

#[rstest]
fn isnd_iview_reports_first() {
    assert_eq!(isnd::<&str, i32, i32>().iview(("k", 3)), ("k", 3));
}

#[rstest]
fn isnd_over_changes_type() {
    assert_eq!(isnd::<&str, i32, bool>().over(("k", 3), |n| n > 2), ("k", true));
}

#[rstest]
fn isnd_narrowed_to_option_context() {
    let vl = to_ix_lens_vl(isnd::<u8, u8, u8>());
    assert_eq!(vl.run_vl::<OptionF, _>(|limit, n| (n <= limit).then_some(n), (3, 2)), Some((3, 2)));
    assert_eq!(vl.run_vl::<OptionF, _>(|limit, n| (n <= limit).then_some(n), (3, 4)), None);
}

#[rstest]
fn ifst_clones_index_only() {
    let vl = to_ix_lens_vl(ifst::<Vec<u8>, String, usize>());
    let read = vl
        .run_vl::<ConstF<String>, _>(|index, _| Const::new(index), (vec![1, 2], "tag".to_string()))
        .get_const();
    assert_eq!(read, "tag");
}

// =============================================================================
// devoid
// =============================================================================

#[rstest]
fn devoid_over_empty_vec_is_no_op() {
    let each = VecTraversal::<Void>::new().then(devoid::<usize, i32, i32>());
    let result = each.modify_all(Vec::new(), |n| n + 1);
    assert!(result.is_empty());
}

#[rstest]
fn devoid_over_none_is_no_op() {
    let each = OptionTraversal::<Void>::new().then(devoid::<Side, String, String>());
    assert_eq!(each.set_all(None, "never".to_string()), None);
    assert_eq!(each.length(&None), 0);
}

#[rstest]
fn devoid_accepts_any_types() {
    fn kind_of<I, A, B>() -> ixoptics::optics::KindTag {
        devoid::<I, A, B>().kind()
    }

    assert_eq!(kind_of::<(), (), ()>(), ixoptics::optics::KindTag::Lens);
    assert_eq!(
        kind_of::<String, Vec<u8>, Option<char>>(),
        ixoptics::optics::KindTag::Lens
    );
}
