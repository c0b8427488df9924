//! Tests for the `Lenses` derive macro.
//!
//! `#[derive(Lenses)]` generates two associated functions per named field:
//!
//! - `<field>_lens()`: a plain lens (no index)
//! - `<field>_ilens()`: an indexed lens whose index is the field name

use ixoptics::Lenses;
use ixoptics::optics::{IndexCount, KindTag, isnd};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

/// Simple struct with basic field types
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

/// Struct with a nested tuple field
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    contact: (String, u16),
}

/// Generic struct
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

/// Handle type without `Clone`
#[derive(PartialEq, Debug)]
struct Handle(u8);

/// Struct mixing a `Clone` field with a non-`Clone` one
#[derive(Lenses)]
struct Holder {
    count: u32,
    handle: Handle,
}

// =============================================================================
// Plain lenses
// =============================================================================

#[rstest]
fn point_lens_view_and_set() {
    let point = Point { x: 1, y: 2 };

    assert_eq!(Point::x_lens().view(point.clone()), 1);
    assert_eq!(Point::y_lens().set(point, 20), Point { x: 1, y: 20 });
}

#[rstest]
fn plain_lens_has_no_index() {
    let lens = Point::x_lens();
    assert_eq!(lens.kind(), KindTag::Lens);
    assert_eq!(lens.index_count(), IndexCount::Zero);
}

#[rstest]
fn generic_struct_lens() {
    let container = Container {
        value: vec![1, 2, 3],
        label: "numbers".to_string(),
    };

    let updated = Container::value_lens().over(container, |mut value: Vec<i32>| {
        value.push(4);
        value
    });
    assert_eq!(updated.value, vec![1, 2, 3, 4]);
    assert_eq!(updated.label, "numbers");
}

// =============================================================================
// Indexed lenses
// =============================================================================

#[rstest]
fn ilens_reports_field_name() {
    let point = Point { x: 1, y: 2 };

    assert_eq!(Point::x_ilens().iview(point.clone()), ("x", 1));
    assert_eq!(Point::y_ilens().iview(point), ("y", 2));
}

#[rstest]
fn ilens_iover_sees_field_name() {
    let person = Person {
        name: "ada".to_string(),
        contact: ("ada@example.com".to_string(), 25),
    };

    let tagged = Person::name_ilens().iover(person, |field, name| format!("{field}={name}"));
    assert_eq!(tagged.name, "name=ada");
}

#[rstest]
fn derived_lens_composes_with_isnd() {
    let port = Person::contact_lens().compose(isnd::<String, u16, u16>());
    let person = Person {
        name: "ada".to_string(),
        contact: ("host".to_string(), 80),
    };

    assert_eq!(port.iview(person.clone()), ("host".to_string(), 80));
    assert_eq!(port.set(person, 8080).contact, ("host".to_string(), 8080));
}

#[rstest]
fn derived_ilens_pairs_indices_when_composed() {
    let port = Person::contact_ilens().compose(isnd::<String, u16, u16>());
    let person = Person {
        name: "ada".to_string(),
        contact: ("host".to_string(), 80),
    };

    assert_eq!(port.index_count(), IndexCount::Many);
    assert_eq!(
        port.ito_list(person),
        vec![(("contact", "host".to_string()), 80)]
    );
}

#[rstest]
fn derived_lenses_are_copy() {
    let lens = Point::x_ilens();
    let copy = lens;
    assert_eq!(lens.view(Point { x: 3, y: 0 }), copy.view(Point { x: 3, y: 0 }));
}

// =============================================================================
// Non-Clone fields
// =============================================================================

#[rstest]
fn non_clone_field_does_not_block_other_lenses() {
    let holder = Holder {
        count: 1,
        handle: Handle(9),
    };

    let updated = Holder::count_lens().over(holder, |count| count + 1);
    assert_eq!(updated.count, 2);
    assert_eq!(updated.handle, Handle(9));
    assert_eq!(Holder::count_ilens().iview(updated), ("count", 2));
}
