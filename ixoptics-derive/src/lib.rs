//! Derive macros for ixoptics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates plain and indexed lens functions for struct fields
//!
//! # Example
//!
//! ```rust,ignore
//! use ixoptics::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated functions:
//! // - Point::x_lens()  -> PlainLens<..>            (no index)
//! // - Point::x_ilens() -> IxLens<&'static str, ..> (index "x")
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().view(point.clone()), 10);
//! assert_eq!(Point::y_ilens().iview(point), ("y", 20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro for generating lenses for struct fields.
///
/// For each named field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> PlainLens<impl IxLensVl<Index = (), Focus = T, ..> + Copy> { ... }
///     pub fn foo_ilens()
///         -> IxLens<&'static str, impl IxLensVl<Index = &'static str, Focus = T, ..> + Copy>
///     { ... }
/// }
/// ```
///
/// Reading returns an owned copy of the field, so calling a field's lens
/// requires the field type to be `Clone`. Fields that are not `Clone` still
/// get their functions; only calling them fails to compile.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
///
/// # Example
///
/// ```rust,ignore
/// use ixoptics::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
///
/// let (field, age) = Person::age_ilens().iview(person.clone());
/// assert_eq!((field, age), ("age", 30));
///
/// let updated = Person::name_lens().set(person, "Bob".to_string());
/// assert_eq!(updated.name, "Bob");
/// ```
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.view(Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
