//! # ixoptics
//!
//! Indexed lenses for Rust: accessors that read a focus together with an
//! index, rebuild the whole from a replacement focus, and compose.
//!
//! ## Overview
//!
//! An indexed lens exists in two equivalent forms:
//!
//! - **Concrete**: [`IxLens`](optics::IxLens), a representation tagged with
//!   the "Lens" capability and the single-index witness. Build one with
//!   [`ilens`](optics::ilens) from a getter and a setter.
//! - **Van Laarhoven**: any value implementing
//!   [`IxLensVl`](optics::IxLensVl), a single function generic over every
//!   mapping context ([`Functor`](typeclass::Functor)). Wrap one with
//!   [`ilens_vl`](optics::ilens_vl), recover it with
//!   [`to_ix_lens_vl`](optics::to_ix_lens_vl).
//!
//! The crate also ships the primitive lenses [`chosen`](optics::chosen),
//! [`devoid`](optics::devoid), [`ifst`](optics::ifst) and
//! [`isnd`](optics::isnd).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type-constructor families and `Functor`
//! - `control`: `Either`, `Side`, `Void`
//! - `optics`: Optic kinds, index witnesses, indexed lenses
//! - `derive`: `#[derive(Lenses)]`
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ixoptics::prelude::*;
//!
//! let lens = ifst::<i32, &str, i32>();
//!
//! assert_eq!(lens.iview((5, "x")), ("x", 5));
//! assert_eq!(lens.set((5, "x"), 9), (9, "x"));
//! ```
//!
//! ## Derived Lenses
//!
//! `#[derive(Lenses)]` accepts structs with fields that are not `Clone`.
//! Only calling such a field's lens is rejected:
//!
//! ```compile_fail
//! use ixoptics::Lenses;
//!
//! struct Handle(u8);
//!
//! #[derive(Lenses)]
//! struct Holder {
//!     count: u32,
//!     handle: Handle,
//! }
//!
//! let _ = Holder::handle_lens();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ixoptics::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use ixoptics_derive::Lenses;
