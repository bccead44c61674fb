//! Name extraction from compiler-synthesized signatures.
//!
//! Obtains the simple, human-readable name of a variable, type, or enum
//! value from static information alone — no user-supplied metadata tables,
//! no runtime reflection. The hard work is string surgery, done by
//! [`nameof_core`]; this crate layers the toolchain-facing pieces on top:
//!
//! - [`SignatureStyle`]: the rendering conventions of the supported
//!   toolchain families, as fixed marker tables
//! - [`enum_name`]/[`try_enum_name`]: enumerator resolution through an
//!   [`EnumSignatures`] renderer capability, bounded by a search window
//! - [`type_name_of`] and friends: type names, native or foreign
//! - the `nameof!` macro family: stringification at the call site
//!
//! # Example
//!
//! ```
//! let point = (1, 2);
//! assert_eq!(nameof::nameof!(point), "point");
//! assert_eq!(nameof::nameof_type!(Vec<i32>), "Vec<i32>");
//! let _ = point;
//! ```
//!
//! No operation fails: misses resolve to a sentinel or `None`, unsupported
//! signature shapes to empty text, malformed symbol text to itself.

pub mod enum_name;
mod macros;
pub mod style;
pub mod type_name;

pub use enum_name::{enum_name, try_enum_name, EnumSignatures, SearchWindow, OUT_OF_RANGE};
pub use nameof_core::pretty_name;
pub use style::SignatureStyle;
pub use type_name::{
    extract_qualified_type_name, extract_type_name, qualified_type_name_of, type_name_of,
    type_name_of_val,
};

/// Identity passthrough: returns the symbol text unchanged.
///
/// Exists for API symmetry with the trimming entry points, as the target of
/// the `nameof_raw!` macro.
#[must_use]
pub fn raw_name(text: &str) -> &str {
    text
}
