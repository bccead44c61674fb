//! Type name resolution.
//!
//! Two renderer paths feed the same trimmer:
//!
//! - **Native**: the Rust toolchain's own `std::any::type_name`, which
//!   renders a fully qualified path (`alloc::vec::Vec<i32>`). The trimmer
//!   drops the path, keeping generic arguments.
//! - **Foreign**: probe signature text from one of the supported
//!   [`SignatureStyle`] conventions; extraction is the fixed-marker slice
//!   in [`style`](crate::style), then the same trim.
//!
//! Neither path can fail: an unrecognized foreign signature yields empty
//! text — the documented degraded mode — rather than an error. Empty output
//! is indistinguishable from a type whose name is empty, an accepted
//! limitation.

use std::any;

use nameof_core::pretty_name;

use crate::style::SignatureStyle;

/// Simple spelled name of `T`: no path qualification, generic arguments
/// retained.
///
/// ```
/// assert_eq!(nameof::type_name_of::<Vec<i32>>(), "Vec<i32>");
/// assert_eq!(nameof::type_name_of::<String>(), "String");
/// ```
#[must_use]
pub fn type_name_of<T: ?Sized>() -> &'static str {
    pretty_name(any::type_name::<T>(), true)
}

/// Simple spelled name of the type of `value`.
///
/// The value counterpart of [`type_name_of`], for contexts where the type
/// is easier to point at than to spell.
#[must_use]
pub fn type_name_of_val<T: ?Sized>(_value: &T) -> &'static str {
    type_name_of::<T>()
}

/// Full canonical spelling of `T` as the toolchain renders it,
/// qualification and all.
#[must_use]
pub fn qualified_type_name_of<T: ?Sized>() -> &'static str {
    any::type_name::<T>()
}

/// Simple type name from a foreign probe signature.
///
/// Empty text when the signature does not match the convention's markers —
/// the unsupported-toolchain degraded mode.
#[must_use]
pub fn extract_type_name(style: SignatureStyle, signature: &str) -> &str {
    match style.extract_type(signature) {
        Some(spelled) => pretty_name(spelled, true),
        None => "",
    }
}

/// Canonical type spelling from a foreign probe signature, qualification
/// retained. Empty text on marker mismatch.
#[must_use]
pub fn extract_qualified_type_name(style: SignatureStyle, signature: &str) -> &str {
    style.extract_type(signature).unwrap_or("")
}
