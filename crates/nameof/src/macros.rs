//! Stringification wrappers over the public entry points.
//!
//! These are the call-site surface: each macro stringifies its argument and
//! hands the text to the matching function, exactly as thin as the original
//! macro layer. The argument is an expression — variables, paths, calls,
//! enumerator paths all parse as one, and the stringified text is never
//! evaluated. Types go through [`nameof_type!`], which parses in type
//! position so generic arguments (`Vec<i32>`) stringify tightly.

/// Simple (unqualified) name of a variable, field, function, or
/// enumerator path.
///
/// ```
/// let some_var = 1;
/// assert_eq!(nameof::nameof!(some_var), "some_var");
/// assert_eq!(nameof::nameof!(std::mem::drop), "drop");
/// let _ = some_var;
/// ```
#[macro_export]
macro_rules! nameof {
    ($e:expr) => {
        $crate::pretty_name(stringify!($e), false)
    };
}

/// Like [`nameof!`], but a trailing template-argument span is retained.
#[macro_export]
macro_rules! nameof_full {
    ($e:expr) => {
        $crate::pretty_name(stringify!($e), true)
    };
}

/// Raw stringification of the argument, untouched. API symmetry with
/// [`raw_name`](crate::raw_name).
#[macro_export]
macro_rules! nameof_raw {
    ($e:expr) => {
        stringify!($e)
    };
}

/// Simple name of a type, through the toolchain's own renderer.
///
/// ```
/// assert_eq!(nameof::nameof_type!(Vec<i32>), "Vec<i32>");
/// ```
#[macro_export]
macro_rules! nameof_type {
    ($t:ty) => {
        $crate::type_name_of::<$t>()
    };
}

/// Simple name of the type of an expression.
#[macro_export]
macro_rules! nameof_type_of_val {
    ($e:expr) => {
        $crate::type_name_of_val(&$e)
    };
}
