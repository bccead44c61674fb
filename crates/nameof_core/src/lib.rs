//! Backward scanning primitives for compiler-synthesized signature text.
//!
//! This crate is the surgery half of name extraction: given the textual
//! rendering of a symbol, a type, or an enumerator — as produced by a
//! compiler's signature printer or a stringification macro — it isolates the
//! simple trailing identifier by re-slicing the borrowed text. Nothing is
//! copied and nothing is allocated; every operation narrows a `&str` view.
//!
//! # Architecture
//!
//! ```text
//! decorated text → RevCursor → trimming passes → simple name
//! ```
//!
//! - [`byte_class`]: character classification (identifier vs bracket vs junk)
//! - [`rev_cursor`]: a `Copy` cursor that walks the text from the end
//! - [`trim`]: the trimming passes, driven as a small named-state scanner
//!
//! The resolver layer (`nameof`) builds on these primitives; this crate has
//! no opinion about which toolchain rendered the text.

pub mod byte_class;
pub mod rev_cursor;
pub mod trim;

pub use byte_class::{is_bare_identifier, is_bracket_char, is_ident_char};
pub use rev_cursor::RevCursor;
pub use trim::pretty_name;
