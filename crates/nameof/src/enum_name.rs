//! Enumerator name resolution through a signature-renderer capability.
//!
//! There is no runtime list of enumerators, so resolution probes: ask the
//! renderer for the probe signature of a candidate discriminant, slice the
//! rendered value argument out of it, and check whether it reads as a bare
//! identifier. A real enumerator renders by name; an arbitrary integer cast
//! to the enum type renders as a cast expression, whose residue after
//! trimming starts with a digit and is rejected.
//!
//! # Search window
//!
//! Candidates outside a bounded window are never probed:
//! `[0, MAX_SEARCH_DEPTH)` for unsigned underlying types,
//! `[-MAX_SEARCH_DEPTH, +MAX_SEARCH_DEPTH)` for signed ones. The top edge is
//! exclusive. Outside the window resolution is the sentinel, unconditionally
//! — the terminal state of the search.
//!
//! Absence of a match is a normal value, never an error: [`enum_name`]
//! yields the [`OUT_OF_RANGE`] sentinel, [`try_enum_name`] yields `None`.

use nameof_core::{is_bare_identifier, pretty_name};

use crate::style::SignatureStyle;

/// Sentinel result for a value with no resolvable enumerator name.
///
/// Deliberately shaped so it cannot collide with a real simple name
/// (it carries qualification punctuation).
pub const OUT_OF_RANGE: &str = "nameof_enum::out_of_range";

/// Renderer capability for one enumeration type.
///
/// Implementations are external to the resolver: they carry the toolchain's
/// signature text for each candidate discriminant in the search window. The
/// resolver only ever sees the rendered text and this table of constants.
pub trait EnumSignatures {
    /// Signedness of the underlying representation. Selects the window
    /// bracket: signed types search `[-MAX_SEARCH_DEPTH, +MAX_SEARCH_DEPTH)`,
    /// unsigned ones `[0, MAX_SEARCH_DEPTH)`.
    const SIGNED: bool;

    /// Rendering convention the signatures follow.
    const STYLE: SignatureStyle;

    /// Bound of the search window. The one recognized tunable; raising it
    /// widens the reachable discriminant range.
    const MAX_SEARCH_DEPTH: i32 = 256;

    /// Probe signature for `candidate`.
    ///
    /// Must be total over the search window: a candidate that is not a real
    /// enumerator still renders (as a cast expression), exactly like the
    /// toolchain's own printer behaves.
    fn signature(candidate: i32) -> &'static str;
}

/// The bounded bracket of candidate discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    start: i32,
    end: i32,
}

impl SearchWindow {
    /// Window for the given signedness and depth.
    #[must_use]
    pub fn new(signed: bool, depth: i32) -> Self {
        if signed {
            Self { start: -depth, end: depth }
        } else {
            Self { start: 0, end: depth }
        }
    }

    /// Whether `candidate` is reachable. The top edge is exclusive.
    #[must_use]
    pub fn contains(self, candidate: i32) -> bool {
        self.start <= candidate && candidate < self.end
    }

    /// First reachable candidate.
    #[must_use]
    pub fn start(self) -> i32 {
        self.start
    }

    /// One past the last reachable candidate.
    #[must_use]
    pub fn end(self) -> i32 {
        self.end
    }
}

/// Resolve the simple name of the enumerator with discriminant `value`.
///
/// `None` when `value` is outside the search window or does not render as a
/// real enumerator.
#[must_use]
pub fn try_enum_name<S: EnumSignatures>(value: i32) -> Option<&'static str> {
    let window = SearchWindow::new(S::SIGNED, S::MAX_SEARCH_DEPTH);
    if !window.contains(value) {
        return None;
    }
    let rendered = S::STYLE.extract_enum_value(S::signature(value))?;
    let name = if S::STYLE.needs_value_trim() {
        pretty_name(rendered, false)
    } else {
        rendered
    };
    is_bare_identifier(name).then_some(name)
}

/// Resolve the simple name of the enumerator with discriminant `value`,
/// or the [`OUT_OF_RANGE`] sentinel on a miss.
///
/// This is the original sentinel-valued contract; prefer [`try_enum_name`]
/// when the caller can handle an explicit not-found.
#[must_use]
pub fn enum_name<S: EnumSignatures>(value: i32) -> &'static str {
    try_enum_name::<S>(value).unwrap_or(OUT_OF_RANGE)
}
