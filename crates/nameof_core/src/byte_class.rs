//! Character classification for signature text.
//!
//! Signature text is ASCII-dominated: identifiers, `::` qualifiers, bracket
//! groups, and punctuation from the toolchain's boilerplate. Classification
//! is per-`char` so that multi-byte characters fall cleanly into the
//! "not an identifier" bucket instead of being split mid-sequence.

/// Returns `true` for characters that can appear in a simple identifier:
/// ASCII alphanumerics and underscore.
///
/// Everything else — qualification separators, whitespace, punctuation,
/// brackets, non-ASCII — terminates an identifier when scanning.
#[inline]
#[must_use]
pub const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` for the six bracket characters that participate in depth
/// accounting: `(` `)` `{` `}` `<` `>`.
#[inline]
#[must_use]
pub const fn is_bracket_char(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '<' | '>')
}

/// Returns `true` when `text` is a plausible bare identifier: non-empty,
/// every character an identifier character, and not starting with a digit.
///
/// This is the check that separates a real enumerator name (`RED`) from the
/// residue of a cast expression (`(Color)86` trims to `86`, which starts
/// with a digit and is rejected).
#[must_use]
pub fn is_bare_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(is_ident_char)
        }
        _ => false,
    }
}
