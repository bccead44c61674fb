//! The pretty-name trimmer: decorated symbol text → simple name.
//!
//! A compiler-synthesized rendering of a symbol buries the interesting
//! identifier under namespace qualification, template arguments, and call or
//! initializer decoration:
//!
//! ```text
//! ns::Outer::Member        → Member
//! ns::foo(1, 2)            → foo
//! ns::Vector<int>          → Vector      (or Vector<int> with the suffix)
//! ```
//!
//! # Design
//!
//! Three backward passes over the text, each a narrowing re-slice:
//!
//! 1. **Strip a trailing call/initializer group.** A named-state scan
//!    ([`GroupScan`]) walks from the end, balancing `()`/`{}` depth. Junk
//!    (non-identifier, non-bracket) at depth zero joins the strippable
//!    suffix; the first identifier character or angle bracket at depth zero
//!    ends the pass, discarding everything consumed so far.
//! 2. **Measure the trailing `<...>` span** without removing it, balancing
//!    `<>` depth the same way.
//! 3. **Strip qualification.** Consume the trailing identifier run of what
//!    remains (excluding the measured span); everything before it — up to
//!    and including the last `::`/`.` separator character — is dropped.
//!
//! The span from pass 2 is finally dropped unless the caller asked for it.
//!
//! # Degradation
//!
//! Unbalanced brackets leave a pass in a non-zero depth state until the text
//! is exhausted, in which case nothing is stripped. Malformed input can
//! therefore produce an odd name, but never a panic — compiler-generated
//! signatures are always balanced.

use crate::byte_class::{is_bracket_char, is_ident_char};
use crate::rev_cursor::RevCursor;

/// State of the pass-1 suffix scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupScan {
    /// At depth zero, accumulating strippable trailing junk.
    Tail,
    /// Inside a bracket group. Depth goes negative on an unmatched opener,
    /// mirroring the unsigned wrap-around of the original accounting: the
    /// scan then stays "inside" until the text is exhausted.
    Group { depth: i64 },
}

/// Extract the simple trailing name from decorated symbol text.
///
/// With `with_suffix` the trailing template-argument span is retained
/// (`"Vector<int>"`); without it only the bare identifier remains
/// (`"Vector"`). The result is a sub-slice of `name`; nothing is copied.
///
/// Total over all inputs: empty output is valid, malformed input degrades
/// to "nothing stripped".
#[must_use]
pub fn pretty_name(name: &str, with_suffix: bool) -> &str {
    let name = strip_group_suffix(name);
    let span = template_span_len(name);
    let simple = strip_qualification(name, span);
    if with_suffix {
        simple
    } else {
        &simple[..simple.len() - span]
    }
}

/// Pass 1: drop a trailing call or initializer-list group.
///
/// Returns the head of `name` once the scan settles on an identifier
/// character (or angle bracket) at depth zero. If the scan exhausts the text
/// first — no identifier boundary, or brackets that never re-balance —
/// `name` is returned unchanged.
fn strip_group_suffix(name: &str) -> &str {
    let mut cur = RevCursor::new(name);
    let mut state = GroupScan::Tail;
    while let Some(c) = cur.peek() {
        match state {
            GroupScan::Tail => {
                if c == ')' || c == '}' {
                    state = GroupScan::Group { depth: 1 };
                } else if c == '(' || c == '{' {
                    state = GroupScan::Group { depth: -1 };
                } else if is_ident_char(c) || is_bracket_char(c) {
                    // The value's own trailing text starts here; everything
                    // consumed so far was decoration.
                    return cur.head();
                }
                // Non-identifier junk at depth zero joins the suffix.
                cur.retreat();
            }
            GroupScan::Group { depth } => {
                let depth = match c {
                    ')' | '}' => depth + 1,
                    '(' | '{' => depth - 1,
                    _ => depth,
                };
                state = if depth == 0 {
                    GroupScan::Tail
                } else {
                    GroupScan::Group { depth }
                };
                cur.retreat();
            }
        }
    }
    name
}

/// Pass 2: measure a trailing balanced `<...>` span in bytes.
///
/// Adjacent spans (`<B><C>`) are measured as one. Returns 0 when the text
/// does not end in `>`. An unbalanced span measures to the whole text,
/// which pass 3 then treats as having no head to qualify.
fn template_span_len(name: &str) -> usize {
    let mut cur = RevCursor::new(name);
    let mut depth: i64 = 0;
    while let Some(c) = cur.peek() {
        match c {
            '>' => depth += 1,
            '<' => depth -= 1,
            _ if depth == 0 => break,
            _ => {}
        }
        cur.retreat();
    }
    cur.consumed()
}

/// Pass 3: drop namespace/class qualification.
///
/// Scans the text minus its trailing template span, consumes the trailing
/// identifier run, and cuts at the last non-identifier character. The
/// returned slice keeps the template span; the caller decides its fate.
fn strip_qualification(name: &str, template_len: usize) -> &str {
    let mut cur = RevCursor::new(&name[..name.len() - template_len]);
    cur.bump_ident_run();
    &name[cur.pos()..]
}

#[cfg(test)]
mod tests;
