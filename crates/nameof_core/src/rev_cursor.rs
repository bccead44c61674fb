//! Zero-cost cursor walking backward over borrowed text.
//!
//! Every trimming pass scans a signature from the end: trailing call
//! decoration, template-argument spans, and namespace qualification all sit
//! at or just before the tail. The cursor tracks a single byte position that
//! only moves toward the front, and always rests on a `char` boundary, so
//! slicing the unconsumed head is safe without re-validation.
//!
//! The cursor is [`Copy`], enabling cheap state snapshots: a pass that only
//! needs to *measure* a span (pass 2 of the trimmer) can scan a copy and
//! leave the caller's cursor untouched.

use crate::byte_class::is_ident_char;

/// Backward cursor over a `&str`.
///
/// Reads characters from the end toward the front. `pos` is the byte offset
/// one past the next character to read; `pos == 0` means the text is
/// exhausted.
#[derive(Clone, Copy, Debug)]
pub struct RevCursor<'a> {
    text: &'a str,
    /// Byte offset of the unconsumed head. Invariant: always a char boundary.
    pos: usize,
}

/// Size assertion: RevCursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), usize = 8 => 24 bytes.
const _: () = assert!(std::mem::size_of::<RevCursor<'static>>() <= 24);

impl<'a> RevCursor<'a> {
    /// Create a cursor positioned at the end of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: text.len(),
        }
    }

    /// The character that `bump` would consume next, without consuming it.
    ///
    /// Returns `None` when the text is exhausted.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text[..self.pos].chars().next_back()
    }

    /// Consume one character moving toward the front of the text.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos -= c.len_utf8();
        Some(c)
    }

    /// Consume one character without looking at it.
    ///
    /// For scan loops that have already [`peek`](Self::peek)ed. No-op at
    /// the front of the text.
    #[inline]
    pub fn retreat(&mut self) {
        if let Some(c) = self.peek() {
            self.pos -= c.len_utf8();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.pos == 0
    }

    /// Number of bytes consumed so far.
    ///
    /// This is the running suffix length `s` of the trimming passes.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.text.len() - self.pos
    }

    /// Byte offset of the unconsumed head.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed head of the text.
    ///
    /// `pos` is maintained on char boundaries, so this slice never panics.
    #[inline]
    #[must_use]
    pub fn head(&self) -> &'a str {
        &self.text[..self.pos]
    }

    /// Consume characters while `pred` holds, returning how many bytes moved.
    pub fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos -= c.len_utf8();
        }
        start - self.pos
    }

    /// Consume a trailing run of identifier characters.
    ///
    /// Convenience wrapper for the common "accumulate the simple name" step.
    pub fn bump_ident_run(&mut self) -> usize {
        self.bump_while(is_ident_char)
    }
}
