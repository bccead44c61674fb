//! Signature rendering conventions of the supported toolchains.
//!
//! A probe renders as an entire function signature with the interesting text
//! embedded in boilerplate that is fixed per toolchain family. Extraction is
//! therefore a fixed-marker slice, never a general parse: strip a known tail,
//! locate a known separator, take what remains. All marker lengths come from
//! literal strings, matching the way the original boilerplate offsets were
//! computed from `sizeof` of literals.
//!
//! The three conventions:
//!
//! ```text
//! Clang  ...probe() [T = Color; V = Color::RED]
//! Gcc    ...probe() [with T = Color; V = RED; std::string_view = std::basic_string_view<char>]
//! Msvc   ...probe<enum Color,Color::RED>(void)
//! ```
//!
//! For types the probe wraps the target in a carrier template spelled
//! `identity<...>`, so the embedded spelling sits between the carrier head
//! and the signature tail:
//!
//! ```text
//! Clang  ...probe() [T = identity<ns::Widget>]
//! Gcc    ...probe() [with T = identity<ns::Widget>; std::string_view = std::basic_string_view<char>]
//! Msvc   ...probe<struct identity<struct ns::Widget>>(void)
//! ```
//!
//! A signature that does not carry the expected markers extracts to `None`:
//! the degraded mode for unsupported toolchains, not an error.

/// The carrier template's spelled-out head inside a type probe signature.
const CARRIER_HEAD: &str = "identity<";

/// Signature rendering convention of a toolchain family.
///
/// The resolver layers depend only on this table; no algorithm branches on
/// toolchain identity anywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureStyle {
    /// Clang's `__PRETTY_FUNCTION__` shape. Enum values render qualified
    /// (`Color::RED`) and need a trimming pass.
    Clang,
    /// GCC's `__PRETTY_FUNCTION__` shape. Enum values render bare (`RED`).
    Gcc,
    /// MSVC's `__FUNCSIG__` shape. Values render qualified, and type
    /// spellings carry inline `enum`/`class`/`struct` keywords.
    Msvc,
}

impl SignatureStyle {
    /// Boilerplate tail of an enum-value probe signature.
    const fn enum_tail(self) -> &'static str {
        match self {
            Self::Clang => "]",
            Self::Gcc => "; std::string_view = std::basic_string_view<char>]",
            Self::Msvc => ">(void)",
        }
    }

    /// Separator preceding the value argument in an enum-value probe.
    const fn value_separator(self) -> &'static str {
        match self {
            Self::Clang | Self::Gcc => "; V = ",
            Self::Msvc => ",",
        }
    }

    /// Boilerplate tail of a type probe signature (closes the carrier too).
    const fn type_tail(self) -> &'static str {
        match self {
            Self::Clang => ">]",
            Self::Gcc => ">; std::string_view = std::basic_string_view<char>]",
            Self::Msvc => ">>(void)",
        }
    }

    /// Whether extracted enum values still carry qualification that the
    /// pretty-name trimmer must remove. GCC alone renders them bare.
    pub(crate) fn needs_value_trim(self) -> bool {
        !matches!(self, Self::Gcc)
    }

    /// Slice the rendered value argument out of an enum-value probe
    /// signature.
    ///
    /// For a real enumerator this is its (possibly qualified) name; for an
    /// arbitrary integer it is a cast expression. Distinguishing the two is
    /// the resolver's job. `None` when the markers don't match.
    #[must_use]
    pub fn extract_enum_value(self, signature: &str) -> Option<&str> {
        let body = signature.strip_suffix(self.enum_tail())?;
        let at = body.rfind(self.value_separator())?;
        Some(&body[at + self.value_separator().len()..])
    }

    /// Slice the embedded type spelling out of a type probe signature and
    /// normalize it: MSVC's inline `enum `/`class `/`struct ` keyword is
    /// dropped, and trailing spaces (old-style `> >` spellings) are trimmed.
    ///
    /// `None` when the markers don't match.
    #[must_use]
    pub fn extract_type(self, signature: &str) -> Option<&str> {
        let body = signature.strip_suffix(self.type_tail())?;
        let at = body.find(CARRIER_HEAD)?;
        let spelled = &body[at + CARRIER_HEAD.len()..];
        Some(self.normalize_spelling(spelled))
    }

    /// Keyword and whitespace normalization of a raw type spelling.
    fn normalize_spelling(self, spelled: &str) -> &str {
        let spelled = if matches!(self, Self::Msvc) {
            strip_elaboration_keyword(spelled)
        } else {
            spelled
        };
        spelled.trim_end_matches(' ')
    }
}

/// Drop one leading `enum `/`class `/`struct ` elaboration keyword.
fn strip_elaboration_keyword(spelled: &str) -> &str {
    for keyword in ["enum ", "class ", "struct "] {
        if let Some(rest) = spelled.strip_prefix(keyword) {
            return rest;
        }
    }
    spelled
}
