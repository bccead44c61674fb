use super::*;
use pretty_assertions::assert_eq;

/// Helper: trim with the template suffix dropped (the common mode).
fn simple(name: &str) -> &str {
    pretty_name(name, false)
}

/// Helper: trim keeping the template suffix.
fn with_suffix(name: &str) -> &str {
    pretty_name(name, true)
}

// === Already-simple input ===

#[test]
fn plain_identifier_unchanged() {
    assert_eq!(simple("somevar"), "somevar");
    assert_eq!(with_suffix("somevar"), "somevar");
}

#[test]
fn empty_input_is_valid() {
    assert_eq!(simple(""), "");
    assert_eq!(with_suffix(""), "");
}

// === Qualification stripping ===

#[test]
fn namespace_qualification_is_dropped() {
    assert_eq!(simple("ns::Outer::Member"), "Member");
}

#[test]
fn suffix_mode_does_not_toggle_qualification() {
    // The flag only controls the template span; qualification always goes.
    assert_eq!(with_suffix("ns::Outer::Member"), "Member");
}

#[test]
fn field_access_keeps_the_field() {
    assert_eq!(simple("somevar.somefield"), "somefield");
    assert_eq!(simple("(&somevar)->somefield"), "somefield");
}

#[test]
fn enumerator_qualification_is_dropped() {
    assert_eq!(simple("Color::RED"), "RED");
}

// === Call/initializer decoration ===

#[test]
fn call_decoration_is_stripped() {
    assert_eq!(simple("ns::foo(1, 2)"), "foo");
}

#[test]
fn initializer_list_is_stripped() {
    assert_eq!(simple("Foo{1, 2}"), "Foo");
}

#[test]
fn nested_groups_strip_as_one() {
    assert_eq!(simple("make(Foo(1), Bar{2})"), "make");
}

#[test]
fn trailing_junk_after_call_is_stripped() {
    assert_eq!(simple("foo(1, 2) "), "foo");
}

// === Template suffix ===

#[test]
fn template_suffix_toggles_with_flag() {
    assert_eq!(with_suffix("ns::Vector<int>"), "Vector<int>");
    assert_eq!(simple("ns::Vector<int>"), "Vector");
}

#[test]
fn nested_template_arguments_stay_balanced() {
    assert_eq!(with_suffix("std::map<int, std::vector<int>>"), "map<int, std::vector<int>>");
    assert_eq!(simple("std::map<int, std::vector<int>>"), "map");
}

#[test]
fn template_call_combination() {
    assert_eq!(simple("ns::get<int>()"), "get");
    assert_eq!(with_suffix("ns::get<int>()"), "get<int>");
}

// === Cast expressions (the enum-miss shape) ===

#[test]
fn cast_expression_trims_to_digits() {
    // The resolver rejects this residue with the bare-identifier check;
    // here we only pin down what the trimmer produces.
    assert_eq!(simple("(Color)86"), "86");
    assert_eq!(simple("(Color)-5"), "5");
}

// === Degraded input ===

#[test]
fn unbalanced_opener_strips_nothing_in_pass_one() {
    // No balanced group to remove; qualification still cuts at `(`.
    assert_eq!(simple("foo(bar"), "bar");
}

#[test]
fn unbalanced_closer_consumes_the_head() {
    // `)` never re-balances, so pass 1 keeps everything; pass 3 then finds
    // no trailing identifier run.
    assert_eq!(simple("foo)"), "");
}

#[test]
fn non_ascii_classifies_as_separator() {
    // Byte-for-byte parity with the original: outside ASCII there is no
    // identifier, so everything is qualification. Must not panic.
    assert_eq!(simple("日本::名前"), "");
}

// === Idempotence ===

#[test]
fn trimming_simple_output_is_identity() {
    for input in ["ns::Outer::Member", "ns::foo(1, 2)", "ns::Vector<int>"] {
        let once = simple(input);
        assert_eq!(simple(once), once, "not idempotent for {input:?}");
    }
}

mod properties {
    use super::*;
    use crate::byte_class::is_ident_char;
    use proptest::prelude::*;

    /// Signature-shaped text: identifier chars, separators, and brackets.
    fn symbol_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                proptest::char::range('a', 'e'),
                Just('_'),
                Just('0'),
                Just(':'),
                Just('.'),
                Just(','),
                Just(' '),
                Just('('),
                Just(')'),
                Just('{'),
                Just('}'),
                Just('<'),
                Just('>'),
            ],
            0..48,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn idempotent_without_suffix(name in symbol_text()) {
            let once = pretty_name(&name, false);
            prop_assert_eq!(pretty_name(once, false), once);
        }

        #[test]
        fn idempotent_with_suffix(name in symbol_text()) {
            let once = pretty_name(&name, true);
            prop_assert_eq!(pretty_name(once, true), once);
        }

        #[test]
        fn suffixless_output_is_identifier_chars_only(name in symbol_text()) {
            let out = pretty_name(&name, false);
            prop_assert!(out.chars().all(is_ident_char), "residue in {out:?}");
        }
    }
}
