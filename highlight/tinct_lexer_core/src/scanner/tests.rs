use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

/// Helper: scan and collect all tokens as owned pairs.
fn scan(input: &str) -> Vec<(TokenKind, String)> {
    let mut tokens = Vec::new();
    let result = tokenize(input, |kind, text| tokens.push((kind, text.to_owned())));
    assert!(result.is_ok(), "scan of {input:?} failed: {result:?}");
    tokens
}

/// Helper: scan and return kinds only.
fn scan_kinds(input: &str) -> Vec<TokenKind> {
    scan(input).into_iter().map(|(kind, _)| kind).collect()
}

/// Helper: scan and re-concatenate all token texts in emission order.
fn rejoin(input: &str) -> String {
    let mut out = String::new();
    let result = tokenize(input, |_, text| out.push_str(text));
    assert!(result.is_ok(), "scan of {input:?} failed: {result:?}");
    out
}

fn owned(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|&(kind, text)| (kind, text.to_owned()))
        .collect()
}

// ─── Plain structure ───────────────────────────────────────────────────

#[test]
fn empty_input_emits_nothing() {
    assert_eq!(scan(""), vec![]);
}

#[test]
fn array_of_numbers() {
    assert_eq!(
        scan("[1, 2, 3]"),
        owned(&[
            (TokenKind::OpenArray, "["),
            (TokenKind::Number, "1"),
            (TokenKind::Comma, ","),
            (TokenKind::Whitespace, " "),
            (TokenKind::Number, "2"),
            (TokenKind::Comma, ","),
            (TokenKind::Whitespace, " "),
            (TokenKind::Number, "3"),
            (TokenKind::CloseArray, "]"),
        ]),
    );
}

#[test]
fn plain_structure_rejoins_exactly() {
    for input in ["[1, 2, 3]", "{}", "[[], []]", " ,\t, ", "[,,]"] {
        assert_eq!(rejoin(input), input);
    }
}

#[test]
fn whitespace_is_emitted_per_character() {
    assert_eq!(
        scan(" \t"),
        owned(&[
            (TokenKind::Whitespace, " "),
            (TokenKind::Whitespace, "\t"),
        ]),
    );
}

// ─── Symbols ───────────────────────────────────────────────────────────

#[test]
fn symbol_splits_into_prefix_and_body() {
    assert_eq!(
        scan(":foo123"),
        owned(&[
            (TokenKind::SymbolPrefix, ":"),
            (TokenKind::Symbol, "foo123"),
        ]),
    );
}

#[test]
fn symbol_allows_bang_and_question() {
    assert_eq!(
        scan(":empty?"),
        owned(&[(TokenKind::SymbolPrefix, ":"), (TokenKind::Symbol, "empty?")]),
    );
    assert_eq!(
        scan(":save!"),
        owned(&[(TokenKind::SymbolPrefix, ":"), (TokenKind::Symbol, "save!")]),
    );
}

#[test]
fn bare_colon_flushes_empty_symbol() {
    assert_eq!(
        scan(":"),
        owned(&[(TokenKind::SymbolPrefix, ":"), (TokenKind::Symbol, "")]),
    );
}

// ─── Strings ───────────────────────────────────────────────────────────

#[test]
fn quoted_string_has_open_body_close() {
    assert_eq!(
        scan("\"hello\""),
        owned(&[
            (TokenKind::OpenString, "\""),
            (TokenKind::String, "hello"),
            (TokenKind::CloseString, "\""),
        ]),
    );
}

#[test]
fn escaped_quote_collapses_into_body() {
    // Input is the seven characters  " a \ " b "  — the escaped quote
    // must come through as a literal quote in a single string body.
    assert_eq!(
        scan("\"a\\\"b\""),
        owned(&[
            (TokenKind::OpenString, "\""),
            (TokenKind::String, "a\"b"),
            (TokenKind::CloseString, "\""),
        ]),
    );
}

#[test]
fn unterminated_string_flushes_without_close() {
    assert_eq!(
        scan("\"abc"),
        owned(&[(TokenKind::OpenString, "\""), (TokenKind::String, "abc")]),
    );
}

#[test]
fn string_body_keeps_arbitrary_characters() {
    assert_eq!(
        scan("\"{:a=>1}\""),
        owned(&[
            (TokenKind::OpenString, "\""),
            (TokenKind::String, "{:a=>1}"),
            (TokenKind::CloseString, "\""),
        ]),
    );
}

// ─── Keywords and classes ──────────────────────────────────────────────

#[test]
fn lowercase_word_is_keyword() {
    assert_eq!(scan("myvar"), owned(&[(TokenKind::Keyword, "myvar")]));
    assert_eq!(scan("nil"), owned(&[(TokenKind::Keyword, "nil")]));
}

#[test]
fn capitalized_word_is_class() {
    assert_eq!(scan("MyClass"), owned(&[(TokenKind::Class, "MyClass")]));
}

// ─── Hash arrow and range disambiguation ───────────────────────────────

#[test]
fn hash_arrow_between_symbol_and_number() {
    assert_eq!(
        scan("{:a=>1}"),
        owned(&[
            (TokenKind::OpenHash, "{"),
            (TokenKind::SymbolPrefix, ":"),
            (TokenKind::Symbol, "a"),
            (TokenKind::Refers, "=>"),
            (TokenKind::Number, "1"),
            (TokenKind::CloseHash, "}"),
        ]),
    );
}

#[test]
fn lone_equals_never_emits_refers() {
    assert!(!scan_kinds("a=b").contains(&TokenKind::Refers));
    assert!(!scan_kinds("=").contains(&TokenKind::Refers));
    assert!(!scan_kinds("= >").contains(&TokenKind::Refers));
}

#[test]
fn two_dots_split_a_range() {
    assert_eq!(
        scan("1..5"),
        owned(&[
            (TokenKind::Number, "1"),
            (TokenKind::Range, ".."),
            (TokenKind::Number, "5"),
        ]),
    );
}

#[test]
fn single_dot_is_a_decimal_point() {
    assert_eq!(scan("1.5"), owned(&[(TokenKind::Number, "1.5")]));
}

#[test]
fn signed_exponent_stays_one_number() {
    assert_eq!(scan("-1.5e-3"), owned(&[(TokenKind::Number, "-1.5e-3")]));
}

#[test]
fn range_between_keywords() {
    assert_eq!(
        scan("a..b"),
        owned(&[
            (TokenKind::Keyword, "a"),
            (TokenKind::Range, ".."),
            (TokenKind::Keyword, "b"),
        ]),
    );
}

// ─── Object references ─────────────────────────────────────────────────

#[test]
fn full_object_reference() {
    assert_eq!(
        scan("#<Foo:0x1234@5>"),
        owned(&[
            (TokenKind::OpenObject, "#<"),
            (TokenKind::Class, "Foo"),
            (TokenKind::ObjectAddrPrefix, ":"),
            (TokenKind::ObjectAddr, "0x1234"),
            (TokenKind::ObjectLinePrefix, "@"),
            (TokenKind::ObjectLine, "5"),
            (TokenKind::CloseObject, ">"),
        ]),
    );
}

#[test]
fn object_without_line_marker_drops_bare_close() {
    // `>` inside the address sub-state is consumed with no emit; the
    // address then flushes at end of input.
    assert_eq!(
        scan("#<Foo:0xdead>"),
        owned(&[
            (TokenKind::OpenObject, "#<"),
            (TokenKind::Class, "Foo"),
            (TokenKind::ObjectAddrPrefix, ":"),
            (TokenKind::ObjectAddr, "0xdead"),
        ]),
    );
}

#[test]
fn bare_hash_is_dropped() {
    assert_eq!(scan("#"), vec![]);
}

#[test]
fn object_reference_inside_array() {
    assert_eq!(
        scan_kinds("[#<A:1@2>]"),
        vec![
            TokenKind::OpenArray,
            TokenKind::OpenObject,
            TokenKind::Class,
            TokenKind::ObjectAddrPrefix,
            TokenKind::ObjectAddr,
            TokenKind::ObjectLinePrefix,
            TokenKind::ObjectLine,
            TokenKind::CloseObject,
            TokenKind::CloseArray,
        ],
    );
}

// ─── Nested structures ─────────────────────────────────────────────────

#[test]
fn nested_hash_of_strings_and_arrays() {
    assert_eq!(
        scan("{\"k\"=>[1, :a]}"),
        owned(&[
            (TokenKind::OpenHash, "{"),
            (TokenKind::OpenString, "\""),
            (TokenKind::String, "k"),
            (TokenKind::CloseString, "\""),
            (TokenKind::Refers, "=>"),
            (TokenKind::OpenArray, "["),
            (TokenKind::Number, "1"),
            (TokenKind::Comma, ","),
            (TokenKind::Whitespace, " "),
            (TokenKind::SymbolPrefix, ":"),
            (TokenKind::Symbol, "a"),
            (TokenKind::CloseArray, "]"),
            (TokenKind::CloseHash, "}"),
        ]),
    );
}

// ─── Internal consistency ──────────────────────────────────────────────

#[test]
fn corrupted_state_stack_reports_depth_error() {
    let mut scanner = Scanner::new(":");
    scanner.stack = vec![State::Object; MAX_DEPTH];
    let result = scanner.run(&mut |_, _| {});
    assert_eq!(result, Err(ScanError::DepthExceeded { at: 0 }));
}

#[test]
fn scan_error_displays_position() {
    let message = ScanError::Stuck { at: 7 }.to_string();
    assert!(message.contains('7'), "unexpected message: {message}");
}

// ─── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tokenize_always_succeeds(input in ".*") {
        let result = tokenize(&input, |_, _| {});
        prop_assert!(result.is_ok());
    }

    #[test]
    fn plain_structure_round_trips(input in r"[\[\]{}, \t]*") {
        let mut out = String::new();
        let result = tokenize(&input, |_, text| out.push_str(text));
        prop_assert!(result.is_ok());
        prop_assert_eq!(out, input);
    }

    #[test]
    fn tokenize_is_deterministic(input in ".*") {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = tokenize(&input, |kind, text| first.push((kind, text.to_owned())));
        let b = tokenize(&input, |kind, text| second.push((kind, text.to_owned())));
        prop_assert!(a.is_ok());
        prop_assert!(b.is_ok());
        prop_assert_eq!(first, second);
    }
}
