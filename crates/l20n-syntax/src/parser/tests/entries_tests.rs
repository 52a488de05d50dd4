use indoc::indoc;
use rowan::{TextRange, TextSize};

use super::{dump, dump_spans, parse_err};
use crate::ast::Entry;
use crate::diagnostics::ErrorKind;
use crate::parser::parse;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

#[test]
fn simple_entity() {
    let resource = parse(r#"<greeting "Hello, #1!">"#).unwrap();
    let Some(Entry::Entity(entity)) = resource.entries().next() else {
        panic!("expected an entity");
    };
    assert_eq!(entity.id.name, "greeting");
    assert!(entity.index.is_none());
    assert_eq!(entity.value.as_string(), Some("Hello, #1!"));
    assert!(entity.attrs.is_none());
}

#[test]
fn entity_spans() {
    insta::assert_snapshot!(dump_spans(r#"<greeting "Hello">"#), @r#"
    Resource @0..18
      Entity greeting @0..18
        String "Hello" @10..17
    "#);
}

#[test]
fn entity_keeps_value_whitespace() {
    let resource = parse(r#"<x   "v"  >"#).unwrap();
    let Some(Entry::Entity(entity)) = resource.entries().next() else {
        panic!("expected an entity");
    };
    assert_eq!(entity.ws_before_value.text, "   ");
    assert_eq!(entity.ws_before_value.range, range(2, 5));
    assert_eq!(entity.ws_after_value.text, "  ");
    assert_eq!(entity.ws_after_value.range, range(8, 10));
}

#[test]
fn entity_value_whitespace_may_be_empty() {
    let resource = parse(r#"<x[1]"v" a: "1">"#).unwrap();
    let Some(Entry::Entity(entity)) = resource.entries().next() else {
        panic!("expected an entity");
    };
    assert!(entity.ws_before_value.range.is_empty());
    assert_eq!(u32::from(entity.ws_before_value.range.start()), 5);
    assert_eq!(entity.ws_after_value.text, " ");
}

#[test]
fn entity_with_index() {
    insta::assert_snapshot!(dump(r#"<unread[plural(n), gender] {one: "1", many: "2"}>"#), @r#"
    Resource
      Entity unread
        Index
          Call plural
            Ident n
          Ident gender
        Object
          Key one
            String "1"
          Key many
            String "2"
    "#);
}

#[test]
fn entity_with_attributes() {
    let input = indoc! {r#"
    <about "About"
      accesskey: "A",
      title: ["About", "this"]>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Entity about
        String "About"
        Attr accesskey
          String "A"
        Attr title
          Array
            String "About"
            String "this"
    "#);
}

#[test]
fn duplicate_attribute_last_wins() {
    let resource = parse(r#"<x "v" a: "1", b: "2", a: "3">"#).unwrap();
    let Some(Entry::Entity(entity)) = resource.entries().next() else {
        panic!("expected an entity");
    };
    let attrs = entity.attrs.as_ref().unwrap();
    let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(attrs["a"].as_string(), Some("3"));
}

#[test]
fn quoted_identifiers() {
    insta::assert_snapshot!(dump(r#"<'brand' "Fx" 'short': "F">"#), @r#"
    Resource
      Entity brand
        String "Fx"
        Attr short
          String "F"
    "#);
}

#[test]
fn identifiers_match_scan_order() {
    let input = indoc! {r#"
    <one "1">
    <two '2'>

    <three "3" title: "x">
    "#};

    let resource = parse(input).unwrap();
    let ids: Vec<_> = resource.entries().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, ["one", "two", "three"]);
}

#[test]
fn macro_entry() {
    insta::assert_snapshot!(dump(r#"<plural($n) { $n == 1 ? "one" : "many" }>"#), @r#"
    Resource
      Macro plural($n)
        Conditional
          Binary ==
            Variable $n
            Integer 1
          String "one"
          String "many"
    "#);
}

#[test]
fn macro_with_params_and_attributes() {
    insta::assert_snapshot!(dump(r#"<pick( $a , $b ) {$a || $b} doc: "choose">"#), @r#"
    Resource
      Macro pick($a, $b)
        Logical ||
          Variable $a
          Variable $b
        Attr doc
          String "choose"
    "#);
}

#[test]
fn macro_without_params() {
    insta::assert_snapshot!(dump("<zero() { 0 }>"), @r"
    Resource
      Macro zero()
        Integer 0
    ");
}

#[test]
fn macro_params_strip_sigil() {
    let resource = parse("<id( $n, $m, $a ) {2}  >").unwrap();
    let Some(Entry::Macro(mac)) = resource.entries().next() else {
        panic!("expected a macro");
    };
    let params: Vec<_> = mac.params.iter().map(|p| p.as_str()).collect();
    assert_eq!(params, ["n", "m", "a"]);
    assert_eq!(mac.body.as_integer(), Some(2));
}

#[test]
fn macro_param_needs_sigil() {
    let err = parse_err("<id(n) {2}>");
    assert_eq!(err.kind, ErrorKind::MalformedExpression);
    assert_eq!(err.message, "malformed expression: expected `$`, found `n`");
}

#[test]
fn macro_body_needs_braces() {
    let err = parse_err("<m($n) n>");
    assert_eq!(err.kind, ErrorKind::MalformedExpression);
    assert_eq!(err.message, "malformed expression: expected `{`, found `n`");
}

#[test]
fn macro_params_need_separator() {
    let err = parse_err("<m($a $b) { $a }>");
    assert_eq!(err.kind, ErrorKind::MalformedExpression);
    assert_eq!(u32::from(err.range.start()), 6);
}

#[test]
fn attribute_separator_required() {
    let err = parse_err(r#"<x "v" a: "1" b: "2">"#);
    assert_eq!(err.kind, ErrorKind::ExpectedAttributeSeparator);
    assert_eq!(u32::from(err.range.start()), 14);
    assert_eq!(err.message, "expected `,` between attributes: found `b`");
}

#[test]
fn attribute_trailing_comma() {
    let err = parse_err(r#"<x "v" a: "1",>"#);
    assert_eq!(err.kind, ErrorKind::MalformedIdentifier);
    assert_eq!(u32::from(err.range.start()), 14);
    assert_eq!(err.message, "expected an identifier: found `>`");
}

#[test]
fn attribute_without_colon() {
    let err = parse_err(r#"<x "v" a "1">"#);
    assert_eq!(err.kind, ErrorKind::ExpectedKeyValueSeparator);
}

#[test]
fn comment_is_unsupported() {
    let err = parse_err("/* note */ <x \"v\">");
    assert_eq!(err.kind, ErrorKind::UnsupportedConstruct);
    assert_eq!(u32::from(err.range.start()), 0);
    assert_eq!(u32::from(err.range.end()), 2);
}

#[test]
fn entry_must_start_with_angle_bracket() {
    let err = parse_err("<x \"v\">\nx");
    assert_eq!(err.kind, ErrorKind::UnexpectedEntryStart);
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 1);
}
