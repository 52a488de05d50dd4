use indoc::indoc;

use crate::ResourcePrinter;
use crate::ast::{BodyItem, Entry};
use crate::diagnostics::ErrorKind;
use crate::parser::{DEFAULT_RECURSION_LIMIT, Parser, parse};

/// `<x [((...1...))]>` with `depth` parentheses.
fn nested_parens(depth: usize) -> String {
    format!("<x [{}1{}]>", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn empty_input() {
    let resource = parse("").unwrap();
    assert!(resource.body.is_empty());
}

#[test]
fn whitespace_only() {
    let resource = parse(" \n\t").unwrap();
    assert_eq!(resource.body.len(), 1);
    assert!(matches!(&resource.body[0], BodyItem::Whitespace(ws) if ws.text == " \n\t"));
}

#[test]
fn whitespace_round_trip() {
    let input = indoc! {r#"

    <brand "Firefox">
      <about "About {{ brand }}"   title: "x">

    <plural($n) { $n == 1 ? "one" : "many" }>
    <unread[plural($n)] {one: "1", *many: "2"}>   "#};

    let resource = parse(input).unwrap();
    let rebuilt: String = resource.fragments(input).collect();
    assert_eq!(rebuilt, input);

    let kinds: Vec<_> = resource
        .body
        .iter()
        .map(|item| match item {
            BodyItem::Entry(_) => "entry",
            BodyItem::Whitespace(_) => "ws",
        })
        .collect();
    assert_eq!(
        kinds,
        ["ws", "entry", "ws", "entry", "ws", "entry", "ws", "entry", "ws"]
    );
}

#[test]
fn adjacent_entries_have_no_whitespace_item() {
    let resource = parse(r#"<a "1"><b "2">"#).unwrap();
    assert_eq!(resource.body.len(), 2);
    assert_eq!(resource.entries().count(), 2);
}

#[test]
fn trivia_dump() {
    let resource = parse("<a \"1\">\n\n<b \"2\">\n").unwrap();
    insta::assert_snapshot!(ResourcePrinter::new(&resource).with_trivia(true).dump(), @r#"
    Resource
      Entity a
        String "1"
      Whitespace "\n\n"
      Entity b
        String "2"
      Whitespace "\n"
    "#);
}

#[test]
fn get_returns_last_definition() {
    let resource = parse(r#"<x "first"> <y "other"> <x "second">"#).unwrap();
    let Some(Entry::Entity(entity)) = resource.get("x") else {
        panic!("expected an entity");
    };
    assert_eq!(entity.value.as_string(), Some("second"));
    assert!(resource.get("missing").is_none());
}

#[test]
fn entities_skip_macros() {
    let resource = parse(r#"<m($n) { $n } > <e "v">"#).unwrap();
    let names: Vec<_> = resource.entities().map(|e| e.id.as_str()).collect();
    assert_eq!(names, ["e"]);
    assert_eq!(resource.entries().count(), 2);
}

#[test]
fn recursion_limit_stops_deep_nesting() {
    let depth = DEFAULT_RECURSION_LIMIT as usize;
    let input = format!("<x {}{}>", "[".repeat(depth), "]".repeat(depth));

    let err = parse(&input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimitExceeded);
}

#[test]
fn nesting_at_default_limit_fits_thread_stack() {
    // Deepest accepted inputs, on a thread with the default stack size.
    let arrays = (DEFAULT_RECURSION_LIMIT / 2) as usize;
    let parens = DEFAULT_RECURSION_LIMIT as usize - 2;

    let handle = std::thread::spawn(move || {
        let nested_arrays = format!("<x {}{}>", "[".repeat(arrays), "]".repeat(arrays));
        (
            parse(&nested_arrays).is_ok(),
            parse(&nested_parens(parens)).is_ok(),
            parse(&nested_parens(parens + 1)).map_err(|e| e.kind),
        )
    });

    let (arrays_ok, parens_ok, over_limit) = handle.join().unwrap();
    assert!(arrays_ok);
    assert!(parens_ok);
    assert_eq!(over_limit.unwrap_err(), ErrorKind::RecursionLimitExceeded);
}

#[test]
fn recursion_limit_is_configurable() {
    let input = "<x [[[1]]]>";

    let err = Parser::new(input)
        .with_recursion_limit(Some(3))
        .parse()
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimitExceeded);
    assert_eq!(err.message, "nesting too deep: more than 3 levels");

    assert!(Parser::new(input).with_recursion_limit(Some(8)).parse().is_ok());
}

#[test]
fn recursion_limit_can_be_disabled() {
    let input = format!("<m() {{ {}1 }}>", "!".repeat(1000));
    assert!(parse(&input).is_err());
    assert!(Parser::new(&input).with_recursion_limit(None).parse().is_ok());
}

#[test]
fn json_shape() {
    let resource = parse(r#"<hi "Hello" title: [n]>"#).unwrap();
    let json = serde_json::to_string_pretty(&resource.body[0]).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "type": "Entry",
      "kind": "Entity",
      "id": {
        "name": "hi",
        "range": [
          1,
          3
        ]
      },
      "index": null,
      "ws_before_value": {
        "text": " ",
        "range": [
          3,
          4
        ]
      },
      "value": {
        "type": "String",
        "content": "Hello",
        "quote": "\"",
        "range": [
          4,
          11
        ]
      },
      "ws_after_value": {
        "text": " ",
        "range": [
          11,
          12
        ]
      },
      "attrs": {
        "title": {
          "type": "Array",
          "items": [
            {
              "kind": "Identifier",
              "name": "n",
              "range": [
                20,
                21
              ]
            }
          ],
          "range": [
            19,
            22
          ]
        }
      },
      "range": [
        0,
        23
      ]
    }
    "#);
}
