use ikon::{
    from_str, to_string, value_to_string, Document, Error, Number, Parser, ValueKind,
};

fn assert_round_trip(input: &str) -> Document {
    let doc = from_str(input).unwrap();
    let text = to_string(&doc).unwrap();
    println!("Composed:\n{}", text);

    let again = from_str(&text).unwrap();
    assert_eq!(doc.roots().len(), again.roots().len());
    for (&left, &right) in doc.roots().iter().zip(again.roots()) {
        assert!(
            doc.same_shape(left, &again, right),
            "root differs after round trip:\n{}",
            text
        );
    }
    again
}

#[test]
fn test_scenario_shared_empty_text() {
    let doc = from_str("\"\" @x [ #x ] { T child #x }").unwrap();
    let x = doc.named("x").unwrap();
    assert_eq!(doc[x].as_text(), Some(""));

    let array = doc[doc.roots()[1]].as_array().unwrap();
    assert_eq!(array, &[x]);

    let composite = doc[doc.roots()[2]].as_composite().unwrap();
    assert_eq!(composite.tag(), "T");
    assert_eq!(composite.get("child"), Some(x));
}

#[test]
fn test_mutation_through_alias_is_visible() {
    let mut doc = from_str("{ Box } @box [ #box ] { Holder content #box }").unwrap();
    let boxed = doc.named("box").unwrap();
    let marker = doc.text("marker");
    doc.set_attribute(boxed, "label", marker).unwrap();

    let via_array = doc[doc.roots()[1]].as_array().unwrap()[0];
    let via_holder = doc[doc.roots()[2]]
        .as_composite()
        .unwrap()
        .get("content")
        .unwrap();

    for alias in [via_array, via_holder] {
        let label = doc[alias].as_composite().unwrap().get("label").unwrap();
        assert_eq!(doc[label].as_text(), Some("marker"));
    }
}

#[test]
fn test_escape_decoding() {
    let doc = from_str(r#""a\nb\"c""#).unwrap();
    assert_eq!(doc[doc.roots()[0]].as_text(), Some("a\nb\"c"));
}

#[test]
fn test_special_numbers() {
    let doc = from_str("=Infinity =-Infinity =NaN").unwrap();
    let numbers: Vec<_> = doc
        .root_values()
        .map(|value| value.as_numeric().unwrap().number().clone())
        .collect();

    assert_eq!(numbers[0], Number::Infinity);
    assert_eq!(numbers[1], Number::NegativeInfinity);
    assert!(matches!(numbers[2], Number::NaN));
}

#[test]
fn test_multi_naming() {
    let doc = from_str("=1 @one @uno @eins").unwrap();
    let root = doc.roots()[0];
    for name in ["one", "uno", "eins"] {
        assert_eq!(doc.named(name), Some(root));
    }
    let names: Vec<_> = doc[root].names().collect();
    assert_eq!(names, vec!["one", "uno", "eins"]);
}

#[test]
fn test_undefined_reference_fails() {
    let err = from_str("#nonexistent").unwrap_err();
    assert!(matches!(
        err,
        Error::UndefinedReference { ref name, .. } if name == "nonexistent"
    ));
}

#[test]
fn test_duplicate_name_fails() {
    let err = from_str("=1 @dup =2 @dup").unwrap_err();
    match err {
        Error::DuplicateName { name, position } => {
            assert_eq!(name, "dup");
            assert_eq!(position.map(|p| p.column), Some(12));
        }
        other => panic!("Expected duplicate name, got {:?}", other),
    }
}

#[test]
fn test_renaming_through_reference() {
    let doc = from_str("\"v\" @first #first @second [ #second ]").unwrap();
    let first = doc.named("first").unwrap();
    assert_eq!(doc.named("second"), Some(first));
    assert_eq!(doc.roots()[1], first);

    let names: Vec<_> = doc[first].names().collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_same_name_on_same_value_is_allowed() {
    let doc = from_str("=1 @one #one @one").unwrap();
    let one = doc.named("one").unwrap();
    assert_eq!(doc[one].names().count(), 1);
}

#[test]
fn test_forward_reference_fails() {
    let err = from_str("[ #later ] =1 @later").unwrap_err();
    assert!(matches!(err, Error::UndefinedReference { .. }));
}

#[test]
fn test_reference_inside_same_composite() {
    let doc = from_str("{ Pair left =1 @l right #l }").unwrap();
    let pair = doc[doc.roots()[0]].as_composite().unwrap();
    assert_eq!(pair.get("left"), pair.get("right"));
}

#[test]
fn test_self_reference_fails() {
    let err = from_str("[ #me ] @me").unwrap_err();
    assert!(matches!(err, Error::UndefinedReference { .. }));
}

#[test]
fn test_round_trip_nested() {
    assert_round_trip(
        "{ Order
            id =12345
            customer { User name \"Alice\" tags [ \"vip\" ] } @alice
            items [
                { Item sku \"A-1\" price =29.99 }
                { Item sku \"B-2\" price =4.5e1 }
            ]
            reviewer #alice
        }",
    );
}

#[test]
fn test_round_trip_preserves_sharing() {
    let again = assert_round_trip("\"the probe\" @probe #probe [ #probe ] { N child #probe }");
    let probe = again.named("probe").unwrap();
    assert_eq!(again.roots()[1], probe);
    assert_eq!(again[again.roots()[2]].as_array().unwrap()[0], probe);
    assert_eq!(
        again[again.roots()[3]].as_composite().unwrap().get("child"),
        Some(probe)
    );
}

#[test]
fn test_round_trip_escapes_and_specials() {
    assert_round_trip(r#""tab\there" "quote\"back\\slash" "cr\rlf\n" =-Infinity =NaN =-0.0"#);
}

#[test]
fn test_compose_built_document() {
    let mut doc = Document::new();
    let x = doc.numeric(1.5);
    let y = doc.numeric(-2);
    let point = doc.composite("Point");
    doc.set_attribute(point, "x", x).unwrap();
    doc.set_attribute(point, "y", y).unwrap();
    doc.name(point, "origin").unwrap();
    doc.push_root(point);

    assert_eq!(
        value_to_string(&doc, point).unwrap(),
        "{ Point\n\tx =1.5\n\ty =-2\n} @origin"
    );

    let again = from_str(&to_string(&doc).unwrap()).unwrap();
    assert!(doc.same_shape(point, &again, again.roots()[0]));
}

#[test]
fn test_parse_next_keeps_session() {
    let mut parser = Parser::new("\"the probe\" @probe\n#probe\n[\n\t#probe\n]");
    let probe = parser.parse_next().unwrap();
    let root = parser.parse_next().unwrap();
    let array = parser.parse_next().unwrap();

    assert_eq!(probe, root);
    let doc = parser.into_document();
    match doc[array].kind() {
        ValueKind::Array(elements) => assert_eq!(elements, &vec![probe]),
        other => panic!("Expected array, got {:?}", other),
    }
}

#[test]
fn test_sessions_are_independent() {
    let first = from_str("=1 @name").unwrap();
    let second = from_str("=2 @name").unwrap();
    assert!(first.named("name").is_some());
    assert!(second.named("name").is_some());
    assert!(from_str("#name").is_err());
}
