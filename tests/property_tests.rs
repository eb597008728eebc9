//! Property-based tests: composed documents parse back to the same shape, and
//! arbitrary input never panics the parser.

use ikon::{from_str, to_string, Document, ValueId};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Shape {
    Integer(i64),
    Float(f64),
    Text(String),
    Array(Vec<Named>),
    Composite(String, Vec<(String, Named)>),
}

#[derive(Clone, Debug)]
struct Named {
    shape: Shape,
    named: bool,
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,16}",
        "[a-z \\\\\"\n\r\t]{0,16}",
    ]
}

fn leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i64>().prop_map(Shape::Integer),
        any::<f64>().prop_map(Shape::Float),
        text().prop_map(Shape::Text),
    ]
}

fn named(shape: impl Strategy<Value = Shape>) -> impl Strategy<Value = Named> {
    (shape, any::<bool>()).prop_map(|(shape, named)| Named { shape, named })
}

fn shape() -> impl Strategy<Value = Shape> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(named(inner.clone()), 0..6).prop_map(Shape::Array),
            (
                identifier(),
                prop::collection::vec((identifier(), named(inner)), 0..6)
            )
                .prop_map(|(tag, attributes)| Shape::Composite(tag, attributes)),
        ]
    })
}

struct Builder {
    document: Document,
    next_name: usize,
    named: Vec<ValueId>,
}

impl Builder {
    fn new() -> Self {
        Builder {
            document: Document::new(),
            next_name: 0,
            named: Vec::new(),
        }
    }

    fn build(&mut self, node: &Named) -> ValueId {
        let id = match &node.shape {
            Shape::Integer(i) => self.document.numeric(*i),
            Shape::Float(f) => self.document.numeric(*f),
            Shape::Text(s) => self.document.text(s.as_str()),
            Shape::Array(elements) => {
                let ids: Vec<_> = elements.iter().map(|e| self.build(e)).collect();
                self.document.array(ids)
            }
            Shape::Composite(tag, attributes) => {
                let children: Vec<_> = attributes
                    .iter()
                    .map(|(name, child)| (name.clone(), self.build(child)))
                    .collect();
                let id = self.document.composite(tag.as_str());
                for (name, child) in children {
                    self.document.set_attribute(id, &name, child).unwrap();
                }
                id
            }
        };
        if node.named {
            let name = format!("v{}", self.next_name);
            self.next_name += 1;
            self.document.name(id, &name).unwrap();
            self.named.push(id);
        }
        id
    }
}

fn assert_same_roots(doc: &Document) -> Result<Document, TestCaseError> {
    let text = to_string(doc).unwrap();
    let again = from_str(&text)
        .map_err(|e| TestCaseError::fail(format!("{}\nin:\n{}", e, text)))?;

    prop_assert_eq!(doc.roots().len(), again.roots().len());
    for (&left, &right) in doc.roots().iter().zip(again.roots()) {
        prop_assert!(doc.same_shape(left, &again, right), "differs:\n{}", text);
    }
    Ok(again)
}

proptest! {
    #[test]
    fn prop_round_trip_preserves_shape(nodes in prop::collection::vec(named(shape()), 1..4)) {
        let mut builder = Builder::new();
        for node in &nodes {
            let root = builder.build(node);
            builder.document.push_root(root);
        }
        assert_same_roots(&builder.document)?;
    }

    #[test]
    fn prop_round_trip_preserves_sharing(node in named(shape())) {
        let mut builder = Builder::new();
        let root = builder.build(&Named { shape: node.shape, named: true });
        builder.document.push_root(root);

        let aliases = builder.named.clone();
        let holder = builder.document.array(aliases.clone());
        builder.document.push_root(holder);

        let again = assert_same_roots(&builder.document)?;
        let elements = again[again.roots()[1]].as_array().unwrap();
        for (&original, &alias) in aliases.iter().zip(elements) {
            let name = builder.document[original].first_name().unwrap();
            prop_assert_eq!(again.named(name), Some(alias));
        }
    }

    #[test]
    fn prop_integers_keep_value(n in any::<i64>()) {
        let doc = from_str(&format!("={}", n)).unwrap();
        let numeric = doc[doc.roots()[0]].as_numeric().unwrap();
        prop_assert_eq!(numeric.number().as_i64(), Some(n));
    }

    #[test]
    fn prop_text_escapes_round_trip(s in text()) {
        let mut doc = Document::new();
        let id = doc.text(s.as_str());
        doc.push_root(id);

        let again = from_str(&to_string(&doc).unwrap()).unwrap();
        prop_assert_eq!(again[again.roots()[0]].as_text(), Some(s.as_str()));
    }

    #[test]
    fn prop_parser_never_panics(input in "[\\[\\]{}=#@\"\\\\a-zA-Z0-9 .\n-]{0,64}") {
        let _ = from_str(&input);
    }
}
