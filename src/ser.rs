//! Serde export of IKON documents.
//!
//! A [`Document`] or a single value (through [`Document::view`]) can be handed to
//! any serde serializer, which makes it easy to transcode IKON into JSON and other
//! formats. The mapping is:
//!
//! | IKON | Serde data model |
//! |------|------------------|
//! | numeric integer | `i64` |
//! | numeric big integer | string of digits |
//! | numeric float, `Infinity`, `-Infinity`, `NaN` | `f64` |
//! | text | string |
//! | array | sequence |
//! | composite | map with one entry: type tag to a map of attributes |
//! | document | sequence of its roots |
//!
//! Shared values are written out in full at every place they occur, and
//! reference names are not exported. Values nested deeper than
//! [`DEFAULT_MAX_DEPTH`](crate::parser::DEFAULT_MAX_DEPTH) levels fail to
//! export.
//!
//! ## Examples
//!
//! ```rust
//! let doc = ikon::from_str("{ Point x =1 y =2.5 }").unwrap();
//! let json = serde_json::to_string(&doc.view(doc.roots()[0])).unwrap();
//! assert_eq!(json, r#"{"Point":{"x":1,"y":2.5}}"#);
//! ```

use crate::parser::DEFAULT_MAX_DEPTH;
use crate::{Document, Number, ValueId, ValueKind};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A borrowed value of a document that implements [`Serialize`].
#[derive(Clone, Copy, Debug)]
pub struct ValueView<'d> {
    document: &'d Document,
    id: ValueId,
    depth: usize,
}

impl Document {
    /// Returns a serializable view of the value `id`.
    #[must_use]
    pub fn view(&self, id: ValueId) -> ValueView<'_> {
        ValueView {
            document: self,
            id,
            depth: 0,
        }
    }
}

impl<'d> ValueView<'d> {
    fn child(&self, id: ValueId) -> ValueView<'d> {
        ValueView {
            document: self.document,
            id,
            depth: self.depth + 1,
        }
    }
}

struct Attributes<'d>(ValueView<'d>);

impl Serialize for ValueView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // an acyclic path can't be longer than the arena
        if self.depth > self.document.len() {
            return Err(S::Error::custom("value graph contains a cycle"));
        }
        if self.depth >= DEFAULT_MAX_DEPTH {
            return Err(S::Error::custom(format!(
                "value {} is nested deeper than {} levels",
                self.id, DEFAULT_MAX_DEPTH
            )));
        }
        let value = self
            .document
            .get(self.id)
            .ok_or_else(|| S::Error::custom(format!("unknown value {}", self.id)))?;

        match value.kind() {
            ValueKind::Numeric(numeric) => match numeric.number() {
                Number::Integer(i) => serializer.serialize_i64(*i),
                Number::BigInt(big) => serializer.serialize_str(&big.to_string()),
                number => serializer.serialize_f64(number.as_f64()),
            },
            ValueKind::Text(text) => serializer.serialize_str(text),
            ValueKind::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for &element in elements {
                    seq.serialize_element(&self.child(element))?;
                }
                seq.end()
            }
            ValueKind::Composite(composite) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(composite.tag(), &Attributes(*self))?;
                map.end()
            }
        }
    }
}

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = self.0;
        let composite = view
            .document
            .get(view.id)
            .and_then(|value| value.as_composite())
            .ok_or_else(|| S::Error::custom(format!("value {} is not a composite", view.id)))?;

        let mut map = serializer.serialize_map(Some(composite.attributes().len()))?;
        for (name, &child) in composite.attributes() {
            map.serialize_entry(name, &view.child(child))?;
        }
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.roots().len()))?;
        for &root in self.roots() {
            seq.serialize_element(&self.view(root))?;
        }
        seq.end()
    }
}
