//! # ikon
//!
//! Parser and composer for IKON, a textual object notation with named
//! references.
//!
//! ## What is IKON?
//!
//! An IKON document is a sequence of values. Each value starts with a sign
//! character that selects the factory parsing it:
//!
//! ```text
//! "some text" @text
//! =3 @number
//! =Infinity
//! [
//!     #text
//!     #number
//! ]
//! { Point
//!     x =1
//!     y =2
//! } @origin
//! ```
//!
//! Any value may be followed by one or more `@name` tags. A later `#name` stands
//! for that very value: it is shared, not copied.
//!
//! ## Key Features
//!
//! - **Extensible**: value kinds are [`ValueFactory`] implementations keyed by
//!   sign; new kinds register without touching the parser
//! - **Shared references**: `#name` yields the same [`ValueId`] as the named value
//! - **Round-trip**: composed text parses back to an equivalent document,
//!   sharing included
//! - **Positioned errors**: every parse error reports line and column
//!
//! ## Quick Start
//!
//! ```rust
//! let doc = ikon::from_str("\"\" @x [ #x ] { T child #x }").unwrap();
//!
//! let x = doc.named("x").unwrap();
//! let array = doc[doc.roots()[1]].as_array().unwrap();
//! let composite = doc[doc.roots()[2]].as_composite().unwrap();
//!
//! assert_eq!(array[0], x);
//! assert_eq!(composite.get("child"), Some(x));
//!
//! let text = ikon::to_string(&doc).unwrap();
//! let again = ikon::from_str(&text).unwrap();
//! assert!(doc.same_shape(doc.roots()[2], &again, again.roots()[2]));
//! ```
//!
//! ## Format
//!
//! See the [`grammar`] module for the complete notation.

pub mod error;
pub mod factories;
pub mod factory;
pub mod grammar;
pub mod map;
pub mod options;
pub mod parser;
pub mod reader;
pub mod registry;
pub mod ser;
pub mod value;
pub mod writer;

pub use error::{Error, Position, Result};
pub use factories::{
    ArrayFactory, CompositeFactory, NumericFactory, ReferenceFactory, TextFactory,
};
pub use factory::{FactoryRegistry, ValueFactory};
pub use map::AttributeMap;
pub use options::ComposeOptions;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
pub use reader::{CharAction, Reader};
pub use registry::ReferenceRegistry;
pub use ser::ValueView;
pub use value::{Composite, Document, Number, Numeric, Value, ValueId, ValueKind};
pub use writer::Composer;

use std::io;

/// Parses every value of an IKON string into a [`Document`].
///
/// # Examples
///
/// ```rust
/// let doc = ikon::from_str("=3 @number").unwrap();
/// let number = doc.named("number").unwrap();
/// assert_eq!(doc[number].type_name(), "Numeric");
/// ```
///
/// # Errors
///
/// Returns the first parse error, with its position.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    Parser::new(s).parse_all()
}

/// Parses every value of an IKON string using a custom factory set.
///
/// # Errors
///
/// Returns the first parse error, with its position.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_factories(s: &str, factories: &FactoryRegistry) -> Result<Document> {
    Parser::with_factories(Reader::new(s), factories).parse_all()
}

/// Parses every value read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = ikon::from_reader(Cursor::new(b"[ =1 =2 ]")).unwrap();
/// assert_eq!(doc.roots().len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or it is not
/// valid IKON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Composes every root of `document`, one per line.
///
/// # Errors
///
/// Returns an error if the document can't be written as IKON (a value that
/// contains itself, or an invalid tag or attribute name).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, &ComposeOptions::default())
}

/// Composes every root of `document` with custom layout options.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(document: &Document, options: &ComposeOptions) -> Result<String> {
    let mut composer = Composer::with_options(String::with_capacity(256), document, options.clone());
    composer.compose_document()?;
    Ok(composer.into_inner())
}

/// Composes a single value (and everything under it), without a trailing
/// newline.
///
/// # Examples
///
/// ```rust
/// let mut doc = ikon::Document::new();
/// let text = doc.text("something");
/// doc.name(text, "name").unwrap();
/// assert_eq!(ikon::value_to_string(&doc, text).unwrap(), "\"something\" @name");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn value_to_string(document: &Document, id: ValueId) -> Result<String> {
    let mut composer = Composer::new(String::new(), document);
    composer.compose(id)?;
    Ok(composer.into_inner())
}

/// Composes every root of `document` into an I/O stream.
///
/// # Errors
///
/// Returns an error if composition or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    let text = to_string(document)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMING_INPUT: &str = "\"some text\" @text
=3 @number
=Infinity @notNumber
[] @array
{ NestedStuff
\tatr1 =5 @nestedNumber
\tatr2 \"more text\" @nestedText
} @composite @otherName@noSpace";

    #[test]
    fn test_round_trip_naming_document() {
        let doc = from_str(NAMING_INPUT).unwrap();
        let text = to_string(&doc).unwrap();
        let again = from_str(&text).unwrap();

        assert_eq!(doc.roots().len(), again.roots().len());
        for (&left, &right) in doc.roots().iter().zip(again.roots()) {
            assert!(doc.same_shape(left, &again, right));
        }
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("=1 @one").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"=1 @one\n");
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'"', 0xff, b'"'];
        assert!(matches!(from_reader(bytes), Err(Error::Io(_))));
    }

    #[test]
    fn test_custom_indent() {
        let doc = from_str("{ T a [ =1 ] }").unwrap();
        let options = ComposeOptions::new().with_indent("    ");
        let text = to_string_with_options(&doc, &options).unwrap();
        assert_eq!(text, "{ T\n    a [\n        =1\n    ]\n}\n");
    }
}
