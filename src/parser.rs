//! IKON parsing.
//!
//! [`Parser`] drives one parse session: it owns the [`Reader`] and the
//! [`Document`] being built, and dispatches every value to the factory registered
//! for its sign. After a factory returns, the parser collects any `@name`
//! suffixes and binds them to the new value straight away, so a later `#name`
//! (even one nested in the same array or composite) resolves to it.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! let doc = ikon::from_str("\"the probe\" @probe [ #probe ]").unwrap();
//! let probe = doc.named("probe").unwrap();
//! let array = doc[doc.roots()[1]].as_array().unwrap();
//! assert_eq!(array[0], probe);
//! ```
//!
//! Values can also be pulled one at a time:
//!
//! ```rust
//! use ikon::Parser;
//!
//! let mut parser = Parser::new("=1 =2");
//! let first = parser.parse_next().unwrap();
//! assert!(parser.has_next());
//! let second = parser.parse_next().unwrap();
//! assert!(!parser.has_next());
//! assert_ne!(first, second);
//! ```

use crate::registry::Registration;
use crate::{Document, Error, FactoryRegistry, Position, Reader, Result, ValueId};

/// Prefix of a reference name declaration.
pub const NAME_SIGN: char = '@';

/// Default limit on how deeply values may nest, when parsing and composing.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Returns `true` for characters allowed in identifiers: type tags, attribute
/// names and reference names.
#[inline]
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_identifier_char)
}

/// A parse session over one input.
pub struct Parser<'a> {
    reader: Reader<'a>,
    factories: &'a FactoryRegistry,
    document: Document,
    sign_position: Position,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` using the standard factories.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_factories(Reader::new(input), FactoryRegistry::shared())
    }

    /// Creates a parser over an existing reader with a custom factory set.
    #[must_use]
    pub fn with_factories(reader: Reader<'a>, factories: &'a FactoryRegistry) -> Self {
        Parser {
            reader,
            factories,
            document: Document::new(),
            sign_position: Position::START,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how many levels values may nest before parsing fails.
    ///
    /// ```rust
    /// use ikon::Parser;
    ///
    /// assert!(Parser::new("[ [ =1 ] ]").with_max_depth(3).parse_all().is_ok());
    /// assert!(Parser::new("[ [ =1 ] ]").with_max_depth(2).parse_all().is_err());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The underlying reader, for factories reading a value body.
    pub fn reader(&mut self) -> &mut Reader<'a> {
        &mut self.reader
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document being built, for factories adding values.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Position of the sign of the value most recently dispatched.
    #[must_use]
    pub fn sign_position(&self) -> Position {
        self.sign_position
    }

    /// Looks up a name declared so far in this session.
    #[must_use]
    pub fn named_value(&self, name: &str) -> Option<ValueId> {
        self.document.named(name)
    }

    /// Returns `true` if anything but whitespace remains.
    pub fn has_next(&mut self) -> bool {
        self.reader.skip_whitespaces();
        self.reader.has_next()
    }

    /// Parses the next top-level value and appends it to the document roots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] if no value remains, and any error raised
    /// while parsing the value or its names.
    pub fn parse_next(&mut self) -> Result<ValueId> {
        let id = self.parse_value()?;
        self.document.push_root(id);
        Ok(id)
    }

    /// Parses every remaining top-level value and returns the document.
    ///
    /// # Errors
    ///
    /// Returns the first error met; the partial document is discarded.
    pub fn parse_all(mut self) -> Result<Document> {
        while self.has_next() {
            self.parse_next()?;
        }
        Ok(self.document)
    }

    /// Parses one value, including its `@name` suffixes, without making it a
    /// root. Factories call this for nested values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] on exhausted input, [`Error::Format`] for a
    /// sign with no factory or a value nested too deeply, and any error from
    /// the factory or name binding.
    pub fn parse_value(&mut self) -> Result<ValueId> {
        self.reader.skip_whitespaces();
        if !self.reader.has_next() {
            return Err(Error::end_of_stream(self.reader.position(), "a value"));
        }

        let position = self.reader.position();
        if self.depth >= self.max_depth {
            return Err(Error::format(
                position,
                format!("values nested deeper than {} levels", self.max_depth),
            ));
        }
        let sign = self.reader.peek()?;
        let factories = self.factories;
        let factory = factories.get(sign).ok_or_else(|| {
            Error::format(position, format!("unrecognized value sign '{}'", sign))
        })?;
        self.reader.read()?;
        self.sign_position = position;

        tracing::trace!(%sign, %position, "dispatching value");
        self.depth += 1;
        let parsed = factory.parse(self);
        self.depth -= 1;
        let id = parsed?;
        self.parse_names(id)?;
        Ok(id)
    }

    /// Reads an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] on exhausted input and [`Error::Format`]
    /// if the next character can't start an identifier.
    pub fn read_identifier(&mut self) -> Result<String> {
        let position = self.reader.position();
        let identifier = self.reader.read_while(is_identifier_char)?;
        if identifier.is_empty() {
            let found = self.reader.peek()?;
            return Err(Error::format(
                position,
                format!("expected an identifier, found '{}'", found),
            ));
        }
        Ok(identifier)
    }

    fn parse_names(&mut self, id: ValueId) -> Result<()> {
        loop {
            self.reader.skip_whitespaces();
            if !self.reader.has_next() || self.reader.peek()? != NAME_SIGN {
                return Ok(());
            }

            let position = self.reader.position();
            self.reader.read()?;
            let name = self.read_identifier()?;
            if self.document.name_at(id, &name, Some(position))? == Registration::Added {
                tracing::debug!(%name, value = %id, %position, "declared reference name");
            }
        }
    }
}
