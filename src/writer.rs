//! IKON composition.
//!
//! The [`Composer`] writes values back out as IKON text:
//!
//! - numeric values as `=` plus their literal text
//! - text quoted, with `\\`, `\"`, `\n`, `\r`, `\t` escapes
//! - arrays and composites one child per line, one indent per nesting level
//! - every reference name of a value as a ` @name` suffix after its body
//!
//! A named value met a second time is written as `#name`, so shared values stay
//! shared when the text is parsed again.
//!
//! ## Examples
//!
//! ```rust
//! use ikon::Document;
//!
//! let mut doc = Document::new();
//! let something = doc.text("something");
//! doc.name(something, "name").unwrap();
//! let composite = doc.composite("Composite");
//! doc.set_attribute(composite, "child", something).unwrap();
//! doc.push_root(composite);
//! doc.push_root(something);
//!
//! let text = ikon::to_string(&doc).unwrap();
//! assert_eq!(
//!     text,
//!     "{ Composite\n\tchild \"something\" @name\n}\n#name\n"
//! );
//! ```

use crate::factories::{
    ArrayFactory, CompositeFactory, NumericFactory, ReferenceFactory, TextFactory,
};
use crate::parser::{is_identifier, NAME_SIGN};
use crate::{ComposeOptions, Document, Error, Result, ValueId, ValueKind};
use std::collections::HashSet;
use std::fmt::Write;

/// Writes the values of a [`Document`] to any [`std::fmt::Write`] sink.
pub struct Composer<'d, W> {
    out: W,
    document: &'d Document,
    options: ComposeOptions,
    depth: usize,
    written: HashSet<ValueId>,
    in_progress: HashSet<ValueId>,
}

impl<'d, W: Write> Composer<'d, W> {
    pub fn new(out: W, document: &'d Document) -> Self {
        Self::with_options(out, document, ComposeOptions::default())
    }

    pub fn with_options(out: W, document: &'d Document, options: ComposeOptions) -> Self {
        Composer {
            out,
            document,
            options,
            depth: 0,
            written: HashSet::new(),
            in_progress: HashSet::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes every root of the document, each followed by a newline.
    ///
    /// # Errors
    ///
    /// See [`Composer::compose`].
    pub fn compose_document(&mut self) -> Result<()> {
        for &root in self.document.roots() {
            self.compose(root)?;
            self.out.write_str(&self.options.newline)?;
        }
        Ok(())
    }

    /// Writes one value and its reference names, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Fails if the value or one of its children is not in the document, if a
    /// tag or attribute name is not an identifier, if the value contains
    /// itself or nests deeper than [`ComposeOptions::max_depth`], or if the sink
    /// fails. The composer stays usable after an error.
    pub fn compose(&mut self, id: ValueId) -> Result<()> {
        let depth = self.depth;
        let result = self.compose_value(id);
        if result.is_err() {
            self.depth = depth;
            self.in_progress.clear();
        }
        result
    }

    fn compose_value(&mut self, id: ValueId) -> Result<()> {
        let document = self.document;
        let value = document
            .get(id)
            .ok_or_else(|| Error::custom(format!("unknown value {}", id)))?;

        if let Some(name) = value.first_name() {
            if self.written.contains(&id) {
                self.out.write_char(ReferenceFactory::SIGN)?;
                self.out.write_str(name)?;
                return Ok(());
            }
        }
        if self.depth >= self.options.max_depth {
            return Err(Error::custom(format!(
                "value {} is nested deeper than {} levels",
                id, self.options.max_depth
            )));
        }
        if !self.in_progress.insert(id) {
            return Err(Error::custom(format!(
                "value {} contains itself and can't be composed",
                id
            )));
        }

        match value.kind() {
            ValueKind::Numeric(numeric) => {
                self.out.write_char(NumericFactory::SIGN)?;
                self.out.write_str(numeric.text())?;
            }
            ValueKind::Text(text) => self.write_text(text)?,
            ValueKind::Array(elements) => {
                self.out.write_char(ArrayFactory::SIGN)?;
                self.out.write_str(&self.options.newline)?;
                self.depth += 1;
                for &element in elements {
                    self.write_indent()?;
                    self.compose_value(element)?;
                    self.out.write_str(&self.options.newline)?;
                }
                self.depth -= 1;
                self.write_indent()?;
                self.out.write_char(ArrayFactory::CLOSING_CHAR)?;
            }
            ValueKind::Composite(composite) => {
                check_identifier(composite.tag(), "type tag")?;
                self.out.write_char(CompositeFactory::SIGN)?;
                self.out.write_char(' ')?;
                self.out.write_str(composite.tag())?;
                self.out.write_str(&self.options.newline)?;
                self.depth += 1;
                for (attribute, &child) in composite.attributes() {
                    check_identifier(attribute, "attribute name")?;
                    self.write_indent()?;
                    self.out.write_str(attribute)?;
                    self.out.write_char(' ')?;
                    self.compose_value(child)?;
                    self.out.write_str(&self.options.newline)?;
                }
                self.depth -= 1;
                self.write_indent()?;
                self.out.write_char(CompositeFactory::CLOSING_CHAR)?;
            }
        }

        for name in value.names() {
            self.out.write_char(' ')?;
            self.out.write_char(NAME_SIGN)?;
            self.out.write_str(name)?;
        }

        self.in_progress.remove(&id);
        if value.has_names() {
            self.written.insert(id);
        }
        Ok(())
    }

    fn write_indent(&mut self) -> Result<()> {
        for _ in 0..self.depth {
            self.out.write_str(&self.options.indent)?;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.out.write_char(TextFactory::SIGN)?;
        for ch in text.chars() {
            match TextFactory::escape(ch) {
                Some(code) => {
                    self.out.write_char(TextFactory::ESCAPE_CHAR)?;
                    self.out.write_char(code)?;
                }
                None => self.out.write_char(ch)?,
            }
        }
        self.out.write_char(TextFactory::CLOSING_CHAR)?;
        Ok(())
    }
}

fn check_identifier(s: &str, what: &str) -> Result<()> {
    if is_identifier(s) {
        Ok(())
    } else {
        Err(Error::custom(format!("`{}` is not a valid {}", s, what)))
    }
}
