//! Built-in value factories.
//!
//! | Sign | Factory | Syntax |
//! |------|---------|--------|
//! | `=` | [`NumericFactory`] | `=42`, `=-1.5e3`, `=Infinity`, `=NaN` |
//! | `"` | [`TextFactory`] | `"line\nbreak"` |
//! | `[` | [`ArrayFactory`] | `[ =1 =2 ]` |
//! | `{` | [`CompositeFactory`] | `{ Point x =1 y =2 }` |
//! | `#` | [`ReferenceFactory`] | `#name` |

use crate::reader::CharAction;
use crate::{Error, Numeric, Parser, Result, Value, ValueFactory, ValueId, ValueKind};

/// Numeric literals: `=` followed by a decimal or scientific literal, or one of
/// `Infinity`, `-Infinity`, `NaN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericFactory;

impl NumericFactory {
    pub const SIGN: char = '=';

    fn is_literal_char(c: char) -> bool {
        c == '-' || c == '.' || c.is_ascii_alphanumeric()
    }
}

impl ValueFactory for NumericFactory {
    fn sign(&self) -> char {
        Self::SIGN
    }

    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
        let reader = parser.reader();
        reader.skip_whitespaces();
        if !reader.has_next() {
            return Err(Error::end_of_stream(reader.position(), "a numeric literal"));
        }

        let start = reader.position();
        let text = reader.read_while(Self::is_literal_char)?;
        if text.is_empty() {
            return Err(Error::format(
                start,
                "unexpected character while reading a numeric value",
            ));
        }

        let numeric = Numeric::parse(&text).ok_or_else(|| {
            Error::format(
                start,
                format!(
                    "characters from {} to {} (`{}`) can't be parsed as a numeric value",
                    start,
                    reader.position(),
                    text
                ),
            )
        })?;
        Ok(parser.document_mut().insert(ValueKind::Numeric(numeric)))
    }
}

/// Double-quoted text with backslash escapes.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextFactory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextState {
    Normal,
    Escaping,
}

impl TextFactory {
    pub const SIGN: char = '"';
    pub const CLOSING_CHAR: char = '"';
    pub const ESCAPE_CHAR: char = '\\';

    /// Decodes the character following a backslash.
    #[must_use]
    pub fn unescape(code: char) -> Option<char> {
        match code {
            '\\' => Some('\\'),
            '"' => Some('"'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        }
    }

    /// Escape code for a character that can't appear raw inside text.
    #[must_use]
    pub fn escape(ch: char) -> Option<char> {
        match ch {
            '\\' => Some('\\'),
            '"' => Some('"'),
            '\n' => Some('n'),
            '\r' => Some('r'),
            '\t' => Some('t'),
            _ => None,
        }
    }
}

impl ValueFactory for TextFactory {
    fn sign(&self) -> char {
        Self::SIGN
    }

    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
        let reader = parser.reader();
        let mut state = TextState::Normal;
        let mut cursor = reader.position();

        let text = reader.read_conditionally(|ch| {
            let position = cursor;
            if ch == '\n' {
                cursor.line += 1;
                cursor.column = 1;
            } else {
                cursor.column += 1;
            }

            match state {
                TextState::Escaping => {
                    state = TextState::Normal;
                    Self::unescape(ch).map(CharAction::Substitute).ok_or_else(|| {
                        Error::format(
                            position,
                            format!("unsupported text escape sequence \\{}", ch),
                        )
                    })
                }
                TextState::Normal => Ok(match ch {
                    Self::ESCAPE_CHAR => {
                        state = TextState::Escaping;
                        CharAction::Skip
                    }
                    Self::CLOSING_CHAR => CharAction::Stop,
                    _ => CharAction::AcceptAsIs,
                }),
            }
        })?;

        if reader.peek()? != Self::CLOSING_CHAR {
            return Err(Error::end_of_stream(reader.position(), "closing quote"));
        }
        reader.read()?;

        Ok(parser.document_mut().text(text))
    }
}

/// Whitespace separated values between `[` and `]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayFactory;

impl ArrayFactory {
    pub const SIGN: char = '[';
    pub const CLOSING_CHAR: char = ']';
}

impl ValueFactory for ArrayFactory {
    fn sign(&self) -> char {
        Self::SIGN
    }

    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
        let mut elements = Vec::new();
        loop {
            let reader = parser.reader();
            reader.skip_whitespaces();
            if !reader.has_next() {
                return Err(Error::end_of_stream(
                    reader.position(),
                    "array element or ']'",
                ));
            }
            if reader.peek()? == Self::CLOSING_CHAR {
                reader.read()?;
                break;
            }
            elements.push(parser.parse_value()?);
        }
        Ok(parser.document_mut().array(elements))
    }
}

/// A type tag followed by `attribute value` pairs between `{` and `}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompositeFactory;

impl CompositeFactory {
    pub const SIGN: char = '{';
    pub const CLOSING_CHAR: char = '}';
}

impl ValueFactory for CompositeFactory {
    fn sign(&self) -> char {
        Self::SIGN
    }

    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
        parser.reader().skip_whitespaces();
        let tag = parser.read_identifier()?;
        let composite = parser.document_mut().composite(tag);

        loop {
            let reader = parser.reader();
            reader.skip_whitespaces();
            if !reader.has_next() {
                return Err(Error::end_of_stream(
                    reader.position(),
                    "attribute name or '}'",
                ));
            }
            if reader.peek()? == Self::CLOSING_CHAR {
                reader.read()?;
                return Ok(composite);
            }

            let position = reader.position();
            let attribute = parser.read_identifier()?;
            let repeated = parser
                .document()
                .get(composite)
                .and_then(Value::as_composite)
                .map_or(false, |c| c.attributes().contains_key(&attribute));
            if repeated {
                return Err(Error::format(
                    position,
                    format!("duplicate attribute `{}`", attribute),
                ));
            }

            let value = parser.parse_value()?;
            parser
                .document_mut()
                .set_attribute(composite, &attribute, value)?;
        }
    }
}

/// `#name`: the value previously declared with `@name`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceFactory;

impl ReferenceFactory {
    pub const SIGN: char = '#';
}

impl ValueFactory for ReferenceFactory {
    fn sign(&self) -> char {
        Self::SIGN
    }

    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
        let position = parser.sign_position();
        let name = parser.read_identifier()?;
        let id = parser
            .named_value(&name)
            .ok_or_else(|| Error::undefined_reference(&name, position))?;
        tracing::debug!(%name, value = %id, "resolved reference");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_tables_are_inverse() {
        for ch in ['\\', '"', '\n', '\r', '\t'] {
            let code = TextFactory::escape(ch).unwrap();
            assert_eq!(TextFactory::unescape(code), Some(ch));
        }
        assert_eq!(TextFactory::unescape('x'), None);
        assert_eq!(TextFactory::escape('x'), None);
    }

    #[test]
    fn test_numeric_literal_chars() {
        assert!(NumericFactory::is_literal_char('-'));
        assert!(NumericFactory::is_literal_char('E'));
        assert!(!NumericFactory::is_literal_char('+'));
        assert!(!NumericFactory::is_literal_char(' '));
        assert!(!NumericFactory::is_literal_char('@'));
    }
}
