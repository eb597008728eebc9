//! Position-tracked character reader.
//!
//! [`Reader`] wraps any sequential supply of characters and adds one character of
//! lookahead, line/column tracking, and the reading primitives value factories
//! are built from. The central one is [`Reader::read_conditionally`], which asks a
//! caller-supplied function what to do with every character it meets.
//!
//! ## Examples
//!
//! ```rust
//! use ikon::{CharAction, Reader};
//!
//! let mut reader = Reader::new("ab-cd|rest");
//! let text = reader
//!     .read_conditionally(|ch| {
//!         Ok(match ch {
//!             '-' => CharAction::Skip,
//!             'c' => CharAction::Substitute('C'),
//!             '|' => CharAction::Stop,
//!             _ => CharAction::AcceptAsIs,
//!         })
//!     })
//!     .unwrap();
//!
//! assert_eq!(text, "abCd");
//! assert_eq!(reader.peek().unwrap(), '|');
//! ```

use crate::{Error, Position, Result};
use std::iter::Peekable;

/// What [`Reader::read_conditionally`] should do with the character it was
/// given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharAction {
    /// Append the character to the result and continue.
    AcceptAsIs,
    /// Consume the character without appending it and continue.
    Skip,
    /// Consume the character, append the replacement instead, and continue.
    Substitute(char),
    /// Stop before the character; it stays available to [`Reader::peek`].
    Stop,
}

/// A character reader with lookahead and position tracking.
pub struct Reader<'a> {
    chars: Peekable<Box<dyn Iterator<Item = char> + 'a>>,
    line: usize,
    column: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over a string slice.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_chars(input.chars())
    }

    /// Creates a reader over any character iterator.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'a,
    {
        let chars: Box<dyn Iterator<Item = char> + 'a> = Box::new(chars.into_iter());
        Reader {
            chars: chars.peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Position of the next character to be read.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Human-readable form of [`Reader::position`] for diagnostics.
    #[must_use]
    pub fn position_description(&self) -> String {
        self.position().to_string()
    }

    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.chars.peek().is_some()
    }

    /// Returns the next character without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] if the input is exhausted.
    pub fn peek(&mut self) -> Result<char> {
        let position = self.position();
        self.chars
            .peek()
            .copied()
            .ok_or_else(|| Error::end_of_stream(position, "a character"))
    }

    /// Consumes and returns the next character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] if the input is exhausted.
    pub fn read(&mut self) -> Result<char> {
        let position = self.position();
        let ch = self
            .chars
            .next()
            .ok_or_else(|| Error::end_of_stream(position, "a character"))?;
        self.advance_position(ch);
        Ok(ch)
    }

    pub fn skip_whitespaces(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
            self.advance_position(ch);
        }
    }

    /// Consumes the maximal run of characters satisfying `predicate`.
    ///
    /// A run cut short by the end of input is returned as read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfStream`] if the input is already exhausted.
    pub fn read_while<P>(&mut self, predicate: P) -> Result<String>
    where
        P: Fn(char) -> bool,
    {
        if !self.has_next() {
            return Err(Error::end_of_stream(self.position(), "a character"));
        }

        let mut result = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !predicate(ch) {
                break;
            }
            self.chars.next();
            self.advance_position(ch);
            result.push(ch);
        }
        Ok(result)
    }

    /// Reads characters one at a time, letting `decide` choose the
    /// [`CharAction`] for each, until it answers [`CharAction::Stop`].
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `decide`, and returns
    /// [`Error::EndOfStream`] if the input ends before a stop decision.
    pub fn read_conditionally<F>(&mut self, mut decide: F) -> Result<String>
    where
        F: FnMut(char) -> Result<CharAction>,
    {
        let mut result = String::new();
        loop {
            let ch = match self.chars.peek() {
                Some(&ch) => ch,
                None => {
                    return Err(Error::end_of_stream(
                        self.position(),
                        "end of conditional read",
                    ))
                }
            };

            let action = decide(ch)?;
            if action == CharAction::Stop {
                return Ok(result);
            }

            self.chars.next();
            self.advance_position(ch);
            match action {
                CharAction::AcceptAsIs => result.push(ch),
                CharAction::Substitute(replacement) => result.push(replacement),
                CharAction::Skip | CharAction::Stop => {}
            }
        }
    }

    fn advance_position(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
