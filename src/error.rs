//! Error types for IKON parsing and composition.
//!
//! Every failure is fatal to the call that produced it. Parsing errors carry the
//! [`Position`] in the source stream where they were detected so that messages
//! point at the offending character.
//!
//! ## Error Categories
//!
//! - **End of stream**: input ran out where more was required (unterminated text,
//!   missing `]` or `}`, reading past the end)
//! - **Format errors**: malformed literals, unknown escape codes, unrecognized signs
//! - **Reference errors**: duplicate names and references to undeclared names
//! - **Registration errors**: two factories claiming the same sign
//!
//! ## Examples
//!
//! ```rust
//! use ikon::{from_str, Error};
//!
//! let result = from_str("#missing");
//! assert!(matches!(result, Err(Error::UndefinedReference { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("line 1"));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// A location in the source text, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of a stream.
    pub const START: Position = Position { line: 1, column: 1 };

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents all possible errors that can occur while parsing or composing IKON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input was exhausted where more was required
    #[error("Unexpected end of stream at {position}, expected {expected}")]
    EndOfStream { position: Position, expected: String },

    /// Malformed input for the factory that was reading it
    #[error("Format error at {position}: {msg}")]
    Format { position: Position, msg: String },

    /// A reference name bound to two different values
    #[error("Duplicate reference name `{name}`{}", at(.position))]
    DuplicateName {
        name: String,
        position: Option<Position>,
    },

    /// A `#name` reference with no prior declaration
    #[error("Undefined reference `#{name}` at {position}")]
    UndefinedReference { name: String, position: Position },

    /// Two factories registered for the same sign
    #[error("A factory for sign '{0}' is already registered")]
    DuplicateSign(char),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

fn at(position: &Option<Position>) -> String {
    position
        .map(|position| format!(" at {}", position))
        .unwrap_or_default()
}

impl Error {
    /// Creates an end-of-stream error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ikon::{Error, Position};
    ///
    /// let err = Error::end_of_stream(Position::new(3, 7), "closing quote");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn end_of_stream(position: Position, expected: &str) -> Self {
        Error::EndOfStream {
            position,
            expected: expected.to_string(),
        }
    }

    /// Creates a format error for malformed input.
    pub fn format<T: fmt::Display>(position: Position, msg: T) -> Self {
        Error::Format {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates a duplicate name error. `position` is `None` when the name was
    /// declared through the builder API rather than parsed.
    pub fn duplicate_name(name: &str, position: Option<Position>) -> Self {
        Error::DuplicateName {
            name: name.to_string(),
            position,
        }
    }

    /// Creates an undefined reference error.
    pub fn undefined_reference(name: &str, position: Position) -> Self {
        Error::UndefinedReference {
            name: name.to_string(),
            position,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ikon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the stream position the error was detected at, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::EndOfStream { position, .. }
            | Error::Format { position, .. }
            | Error::UndefinedReference { position, .. } => Some(*position),
            Error::DuplicateName { position, .. } => *position,
            Error::Io(_) | Error::DuplicateSign(_) | Error::Custom(_) => None,
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Io("formatter error".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
