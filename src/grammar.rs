//! IKON Format Reference
//!
//! This module documents the IKON notation as implemented by this library. It
//! contains no code.
//!
//! # Overview
//!
//! An IKON document is a whitespace separated sequence of values. Whitespace
//! (spaces, tabs, newlines) is insignificant except as a token separator, so the
//! indentation produced by the composer is cosmetic.
//!
//! # Signs
//!
//! The first non-whitespace character of a value, its *sign*, selects the
//! factory that parses the rest:
//!
//! | Sign | Value | Example |
//! |------|-------|---------|
//! | `=` | Numeric | `=42`, `=-0.5`, `=6.02e23`, `=Infinity` |
//! | `"` | Text | `"hello\tworld"` |
//! | `[` | Array | `[ =1 =2 =3 ]` |
//! | `{` | Composite | `{ Point x =1 y =2 }` |
//! | `#` | Reference | `#origin` |
//!
//! Additional signs can be added by registering a
//! [`ValueFactory`](crate::ValueFactory).
//!
//! # Numeric Values
//!
//! After `=` (and optional whitespace) the factory reads the longest run of
//! characters from `-`, `.`, `a-z`, `A-Z`, `0-9`. The run must be either:
//!
//! - one of the tokens `Infinity`, `-Infinity`, `NaN` (case sensitive), or
//! - a decimal or scientific literal: digits, `.`, `e`/`E` and signs, containing
//!   at least one digit and parsing as a floating point number
//!
//! Anything else (`=12abc`, `=infinity`, `=.`) is rejected. The literal text is
//! kept exactly as written, so `=1.50` composes back as `=1.50`.
//!
//! # Text Values
//!
//! Text runs to the next unescaped `"`. Escape codes:
//!
//! ```text
//! \\  - backslash
//! \"  - quote
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! ```
//!
//! Any other escape is an error. Raw newlines inside text are kept as-is.
//!
//! # Arrays
//!
//! ```text
//! [
//!     =1
//!     "two"
//!     [ =3 ]
//! ]
//! ```
//!
//! # Composites
//!
//! A type tag followed by `attribute value` pairs:
//!
//! ```text
//! { NestedStuff
//!     atr1 =5
//!     atr2 "more text"
//! }
//! ```
//!
//! Type tags, attribute names and reference names are identifiers: letters,
//! digits and `_`. An attribute may appear only once per composite.
//!
//! # Names and References
//!
//! Any value, at any depth, can be followed by one or more `@name` tags. Spaces
//! between tags are optional:
//!
//! ```text
//! } @composite @otherName@noSpace
//! ```
//!
//! A name becomes usable as soon as the value it follows is complete. From then
//! on `#name` anywhere in the document stands for that same value:
//!
//! ```text
//! "the probe" @probe
//! #probe
//! [
//!     #probe
//! ]
//! { NestedStuff
//!     child #probe
//! }
//! ```
//!
//! Rules:
//!
//! - a name may belong to only one value per document
//! - one value may carry any number of names
//! - `#name` before the `@name` it refers to is an error (no forward references)
//! - `#name @other` adds `other` as another name of the referenced value
//!
//! # Composed Form
//!
//! The composer writes one root per line, nested children one per line with one
//! tab per nesting level, and reference names after the value body. A named
//! value that occurs again is written as `#name`:
//!
//! ```text
//! "the probe" @probe
//! #probe
//! [
//! 	#probe
//! ]
//! ```
