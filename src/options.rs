//! Configuration options for IKON composition.
//!
//! [`ComposeOptions`] controls the layout of composed text. Whitespace only
//! separates tokens, so as long as the indent and newline strings are
//! whitespace every layout parses back to the same document.
//!
//! ## Examples
//!
//! ```rust
//! use ikon::{to_string_with_options, ComposeOptions, Document};
//!
//! let mut doc = Document::new();
//! let one = doc.numeric(1);
//! let list = doc.array(vec![one]);
//! doc.push_root(list);
//!
//! let options = ComposeOptions::new().with_indent("  ");
//! assert_eq!(to_string_with_options(&doc, &options).unwrap(), "[\n  =1\n]\n");
//! ```

use crate::parser::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Layout options for the composer.
///
/// Derives serde traits so tools can keep these options in their own
/// configuration files.
///
/// # Examples
///
/// ```rust
/// use ikon::ComposeOptions;
///
/// let options = ComposeOptions::new();
/// assert_eq!(options.indent, "\t");
/// assert_eq!(options.newline, "\n");
///
/// let windows = ComposeOptions::new().with_newline("\r\n");
/// assert_eq!(windows.newline, "\r\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    /// Written once per nesting level at the start of nested lines.
    pub indent: String,
    /// Line terminator.
    pub newline: String,
    /// Deepest nesting level the composer will write.
    pub max_depth: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            indent: "\t".to_string(),
            newline: "\n".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ComposeOptions {
    /// Creates default options: one tab per level and `\n` line endings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    #[must_use]
    pub fn with_newline(mut self, newline: &str) -> Self {
        self.newline = newline.to_string();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
