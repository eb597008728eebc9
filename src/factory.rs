//! Sign-keyed value factories.
//!
//! Every IKON value starts with a sign character that selects the
//! [`ValueFactory`] responsible for the rest of it. New kinds of value plug in by
//! registering another factory on a [`FactoryRegistry`]; the parser never needs to
//! know about them.
//!
//! ## Examples
//!
//! A factory for `!` that reads a bare word as text:
//!
//! ```rust
//! use ikon::{FactoryRegistry, Parser, Reader, Result, ValueFactory, ValueId};
//!
//! struct WordFactory;
//!
//! impl ValueFactory for WordFactory {
//!     fn sign(&self) -> char {
//!         '!'
//!     }
//!
//!     fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId> {
//!         let word = parser.read_identifier()?;
//!         Ok(parser.document_mut().text(word))
//!     }
//! }
//!
//! let mut factories = FactoryRegistry::standard();
//! factories.register(WordFactory).unwrap();
//!
//! let doc = ikon::from_str_with_factories("!hello @greeting [ #greeting ]", &factories).unwrap();
//! let greeting = doc.named("greeting").unwrap();
//! assert_eq!(doc[greeting].as_text(), Some("hello"));
//! ```

use crate::factories::{
    ArrayFactory, CompositeFactory, NumericFactory, ReferenceFactory, TextFactory,
};
use crate::{Error, Parser, Result, ValueId};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Parses the body of one kind of value.
pub trait ValueFactory: Send + Sync {
    /// The sign character that introduces this kind of value.
    fn sign(&self) -> char;

    /// Parses the value body. The sign has already been consumed; trailing
    /// `@name` suffixes are handled by the parser after this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid value of this kind.
    fn parse(&self, parser: &mut Parser<'_>) -> Result<ValueId>;
}

/// Sign to factory table consulted by the parser.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<char, Box<dyn ValueFactory>>,
}

impl FactoryRegistry {
    /// Creates a registry with no factories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in factories: numeric `=`, text `"`,
    /// array `[`, composite `{` and reference `#`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(NumericFactory::SIGN, Box::new(NumericFactory));
        registry.factories.insert(TextFactory::SIGN, Box::new(TextFactory));
        registry.factories.insert(ArrayFactory::SIGN, Box::new(ArrayFactory));
        registry.factories.insert(CompositeFactory::SIGN, Box::new(CompositeFactory));
        registry.factories.insert(ReferenceFactory::SIGN, Box::new(ReferenceFactory));
        registry
    }

    /// The process-wide read-only standard registry.
    pub fn shared() -> &'static FactoryRegistry {
        static STANDARD: OnceLock<FactoryRegistry> = OnceLock::new();
        STANDARD.get_or_init(FactoryRegistry::standard)
    }

    /// Registers `factory` under its sign.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSign`] if a factory already claims the sign.
    pub fn register<F>(&mut self, factory: F) -> Result<()>
    where
        F: ValueFactory + 'static,
    {
        let sign = factory.sign();
        if self.factories.contains_key(&sign) {
            return Err(Error::DuplicateSign(sign));
        }
        tracing::debug!(%sign, "registered value factory");
        self.factories.insert(sign, Box::new(factory));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, sign: char) -> Option<&dyn ValueFactory> {
        self.factories.get(&sign).map(Box::as_ref)
    }

    #[must_use]
    pub fn contains(&self, sign: char) -> bool {
        self.factories.contains_key(&sign)
    }

    /// Registered signs, in no particular order.
    pub fn signs(&self) -> impl Iterator<Item = char> + '_ {
        self.factories.keys().copied()
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut signs: Vec<char> = self.signs().collect();
        signs.sort_unstable();
        f.debug_struct("FactoryRegistry")
            .field("signs", &signs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_signs() {
        let registry = FactoryRegistry::standard();
        for sign in ['=', '"', '[', '{', '#'] {
            assert!(registry.contains(sign), "missing factory for {}", sign);
        }
        assert!(!registry.contains('@'));
    }

    #[test]
    fn test_duplicate_sign_rejected() {
        let mut registry = FactoryRegistry::standard();
        assert_eq!(
            registry.register(TextFactory),
            Err(Error::DuplicateSign('"'))
        );
    }

    #[test]
    fn test_register_into_empty_registry() {
        let mut registry = FactoryRegistry::new();
        registry.register(NumericFactory).unwrap();
        assert!(registry.get('=').is_some());
        assert!(registry.get('"').is_none());
    }
}
