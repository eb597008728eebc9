//! Reference name registry.
//!
//! One [`ReferenceRegistry`] lives inside every [`Document`](crate::Document) and
//! so spans one parse session. It maps each declared `@name` to the handle of the
//! value that carries it; a `#name` reference resolves through it to that same
//! handle, which is what makes references aliases rather than copies.

use crate::{Error, Position, Result, ValueId};
use indexmap::IndexMap;

/// Maps reference names to the values they were declared on, in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceRegistry {
    names: IndexMap<String, ValueId>,
}

/// Outcome of [`ReferenceRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The name was new and now points at the value.
    Added,
    /// The name already pointed at the same value.
    Unchanged,
}

impl ReferenceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is already bound to a different
    /// value.
    pub fn register(
        &mut self,
        name: &str,
        value: ValueId,
        position: Option<Position>,
    ) -> Result<Registration> {
        match self.names.get(name) {
            Some(&existing) if existing == value => Ok(Registration::Unchanged),
            Some(_) => Err(Error::duplicate_name(name, position)),
            None => {
                self.names.insert(name.to_string(), value);
                Ok(Registration::Added)
            }
        }
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ValueId> {
        self.names.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns every binding in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueId)> + '_ {
        self.names.iter().map(|(name, &id)| (name.as_str(), id))
    }
}
