//! Ordered attribute map for composite values.
//!
//! [`AttributeMap`] wraps an [`IndexMap`] so attributes keep the order they were
//! declared in. Composition writes them back in that same order, which keeps
//! round-tripped documents diffable against their source.
//!
//! Slots hold [`ValueId`] handles, not values: two attributes (or an attribute
//! and an array element) holding the same id share one value.

use crate::ValueId;
use indexmap::IndexMap;

/// An insertion-ordered map of attribute names to value handles.
///
/// # Examples
///
/// ```rust
/// use ikon::{AttributeMap, Document};
///
/// let mut doc = Document::new();
/// let first = doc.text("one");
/// let second = doc.text("two");
///
/// let mut map = AttributeMap::new();
/// map.insert("first".to_string(), first);
/// map.insert("second".to_string(), second);
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeMap(IndexMap<String, ValueId>);

impl AttributeMap {
    #[must_use]
    pub fn new() -> Self {
        AttributeMap(IndexMap::new())
    }

    /// Inserts an attribute.
    ///
    /// If the map already contained this name, the slot keeps its position and
    /// the old handle is returned.
    pub fn insert(&mut self, name: String, value: ValueId) -> Option<ValueId> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ValueId> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes an attribute, shifting later attributes down to keep order.
    pub fn remove(&mut self, name: &str) -> Option<ValueId> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the attribute names, in declaration order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ValueId> {
        self.0.keys()
    }

    /// Returns an iterator over the value handles, in declaration order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ValueId> {
        self.0.values()
    }

    /// Returns an iterator over the attributes, in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ValueId> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a ValueId);
    type IntoIter = indexmap::map::Iter<'a, String, ValueId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ValueId)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, ValueId)>>(iter: T) -> Self {
        AttributeMap(IndexMap::from_iter(iter))
    }
}
