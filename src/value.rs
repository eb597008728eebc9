//! The IKON value model.
//!
//! Values live in an arena owned by a [`Document`] and are addressed by
//! [`ValueId`] handles. Arrays, composites, the document's root sequence and the
//! reference registry all hold handles, never copies, so a value reached through
//! `#name` is the very value that was declared with `@name`.
//!
//! ## Core Types
//!
//! - [`Document`]: the arena, root sequence and reference registry of one session
//! - [`Value`]: a [`ValueKind`] plus the value's ordered reference names
//! - [`Numeric`]: numeric literal text with its [`Number`] interpretation
//! - [`Composite`]: a type tag with ordered attributes
//!
//! ## Building Values
//!
//! ```rust
//! use ikon::Document;
//!
//! let mut doc = Document::new();
//! let probe = doc.text("the probe");
//! doc.name(probe, "probe").unwrap();
//!
//! let list = doc.array(vec![probe]);
//! let object = doc.composite("Holder");
//! doc.set_attribute(object, "child", probe).unwrap();
//! doc.push_root(list);
//! doc.push_root(object);
//!
//! let child = doc[object].as_composite().unwrap().get("child");
//! assert_eq!(child, Some(probe));
//! assert_eq!(doc.named("probe"), Some(probe));
//! ```

use crate::parser::is_identifier;
use crate::registry::Registration;
use crate::{AttributeMap, Error, Position, ReferenceRegistry, Result};
use indexmap::IndexSet;
use num_bigint::BigInt;
use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle to a value stored in a [`Document`].
///
/// Handles compare equal exactly when they address the same value, so `==` on
/// handles is an identity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(pub(crate) usize);

impl ValueId {
    /// Position of the value in its document's arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interpretation of a numeric literal.
///
/// # Examples
///
/// ```rust
/// use ikon::Number;
///
/// assert_eq!(Number::parse_literal("42"), Some(Number::Integer(42)));
/// assert_eq!(Number::parse_literal("2.5e3"), Some(Number::Float(2500.0)));
/// assert_eq!(Number::Infinity.as_f64(), f64::INFINITY);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInt(BigInt),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Parses a decimal or scientific literal.
    ///
    /// An optionally signed run of digits becomes [`Number::Integer`] (or
    /// [`Number::BigInt`] past the `i64` range); anything else made of digits,
    /// `.`, `e`, `E` and signs must parse as a finite float. Returns `None`
    /// otherwise, so `1e999` is rejected rather than read as infinity.
    /// Special tokens are not handled here, see [`Numeric::parse`].
    #[must_use]
    pub fn parse_literal(text: &str) -> Option<Number> {
        let unsigned = text
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(text);
        if unsigned.is_empty() {
            return None;
        }

        if unsigned.chars().all(|c| c.is_ascii_digit()) {
            return match text.parse::<i64>() {
                Ok(integer) => Some(Number::Integer(integer)),
                Err(_) => text.parse::<BigInt>().ok().map(Number::BigInt),
            };
        }

        let literal_chars = text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
        if !literal_chars || !text.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    /// Returns `true` if this is `Infinity`, `-Infinity` or `NaN`.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ikon::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::NaN.as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`, rounding big integers.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::BigInt(big) => big.to_string().parse().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::BigInt(big) => write!(f, "{}", big),
            // Debug keeps the fraction on whole floats ("3.0", not "3").
            Number::Float(fl) => write!(f, "{:?}", fl),
            Number::Infinity => f.write_str(Numeric::POSITIVE_INFINITY),
            Number::NegativeInfinity => f.write_str(Numeric::NEGATIVE_INFINITY),
            Number::NaN => f.write_str(Numeric::NOT_A_NUMBER),
        }
    }
}

/// A numeric value: the literal exactly as written plus its interpretation.
///
/// Equality compares the literal text, so `=1.0` and `=1` are different values
/// and `=NaN` equals itself.
#[derive(Clone, Debug)]
pub struct Numeric {
    text: String,
    number: Number,
}

impl Numeric {
    pub const POSITIVE_INFINITY: &'static str = "Infinity";
    pub const NEGATIVE_INFINITY: &'static str = "-Infinity";
    pub const NOT_A_NUMBER: &'static str = "NaN";

    /// Parses numeric literal text, accepting the special tokens as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ikon::{Number, Numeric};
    ///
    /// let n = Numeric::parse("-Infinity").unwrap();
    /// assert_eq!(n.number(), &Number::NegativeInfinity);
    /// assert_eq!(n.text(), "-Infinity");
    /// assert!(Numeric::parse("12abc").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Numeric> {
        let number = match text {
            Self::POSITIVE_INFINITY => Number::Infinity,
            Self::NEGATIVE_INFINITY => Number::NegativeInfinity,
            Self::NOT_A_NUMBER => Number::NaN,
            _ => Number::parse_literal(text)?,
        };
        Some(Numeric {
            text: text.to_string(),
            number,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn number(&self) -> &Number {
        &self.number
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl From<Number> for Numeric {
    fn from(number: Number) -> Self {
        Numeric {
            text: number.to_string(),
            number,
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Number::Integer(value).into()
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64).into()
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64).into()
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        let number = if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        };
        number.into()
    }
}

/// A composite (object) value: a type tag and ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composite {
    tag: String,
    attributes: AttributeMap,
}

impl Composite {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Composite {
            tag: tag.into(),
            attributes: AttributeMap::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<ValueId> {
        self.attributes.get(attribute)
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Mutable access to the attributes. Replacing a slot here is visible
    /// through every alias of this composite.
    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

/// The payload of a [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    Numeric(Numeric),
    Text(String),
    Array(Vec<ValueId>),
    Composite(Composite),
}

/// A value together with the reference names declared for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    kind: ValueKind,
    names: IndexSet<String>,
}

impl Value {
    pub const NUMERIC_TYPE_NAME: &'static str = "Numeric";
    pub const TEXT_TYPE_NAME: &'static str = "Text";
    pub const ARRAY_TYPE_NAME: &'static str = "Array";

    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Value {
            kind,
            names: IndexSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[inline]
    pub fn kind_mut(&mut self) -> &mut ValueKind {
        &mut self.kind
    }

    /// Reference names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_names(&self) -> bool {
        !self.names.is_empty()
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Kind name of the value; composites report their type tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ikon::from_str;
    ///
    /// let doc = from_str("=5 { Point }").unwrap();
    /// assert_eq!(doc[doc.roots()[0]].type_name(), "Numeric");
    /// assert_eq!(doc[doc.roots()[1]].type_name(), "Point");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match &self.kind {
            ValueKind::Numeric(_) => Self::NUMERIC_TYPE_NAME,
            ValueKind::Text(_) => Self::TEXT_TYPE_NAME,
            ValueKind::Array(_) => Self::ARRAY_TYPE_NAME,
            ValueKind::Composite(composite) => composite.tag(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.kind, ValueKind::Numeric(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.kind, ValueKind::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.kind, ValueKind::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self.kind, ValueKind::Composite(_))
    }

    #[must_use]
    pub fn as_numeric(&self) -> Option<&Numeric> {
        match &self.kind {
            ValueKind::Numeric(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[ValueId]> {
        match &self.kind {
            ValueKind::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<ValueId>> {
        match &mut self.kind {
            ValueKind::Array(elements) => Some(elements),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_composite(&self) -> Option<&Composite> {
        match &self.kind {
            ValueKind::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match &mut self.kind {
            ValueKind::Composite(composite) => Some(composite),
            _ => None,
        }
    }
}

/// The values of one parse session: arena, top-level sequence and reference
/// registry.
#[derive(Clone, Debug, Default)]
pub struct Document {
    values: Vec<Value>,
    roots: Vec<ValueId>,
    references: ReferenceRegistry,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values in the arena, including nested and shared ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ValueId) -> Option<&Value> {
        self.values.get(id.0)
    }

    pub fn get_mut(&mut self, id: ValueId) -> Option<&mut Value> {
        self.values.get_mut(id.0)
    }

    /// Adds a value to the arena. It is not a root until [`Document::push_root`].
    pub fn insert(&mut self, kind: ValueKind) -> ValueId {
        let id = ValueId(self.values.len());
        self.values.push(Value::new(kind));
        id
    }

    pub fn numeric(&mut self, numeric: impl Into<Numeric>) -> ValueId {
        self.insert(ValueKind::Numeric(numeric.into()))
    }

    pub fn text(&mut self, text: impl Into<String>) -> ValueId {
        self.insert(ValueKind::Text(text.into()))
    }

    pub fn array(&mut self, elements: impl IntoIterator<Item = ValueId>) -> ValueId {
        self.insert(ValueKind::Array(elements.into_iter().collect()))
    }

    /// Adds an empty composite. The tag is checked when the document is
    /// composed.
    pub fn composite(&mut self, tag: impl Into<String>) -> ValueId {
        self.insert(ValueKind::Composite(Composite::new(tag)))
    }

    /// Appends `element` to the array `array`.
    ///
    /// # Errors
    ///
    /// Fails if `array` is not an array of this document.
    pub fn push_element(&mut self, array: ValueId, element: ValueId) -> Result<()> {
        self.get_mut(array)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| Error::custom(format!("value {} is not an array", array)))?
            .push(element);
        Ok(())
    }

    /// Sets attribute `name` of the composite `composite`, returning the
    /// previous handle of that slot.
    ///
    /// # Errors
    ///
    /// Fails if `composite` is not a composite of this document or `name` is
    /// not an identifier.
    pub fn set_attribute(
        &mut self,
        composite: ValueId,
        name: &str,
        value: ValueId,
    ) -> Result<Option<ValueId>> {
        if !is_identifier(name) {
            return Err(Error::custom(format!(
                "`{}` is not a valid attribute name",
                name
            )));
        }
        let target = self
            .get_mut(composite)
            .and_then(Value::as_composite_mut)
            .ok_or_else(|| Error::custom(format!("value {} is not a composite", composite)))?;
        Ok(target.attributes_mut().insert(name.to_string(), value))
    }

    /// Declares `name` as a reference name of `id`, like an `@name` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the name already belongs to another
    /// value, or a custom error if `name` is not an identifier.
    pub fn name(&mut self, id: ValueId, name: &str) -> Result<()> {
        if !is_identifier(name) {
            return Err(Error::custom(format!(
                "`{}` is not a valid reference name",
                name
            )));
        }
        self.name_at(id, name, None)?;
        Ok(())
    }

    pub(crate) fn name_at(
        &mut self,
        id: ValueId,
        name: &str,
        position: Option<Position>,
    ) -> Result<Registration> {
        if self.get(id).is_none() {
            return Err(Error::custom(format!("unknown value {}", id)));
        }
        let registration = self.references.register(name, id, position)?;
        if registration == Registration::Added {
            self.values[id.0].names.insert(name.to_string());
        }
        Ok(registration)
    }

    /// Resolves a reference name to the value it was declared on.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<ValueId> {
        self.references.resolve(name)
    }

    #[must_use]
    pub fn references(&self) -> &ReferenceRegistry {
        &self.references
    }

    /// Top-level values in document order. A value referenced at top level
    /// appears once per occurrence.
    #[must_use]
    pub fn roots(&self) -> &[ValueId] {
        &self.roots
    }

    pub fn push_root(&mut self, id: ValueId) {
        self.roots.push(id);
    }

    /// Iterates over the top-level values.
    pub fn root_values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.roots.iter().filter_map(move |&id| self.get(id))
    }

    /// Compares the graph under `id` with the graph under `other_id` in
    /// `other`: same kinds, literal text, tags, attribute names and reference
    /// names, ignoring handle numbering.
    #[must_use]
    pub fn same_shape(&self, id: ValueId, other: &Document, other_id: ValueId) -> bool {
        let mut pending = vec![(id, other_id)];
        let mut compared = HashSet::new();

        while let Some((left_id, right_id)) = pending.pop() {
            // shared and cyclic pairs are compared once
            if !compared.insert((left_id, right_id)) {
                continue;
            }
            let (Some(left), Some(right)) = (self.get(left_id), other.get(right_id)) else {
                return false;
            };
            if !left.names.iter().eq(right.names.iter()) {
                return false;
            }

            match (&left.kind, &right.kind) {
                (ValueKind::Numeric(a), ValueKind::Numeric(b)) if a == b => {}
                (ValueKind::Text(a), ValueKind::Text(b)) if a == b => {}
                (ValueKind::Array(a), ValueKind::Array(b)) if a.len() == b.len() => {
                    pending.extend(a.iter().copied().zip(b.iter().copied()));
                }
                (ValueKind::Composite(a), ValueKind::Composite(b))
                    if a.tag == b.tag && a.attributes.len() == b.attributes.len() =>
                {
                    let pairs = a.attributes.iter().zip(b.attributes.iter());
                    for ((left_name, &l), (right_name, &r)) in pairs {
                        if left_name != right_name {
                            return false;
                        }
                        pending.push((l, r));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Index<ValueId> for Document {
    type Output = Value;

    fn index(&self, id: ValueId) -> &Value {
        &self.values[id.0]
    }
}

impl IndexMut<ValueId> for Document {
    fn index_mut(&mut self, id: ValueId) -> &mut Value {
        &mut self.values[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_literals() {
        assert_eq!(Number::parse_literal("-17"), Some(Number::Integer(-17)));
        assert_eq!(Number::parse_literal("0.5"), Some(Number::Float(0.5)));
        assert_eq!(Number::parse_literal("1e-7"), Some(Number::Float(1e-7)));
        assert_eq!(Number::parse_literal("."), None);
        assert_eq!(Number::parse_literal("e"), None);
        assert_eq!(Number::parse_literal("-"), None);
        assert_eq!(Number::parse_literal("inf"), None);
        assert_eq!(Number::parse_literal("1.2.3"), None);
    }

    #[test]
    fn test_big_integer_literal() {
        let text = "123456789012345678901234567890";
        match Number::parse_literal(text) {
            Some(Number::BigInt(big)) => assert_eq!(big.to_string(), text),
            other => panic!("Expected big integer, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_keeps_text() {
        let numeric = Numeric::parse("1.50").unwrap();
        assert_eq!(numeric.text(), "1.50");
        assert_eq!(numeric.number(), &Number::Float(1.5));
        assert_ne!(numeric, Numeric::parse("1.5").unwrap());
    }

    #[test]
    fn test_numeric_from_float_specials() {
        assert_eq!(Numeric::from(f64::INFINITY).text(), "Infinity");
        assert_eq!(Numeric::from(f64::NEG_INFINITY).text(), "-Infinity");
        assert_eq!(Numeric::from(f64::NAN).text(), "NaN");
        assert_eq!(Numeric::from(3.0).text(), "3.0");
        assert_eq!(Numeric::from(7).text(), "7");
    }

    #[test]
    fn test_aliased_mutation_is_shared() {
        let mut doc = Document::new();
        let shared = doc.composite("Shared");
        let holder = doc.array(vec![shared, shared]);
        let marker = doc.numeric(1);

        doc.set_attribute(shared, "marker", marker).unwrap();

        let elements = doc[holder].as_array().unwrap();
        for &element in elements {
            assert_eq!(
                doc[element].as_composite().unwrap().get("marker"),
                Some(marker)
            );
        }
    }

    #[test]
    fn test_builder_naming() {
        let mut doc = Document::new();
        let a = doc.text("a");
        let b = doc.text("b");
        doc.name(a, "first").unwrap();
        doc.name(a, "second").unwrap();
        doc.name(a, "first").unwrap();

        let names: Vec<_> = doc[a].names().collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(matches!(
            doc.name(b, "first"),
            Err(Error::DuplicateName { position: None, .. })
        ));
        assert!(doc.name(b, "not valid").is_err());
    }

    #[test]
    fn test_builder_rejects_wrong_kinds() {
        let mut doc = Document::new();
        let text = doc.text("x");
        assert!(doc.push_element(text, text).is_err());
        assert!(doc.set_attribute(text, "a", text).is_err());
    }

    #[test]
    fn test_float_as_i64_range() {
        assert_eq!(Number::Float(9223372036854775808.0).as_i64(), None);
        assert_eq!(Number::Float(-9223372036854775808.0).as_i64(), Some(i64::MIN));
        assert_eq!(Number::Float(1e300).as_i64(), None);
    }

    #[test]
    fn test_out_of_range_float_literal() {
        assert_eq!(Number::parse_literal("1e999"), None);
        assert_eq!(Number::parse_literal("-1e999"), None);
        assert_eq!(Number::parse_literal("1e-999"), Some(Number::Float(0.0)));
    }

    #[test]
    fn test_renaming_keeps_single_name_entry() {
        let mut doc = Document::new();
        let a = doc.text("a");
        assert_eq!(doc.name_at(a, "x", None).unwrap(), Registration::Added);
        assert_eq!(doc.name_at(a, "x", None).unwrap(), Registration::Unchanged);
        assert_eq!(doc[a].names().count(), 1);
    }

    #[test]
    fn test_same_shape_of_deep_chain() {
        let mut left = Document::new();
        let mut right = Document::new();
        let mut l = left.numeric(0);
        let mut r = right.numeric(0);
        for _ in 0..10_000 {
            l = left.array(vec![l]);
            r = right.array(vec![r]);
        }
        assert!(left.same_shape(l, &right, r));
    }

    #[test]
    fn test_same_shape_of_cycles() {
        let mut left = Document::new();
        let l = left.array(Vec::new());
        left.push_element(l, l).unwrap();

        let mut right = Document::new();
        let r = right.array(Vec::new());
        right.push_element(r, r).unwrap();

        assert!(left.same_shape(l, &right, r));
    }

    #[test]
    fn test_same_shape_ignores_numbering() {
        let mut left = Document::new();
        let l_text = left.text("t");
        let l_array = left.array(vec![l_text]);

        let mut right = Document::new();
        let _padding = right.numeric(0);
        let r_text = right.text("t");
        let r_array = right.array(vec![r_text]);

        assert!(left.same_shape(l_array, &right, r_array));
        right.name(r_text, "named").unwrap();
        assert!(!left.same_shape(l_array, &right, r_array));
    }
}
