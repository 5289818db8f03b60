//! Ordered field map for a single INI section.
//!
//! This module provides [`IniSection`], a wrapper around [`IndexMap`] that
//! maps field names to [`IniValue`]s while preserving insertion order.
//! Field order matters for INI because encoding must reproduce the order in
//! which fields were first seen.
//!
//! ## Why IndexMap?
//!
//! [`IndexMap`] gives exactly the container the format needs:
//!
//! - **Deterministic output**: fields encode in first-seen order
//! - **Unique keys**: re-assigning a field overwrites in place, keeping the
//!   original slot (last-write-wins on duplicate field lines)
//! - **Predictable iteration**: easier testing and debugging
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::{IniSection, IniValue};
//!
//! let mut section = IniSection::new();
//! section.insert("host", "localhost");
//! section.insert("port", 8080);
//!
//! assert_eq!(section.len(), 2);
//! assert_eq!(section["port"].as_int(), Ok(8080));
//! ```

use crate::IniValue;
use indexmap::IndexMap;
use std::ops::{Index, IndexMut};

/// An ordered map of field names to values.
///
/// Created when a `[SectionName]` header is decoded, or implicitly when a
/// document is indexed mutably with a new section name.
///
/// # Indexing
///
/// `section["field"]` panics if the field is absent; `&mut section["field"]`
/// creates an empty value for a new field name. Use [`IniSection::get`] for
/// a lookup that signals absence instead of panicking or creating.
///
/// # Examples
///
/// ```rust
/// use ini_codec::IniSection;
///
/// let mut section = IniSection::new();
/// section["greeting"].set("hello");
///
/// assert_eq!(section.get("greeting").map(|v| v.as_str()), Some("hello"));
/// assert!(section.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection(IndexMap<String, IniValue>);

impl IniSection {
    /// Creates an empty section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniSection;
    ///
    /// let section = IniSection::new();
    /// assert!(section.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        IniSection(IndexMap::new())
    }

    /// Creates an empty section with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniSection(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, overwriting any existing field of the same name.
    ///
    /// An overwritten field keeps its original position in the iteration
    /// order; the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniSection;
    ///
    /// let mut section = IniSection::new();
    /// assert!(section.insert("bar", "hello").is_none());
    /// assert!(section.insert("bar", "world").is_some());
    /// assert_eq!(section["bar"], "world");
    /// ```
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<IniValue>) -> Option<IniValue> {
        self.0.insert(field.into(), value.into())
    }

    /// Returns a reference to the value of `field`, or `None` if the field
    /// is absent. Never creates an entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniSection;
    ///
    /// let mut section = IniSection::new();
    /// section.insert("key", 42);
    /// assert_eq!(section.get("key").and_then(|v| v.as_int().ok()), Some(42));
    /// assert!(section.get("other").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&IniValue> {
        self.0.get(field)
    }

    /// Returns a mutable reference to the value of `field`, or `None` if the
    /// field is absent.
    #[must_use]
    pub fn get_mut(&mut self, field: &str) -> Option<&mut IniValue> {
        self.0.get_mut(field)
    }

    /// Returns `true` if the section contains a field named `field`.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Removes a field, preserving the order of the remaining fields.
    ///
    /// Returns the removed value, or `None` if the field was absent.
    pub fn remove(&mut self, field: &str) -> Option<IniValue> {
        self.0.shift_remove(field)
    }

    /// Returns the number of fields in the section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniSection;
    ///
    /// let mut section = IniSection::new();
    /// assert_eq!(section.len(), 0);
    /// section.insert("key", 42);
    /// assert_eq!(section.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn fields(&self) -> indexmap::map::Keys<'_, String, IniValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, IniValue> {
        self.0.values()
    }

    /// Returns an iterator over the field-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IniValue> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the field-value pairs, in insertion
    /// order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, IniValue> {
        self.0.iter_mut()
    }
}

impl Index<&str> for IniSection {
    type Output = IniValue;

    /// Returns the value of `field`.
    ///
    /// # Panics
    ///
    /// Panics if the field is absent. Use [`IniSection::get`] for a
    /// non-panicking lookup.
    fn index(&self, field: &str) -> &IniValue {
        self.0
            .get(field)
            .unwrap_or_else(|| panic!("no field named {field:?} in section"))
    }
}

impl IndexMut<&str> for IniSection {
    /// Returns a mutable reference to the value of `field`, inserting an
    /// empty value first if the field is absent.
    fn index_mut(&mut self, field: &str) -> &mut IniValue {
        self.0.entry(field.to_string()).or_default()
    }
}

impl IntoIterator for IniSection {
    type Item = (String, IniValue);
    type IntoIter = indexmap::map::IntoIter<String, IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniSection {
    type Item = (&'a String, &'a IniValue);
    type IntoIter = indexmap::map::Iter<'a, String, IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<IniValue>> FromIterator<(K, V)> for IniSection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        IniSection(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut section = IniSection::new();
        section.insert("c", 1);
        section.insert("a", 2);
        section.insert("b", 3);

        let fields: Vec<_> = section.fields().cloned().collect();
        assert_eq!(fields, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_overwrite_keeps_slot() {
        let mut section = IniSection::new();
        section.insert("first", 1);
        section.insert("second", 2);
        section.insert("first", 10);

        let fields: Vec<_> = section.fields().cloned().collect();
        assert_eq!(fields, vec!["first", "second"]);
        assert_eq!(section["first"].as_int(), Ok(10));
    }

    #[test]
    fn test_index_mut_creates_empty_value() {
        let mut section = IniSection::new();
        section["fresh"].set("x");
        assert_eq!(section.len(), 1);
        assert_eq!(section["fresh"], "x");
    }

    #[test]
    #[should_panic(expected = "no field named")]
    fn test_index_panics_on_missing_field() {
        let section = IniSection::new();
        let _ = &section["missing"];
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut section = IniSection::new();
        section.insert("a", 1);
        section.insert("b", 2);
        section.insert("c", 3);
        assert!(section.remove("b").is_some());

        let fields: Vec<_> = section.fields().cloned().collect();
        assert_eq!(fields, vec!["a", "c"]);
    }
}
