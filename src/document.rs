//! The top-level INI document.
//!
//! This module provides [`IniDocument`], an ordered map from section names to
//! [`IniSection`]s that owns the decode and encode algorithms along with the
//! per-instance syntax configuration.
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::IniDocument;
//!
//! let mut document = IniDocument::new();
//! document.decode("[Server]\nhost=localhost\nport=8080").unwrap();
//!
//! assert_eq!(document["Server"]["host"], "localhost");
//! assert_eq!(document["Server"]["port"].as_int(), Ok(8080));
//!
//! document["Server"]["port"].set(9090);
//! assert_eq!(document.encode(), "[Server]\nhost=localhost\nport=9090\n");
//! ```

use crate::error::Result;
use crate::options::IniOptions;
use crate::section::IniSection;
use crate::{de, ser};
use indexmap::IndexMap;
use std::ops::{Index, IndexMut};

/// An ordered collection of named sections with configurable syntax.
///
/// Each document instance is an independent mutable value: it exclusively
/// owns its sections, carries its own [`IniOptions`], and shares no state
/// with other instances. Concurrent access from multiple threads requires
/// external synchronization.
///
/// # Indexing
///
/// `document["section"]` panics if the section is absent;
/// `&mut document["section"]` creates an empty section for a new name. Use
/// [`IniDocument::get`] for a lookup that signals absence instead.
///
/// # Examples
///
/// ```rust
/// use ini_codec::IniDocument;
///
/// let mut document = IniDocument::new();
/// document["Window"]["width"].set(1280);
/// document["Window"]["fullscreen"].set(false);
///
/// assert_eq!(document.encode(), "[Window]\nwidth=1280\nfullscreen=false\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: IndexMap<String, IniSection>,
    options: IniOptions,
}

impl IniDocument {
    /// Creates an empty document with default options (`=` separator, `#`
    /// comment prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniDocument;
    ///
    /// let document = IniDocument::new();
    /// assert!(document.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        IniDocument::default()
    }

    /// Creates an empty document with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::{IniDocument, IniOptions};
    ///
    /// let options = IniOptions::new().with_separator(':');
    /// let mut document = IniDocument::with_options(options);
    /// document.decode("[Foo]\nbar:bla").unwrap();
    /// assert_eq!(document["Foo"]["bar"], "bla");
    /// ```
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        IniDocument {
            sections: IndexMap::new(),
            options,
        }
    }

    /// Returns the current syntax options.
    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Sets the field separator character.
    ///
    /// Takes effect on the next [`decode`](IniDocument::decode) or
    /// [`encode`](IniDocument::encode) call; already-parsed data is
    /// unaffected.
    pub fn set_separator(&mut self, separator: char) {
        self.options.separator = separator;
    }

    /// Sets a single-character comment marker, replacing the current prefix
    /// set.
    pub fn set_comment_prefix(&mut self, prefix: char) {
        self.options.comment_prefixes = vec![prefix.to_string()];
    }

    /// Sets a set of one-or-more-character comment markers, replacing the
    /// current prefix set. Empty strings are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniDocument;
    ///
    /// let mut document = IniDocument::new();
    /// document.set_comment_prefixes(["REM", "#", "//"]);
    /// document.decode("[Foo]\nREM note\n//more\nbar=bla").unwrap();
    /// assert_eq!(document["Foo"].len(), 1);
    /// ```
    pub fn set_comment_prefixes<I, S>(&mut self, prefixes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.comment_prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|prefix| !prefix.is_empty())
            .collect();
    }

    /// Decodes INI text, replacing this document's entire section mapping.
    ///
    /// Decoding never merges with prior content. It stops at the first
    /// structural error; in that case the document keeps its previous
    /// sections. Empty input is valid and produces an empty document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniDocument;
    ///
    /// let mut document = IniDocument::new();
    /// document.decode("[Foo]\nbar=hello world\n[Test]").unwrap();
    /// assert_eq!(document.len(), 2);
    /// assert_eq!(document["Foo"]["bar"], "hello world");
    /// assert!(document["Test"].is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) describing the first
    /// structural rule violated, with its line number.
    pub fn decode(&mut self, input: &str) -> Result<()> {
        self.sections = de::parse(input, &self.options)?;
        Ok(())
    }

    /// Serializes the document to INI text.
    ///
    /// Deterministic: sections and fields appear in preserved insertion
    /// order, one blank line between sections, no comments, no escaping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniDocument;
    ///
    /// let mut document = IniDocument::new();
    /// document["Foo"]["bar1"].set(true);
    /// document["Foo"]["bar2"].set(false);
    /// assert_eq!(document.encode(), "[Foo]\nbar1=true\nbar2=false\n");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        ser::write(&self.sections, &self.options)
    }

    /// Returns a reference to the section named `name`, or `None` if it is
    /// absent. Never creates an entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Returns a mutable reference to the section named `name`, or `None` if
    /// it is absent.
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut IniSection> {
        self.sections.get_mut(name)
    }

    /// Returns `true` if the document contains a section named `name`.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Inserts a section, overwriting any existing section of the same name
    /// while keeping its slot. Returns the old section, if any.
    pub fn insert(&mut self, name: impl Into<String>, section: IniSection) -> Option<IniSection> {
        self.sections.insert(name.into(), section)
    }

    /// Removes a section, preserving the order of the remaining sections.
    pub fn remove(&mut self, name: &str) -> Option<IniSection> {
        self.sections.shift_remove(name)
    }

    /// Removes all sections. Options are kept.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document contains no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over the section names, in first-seen order.
    pub fn names(&self) -> indexmap::map::Keys<'_, String, IniSection> {
        self.sections.keys()
    }

    /// Returns an iterator over the name-section pairs, in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IniSection> {
        self.sections.iter()
    }

    /// Returns a mutable iterator over the name-section pairs, in first-seen
    /// order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, IniSection> {
        self.sections.iter_mut()
    }
}

impl Index<&str> for IniDocument {
    type Output = IniSection;

    /// Returns the section named `name`.
    ///
    /// # Panics
    ///
    /// Panics if the section is absent. Use [`IniDocument::get`] for a
    /// non-panicking lookup.
    fn index(&self, name: &str) -> &IniSection {
        self.sections
            .get(name)
            .unwrap_or_else(|| panic!("no section named {name:?} in document"))
    }
}

impl IndexMut<&str> for IniDocument {
    /// Returns a mutable reference to the section named `name`, inserting an
    /// empty section first if it is absent.
    fn index_mut(&mut self, name: &str) -> &mut IniSection {
        self.sections.entry(name.to_string()).or_default()
    }
}

impl IntoIterator for IniDocument {
    type Item = (String, IniSection);
    type IntoIter = indexmap::map::IntoIter<String, IniSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniDocument {
    type Item = (&'a String, &'a IniSection);
    type IntoIter = indexmap::map::Iter<'a, String, IniSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
