//! Configuration options for INI decoding and encoding.
//!
//! This module provides [`IniOptions`], which controls the syntax a document
//! accepts and emits:
//!
//! - **Separator**: the character dividing a field name from its value
//!   (default `=`)
//! - **Comment prefixes**: one or more markers that start a discarded
//!   comment when unescaped (default the single character `#`)
//!
//! The escape character is fixed at `\`.
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::{from_str_with_options, IniOptions};
//!
//! // Colon-separated fields, DOS-style comments
//! let options = IniOptions::new()
//!     .with_separator(':')
//!     .with_comment_prefixes(["REM", "#", "//"]);
//!
//! let document = from_str_with_options("[Foo]\nREM note\nbar:bla", options).unwrap();
//! assert_eq!(document["Foo"]["bar"], "bla");
//! ```

/// Syntax configuration for a document.
///
/// Options are per-instance state on an [`IniDocument`](crate::IniDocument);
/// changing them affects the next `decode`/`encode` call, never data that was
/// already parsed.
///
/// # Examples
///
/// ```rust
/// use ini_codec::IniOptions;
///
/// // Defaults: `=` separator, `#` comments
/// let options = IniOptions::new();
/// assert_eq!(options.separator, '=');
///
/// // Builder-style customization
/// let options = IniOptions::new()
///     .with_separator(':')
///     .with_comment_prefix('$');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniOptions {
    /// Character splitting a field name from its value.
    pub separator: char,
    /// Comment markers, matched literally at line-scan time. Checked in
    /// order at each scan position; the first match wins.
    pub comment_prefixes: Vec<String>,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            separator: '=',
            comment_prefixes: vec!["#".to_string()],
        }
    }
}

impl IniOptions {
    /// Creates default options (`=` separator, `#` comment prefix).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniOptions;
    ///
    /// let options = IniOptions::new().with_separator(':');
    /// assert_eq!(options.separator, ':');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets a single-character comment marker, replacing the current prefix
    /// set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniOptions;
    ///
    /// let options = IniOptions::new().with_comment_prefix('$');
    /// assert_eq!(options.comment_prefixes, vec!["$".to_string()]);
    /// ```
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: char) -> Self {
        self.comment_prefixes = vec![prefix.to_string()];
        self
    }

    /// Sets a set of one-or-more-character comment markers, replacing the
    /// current prefix set. Empty strings are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniOptions;
    ///
    /// let options = IniOptions::new().with_comment_prefixes(["REM", "//"]);
    /// assert_eq!(options.comment_prefixes.len(), 2);
    /// ```
    #[must_use]
    pub fn with_comment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|prefix| !prefix.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IniOptions::default();
        assert_eq!(options.separator, '=');
        assert_eq!(options.comment_prefixes, vec!["#".to_string()]);
    }

    #[test]
    fn test_single_char_prefix_replaces_set() {
        let options = IniOptions::new()
            .with_comment_prefixes(["REM", "//"])
            .with_comment_prefix(';');
        assert_eq!(options.comment_prefixes, vec![";".to_string()]);
    }

    #[test]
    fn test_empty_prefixes_are_discarded() {
        let options = IniOptions::new().with_comment_prefixes(["", "#"]);
        assert_eq!(options.comment_prefixes, vec!["#".to_string()]);
    }
}
