//! # ini_codec
//!
//! A round-trippable reader/writer for INI-style configuration files.
//!
//! ## What does it do?
//!
//! `ini_codec` parses text organized into named sections of key-value fields
//! into an in-memory [`IniDocument`], gives typed access to field values
//! (string, boolean, integer, floating point), and serializes the structure
//! back to text deterministically.
//!
//! ## Key Features
//!
//! - **Round-trippable**: values are stored as raw text, so what decode reads
//!   is what encode writes; numeric and boolean assignments store canonical
//!   literals that survive the trip exactly
//! - **Configurable syntax**: custom field separator, single- or
//!   multi-character comment prefixes (`#`, `;`, `REM`, `//`, ...), and
//!   `\`-escaped comment characters inside values
//! - **Order preserving**: sections and fields iterate and encode in
//!   first-seen order, with duplicate fields resolved last-write-wins
//! - **Typed on demand**: conversion is lazy and validating; nothing has to
//!   satisfy a numeric grammar until it is actually read as a number
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ini_codec = "0.1"
//! ```
//!
//! ### Reading and writing a document
//!
//! ```rust
//! use ini_codec::{from_str, to_string};
//!
//! let mut document = from_str(
//!     "[Server]\n\
//!      host = localhost   # trimmed and comment-stripped\n\
//!      port = 8080",
//! )
//! .unwrap();
//!
//! assert_eq!(document["Server"]["host"], "localhost");
//! assert_eq!(document["Server"]["port"].as_int(), Ok(8080));
//!
//! document["Server"]["port"].set(9090);
//! assert_eq!(to_string(&document), "[Server]\nhost=localhost\nport=9090\n");
//! ```
//!
//! ### Custom syntax
//!
//! ```rust
//! use ini_codec::{from_str_with_options, IniOptions};
//!
//! let options = IniOptions::new()
//!     .with_separator(':')
//!     .with_comment_prefixes(["REM", "//"]);
//!
//! let document = from_str_with_options("[Foo]\nREM note\nbar:bla", options).unwrap();
//! assert_eq!(document["Foo"]["bar"], "bla");
//! ```
//!
//! ### Building documents with the ini! macro
//!
//! ```rust
//! use ini_codec::ini;
//!
//! let document = ini! {
//!     "Window" => {
//!         "width" => 1280,
//!         "fullscreen" => false,
//!     },
//! };
//!
//! assert_eq!(document.encode(), "[Window]\nwidth=1280\nfullscreen=false\n");
//! ```
//!
//! ## Format Notes
//!
//! - Inline comments are stripped anywhere on a line; an escape character
//!   `\` directly before a comment marker keeps that one marker literal
//! - Section and field names, and field values, are whitespace-trimmed while
//!   parsing; stored values are returned verbatim afterwards
//! - Encode never emits comments and never escapes, so a value containing an
//!   active comment prefix or the separator will not re-decode unchanged
//!   (a boundary of the text format, not of this crate)
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`basic.rs`** - Parsing and typed value access
//! - **`custom_syntax.rs`** - Separators and comment-prefix sets
//! - **`write_config.rs`** - Building a document and writing it out
//!
//! Run any example with: `cargo run --example <name>`

mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod options;
pub mod section;
mod ser;
mod serde_impl;
pub mod value;

pub use document::IniDocument;
pub use error::{ConversionError, ParseError, Result};
pub use options::IniOptions;
pub use section::IniSection;
pub use value::IniValue;

use std::fs;
use std::io;
use std::path::Path;

/// Decodes an [`IniDocument`] from a string with default options.
///
/// # Examples
///
/// ```rust
/// use ini_codec::from_str;
///
/// let document = from_str("[Foo]\nbar=bla").unwrap();
/// assert_eq!(document["Foo"]["bar"], "bla");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] when the input violates a structural rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<IniDocument> {
    from_str_with_options(input, IniOptions::default())
}

/// Decodes an [`IniDocument`] from a string with custom options.
///
/// The returned document keeps the options, so a later
/// [`encode`](IniDocument::encode) uses the same syntax.
///
/// # Examples
///
/// ```rust
/// use ini_codec::{from_str_with_options, IniOptions};
///
/// let options = IniOptions::new().with_separator(':');
/// let document = from_str_with_options("[Foo]\nbar:bla", options).unwrap();
/// assert_eq!(document.encode(), "[Foo]\nbar:bla\n");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] when the input violates a structural rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(input: &str, options: IniOptions) -> Result<IniDocument> {
    let mut document = IniDocument::with_options(options);
    document.decode(input)?;
    Ok(document)
}

/// Decodes an [`IniDocument`] from an IO stream with default options.
///
/// # Examples
///
/// ```rust
/// use ini_codec::from_reader;
/// use std::io::Cursor;
///
/// let document = from_reader(Cursor::new(b"[Foo]\nbar=bla")).unwrap();
/// assert_eq!(document["Foo"]["bar"], "bla");
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Io`] when reading fails, or a structural
/// [`ParseError`] when the text is invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<IniDocument> {
    from_reader_with_options(reader, IniOptions::default())
}

/// Decodes an [`IniDocument`] from an IO stream with custom options.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when reading fails, or a structural
/// [`ParseError`] when the text is invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(mut reader: R, options: IniOptions) -> Result<IniDocument> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| ParseError::io(&e))?;
    from_str_with_options(&input, options)
}

/// Decodes an [`IniDocument`] from a file with default options.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be read, or a structural
/// [`ParseError`] when its text is invalid.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<IniDocument> {
    let input = fs::read_to_string(path).map_err(|e| ParseError::io(&e))?;
    from_str(&input)
}

/// Encodes a document to a string.
///
/// Identical to [`IniDocument::encode`]; provided for symmetry with
/// [`from_str`].
///
/// # Examples
///
/// ```rust
/// use ini_codec::{ini, to_string};
///
/// let document = ini! { "Foo" => { "bar" => 1 } };
/// assert_eq!(to_string(&document), "[Foo]\nbar=1\n");
/// ```
#[must_use]
pub fn to_string(document: &IniDocument) -> String {
    document.encode()
}

/// Encodes a document to a writer.
///
/// # Examples
///
/// ```rust
/// use ini_codec::{ini, to_writer};
///
/// let document = ini! { "Foo" => { "bar" => 1 } };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &document).unwrap();
/// assert_eq!(buffer, b"[Foo]\nbar=1\n");
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Io`] when writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, document: &IniDocument) -> Result<()> {
    writer
        .write_all(document.encode().as_bytes())
        .map_err(|e| ParseError::io(&e))?;
    Ok(())
}

/// Encodes a document to a file, replacing any existing content.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P: AsRef<Path>>(path: P, document: &IniDocument) -> Result<()> {
    fs::write(path, document.encode()).map_err(|e| ParseError::io(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_str_round_trip() {
        let text = "[Foo]\nbar=hello world\n\n[Test]\n";
        let document = from_str(text).unwrap();
        assert_eq!(to_string(&document), text);
    }

    #[test]
    fn test_from_reader_matches_from_str() {
        let text = "[Foo]\nbar=bla";
        let from_text = from_str(text).unwrap();
        let from_stream = from_reader(Cursor::new(text.as_bytes())).unwrap();
        assert_eq!(from_text, from_stream);
    }

    #[test]
    fn test_options_survive_into_document() {
        let options = IniOptions::new().with_separator(':');
        let document = from_str_with_options("[Foo]\nbar:1", options.clone()).unwrap();
        assert_eq!(document.options(), &options);
        assert_eq!(document.encode(), "[Foo]\nbar:1\n");
    }

    #[test]
    fn test_to_writer_emits_encoded_text() {
        let document = ini! { "Foo" => { "a" => 1, "b" => true } };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &document).unwrap();
        assert_eq!(buffer, b"[Foo]\na=1\nb=true\n");
    }

    #[test]
    fn test_empty_input_is_a_valid_empty_document() {
        let document = from_str("").unwrap();
        assert!(document.is_empty());
        assert_eq!(to_string(&document), "");
    }
}
