//! Error types for INI decoding and typed value access.
//!
//! Two independent failure families exist:
//!
//! - [`ParseError`]: structural problems detected while decoding INI text.
//!   Decoding stops at the first error and reports it; there is no partial
//!   recovery or skip-and-continue mode.
//! - [`ConversionError`]: a stored value's text does not match the grammar of
//!   the requested target type. Raised only at the point of typed access,
//!   never during decoding (everything is stored as text first).
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::{from_str, ParseError};
//!
//! let result = from_str("[Server\nport=8080");
//! assert_eq!(result.unwrap_err(), ParseError::UnclosedSection { line: 1 });
//! ```

use thiserror::Error;

/// Represents all structural errors that can occur while decoding INI text.
///
/// Each variant carries the 1-based line number where decoding stopped.
///
/// # Examples
///
/// ```rust
/// use ini_codec::{from_str, ParseError};
///
/// let err = from_str("[Server]\nport").unwrap_err();
/// assert_eq!(err, ParseError::MissingSeparator { line: 2 });
/// assert!(err.to_string().contains("line 2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A section header `[` without a matching `]` on the same line
    #[error("unclosed section header at line {line}")]
    UnclosedSection { line: usize },

    /// A non-blank, non-header line lacking the configured field separator
    #[error("missing field separator at line {line}")]
    MissingSeparator { line: usize },

    /// A field line encountered before any section header has been seen
    #[error("field outside of a section at line {line}")]
    FieldOutsideSection { line: usize },

    /// IO error while reading from or writing to a stream
    #[error("IO error: {0}")]
    Io(String),
}

impl ParseError {
    /// Returns the 1-based input line where decoding stopped, if this error
    /// originated from a line of input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::ParseError;
    ///
    /// assert_eq!(ParseError::UnclosedSection { line: 3 }.line(), Some(3));
    /// assert_eq!(ParseError::Io("gone".to_string()).line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnclosedSection { line }
            | ParseError::MissingSeparator { line }
            | ParseError::FieldOutsideSection { line } => Some(*line),
            ParseError::Io(_) => None,
        }
    }

    /// Creates an IO error from a standard IO error's display message.
    pub(crate) fn io(err: &std::io::Error) -> Self {
        ParseError::Io(err.to_string())
    }
}

/// Represents a failed typed conversion of a stored value.
///
/// Each variant carries the offending text verbatim. Conversions never
/// partially parse: trailing garbage after a valid token is an error.
///
/// # Examples
///
/// ```rust
/// use ini_codec::{ConversionError, IniValue};
///
/// let value = IniValue::from("bla");
/// assert_eq!(
///     value.as_bool(),
///     Err(ConversionError::InvalidBoolean("bla".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text is not `true` or `false` (case-insensitive)
    #[error("invalid boolean literal {0:?}")]
    InvalidBoolean(String),

    /// The text is not a decimal integer
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),

    /// The text is not a decimal floating-point number
    #[error("invalid float literal {0:?}")]
    InvalidFloat(String),
}

impl ConversionError {
    /// Returns the text that failed to convert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::ConversionError;
    ///
    /// let err = ConversionError::InvalidInteger("1.5".to_string());
    /// assert_eq!(err.text(), "1.5");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ConversionError::InvalidBoolean(text)
            | ConversionError::InvalidInteger(text)
            | ConversionError::InvalidFloat(text) => text,
        }
    }
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
