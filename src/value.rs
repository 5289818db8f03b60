//! Raw field values with on-demand typed conversion.
//!
//! This module provides [`IniValue`], the leaf of the INI data model. A value
//! stores nothing but the raw text that appeared after the field separator
//! (or that a typed assignment produced); interpretation as a boolean,
//! integer, or float happens lazily at access time.
//!
//! ## Why text-only storage?
//!
//! INI carries no type tags, so the stored text is the single source of
//! truth. Keeping values as text means:
//!
//! - **Lossless round-trips**: encode emits exactly what decode stored
//! - **Lazy validation**: a field consumed as a string never has to satisfy
//!   a numeric grammar
//! - **One conversion contract**: [`IniValue::as_bool`], [`IniValue::as_int`]
//!   and [`IniValue::as_float`] are the only places where grammar is checked
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::IniValue;
//!
//! let value = IniValue::from("1.2");
//! assert_eq!(value.as_str(), "1.2");
//! assert_eq!(value.as_float(), Ok(1.2));
//! assert!(value.as_int().is_err());
//!
//! // Typed assignment stores a canonical textual encoding.
//! let flag = IniValue::from(true);
//! assert_eq!(flag.as_str(), "true");
//! ```

use crate::error::ConversionError;
use std::fmt;

/// A single field value, stored as raw text.
///
/// Created empty, from a parsed line, or from a typed assignment via the
/// `From` impls below. Purely value-semantic: cloning copies the text, no
/// shared ownership.
///
/// # Examples
///
/// ```rust
/// use ini_codec::IniValue;
///
/// let mut value = IniValue::new();
/// assert_eq!(value.as_str(), "");
///
/// value.set(-2);
/// assert_eq!(value.as_str(), "-2");
/// assert_eq!(value.as_int(), Ok(-2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniValue {
    text: String,
}

impl IniValue {
    /// Creates an empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniValue;
    ///
    /// let value = IniValue::new();
    /// assert!(value.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        IniValue::default()
    }

    /// Returns the stored text verbatim.
    ///
    /// This conversion always succeeds. No trimming happens at this layer;
    /// trimming is applied while parsing, before the value is stored.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the stored text is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Interprets the stored text as a boolean.
    ///
    /// Only the literals `true` and `false` match, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniValue;
    ///
    /// assert_eq!(IniValue::from("tRuE").as_bool(), Ok(true));
    /// assert_eq!(IniValue::from("false").as_bool(), Ok(false));
    /// assert!(IniValue::from("1").as_bool().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidBoolean`] for any other text.
    pub fn as_bool(&self) -> Result<bool, ConversionError> {
        if self.text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if self.text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConversionError::InvalidBoolean(self.text.clone()))
        }
    }

    /// Interprets the stored text as a decimal integer.
    ///
    /// The whole text must match the integer grammar; trailing garbage after
    /// a valid token is an error, not a truncation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniValue;
    ///
    /// assert_eq!(IniValue::from("-2").as_int(), Ok(-2));
    /// assert!(IniValue::from("1.2").as_int().is_err());
    /// assert!(IniValue::from("").as_int().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidInteger`] when the text does not
    /// parse as an `i64`.
    pub fn as_int(&self) -> Result<i64, ConversionError> {
        self.text
            .parse()
            .map_err(|_| ConversionError::InvalidInteger(self.text.clone()))
    }

    /// Interprets the stored text as a floating-point number.
    ///
    /// Integral tokens are accepted: `"1"` converts to `1.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniValue;
    ///
    /// assert_eq!(IniValue::from("1.2").as_float(), Ok(1.2));
    /// assert_eq!(IniValue::from("1").as_float(), Ok(1.0));
    /// assert!(IniValue::from("bla").as_float().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidFloat`] when the text does not parse
    /// as an `f64`.
    pub fn as_float(&self) -> Result<f64, ConversionError> {
        self.text
            .parse()
            .map_err(|_| ConversionError::InvalidFloat(self.text.clone()))
    }

    /// Replaces the stored text with the canonical encoding of `value`.
    ///
    /// Convenience for assigning through index expressions, where the target
    /// is an `&mut IniValue` rather than a fresh value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_codec::IniDocument;
    ///
    /// let mut document = IniDocument::new();
    /// document["Window"]["width"].set(1280);
    /// document["Window"]["title"].set("demo");
    /// assert_eq!(document.encode(), "[Window]\nwidth=1280\ntitle=demo\n");
    /// ```
    pub fn set(&mut self, value: impl Into<IniValue>) {
        *self = value.into();
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        IniValue { text: value }
    }
}

impl From<char> for IniValue {
    fn from(value: char) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<bool> for IniValue {
    fn from(value: bool) -> Self {
        IniValue {
            text: if value { "true" } else { "false" }.to_string(),
        }
    }
}

impl From<i8> for IniValue {
    fn from(value: i8) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<i16> for IniValue {
    fn from(value: i16) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<i32> for IniValue {
    fn from(value: i32) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<i64> for IniValue {
    fn from(value: i64) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<u8> for IniValue {
    fn from(value: u8) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<u16> for IniValue {
    fn from(value: u16) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<u32> for IniValue {
    fn from(value: u32) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<u64> for IniValue {
    fn from(value: u64) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<f32> for IniValue {
    fn from(value: f32) -> Self {
        // Display yields the shortest decimal text that round-trips the value
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<f64> for IniValue {
    fn from(value: f64) -> Self {
        IniValue {
            text: value.to_string(),
        }
    }
}

impl From<IniValue> for String {
    fn from(value: IniValue) -> Self {
        value.text
    }
}

impl PartialEq<str> for IniValue {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for IniValue {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
