//! serde interop for the INI data model.
//!
//! Documents serialize as nested string maps, so they pass cleanly through
//! any serde data format: an [`IniValue`] becomes a string, an [`IniSection`]
//! a map of strings, an [`IniDocument`] a map of maps. Deserializing builds
//! the same structures back, with insertion order taken from the source and
//! default [`IniOptions`](crate::IniOptions) on the document (syntax
//! configuration is not data and is not serialized).
//!
//! ## Examples
//!
//! ```rust
//! use ini_codec::IniDocument;
//!
//! let mut document = IniDocument::new();
//! document["Server"]["host"].set("localhost");
//!
//! let json = serde_json::to_string(&document).unwrap();
//! assert_eq!(json, r#"{"Server":{"host":"localhost"}}"#);
//!
//! let back: IniDocument = serde_json::from_str(&json).unwrap();
//! assert_eq!(back["Server"]["host"], "localhost");
//! ```

use crate::{IniDocument, IniSection, IniValue};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

impl Serialize for IniValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IniValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(IniValue::from)
    }
}

impl Serialize for IniSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

struct SectionVisitor;

impl<'de> Visitor<'de> for SectionVisitor {
    type Value = IniSection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut section = IniSection::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((field, value)) = access.next_entry::<String, IniValue>()? {
            section.insert(field, value);
        }
        Ok(section)
    }
}

impl<'de> Deserialize<'de> for IniSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SectionVisitor)
    }
}

impl Serialize for IniDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, section) in self.iter() {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = IniDocument;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of section names to field maps")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut document = IniDocument::new();
        while let Some((name, section)) = access.next_entry::<String, IniSection>()? {
            document.insert(name, section);
        }
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for IniDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}
