//! INI decoding.
//!
//! This module implements the line scanner behind
//! [`IniDocument::decode`](crate::IniDocument::decode).
//!
//! ## Overview
//!
//! The decoder is a single pass over the input lines with no backtracking.
//! Each line goes through the same pipeline:
//!
//! 1. **Comment stripping**: the first unescaped comment-prefix match and
//!    everything after it is discarded; an escape character directly before a
//!    match keeps that one match literal and is itself removed
//! 2. **Whitespace trim**: leading/trailing spaces and tabs are removed
//! 3. **Blank skip**: empty remainders are ignored
//! 4. **Section headers**: `[name]` opens (or re-opens) a section
//! 5. **Field lines**: everything else must be `name<sep>value` inside a
//!    section; duplicate field names are last-write-wins
//!
//! Decoding stops at the first structural error and reports it with the
//! offending line number; conversion of values to typed data never happens
//! here (values are stored as text).

use crate::error::{ParseError, Result};
use crate::options::IniOptions;
use crate::section::IniSection;
use indexmap::IndexMap;

/// The escape character disabling a directly following comment-prefix match.
const ESCAPE: char = '\\';

/// Parses `input` into an ordered section map.
///
/// Pure function of the input and options; the caller commits the result to
/// the document only on success, so a failed decode leaves prior content
/// untouched.
pub(crate) fn parse(input: &str, options: &IniOptions) -> Result<IndexMap<String, IniSection>> {
    let mut sections: IndexMap<String, IniSection> = IndexMap::new();
    let mut current: Option<String> = None;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let stripped = strip_comment(raw, &options.comment_prefixes);
        let content = stripped.trim();

        if content.is_empty() {
            continue;
        }

        if let Some(header) = content.strip_prefix('[') {
            let close = header
                .find(']')
                .ok_or(ParseError::UnclosedSection { line })?;
            let name = header[..close].trim();
            // Re-opened sections keep their first-seen slot
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let separator = content
            .find(options.separator)
            .ok_or(ParseError::MissingSeparator { line })?;
        let section = current
            .as_deref()
            .and_then(|name| sections.get_mut(name))
            .ok_or(ParseError::FieldOutsideSection { line })?;

        let field = content[..separator].trim();
        let value = content[separator + options.separator.len_utf8()..].trim();
        section.insert(field, value);
    }

    Ok(sections)
}

/// Removes the first unescaped comment-prefix match and everything after it.
///
/// Scans strictly left to right. When the remainder starts with the escape
/// character and a configured prefix follows immediately, the escape is
/// dropped, that one match is emitted literally, and scanning resumes after
/// it; a later unescaped match on the same line still starts a comment.
/// Escape characters not directly before a match are preserved.
fn strip_comment(line: &str, prefixes: &[String]) -> String {
    let mut output = String::with_capacity(line.len());
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(tail) = rest.strip_prefix(ESCAPE) {
            match match_prefix(tail, prefixes) {
                Some(prefix) => {
                    output.push_str(prefix);
                    pos += ESCAPE.len_utf8() + prefix.len();
                }
                None => {
                    output.push(ESCAPE);
                    pos += ESCAPE.len_utf8();
                }
            }
            continue;
        }

        if match_prefix(rest, prefixes).is_some() {
            break;
        }

        let Some(ch) = rest.chars().next() else { break };
        output.push(ch);
        pos += ch.len_utf8();
    }

    output
}

/// Returns the first configured prefix that `text` starts with.
fn match_prefix<'a>(text: &str, prefixes: &'a [String]) -> Option<&'a str> {
    prefixes
        .iter()
        .map(String::as_str)
        .find(|prefix| !prefix.is_empty() && text.starts_with(prefix))
}
