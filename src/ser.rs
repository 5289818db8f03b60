//! INI encoding.
//!
//! This module implements the writer behind
//! [`IniDocument::encode`](crate::IniDocument::encode).
//!
//! Output is fully determined by the document state: sections appear in
//! first-seen order with a `[name]` header, one `name<sep>value` line per
//! field in field order, and a blank line between sections (none after the
//! last). Comments stripped during decoding are never re-introduced, and no
//! escaping is applied to values on the way out; a value containing an
//! active comment prefix or the separator will not survive a re-decode
//! unchanged, which is a documented boundary of the text format rather than
//! of this writer.

use crate::options::IniOptions;
use crate::section::IniSection;
use indexmap::IndexMap;

/// Serializes the section map to INI text.
pub(crate) fn write(sections: &IndexMap<String, IniSection>, options: &IniOptions) -> String {
    let mut output = String::with_capacity(estimate_len(sections));

    for (index, (name, section)) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push('[');
        output.push_str(name);
        output.push_str("]\n");

        for (field, value) in section.iter() {
            output.push_str(field);
            output.push(options.separator);
            output.push_str(value.as_str());
            output.push('\n');
        }
    }

    output
}

/// Lower bound on the output size, so the writer rarely reallocates.
fn estimate_len(sections: &IndexMap<String, IniSection>) -> usize {
    sections
        .iter()
        .map(|(name, section)| {
            let fields: usize = section
                .iter()
                .map(|(field, value)| field.len() + value.as_str().len() + 2)
                .sum();
            name.len() + 4 + fields
        })
        .sum()
}
