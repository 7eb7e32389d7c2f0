//! Canonical field names and the column-synonym table.

use std::collections::BTreeMap;

pub const PATTERN_NAME: &str = "pattern_name";
pub const PATTERN: &str = "pattern";
pub const DESCRIPTION: &str = "description";
pub const COLOR: &str = "color";
pub const PRIORITY: &str = "priority";

/// Alternate column spellings mapped to canonical field names.
///
/// Applied in order, first match wins; a canonical column present directly in
/// the row is never overwritten by a synonym.
pub const COLUMN_SYNONYMS: [(&str, &str); 10] = [
    ("name", PATTERN_NAME),
    ("regex", PATTERN),
    ("regex_pattern", PATTERN),
    ("pattern_regex", PATTERN),
    ("desc", DESCRIPTION),
    ("colour", COLOR),
    ("hex_color", COLOR),
    ("priority_level", PRIORITY),
    ("processing_order", PRIORITY),
    ("order", PRIORITY),
];

/// Reduce one data row to a map of canonical field name to raw cell value.
///
/// Column names are matched case-insensitively after trimming; values are
/// passed through untouched.
pub fn canonical_fields(headers: &[String], row: &[String]) -> BTreeMap<String, String> {
    let mut fields: BTreeMap<String, String> = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate() {
        let key = header.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let value = row.get(idx).cloned().unwrap_or_default();
        fields.entry(key).or_insert(value);
    }
    for (synonym, canonical) in COLUMN_SYNONYMS {
        if fields.contains_key(canonical) {
            continue;
        }
        if let Some(value) = fields.get(synonym).cloned() {
            fields.insert(canonical.to_string(), value);
        }
    }
    fields
}
