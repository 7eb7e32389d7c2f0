//! Row normalization: cleaning, defaulting, and deterministic ordering.

use tracing::debug;

use rulegen_ingest::RuleTable;
use rulegen_model::{Result, Rule, RulegenError};

use crate::canonical::{COLOR, DESCRIPTION, PATTERN, PATTERN_NAME, PRIORITY, canonical_fields};

/// Default colors assigned to rules whose rows carry none, cycled by the
/// rule's position among retained rows.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#87CEEB", "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#B19CD9",
    "#FF9F43", "#F0A3A3",
];

pub fn default_color(index: usize) -> &'static str {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// Clean a rule name for use as a mapping key.
///
/// Keeps word characters, whitespace, and hyphens; collapses internal
/// whitespace runs to a single space; trims the ends.
pub fn clean_rule_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || *ch == '-' || ch.is_whitespace())
        .collect();
    let mut cleaned = String::new();
    for part in kept.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(part);
    }
    cleaned
}

/// Escape single quotes for embedding in a single-quoted literal.
///
/// Backslashes and all other characters pass through untouched; the rendered
/// pattern literal is raw-string style.
pub fn escape_single_quotes(raw: &str) -> String {
    raw.replace('\'', "\\'")
}

/// Parse a priority cell, accepting floating-point input truncated toward
/// zero. Unparseable or non-finite values fall back to 1.
pub fn parse_priority(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 1,
    }
}

/// Normalize all data rows of a table into sorted [`Rule`]s.
///
/// Rows missing a usable name or pattern are skipped silently; defects in
/// optional fields are repaired with defaults. Fails only when nothing
/// survives.
pub fn normalize_rules(table: &RuleTable) -> Result<Vec<Rule>> {
    let mut rules: Vec<Rule> = Vec::new();
    for (row_index, row) in table.rows.iter().enumerate() {
        let fields = canonical_fields(&table.headers, row);
        let Some(raw_name) = fields.get(PATTERN_NAME).filter(|v| !v.trim().is_empty()) else {
            debug!(row = row_index, "skipping row without pattern_name");
            continue;
        };
        let Some(raw_pattern) = fields.get(PATTERN).filter(|v| !v.trim().is_empty()) else {
            debug!(row = row_index, "skipping row without pattern");
            continue;
        };
        let name = clean_rule_name(raw_name);
        if name.is_empty() {
            debug!(row = row_index, "skipping row whose name cleans to nothing");
            continue;
        }
        let description = match fields.get(DESCRIPTION).filter(|v| !v.trim().is_empty()) {
            Some(value) => escape_single_quotes(value),
            None => name.clone(),
        };
        let priority = match fields.get(PRIORITY).filter(|v| !v.trim().is_empty()) {
            Some(value) => parse_priority(value),
            None => 1,
        };
        let color = match fields.get(COLOR).filter(|v| !v.trim().is_empty()) {
            Some(value) if value.starts_with('#') => value.clone(),
            Some(value) => format!("#{value}"),
            None => default_color(rules.len()).to_string(),
        };
        rules.push(Rule {
            name,
            pattern: escape_single_quotes(raw_pattern),
            description,
            color,
            priority,
        });
    }
    if rules.is_empty() {
        return Err(RulegenError::NoValidRows);
    }
    rules.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(rules)
}
