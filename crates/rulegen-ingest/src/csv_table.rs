use csv::ReaderBuilder;
use tracing::debug;

use rulegen_model::{Result, RulegenError};

/// In-memory view of one uploaded rule table: a header row plus data rows.
///
/// Headers are trimmed and BOM-stripped; cell values are kept verbatim so
/// that pattern text survives unchanged into the generated code.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Parse raw uploaded bytes into a [`RuleTable`].
///
/// The first record is the header row; comma-delimited with RFC-4180-style
/// quoting. Rows that are entirely empty after trimming are dropped. Fails
/// with [`RulegenError::Decode`] on non-UTF-8 input and
/// [`RulegenError::EmptyInput`] when no data rows remain.
pub fn read_rule_table(bytes: &[u8]) -> Result<RuleTable> {
    let text = std::str::from_utf8(bytes)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| RulegenError::Processing(format!("read record: {error}")))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        records.push(row);
    }
    let Some((header_record, data_records)) = records.split_first() else {
        return Err(RulegenError::EmptyInput);
    };
    let headers: Vec<String> = header_record
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in data_records {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(RulegenError::EmptyInput);
    }
    debug!(columns = headers.len(), rows = rows.len(), "parsed rule table");
    Ok(RuleTable { headers, rows })
}
