//! The end-to-end transform and its never-throw boundary.

use std::collections::BTreeSet;

use tracing::info;

use rulegen_ingest::read_rule_table;
use rulegen_model::{GenerateResponse, Result, Rule};

use crate::normalize::normalize_rules;
use crate::render::render_pattern_map;

/// Statistics describing one generated pattern map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStats {
    /// Total rules in the map.
    pub pattern_count: usize,
    /// Data rows consumed after filtering.
    pub csv_rows: usize,
    /// Distinct priority values among the rules.
    pub priorities: usize,
}

pub fn summarize(rules: &[Rule]) -> MapStats {
    let priorities: BTreeSet<i64> = rules.iter().map(|rule| rule.priority).collect();
    MapStats {
        pattern_count: rules.len(),
        csv_rows: rules.len(),
        priorities: priorities.len(),
    }
}

/// Output of a successful [`normalize`] run.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub rules: Vec<Rule>,
    pub code: String,
    pub stats: MapStats,
}

/// Run the full transform on raw uploaded bytes: parse, normalize, sort,
/// render, count.
pub fn normalize(bytes: &[u8]) -> Result<GeneratedMap> {
    let table = read_rule_table(bytes)?;
    let rules = normalize_rules(&table)?;
    let code = render_pattern_map(&rules);
    let stats = summarize(&rules);
    info!(
        pattern_count = stats.pattern_count,
        priorities = stats.priorities,
        "pattern map generated"
    );
    Ok(GeneratedMap { rules, code, stats })
}

/// Transform boundary for the request-handling collaborator.
///
/// Every failure is folded into the structured response; nothing propagates
/// to the caller.
pub fn generate(bytes: &[u8]) -> GenerateResponse {
    match normalize(bytes) {
        Ok(map) => GenerateResponse::success(
            map.code,
            map.stats.pattern_count,
            map.stats.csv_rows,
            map.stats.priorities,
        ),
        Err(error) => GenerateResponse::failure(error.to_string()),
    }
}
