use proptest::prelude::*;

use rulegen_core::normalize::{
    clean_rule_name, escape_single_quotes, normalize_rules, parse_priority,
};
use rulegen_ingest::RuleTable;

proptest! {
    #[test]
    fn parse_priority_never_panics(raw in ".*") {
        let _ = parse_priority(&raw);
    }

    #[test]
    fn parse_priority_truncates_toward_zero(value in -1.0e6f64..1.0e6f64) {
        prop_assert_eq!(parse_priority(&format!("{value}")), value.trunc() as i64);
    }

    #[test]
    fn cleaned_names_contain_only_allowed_characters(raw in ".*") {
        let cleaned = clean_rule_name(&raw);
        prop_assert!(
            cleaned
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == ' ')
        );
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    #[test]
    fn quote_escaping_is_reversible(raw in ".*") {
        let escaped = escape_single_quotes(&raw);
        prop_assert_eq!(escaped.replace("\\'", "'"), raw);
    }

    #[test]
    fn output_is_sorted_and_covers_every_valid_row(
        rows in prop::collection::vec(
            ("[A-Za-z][A-Za-z ]{0,8}", "[a-z/^$.]{1,8}", -5i64..5),
            1..20,
        )
    ) {
        let table = RuleTable {
            headers: vec![
                "pattern_name".to_string(),
                "pattern".to_string(),
                "priority".to_string(),
            ],
            rows: rows
                .iter()
                .map(|(name, pattern, priority)| {
                    vec![name.clone(), pattern.clone(), priority.to_string()]
                })
                .collect(),
        };
        let rules = normalize_rules(&table).expect("all rows carry name and pattern");
        prop_assert_eq!(rules.len(), rows.len());
        for pair in rules.windows(2) {
            prop_assert!(
                (pair[0].priority, pair[0].name.as_str())
                    <= (pair[1].priority, pair[1].name.as_str())
            );
        }
        // Patterns here contain no quotes, so they survive verbatim.
        for rule in &rules {
            prop_assert!(rows.iter().any(|(_, pattern, _)| pattern == &rule.pattern));
        }
    }
}
