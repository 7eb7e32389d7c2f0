use serde::{Deserialize, Serialize};

/// One normalized entry of the generated pattern map.
///
/// String fields hold their final rendered form: `name` is cleaned for use as
/// a mapping key, and `pattern`/`description` already have single quotes
/// escaped for embedding in single-quoted literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    pub description: String,
    pub color: String,
    pub priority: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_round_trips_through_json() {
        let rule = Rule {
            name: "Home".to_string(),
            pattern: "^/$".to_string(),
            description: "Home".to_string(),
            color: "#87CEEB".to_string(),
            priority: 1,
        };
        let json = serde_json::to_string(&rule).expect("serialize rule");
        let round: Rule = serde_json::from_str(&json).expect("deserialize rule");
        assert_eq!(round, rule);
    }
}
