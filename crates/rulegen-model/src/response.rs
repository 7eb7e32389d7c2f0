use serde::{Deserialize, Serialize};

/// Structured result handed back to the request-handling collaborator.
///
/// Exactly one of the success fields or `error` is populated; the transform
/// never returns partial results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Rendered pattern-map code, ready to paste.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Total rules in the generated map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_count: Option<usize>,
    /// Data rows consumed after filtering invalid rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_rows: Option<usize>,
    /// Distinct priority values among the generated rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priorities: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn success(code: String, pattern_count: usize, csv_rows: usize, priorities: usize) -> Self {
        Self {
            success: true,
            code: Some(code),
            pattern_count: Some(pattern_count),
            csv_rows: Some(csv_rows),
            priorities: Some(priorities),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            code: None,
            pattern_count: None,
            csv_rows: None,
            priorities: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_serializes_without_error_field() {
        let response = GenerateResponse::success("CODE".to_string(), 3, 3, 2);
        let json = serde_json::to_string(&response).expect("serialize response");
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"pattern_count\":3"));
        assert!(!json.contains("\"error\""));
        let round: GenerateResponse = serde_json::from_str(&json).expect("deserialize response");
        assert_eq!(round.csv_rows, Some(3));
        assert_eq!(round.priorities, Some(2));
    }

    #[test]
    fn failure_response_carries_only_the_message() {
        let response = GenerateResponse::failure("no data rows".to_string());
        let json = serde_json::to_string(&response).expect("serialize response");
        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("\"code\""));
        let round: GenerateResponse = serde_json::from_str(&json).expect("deserialize response");
        assert_eq!(round.error.as_deref(), Some("no data rows"));
    }
}
