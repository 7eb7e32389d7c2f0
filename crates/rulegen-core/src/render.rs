//! Rendering of normalized rules as an ordered-mapping code literal.

use rulegen_model::Rule;

/// Render rules as the `REGEX_PATTERNS` OrderedDict literal consumed by the
/// target notebook cell, in sorted order with one blank line between entries.
pub fn render_pattern_map(rules: &[Rule]) -> String {
    let mut lines: Vec<String> = vec![
        "# Global pattern library - edit and expand as needed".to_string(),
        "# IMPORTANT: Patterns are processed in ORDER - put more specific patterns FIRST!"
            .to_string(),
        String::new(),
        "REGEX_PATTERNS = OrderedDict([".to_string(),
    ];
    for rule in rules {
        lines.push(format!("    ('{}', {{", rule.name));
        lines.push(format!("        'pattern': r'{}',", rule.pattern));
        lines.push(format!("        'description': '{}',", rule.description));
        lines.push(format!("        'color': '{}',", rule.color));
        lines.push(format!("        'priority': {}", rule.priority));
        lines.push("    }),".to_string());
        lines.push(String::new());
    }
    lines.push("])".to_string());
    lines.join("\n")
}
