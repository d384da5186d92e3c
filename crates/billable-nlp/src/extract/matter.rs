//! Matter / task phrase extraction.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::rules::{Rule, RuleSet};
use crate::text::capitalize_first;

/// Verbs recognised in both gerund ("drafting") and base ("draft") form.
pub const TASK_VERBS: &[(&str, &str)] = &[
    ("draft", "drafting"),
    ("review", "reviewing"),
    ("prepare", "preparing"),
    ("analyze", "analyzing"),
    ("research", "researching"),
    ("attend", "attending"),
    ("conduct", "conducting"),
    ("file", "filing"),
    ("negotiate", "negotiating"),
    ("revise", "revising"),
];

const REGARDING: &str = r"(?i)\b(?:re:|regarding|about|on)\s+(.+?)(?:\s+for\b|\s+with\b|\s+\d+|$)";

static MATTER_RULES: Lazy<RuleSet<String>> = Lazy::new(|| {
    let gerunds = TASK_VERBS.iter().map(|(_, g)| *g).collect::<Vec<_>>().join("|");
    let bases = TASK_VERBS.iter().map(|(b, _)| *b).collect::<Vec<_>>().join("|");
    let gerund = format!(r"(?i)\b({})\s+(.+?)(?:\s+for\b|\s+\d+|$)", gerunds);
    let base = format!(r"(?i)\b(?:{})\s+(.+?)(?:\s+for\b|\s+\d+|$)", bases);

    RuleSet::new(vec![
        Rule::new("regarding", REGARDING, 0.9, regarding_phrase).expect("regarding pattern"),
        Rule::new("gerund", &gerund, 0.85, gerund_phrase).expect("gerund pattern"),
        Rule::new("base_verb", &base, 0.75, base_verb_object).expect("base verb pattern"),
    ])
});

static TRAILING_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:for|with)$").expect("trailing link pattern"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatterExtraction {
    pub matter: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl MatterExtraction {
    pub fn none() -> Self {
        Self {
            matter: String::new(),
            confidence: 0.0,
            rule: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matter.is_empty()
    }
}

/// Find the task or matter phrase in `text`.
pub fn extract_matter(text: &str) -> MatterExtraction {
    match MATTER_RULES.first_match(text) {
        Some(m) => MatterExtraction {
            matter: m.value,
            confidence: m.confidence,
            rule: Some(m.rule),
        },
        None => MatterExtraction::none(),
    }
}

fn strip_trailing_link(phrase: &str) -> String {
    TRAILING_LINK.replace(phrase.trim(), "").trim().to_string()
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn regarding_phrase(caps: &Captures<'_>) -> Option<String> {
    non_empty(strip_trailing_link(caps.get(1)?.as_str()))
}

fn gerund_phrase(caps: &Captures<'_>) -> Option<String> {
    let verb = caps.get(1)?.as_str();
    let object = caps.get(2)?.as_str().trim();
    non_empty(capitalize_first(format!("{} {}", verb, object).trim()))
}

fn base_verb_object(caps: &Captures<'_>) -> Option<String> {
    non_empty(capitalize_first(&strip_trailing_link(caps.get(1)?.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matter(text: &str, matter: &str, confidence: f64) {
        let m = extract_matter(text);
        assert_eq!(m.matter, matter, "matter for {:?}", text);
        assert!(
            (m.confidence - confidence).abs() < 1e-9,
            "confidence for {:?}: {}",
            text,
            m.confidence
        );
    }

    #[test]
    fn test_regarding_phrases() {
        assert_matter("2 hours re: lease renewal for Acme", "lease renewal", 0.9);
        assert_matter("call regarding settlement terms with counsel", "settlement terms", 0.9);
        assert_matter("memo about zoning variance 3 hours", "zoning variance", 0.9);
        assert_matter("worked on the merger", "the merger", 0.9);
    }

    #[test]
    fn test_gerund() {
        let m = extract_matter("drafting NDA for XYZ Inc");
        assert!(m.matter.starts_with("Drafting"));
        assert_matter("drafting NDA for XYZ Inc", "Drafting NDA", 0.85);
        assert_matter("Reviewing discovery responses 2 hours", "Reviewing discovery responses", 0.85);
    }

    #[test]
    fn test_base_verb_keeps_object() {
        assert_matter("review purchase agreement for Acme", "Purchase agreement", 0.75);
        assert_matter("draft motion to compel", "Motion to compel", 0.75);
    }

    #[test]
    fn test_gerund_must_be_followed_by_object() {
        assert!(extract_matter("finished reviewing").is_empty());
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract_matter("3 hours with Jane"), MatterExtraction::none());
        assert_eq!(extract_matter(""), MatterExtraction::none());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(extract_matter("drafting memo re: lease dispute").rule, Some("regarding"));
        assert_eq!(extract_matter("review and drafting memo").rule, Some("gerund"));
        assert_eq!(extract_matter("review lease").rule, Some("base_verb"));
    }
}
