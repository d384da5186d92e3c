//! Client name extraction.
//!
//! Prepositional framing ("for Acme", "with Jane Doe") is the strongest
//! signal; a bare pair of capitalized words is the weakest.

use once_cell::sync::Lazy;
use regex::Captures;
use serde::Serialize;

use crate::rules::{Rule, RuleSet};

/// Legal-entity suffixes that end a company name.
pub const ENTITY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Corp", "Company", "LLP", "PC"];

const FOR_CLIENT: &str = r"(?i:\b(?:for|client))\s+([A-Z][A-Za-z&.,']*(?:\s+[A-Za-z&.,':-]+)*)";
const WITH_CLIENT: &str =
    r"(?i:\b(?:meeting\s+with|with))\s+([A-Z][A-Za-z&.,']*(?:\s+[A-Za-z&.,':-]+)*)";
const COMPANY: &str =
    r"\b([A-Z][A-Za-z&']*(?:\s+[A-Z][A-Za-z&']*)*\s+(?:Inc|LLC|Ltd|Corp|Company|LLP|PC)\b\.?)";
const PERSON: &str = r"\b([A-Z][a-z]+\s+[A-Z][a-z]+)\b";

/// Words that end a prepositional capture.
const STOP_WORDS: &[&str] = &["on", "re:", "re", "-", "about"];
/// Stray prepositions trimmed from the end of a capture.
const TRAILING_PREPOSITIONS: &[&str] = &["on", "re", "about", "regarding"];
/// Lowercase connectors allowed inside a name ("Smith and Jones").
const CONNECTORS: &[&str] = &["and", "of", "&"];

static CLIENT_RULES: Lazy<RuleSet<String>> = Lazy::new(|| {
    RuleSet::new(vec![
        Rule::new("for", FOR_CLIENT, 0.9, framed_name).expect("for pattern"),
        Rule::new("with", WITH_CLIENT, 0.85, framed_name).expect("with pattern"),
        Rule::new("company", COMPANY, 0.8, company_name).expect("company pattern"),
        Rule::new("person", PERSON, 0.6, person_name).expect("person pattern"),
    ])
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientExtraction {
    pub client: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl ClientExtraction {
    pub fn none() -> Self {
        Self {
            client: String::new(),
            confidence: 0.0,
            rule: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.client.is_empty()
    }
}

/// Find the most likely client or organization name in `text`.
pub fn extract_client(text: &str) -> ClientExtraction {
    match CLIENT_RULES.first_match(text) {
        Some(m) => ClientExtraction {
            client: m.value,
            confidence: m.confidence,
            rule: Some(m.rule),
        },
        None => ClientExtraction::none(),
    }
}

fn framed_name(caps: &Captures<'_>) -> Option<String> {
    let name = clean_framed_capture(caps.get(1)?.as_str());
    (!name.is_empty()).then_some(name)
}

fn company_name(caps: &Captures<'_>) -> Option<String> {
    Some(caps.get(1)?.as_str().trim().to_string())
}

fn person_name(caps: &Captures<'_>) -> Option<String> {
    let name = caps.get(1)?.as_str().trim();
    (2..=50).contains(&name.chars().count()).then(|| name.to_string())
}

/// Reduce "ABC Corp merger review on Monday" to "ABC Corp".
fn clean_framed_capture(raw: &str) -> String {
    let mut tokens: Vec<&str> = raw
        .split_whitespace()
        .take_while(|t| !STOP_WORDS.contains(&t.to_lowercase().as_str()))
        .collect();

    while tokens
        .last()
        .is_some_and(|t| TRAILING_PREPOSITIONS.contains(&t.to_lowercase().as_str()))
    {
        tokens.pop();
    }

    let mut name = leading_name_run(&tokens);
    if let Some(end) = name.iter().position(|t| is_entity_suffix(t)) {
        if end > 0 {
            name.truncate(end + 1);
        }
    }

    let joined = name.join(" ");
    let trimmed = joined.trim_end_matches([',', '\'', ':', '-']);
    match trimmed.strip_suffix('.') {
        Some(stem) if !name.last().is_some_and(|t| is_entity_suffix(t)) => stem.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Tokens up to the first lowercase word, keeping connectors that sit
/// between two capitalized words.
fn leading_name_run<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut run = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let first = match token.chars().next() {
            Some(c) => c,
            None => break,
        };
        if first.is_uppercase() {
            run.push(*token);
            continue;
        }
        let next_is_capitalized = tokens
            .get(i + 1)
            .and_then(|t| t.chars().next())
            .is_some_and(char::is_uppercase);
        if CONNECTORS.contains(token) && next_is_capitalized && !run.is_empty() {
            run.push(*token);
            continue;
        }
        break;
    }
    run
}

fn is_entity_suffix(token: &str) -> bool {
    ENTITY_SUFFIXES.contains(&token.trim_end_matches(['.', ',']))
}
