//! Ordered pattern rules with early return.
//!
//! Each extracted field owns a [`RuleSet`]: a priority-ordered list of
//! `(name, regex, extractor, confidence)` rules. The first rule whose
//! extractor accepts a match decides the result, and its confidence is
//! reported with it.

use regex::{Captures, Regex};

/// Turns one regex match into a value, or rejects it.
pub type Extractor<T> = fn(&Captures<'_>) -> Option<T>;

/// A single named pattern with a fixed confidence.
pub struct Rule<T> {
    name: &'static str,
    pattern: Regex,
    confidence: f64,
    extract: Extractor<T>,
}

impl<T> Rule<T> {
    pub fn new(
        name: &'static str,
        pattern: &str,
        confidence: f64,
        extract: Extractor<T>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            confidence,
            extract,
        })
    }

    /// Try every match of this rule's pattern, left to right, until the
    /// extractor accepts one.
    pub fn apply(&self, text: &str) -> Option<RuleMatch<T>> {
        self.pattern
            .captures_iter(text)
            .find_map(|caps| (self.extract)(&caps))
            .map(|value| RuleMatch {
                value,
                confidence: self.confidence,
                rule: self.name,
            })
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// Value produced by the winning rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch<T> {
    pub value: T,
    pub confidence: f64,
    pub rule: &'static str,
}

/// Rules evaluated in priority order.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<RuleMatch<T>> {
        self.rules.iter().find_map(|rule| rule.apply(text))
    }
}
