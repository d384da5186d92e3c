//! Duration extraction: "2.5 hours", "1 and 1/2 hours", "2-4 hours", "3h 45m".

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::rules::{Rule, RuleSet};

const DECIMAL: &str = r"(?i)(\d+\.\d+)\s*(?:(?:hours?|hrs?|h)\b)?";
const FRACTION: &str = r"(?i)\b(\d+)\s+(?:and\s+)?(\d+)/(\d+)(?:\s*(?:hours?|hrs?|h)\b)?";
const BARE_FRACTION: &str = r"(?i)\b(\d+)/(\d+)\s*(?:hours?|hrs?|h)\b";
const RANGE: &str = r"(?i)\b(\d+)\s*-\s*(\d+)\s*(?:hours?|hrs?)\b";
// The unit ends at a word boundary or runs straight into the minutes ("1h30m").
const HOURS: &str = r"(?i)(\d+(?:\.\d+)?)\s*(?:hours?|hrs?|h)(?:\b|\d)";
const MINUTES: &str = r"(?i)(\d+)\s*(?:minutes?|mins?|m)\b";

pub const PLAIN_CONFIDENCE: f64 = 0.85;

/// Explicit phrasings, most specific first. Plain hours/minutes are the
/// fallback when none of these fire.
static TIME_RULES: Lazy<RuleSet<(u32, u32)>> = Lazy::new(|| {
    RuleSet::new(vec![
        Rule::new("decimal", DECIMAL, 0.95, decimal_hours).expect("decimal pattern"),
        Rule::new("fraction", FRACTION, 0.9, mixed_fraction).expect("fraction pattern"),
        Rule::new("bare_fraction", BARE_FRACTION, 0.9, bare_fraction)
            .expect("bare fraction pattern"),
        Rule::new("range", RANGE, 0.7, range_midpoint).expect("range pattern"),
    ])
});

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(HOURS).expect("hours pattern"));
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(MINUTES).expect("minutes pattern"));

/// Every duration phrasing, in the order they are stripped from descriptions.
static TIME_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [RANGE, FRACTION, BARE_FRACTION, DECIMAL, HOURS, MINUTES]
        .iter()
        .map(|p| Regex::new(p).expect("time phrase pattern"))
        .collect()
});

/// Extracted duration. `minutes` is always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeExtraction {
    pub hours: u32,
    pub minutes: u32,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl TimeExtraction {
    fn new(hours: u32, minutes: u32, confidence: f64, rule: Option<&'static str>) -> Self {
        Self {
            hours: hours.saturating_add(minutes / 60),
            minutes: minutes % 60,
            confidence,
            rule,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    pub fn is_empty(&self) -> bool {
        self.total_minutes() == 0
    }
}

/// Find a duration in free text.
pub fn extract_time(text: &str) -> TimeExtraction {
    if let Some(m) = TIME_RULES.first_match(text) {
        let (hours, minutes) = m.value;
        return TimeExtraction::new(hours, minutes, m.confidence, Some(m.rule));
    }

    let (hours, minutes) = plain_duration(text);
    if hours > 0 || minutes > 0 {
        TimeExtraction::new(hours, minutes, PLAIN_CONFIDENCE, Some("plain"))
    } else {
        TimeExtraction::new(0, 0, 0.0, None)
    }
}

/// Remove every duration phrase from `text`, leaving spaces behind.
pub(crate) fn strip_time_phrases(text: &str) -> String {
    TIME_PHRASES.iter().fold(text.to_string(), |acc, re| {
        re.replace_all(&acc, " ").into_owned()
    })
}

/// Independent scan for "N hours" and "N minutes"; either may be absent.
fn plain_duration(text: &str) -> (u32, u32) {
    let (hours, carried) = HOURS_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .and_then(split_hours)
        .unwrap_or((0, 0));

    let minutes = MINUTES_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    (hours, carried.saturating_add(minutes))
}

/// Split fractional hours into whole hours and rounded minutes.
fn split_hours(value: f64) -> Option<(u32, u32)> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    let hours = value.floor();
    let minutes = ((value - hours) * 60.0).round();
    Some((hours as u32, minutes as u32))
}

fn fraction_minutes(numerator: &str, denominator: &str) -> Option<u32> {
    let n: u32 = numerator.parse().ok()?;
    let d: u32 = denominator.parse().ok()?;
    if d == 0 {
        return None;
    }
    let minutes = (f64::from(n) / f64::from(d) * 60.0).round();
    (minutes <= f64::from(u32::MAX)).then_some(minutes as u32)
}

fn decimal_hours(caps: &Captures<'_>) -> Option<(u32, u32)> {
    split_hours(caps.get(1)?.as_str().parse().ok()?)
}

fn mixed_fraction(caps: &Captures<'_>) -> Option<(u32, u32)> {
    let whole: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes = fraction_minutes(caps.get(2)?.as_str(), caps.get(3)?.as_str())?;
    Some((whole, minutes))
}

fn bare_fraction(caps: &Captures<'_>) -> Option<(u32, u32)> {
    let minutes = fraction_minutes(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
    Some((0, minutes))
}

fn range_midpoint(caps: &Captures<'_>) -> Option<(u32, u32)> {
    let low: u32 = caps.get(1)?.as_str().parse().ok()?;
    let high: u32 = caps.get(2)?.as_str().parse().ok()?;
    split_hours((f64::from(low) + f64::from(high)) / 2.0)
}
