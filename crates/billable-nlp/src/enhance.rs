//! Rewrite terse task notes into billing-ready narrative.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::capitalize_first;

/// Leading shorthand → billing phrasing. First match wins.
const EXPANSIONS: &[(&str, &str)] = &[
    ("call", "Telephone conference"),
    ("email", "Email correspondence"),
    ("meeting", "Client meeting"),
    ("review", "Reviewed and analyzed"),
    ("draft", "Drafted"),
    ("research", "Legal research regarding"),
    ("prepare", "Prepared"),
    ("revise", "Revised"),
    ("attend", "Attended"),
];

static LEADING_EXPANSIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    EXPANSIONS
        .iter()
        .map(|(word, replacement)| {
            let re = Regex::new(&format!(r"(?i)^{}\b", word)).expect("expansion pattern");
            (re, *replacement)
        })
        .collect()
});

/// Capitalize, terminate with a period, and expand a leading shorthand
/// verb. Blank input comes back unchanged.
pub fn enhance_description(description: &str) -> String {
    if description.trim().is_empty() {
        return description.to_string();
    }

    let mut enhanced = capitalize_first(description.trim());
    if !enhanced.ends_with(['.', '!', '?']) {
        enhanced.push('.');
    }

    for (re, replacement) in LEADING_EXPANSIONS.iter() {
        if re.is_match(&enhanced) {
            return re.replace(&enhanced, *replacement).into_owned();
        }
    }
    enhanced
}
