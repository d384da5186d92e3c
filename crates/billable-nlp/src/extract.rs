//! Rule-based field extraction for free-text time entries.
//!
//! Each extractor is independent and pure: it reads the raw sentence and
//! reports a value together with the confidence of the rule that found it.

pub mod client;
pub mod matter;
pub mod practice_area;
pub mod time;

use billable_core::PracticeAreaScoring;
use serde::Serialize;

pub use client::{extract_client, ClientExtraction};
pub use matter::{extract_matter, MatterExtraction};
pub use practice_area::{detect_practice_area, detect_practice_area_with, PracticeAreaMatch};
pub use time::{extract_time, TimeExtraction};

/// Raw output of all four extractors for one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub time: TimeExtraction,
    pub client: ClientExtraction,
    pub matter: MatterExtraction,
    pub practice_area: PracticeAreaMatch,
}

/// Run every extractor on `text`. No extractor sees another's output.
pub fn extract_all(text: &str, scoring: &PracticeAreaScoring) -> ExtractionReport {
    ExtractionReport {
        time: extract_time(text),
        client: extract_client(text),
        matter: extract_matter(text),
        practice_area: detect_practice_area_with(text, scoring),
    }
}
