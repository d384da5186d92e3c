//! Entry composition: run the extractors, clean the description, score.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use billable_core::{
    ClientRecord, ConfidenceBreakdown, ConfidenceWeights, ParsedEntry, ParserConfig,
    DEFAULT_MATTER,
};

use crate::extract::{extract_all, time::strip_time_phrases, ExtractionReport};
use crate::suggest;
use crate::text::{capitalize_first, collapse_whitespace};

static LOG_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blog\b").expect("log pattern"));

static LINKING_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:for|with|client|regarding|about)\b|\bre:").expect("linking pattern")
});

/// Parses free-text time entries with a fixed configuration.
///
/// Holds no state beyond its config; clone it freely or share it
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct EntryParser {
    config: ParserConfig,
}

impl EntryParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one sentence. `None` only for blank input.
    pub fn parse(&self, text: &str) -> Option<ParsedEntry> {
        if text.trim().is_empty() {
            return None;
        }

        let report = self.extract(text);
        let description = self.build_description(text, &report);
        let metadata = breakdown(&report);
        let confidence = overall_confidence(&report, &self.config.weights);

        debug!(
            "Parsed entry: confidence={} time={} client={} matter={} area={}",
            confidence,
            metadata.time_confidence,
            metadata.client_confidence,
            metadata.matter_confidence,
            metadata.practice_area_confidence
        );

        let ExtractionReport {
            time,
            client,
            matter,
            practice_area,
        } = report;

        let matter = if !matter.matter.is_empty() {
            matter.matter
        } else if !description.is_empty() {
            description.clone()
        } else {
            DEFAULT_MATTER.to_string()
        };
        let description = if description.is_empty() {
            collapse_whitespace(text)
        } else {
            description
        };

        Some(ParsedEntry {
            hours: time.hours,
            minutes: time.minutes,
            client: client.client,
            matter,
            description,
            practice_area: practice_area.area,
            confidence,
            metadata,
        })
    }

    /// Raw extractor output, using this parser's practice-area scoring.
    pub fn extract(&self, text: &str) -> ExtractionReport {
        extract_all(text, &self.config.practice_area)
    }

    pub fn suggest_clients(&self, input: &str, clients: &[ClientRecord]) -> Vec<ClientRecord> {
        suggest::suggest_clients_with_limit(input, clients, self.config.max_client_suggestions)
    }

    pub fn suggest_tasks(&self, practice_area: &str, context: &str) -> Vec<String> {
        suggest::suggest_tasks_with_limit(practice_area, context, self.config.max_task_suggestions)
    }

    fn build_description(&self, text: &str, report: &ExtractionReport) -> String {
        let stripped = strip_time_phrases(text);
        let mut description = collapse_whitespace(&LOG_WORD.replace_all(&stripped, " "));

        let matter = &report.matter;
        if !matter.is_empty() && matter.confidence >= self.config.matter_description_threshold {
            description = matter.matter.clone();
        }

        let client = &report.client.client;
        if !client.is_empty() && description.to_lowercase().contains(&client.to_lowercase()) {
            if let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(client))) {
                description = re.replace_all(&description, " ").into_owned();
            }
        }

        let cleaned = collapse_whitespace(&LINKING_WORDS.replace_all(&description, " "));
        capitalize_first(&cleaned)
    }
}

/// Parse with the default configuration.
pub fn parse_time_entry(text: &str) -> Option<ParsedEntry> {
    EntryParser::default().parse(text)
}

fn percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn breakdown(report: &ExtractionReport) -> ConfidenceBreakdown {
    ConfidenceBreakdown {
        time_confidence: percent(report.time.confidence),
        client_confidence: percent(report.client.confidence),
        matter_confidence: percent(report.matter.confidence),
        practice_area_confidence: percent(report.practice_area.confidence),
    }
}

fn overall_confidence(report: &ExtractionReport, weights: &ConfidenceWeights) -> u8 {
    percent(
        report.time.confidence * weights.time
            + report.client.confidence * weights.client
            + report.matter.confidence * weights.matter
            + report.practice_area.confidence * weights.practice_area,
    )
}
