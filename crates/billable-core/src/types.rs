//! Shared data types passed between the parser, the helpers and the host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::practice_area::PracticeArea;

/// Fallback matter when neither a matter phrase nor a description survives.
pub const DEFAULT_MATTER: &str = "General matter";

/// Structured time entry produced from one free-text sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntry {
    pub hours: u32,
    /// Always in `0..60`.
    pub minutes: u32,
    /// Best-guess client; empty when nothing name-like was found.
    pub client: String,
    /// Never empty.
    pub matter: String,
    pub description: String,
    pub practice_area: PracticeArea,
    /// Weighted overall confidence, 0–100.
    pub confidence: u8,
    pub metadata: ConfidenceBreakdown,
}

impl ParsedEntry {
    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

/// Per-field extraction confidences, each 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    pub time_confidence: u8,
    pub client_confidence: u8,
    pub matter_confidence: u8,
    pub practice_area_confidence: u8,
}

/// The subset of a time entry that validation and formatting look at.
///
/// Hosts usually build one from a [`ParsedEntry`] after the user has
/// confirmed or edited the parsed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub description: String,
}

impl TimeEntry {
    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

impl From<&ParsedEntry> for TimeEntry {
    fn from(entry: &ParsedEntry) -> Self {
        Self {
            hours: entry.hours,
            minutes: entry.minutes,
            client: entry.client.clone(),
            description: entry.description.clone(),
        }
    }
}

/// A client from the host's directory, used for suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ClientRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Read a client directory stored as a JSON array.
    pub fn load_directory(path: &Path) -> Result<Vec<ClientRecord>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Outcome of validating a [`TimeEntry`]. Errors block saving; warnings don't.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Display and billing renditions of an entry's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTime {
    /// e.g. `"2h 30m"`.
    pub display_time: String,
    /// Decimal hours with two places, e.g. `"2.50"`.
    pub decimal_time: String,
    /// Hours rounded up to the next tenth.
    pub billing_units: f64,
}
