//! Subcommand handlers. Each returns the JSON body to print and whether
//! the command succeeded.

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use billable_core::{ClientRecord, TimeEntry};
use billable_nlp::{enhance_description, format_time_entry, validate_time_entry, EntryParser};

pub struct Outcome {
    pub body: Value,
    pub success: bool,
}

impl Outcome {
    fn ok<T: Serialize>(body: &T) -> anyhow::Result<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            success: true,
        })
    }

    fn failed<T: Serialize>(body: &T) -> anyhow::Result<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            success: false,
        })
    }
}

pub fn parse(parser: &EntryParser, text: &str) -> anyhow::Result<Outcome> {
    match parser.parse(text) {
        Some(entry) => Outcome::ok(&entry),
        None => {
            warn!("Refusing to parse blank input");
            Outcome::failed(&json!({ "error": "No text provided" }))
        }
    }
}

pub fn extract(parser: &EntryParser, text: &str) -> anyhow::Result<Outcome> {
    Outcome::ok(&parser.extract(text))
}

pub fn validate(
    hours: u32,
    minutes: u32,
    client: String,
    description: String,
) -> anyhow::Result<Outcome> {
    let report = validate_time_entry(&TimeEntry {
        hours,
        minutes,
        client,
        description,
    });
    if report.is_valid {
        Outcome::ok(&report)
    } else {
        Outcome::failed(&report)
    }
}

pub fn format(hours: u32, minutes: u32) -> anyhow::Result<Outcome> {
    Outcome::ok(&format_time_entry(&TimeEntry {
        hours,
        minutes,
        ..TimeEntry::default()
    }))
}

pub fn suggest_tasks(parser: &EntryParser, area: &str, context: &str) -> anyhow::Result<Outcome> {
    Outcome::ok(&parser.suggest_tasks(area, context))
}

pub fn suggest_clients(
    parser: &EntryParser,
    input: &str,
    directory: &Path,
) -> anyhow::Result<Outcome> {
    let clients = ClientRecord::load_directory(directory).map_err(|e| {
        anyhow::anyhow!("Failed to read client directory {}: {}", directory.display(), e)
    })?;
    Outcome::ok(&parser.suggest_clients(input, &clients))
}

pub fn enhance(text: &str) -> anyhow::Result<Outcome> {
    Outcome::ok(&json!({ "description": enhance_description(text) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_outputs_entry() {
        let out = parse(&EntryParser::default(), "2.5 hours for Smith Corp re: merger").unwrap();
        assert!(out.success);
        assert_eq!(out.body["hours"], 2);
        assert_eq!(out.body["minutes"], 30);
        assert_eq!(out.body["client"], "Smith Corp");
        assert_eq!(out.body["practiceArea"], "corporate");
    }

    #[test]
    fn test_parse_blank_fails() {
        let out = parse(&EntryParser::default(), "  ").unwrap();
        assert!(!out.success);
        assert_eq!(out.body["error"], "No text provided");
    }

    #[test]
    fn test_validate_sets_success() {
        let out = validate(0, 0, String::new(), String::new()).unwrap();
        assert!(!out.success);
        assert_eq!(out.body["errors"].as_array().unwrap().len(), 3);

        let out = validate(1, 6, "Acme".into(), "Call".into()).unwrap();
        assert!(out.success);
        assert_eq!(out.body["isValid"], true);
    }

    #[test]
    fn test_format() {
        let out = format(1, 12).unwrap();
        assert_eq!(out.body["displayTime"], "1h 12m");
        assert_eq!(out.body["decimalTime"], "1.20");
        assert_eq!(out.body["billingUnits"], 1.2);
    }

    #[test]
    fn test_suggest_clients_reads_directory() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Jane Doe", "company": "Doe LLP"}}, {{"name": "Sam Roe"}}]"#
        )
        .unwrap();

        let out = suggest_clients(&EntryParser::default(), "doe", file.path()).unwrap();
        let hits = out.body.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["company"], "Doe LLP");
    }

    #[test]
    fn test_suggest_clients_missing_directory() {
        let err = suggest_clients(
            &EntryParser::default(),
            "doe",
            Path::new("/nonexistent/clients.json"),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_enhance() {
        let out = enhance("draft engagement letter").unwrap();
        assert_eq!(out.body["description"], "Drafted engagement letter.");
    }
}
