//! End-to-end properties of the time-entry parser and its helpers.

use billable_core::{ParserConfig, PracticeArea, TimeEntry, DEFAULT_MATTER};
use billable_nlp::{
    detect_practice_area, extract_client, extract_matter, extract_time, format_time_entry,
    parse_time_entry, validate_time_entry, EntryParser,
};

const SAMPLES: &[&str] = &[
    "log 2.5 hours for Smith Corp contract review",
    "3 hours client meeting with Johnson Industries",
    "drafting NDA for XYZ Inc",
    "45m call",
    "x",
    "1 and 1/2 hours re: lease renewal",
    "2-4 hours discovery for Acme and Sons",
    "99999999999999999999 hours",
    "for",
    "log log log",
    "review",
    "!!!",
    "Jane Smith",
    "0.0 hours",
    "re:",
];

#[test]
fn test_every_non_blank_input_parses() {
    for text in SAMPLES {
        let entry = parse_time_entry(text).unwrap_or_else(|| panic!("no entry for {:?}", text));
        assert!(entry.confidence <= 100, "confidence for {:?}", text);
        assert!(!entry.matter.is_empty(), "empty matter for {:?}", text);
        assert!(!entry.description.is_empty(), "empty description for {:?}", text);
        assert!(entry.minutes < 60, "minutes for {:?}", text);
    }
}

#[test]
fn test_blank_input_is_none() {
    assert!(parse_time_entry("").is_none());
    assert!(parse_time_entry("   ").is_none());
}

#[test]
fn test_extract_time_examples() {
    let t = extract_time("2.5 hours");
    assert_eq!((t.hours, t.minutes), (2, 30));
    assert!((t.confidence - 0.95).abs() < 1e-9);

    let t = extract_time("1 and 1/2 hours");
    assert_eq!((t.hours, t.minutes), (1, 30));
    assert!((t.confidence - 0.9).abs() < 1e-9);

    let t = extract_time("2-4 hours");
    assert_eq!((t.hours, t.minutes), (3, 0));
    assert!((t.confidence - 0.7).abs() < 1e-9);
}

#[test]
fn test_extract_client_example() {
    let c = extract_client("log 2 hours for ABC Corp merger review");
    assert_eq!(c.client, "ABC Corp");
    assert!((c.confidence - 0.9).abs() < 1e-9);
}

#[test]
fn test_extract_matter_example() {
    let m = extract_matter("drafting NDA for XYZ Inc");
    assert!(m.matter.starts_with("Drafting"));
    assert!((m.confidence - 0.85).abs() < 1e-9);
}

#[test]
fn test_detect_practice_area_example() {
    let p = detect_practice_area("review shareholder agreement");
    assert_eq!(p.area, PracticeArea::Corporate);
    assert!(p.confidence > 0.0);
}

#[test]
fn test_validate_examples() {
    let report = validate_time_entry(&TimeEntry::default());
    assert_eq!(report.errors.len(), 3);
    assert!(report.warnings.is_empty());

    let report = validate_time_entry(&TimeEntry {
        hours: 25,
        minutes: 7,
        client: "X".into(),
        description: "Y".into(),
    });
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("24 hours"));
    assert!(report.warnings[1].contains("6-minute"));
}

#[test]
fn test_format_is_idempotent() {
    let entry = TimeEntry {
        hours: 1,
        minutes: 12,
        ..TimeEntry::default()
    };
    let first = format_time_entry(&entry);
    let second = format_time_entry(&entry);
    assert_eq!(first, second);
    assert_eq!(first.billing_units, 1.2);
}

#[test]
fn test_client_meeting_end_to_end() {
    let entry = parse_time_entry("3 hours client meeting with Johnson Industries").unwrap();
    assert_eq!((entry.hours, entry.minutes), (3, 0));
    assert!(entry.client.contains("Johnson Industries"));
    assert!(
        entry.matter.to_lowercase().contains("meeting")
            || entry.description.to_lowercase().contains("meeting")
    );
    assert!(entry.confidence >= 50, "confidence {}", entry.confidence);
}

#[test]
fn test_confidence_is_weighted_sum() {
    let entry = parse_time_entry("45m call").unwrap();
    // time 0.85 only: 0.85 * 0.35 = 0.2975
    assert_eq!(entry.confidence, 30);
    assert_eq!(entry.metadata.time_confidence, 85);
    assert_eq!(entry.metadata.client_confidence, 0);
    assert_eq!(entry.practice_area, PracticeArea::General);
}

#[test]
fn test_general_matter_fallback() {
    let entry = parse_time_entry("for").unwrap();
    assert_eq!(entry.matter, DEFAULT_MATTER);
    assert_eq!(entry.description, "for");
}

#[test]
fn test_parsed_entry_feeds_validation() {
    let entry = parse_time_entry("1.5 hours for Acme Corp re: board minutes").unwrap();
    let report = validate_time_entry(&TimeEntry::from(&entry));
    assert!(report.is_valid, "{:?}", report.errors);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_parser_is_shareable_across_threads() {
    const NAMES: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];

    let parser = EntryParser::new(ParserConfig::default());
    let handles: Vec<_> = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let parser = parser.clone();
            let text = format!("{} hours for {} Partners LLC", i + 1, name);
            std::thread::spawn(move || parser.parse(&text))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let entry = handle.join().unwrap().unwrap();
        assert_eq!(entry.hours, i as u32 + 1);
        assert_eq!(entry.client, format!("{} Partners LLC", NAMES[i]));
    }
}
