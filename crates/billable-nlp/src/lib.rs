//! Billable NLP — rule-based parsing of free-text legal time entries, plus
//! the suggestion, validation and formatting helpers that sit beside it.

pub mod compose;
pub mod enhance;
pub mod extract;
pub mod format;
pub mod rules;
pub mod suggest;
pub mod text;
pub mod validate;

pub use compose::{parse_time_entry, EntryParser};
pub use enhance::enhance_description;
pub use extract::{
    detect_practice_area, detect_practice_area_with, extract_all, extract_client,
    extract_matter, extract_time, ClientExtraction, ExtractionReport, MatterExtraction,
    PracticeAreaMatch, TimeExtraction,
};
pub use format::format_time_entry;
pub use suggest::{suggest_clients, suggest_tasks};
pub use validate::validate_time_entry;
