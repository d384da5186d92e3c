//! Billable Core — shared entry types, practice areas, configuration, errors.

pub mod config;
pub mod error;
pub mod practice_area;
pub mod types;

pub use config::{ConfidenceWeights, ParserConfig, PracticeAreaScoring};
pub use error::{Error, Result};
pub use practice_area::PracticeArea;
pub use types::{
    ClientRecord, ConfidenceBreakdown, FormattedTime, ParsedEntry, TimeEntry, ValidationReport,
    DEFAULT_MATTER,
};
