//! Pre-save checks for time entries.

use billable_core::{TimeEntry, ValidationReport};

pub const MISSING_CLIENT: &str = "Client name is required";
pub const MISSING_DESCRIPTION: &str = "Task description is required";
pub const ZERO_DURATION: &str = "Time duration must be greater than 0";
pub const OVER_24_HOURS: &str = "Time exceeds 24 hours - please verify";
pub const NOT_SIX_MINUTE_INCREMENT: &str =
    "Minutes not in 6-minute increments (standard billing practice)";

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Check required fields and flag unusual durations.
pub fn validate_time_entry(entry: &TimeEntry) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if entry.client.trim().is_empty() {
        errors.push(MISSING_CLIENT.to_string());
    }
    if entry.description.trim().is_empty() {
        errors.push(MISSING_DESCRIPTION.to_string());
    }
    if entry.total_minutes() == 0 {
        errors.push(ZERO_DURATION.to_string());
    }

    if entry.total_minutes() > MINUTES_PER_DAY {
        warnings.push(OVER_24_HOURS.to_string());
    }
    if entry.minutes > 0 && entry.minutes % 6 != 0 {
        warnings.push(NOT_SIX_MINUTE_INCREMENT.to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
