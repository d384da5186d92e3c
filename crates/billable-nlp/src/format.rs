//! Display and billing renditions of an entry's duration.

use billable_core::{FormattedTime, TimeEntry};

/// One billing unit is a tenth of an hour.
pub const MINUTES_PER_BILLING_UNIT: u64 = 6;

/// Format `entry`'s duration as `"Hh Mm"`, two-place decimal hours, and
/// billing hours rounded up to the next tenth.
pub fn format_time_entry(entry: &TimeEntry) -> FormattedTime {
    let total = entry.total_minutes();
    let units = total.div_ceil(MINUTES_PER_BILLING_UNIT);

    FormattedTime {
        display_time: format!("{}h {}m", entry.hours, entry.minutes),
        decimal_time: format!("{:.2}", total as f64 / 60.0),
        billing_units: units as f64 / 10.0,
    }
}
