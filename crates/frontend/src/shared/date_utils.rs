//! Date and time formatting helpers.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Timestamp attached to a new sale: the current local wall-clock time.
pub fn sale_timestamp() -> String {
    format_sale_timestamp(Local::now().naive_local())
}

/// Format a sale timestamp the way the backend stores it:
/// `YYYY-MM-DDTHH:MM:SSZ`, second precision.
///
/// The `Z` suffix is a lie (the time is local, not UTC), but the backend
/// contract has always been fed exactly this shape. Changing it here would
/// silently shift stored sale times; see DESIGN.md.
pub fn format_sale_timestamp(now: NaiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Current (year, month), the default period for goals and dashboards.
pub fn current_period() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_sale_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 26)
            .unwrap();
        assert_eq!(format_sale_timestamp(dt), "2024-03-05T09:07:26Z");
    }

    #[test]
    fn test_format_sale_timestamp_pads_fields() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_sale_timestamp(dt), "2024-12-31T23:59:59Z");
    }
}
