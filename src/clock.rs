//! Fixed-offset clock projections.
//!
//! The dashboard clock is pinned to Yangon time (UTC+06:30) regardless of
//! the machine's local timezone. Both projections are pure — instant in,
//! string out — so the refresh cadence is entirely the caller's concern and
//! the formatting is trivially testable.

use chrono::{DateTime, FixedOffset, Utc};

/// UTC+06:30 in seconds.
const YANGON_OFFSET_SECS: i32 = 6 * 3600 + 30 * 60;

/// Label shown under the clock.
pub const OFFSET_LABEL: &str = "GMT+6:30";

fn yangon_offset() -> FixedOffset {
    FixedOffset::east_opt(YANGON_OFFSET_SECS).expect("offset within ±24h")
}

/// 12-hour time with seconds, e.g. `03:04:05 PM`.
pub fn time_line(now: DateTime<Utc>) -> String {
    now.with_timezone(&yangon_offset())
        .format("%I:%M:%S %p")
        .to_string()
}

/// Full calendar date, e.g. `Monday, January 5, 2026`.
pub fn date_line(now: DateTime<Utc>) -> String {
    now.with_timezone(&yangon_offset())
        .format("%A, %B %-d, %Y")
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_line_applies_the_fixed_offset() {
        // 08:30 UTC is 15:00 in Yangon.
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 30, 0).unwrap();
        assert_eq!(time_line(now), "03:00:00 PM");
    }

    #[test]
    fn time_line_uses_twelve_hour_clock_with_seconds() {
        // 18:29:59 UTC is 00:59:59 the next day in Yangon.
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 18, 29, 59).unwrap();
        assert_eq!(time_line(now), "12:59:59 AM");
    }

    #[test]
    fn date_line_spells_out_the_full_date() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 30, 0).unwrap();
        assert_eq!(date_line(now), "Monday, January 5, 2026");
    }

    #[test]
    fn date_rolls_over_at_the_offset_boundary() {
        // 17:30 UTC on the 5th is already 00:00 on the 6th in Yangon.
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 17, 30, 0).unwrap();
        assert_eq!(date_line(now), "Tuesday, January 6, 2026");
        assert_eq!(time_line(now), "12:00:00 AM");
    }
}
