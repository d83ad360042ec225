//! DATE, DATE-TIME and DURATION value formatting.
//!
//! Inputs have already been validated, so every function here is total.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// `YYYYMMDD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDDTHHMMSS`, local to whatever TZID accompanies it. Seconds are
/// always `00`.
pub fn format_date_time(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}00", format_date(date), time.format("%H%M"))
}

/// `YYYYMMDDTHHMMSSZ`, as used by DTSTAMP.
pub fn format_utc_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// `PT[nH][mM]`, or `PT0M` for zero.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let mut out = String::from("PT");
    if hours > 0 {
        out.push_str(&format!("{}H", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}M", minutes));
    }
    if hours == 0 && minutes == 0 {
        out.push_str("0M");
    }
    out
}

/// Alarm trigger offset: the duration negated, i.e. before the start.
pub fn format_trigger(minutes_before: u32) -> String {
    format!("-{}", format_duration(minutes_before))
}

/// The day after `date` as `YYYYMMDD`; the exclusive end of an all-day event.
pub fn next_calendar_day(date: NaiveDate) -> String {
    // Four-digit years never reach NaiveDate::MAX.
    format_date(date.succ_opt().unwrap_or(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_strips_separators() {
        assert_eq!(format_date(date(2024, 3, 10)), "20240310");
        assert_eq!(format_date(date(999, 1, 2)), "09990102");
    }

    #[test]
    fn test_format_date_time_forces_zero_seconds() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_date_time(date(2024, 6, 1), time), "20240601T090500");
    }

    #[test]
    fn test_format_utc_timestamp() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 20, 15, 4, 5).unwrap();
        assert_eq!(format_utc_timestamp(instant), "20250320T150405Z");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "PT0M");
        assert_eq!(format_duration(15), "PT15M");
        assert_eq!(format_duration(30), "PT30M");
        assert_eq!(format_duration(60), "PT1H");
        assert_eq!(format_duration(90), "PT1H30M");
        assert_eq!(format_duration(1440), "PT24H");
        assert_eq!(format_duration(1441), "PT24H1M");
    }

    #[test]
    fn test_format_trigger_is_negative_duration() {
        assert_eq!(format_trigger(15), "-PT15M");
        assert_eq!(format_trigger(120), "-PT2H");
        assert_eq!(format_trigger(0), "-PT0M");
    }

    #[test]
    fn test_next_calendar_day_rollovers() {
        assert_eq!(next_calendar_day(date(2024, 3, 10)), "20240311");
        assert_eq!(next_calendar_day(date(2024, 4, 30)), "20240501");
        assert_eq!(next_calendar_day(date(2024, 2, 28)), "20240229");
        assert_eq!(next_calendar_day(date(2024, 2, 29)), "20240301");
        assert_eq!(next_calendar_day(date(2023, 2, 28)), "20230301");
        assert_eq!(next_calendar_day(date(2100, 2, 28)), "21000301");
        assert_eq!(next_calendar_day(date(2023, 12, 31)), "20240101");
    }
}
