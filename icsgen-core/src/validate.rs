//! Event record validation.
//!
//! Every rule produces its own message naming the record (by position and,
//! when known, by summary). Nothing is coerced: a bad enumeration value is an
//! error, not a default.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{IcsGenError, IcsGenResult};
use crate::event::{
    CalendarDefaults, EventRecord, EventStatus, EventTiming, Transparency, ValidEvent, non_empty,
};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// Check one record against the input rules and resolve its defaults.
///
/// `index` is the record's zero-based position in the document and only
/// feeds the error message.
pub fn validate_event(
    index: usize,
    record: &EventRecord,
    defaults: &CalendarDefaults,
) -> IcsGenResult<ValidEvent> {
    let label = record_label(index, record);
    let fail = |msg: String| IcsGenError::validation(format!("{}: {}", label, msg));

    let date = non_empty(&record.date);
    let summary = non_empty(&record.summary);
    let (date, summary) = match (date, summary) {
        (Some(date), Some(summary)) => (date, summary),
        (None, Some(_)) => return Err(fail("missing required field 'date'".into())),
        (Some(_), None) => return Err(fail("missing required field 'summary'".into())),
        (None, None) => {
            return Err(fail("missing required fields 'date' and 'summary'".into()));
        }
    };

    let date = parse_date(date).map_err(&fail)?;

    let timing = match record.time.as_deref() {
        None => EventTiming::AllDay { date },
        Some(time) => {
            let time = parse_time(time).map_err(&fail)?;
            let timezone = non_empty(&record.timezone)
                .or(defaults.timezone.as_deref().filter(|tz| !tz.is_empty()))
                .ok_or_else(|| {
                    fail(
                        "has a time but no timezone. Set 'timezone' at root level or per event"
                            .into(),
                    )
                })?;
            EventTiming::Timed {
                date,
                time,
                timezone: timezone.to_string(),
                duration_minutes: record.duration_minutes.unwrap_or(defaults.duration_minutes),
            }
        }
    };

    let status = match non_empty(&record.status) {
        None => None,
        Some(s) => Some(EventStatus::from_ics_str(s).ok_or_else(|| {
            fail(format!(
                "invalid status '{}', expected {}",
                s,
                expected(EventStatus::ALL.map(EventStatus::as_ics_str))
            ))
        })?),
    };

    let transparency = match non_empty(&record.transp) {
        None => None,
        Some(t) => Some(Transparency::from_ics_str(t).ok_or_else(|| {
            fail(format!(
                "invalid transp '{}', expected {}",
                t,
                expected(Transparency::ALL.map(Transparency::as_ics_str))
            ))
        })?),
    };

    Ok(ValidEvent {
        summary: summary.to_string(),
        timing,
        reminder_minutes: record.reminder_minutes.unwrap_or(defaults.reminder_minutes),
        description: non_empty(&record.description).map(str::to_string),
        location: non_empty(&record.location).map(str::to_string),
        url: non_empty(&record.url).map(str::to_string),
        categories: record.categories.clone(),
        status,
        transparency,
        rrule: non_empty(&record.rrule).map(str::to_string),
    })
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    if !DATE_PATTERN.is_match(date) {
        return Err(format!("invalid date format '{}', expected YYYY-MM-DD", date));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("invalid calendar date '{}'", date))
}

fn parse_time(time: &str) -> Result<NaiveTime, String> {
    if !TIME_PATTERN.is_match(time) {
        return Err(format!("invalid time format '{}', expected HH:MM", time));
    }
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| format!("invalid clock time '{}'", time))
}

fn record_label(index: usize, record: &EventRecord) -> String {
    match non_empty(&record.summary) {
        Some(summary) => format!("event #{} (\"{}\")", index, summary),
        None => format!("event #{}", index),
    }
}

fn expected<const N: usize>(names: [&str; N]) -> String {
    names.join("/")
}
