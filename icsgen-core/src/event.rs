//! Event input and validated event types.
//!
//! `CalendarDocument` and `EventRecord` mirror the JSON the caller hands in:
//! every field is optional so that missing or malformed values reach the
//! validator and get a descriptive error instead of a decode failure.
//! `ValidEvent` is what comes out of validation and is the only thing the
//! VEVENT builder accepts.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Default event length when neither the event nor the document sets one.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Default reminder offset; zero means no alarm.
pub const DEFAULT_REMINDER_MINUTES: u32 = 0;

/// The root input: an ordered list of events plus document-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<EventRecord>,
    pub timezone: Option<String>,
    #[serde(alias = "reminderMinutes")]
    pub reminder_minutes: Option<u32>,
    #[serde(alias = "durationMinutes")]
    pub duration_minutes: Option<u32>,
}

impl CalendarDocument {
    pub fn new(events: Vec<EventRecord>) -> Self {
        CalendarDocument {
            events,
            ..Default::default()
        }
    }

    /// Resolve the root-level fallbacks applied to every event.
    ///
    /// `fallback_timezone` is only consulted when the document itself names
    /// no timezone.
    pub fn defaults(&self, fallback_timezone: Option<&str>) -> CalendarDefaults {
        CalendarDefaults {
            timezone: non_empty(&self.timezone)
                .or(fallback_timezone.filter(|tz| !tz.is_empty()))
                .map(str::to_string),
            reminder_minutes: self.reminder_minutes.unwrap_or(DEFAULT_REMINDER_MINUTES),
            duration_minutes: self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
        }
    }
}

/// Document-wide fallbacks. An explicit per-event value always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDefaults {
    pub timezone: Option<String>,
    pub reminder_minutes: u32,
    pub duration_minutes: u32,
}

impl Default for CalendarDefaults {
    fn default() -> Self {
        CalendarDefaults {
            timezone: None,
            reminder_minutes: DEFAULT_REMINDER_MINUTES,
            duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

/// One event exactly as supplied by the caller (unvalidated).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// YYYY-MM-DD
    pub date: Option<String>,
    pub summary: Option<String>,
    /// HH:MM; absent for all-day events
    pub time: Option<String>,
    pub timezone: Option<String>,
    #[serde(alias = "durationMinutes")]
    pub duration_minutes: Option<u32>,
    #[serde(alias = "reminderMinutes")]
    pub reminder_minutes: Option<u32>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    pub status: Option<String>,
    pub transp: Option<String>,
    /// Passed through verbatim, never interpreted
    pub rrule: Option<String>,
}

impl EventRecord {
    pub fn new(date: impl Into<String>, summary: impl Into<String>) -> Self {
        EventRecord {
            date: Some(date.into()),
            summary: Some(summary.into()),
            ..Default::default()
        }
    }
}

/// When an event happens. All-day and timed events are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTiming {
    /// Spans the whole of `date`; the emitted end is the following day.
    AllDay { date: NaiveDate },
    /// Starts at `time` on `date` in `timezone`. A zero duration emits no
    /// DURATION property.
    Timed {
        date: NaiveDate,
        time: NaiveTime,
        timezone: String,
        duration_minutes: u32,
    },
}

impl EventTiming {
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTiming::AllDay { date } | EventTiming::Timed { date, .. } => *date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Tentative,
        EventStatus::Confirmed,
        EventStatus::Cancelled,
    ];

    pub fn as_ics_str(self) -> &'static str {
        match self {
            EventStatus::Tentative => "TENTATIVE",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_ics_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_ics_str() == s)
    }
}

/// Event transparency (busy/free status)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Event blocks time on calendar
    Opaque,
    /// Event does not block time (shows as free)
    Transparent,
}

impl Transparency {
    pub const ALL: [Transparency; 2] = [Transparency::Opaque, Transparency::Transparent];

    pub fn as_ics_str(self) -> &'static str {
        match self {
            Transparency::Opaque => "OPAQUE",
            Transparency::Transparent => "TRANSPARENT",
        }
    }

    pub fn from_ics_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|transp| transp.as_ics_str() == s)
    }
}

/// An event that passed validation, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    pub summary: String,
    pub timing: EventTiming,
    /// Zero disables the alarm
    pub reminder_minutes: u32,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub categories: Vec<String>,
    pub status: Option<EventStatus>,
    pub transparency: Option<Transparency>,
    pub rrule: Option<String>,
}

/// Treat an empty string the same as an absent value.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
