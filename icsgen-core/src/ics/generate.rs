//! ICS document generation.

use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::ThreadRng;

use super::escape::escape_text;
use super::fold::{CRLF, fold};
use super::format::{
    format_date, format_date_time, format_duration, format_trigger, format_utc_timestamp,
    next_calendar_day,
};
use crate::error::{IcsGenError, IcsGenResult};
use crate::event::{CalendarDocument, EventTiming, ValidEvent};
use crate::uid::generate_uid;
use crate::validate::validate_event;

pub const DEFAULT_PRODUCT_ID: &str = "-//icsgen//EN";
pub const DEFAULT_UID_DOMAIN: &str = "icsgen";

/// Knobs that are not part of the event data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// PRODID of the calendar envelope
    pub product_id: String,
    /// Everything after the `@` of each UID
    pub uid_domain: String,
    /// Used only when neither the event nor the document names a timezone
    pub fallback_timezone: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            fallback_timezone: None,
        }
    }
}

/// Builds VEVENT blocks and whole calendar documents.
///
/// Owns its random source (for UIDs). DTSTAMP is read from the clock at the
/// start of every [`generate`](Self::generate) call and shared by the events
/// of that document, unless pinned with [`with_dtstamp`](Self::with_dtstamp).
pub struct IcsGenerator<R = ThreadRng> {
    options: GeneratorOptions,
    rng: R,
    dtstamp: Option<DateTime<Utc>>,
}

impl IcsGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_rng(options, rand::thread_rng())
    }
}

impl<R: RngCore> IcsGenerator<R> {
    pub fn with_rng(options: GeneratorOptions, rng: R) -> Self {
        IcsGenerator {
            options,
            rng,
            dtstamp: None,
        }
    }

    /// Use `dtstamp` for every document instead of the current time.
    pub fn with_dtstamp(mut self, dtstamp: DateTime<Utc>) -> Self {
        self.dtstamp = Some(dtstamp);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the complete, folded .ics text for `document`.
    ///
    /// Records are validated and built in input order; the first invalid
    /// record aborts the whole document.
    pub fn generate(&mut self, document: &CalendarDocument) -> IcsGenResult<String> {
        if document.events.is_empty() {
            return Err(IcsGenError::validation(
                "calendar document must contain a non-empty 'events' array",
            ));
        }

        let defaults = document.defaults(self.options.fallback_timezone.as_deref());
        let dtstamp = self.dtstamp.unwrap_or_else(Utc::now);

        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{}", self.options.product_id),
            "CALSCALE:GREGORIAN".to_string(),
            "METHOD:PUBLISH".to_string(),
        ];

        for (index, record) in document.events.iter().enumerate() {
            let event = validate_event(index, record, &defaults)?;
            let vevent = self.vevent_lines(&event, dtstamp);
            log::debug!(
                "built event #{} ({:?}) with {} property lines",
                index,
                event.summary,
                vevent.len()
            );
            lines.extend(vevent);
        }

        lines.push("END:VCALENDAR".to_string());

        Ok(fold(&lines.join(CRLF)))
    }

    /// Unfolded property lines for one VEVENT, BEGIN/END included.
    pub fn build_vevent(&mut self, event: &ValidEvent) -> Vec<String> {
        let dtstamp = self.dtstamp.unwrap_or_else(Utc::now);
        self.vevent_lines(event, dtstamp)
    }

    fn vevent_lines(&mut self, event: &ValidEvent, dtstamp: DateTime<Utc>) -> Vec<String> {
        let uid = generate_uid(
            &mut self.rng,
            &event.summary,
            event.timing.date(),
            &self.options.uid_domain,
        );

        let mut lines = vec![
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", uid),
            format!("DTSTAMP:{}", format_utc_timestamp(dtstamp)),
        ];

        match &event.timing {
            EventTiming::AllDay { date } => {
                lines.push(format!("DTSTART;VALUE=DATE:{}", format_date(*date)));
                lines.push(format!("DTEND;VALUE=DATE:{}", next_calendar_day(*date)));
            }
            EventTiming::Timed {
                date,
                time,
                timezone,
                duration_minutes,
            } => {
                lines.push(format!(
                    "DTSTART;TZID={}:{}",
                    timezone,
                    format_date_time(*date, *time)
                ));
                if *duration_minutes > 0 {
                    lines.push(format!("DURATION:{}", format_duration(*duration_minutes)));
                }
            }
        }

        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));

        if let Some(ref desc) = event.description {
            lines.push(format!("DESCRIPTION:{}", escape_text(desc)));
        }

        if let Some(ref loc) = event.location {
            lines.push(format!("LOCATION:{}", escape_text(loc)));
        }

        if let Some(ref url) = event.url {
            lines.push(format!("URL:{}", url));
        }

        // Items are joined as given, without per-item escaping
        if !event.categories.is_empty() {
            lines.push(format!("CATEGORIES:{}", event.categories.join(",")));
        }

        if let Some(status) = event.status {
            lines.push(format!("STATUS:{}", status.as_ics_str()));
        }

        if let Some(transp) = event.transparency {
            lines.push(format!("TRANSP:{}", transp.as_ics_str()));
        }

        // Recurrence rule is passed through verbatim
        if let Some(ref rrule) = event.rrule {
            lines.push(format!("RRULE:{}", rrule));
        }

        if event.reminder_minutes > 0 {
            lines.extend([
                "BEGIN:VALARM".to_string(),
                format!("TRIGGER:{}", format_trigger(event.reminder_minutes)),
                "ACTION:DISPLAY".to_string(),
                "DESCRIPTION:Reminder".to_string(),
                "END:VALARM".to_string(),
            ]);
        }

        lines.push("END:VEVENT".to_string());
        lines
    }
}

/// Generate .ics content for `document` with default options, the
/// thread-local RNG and the current time.
pub fn generate_ics(document: &CalendarDocument) -> IcsGenResult<String> {
    IcsGenerator::new(GeneratorOptions::default()).generate(document)
}
