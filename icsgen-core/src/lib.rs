//! Core of icsgen: turns structured event records into an RFC 5545 calendar.
//!
//! The entry point is [`IcsGenerator::generate`] (or the [`generate_ics`]
//! shorthand), which takes a [`CalendarDocument`] and returns the finished,
//! folded `.ics` text or the first [`IcsGenError`] encountered. The crate does
//! no I/O of its own.
//!
//! - `event`: input records and the validated event model
//! - `validate`: per-record input rules
//! - `ics`: escaping, value formatting, line folding and the builders
//! - `uid`: UID minting

pub mod error;
pub mod event;
pub mod ics;
pub mod uid;
pub mod validate;

pub use error::{IcsGenError, IcsGenResult};
pub use event::{
    CalendarDefaults, CalendarDocument, EventRecord, EventStatus, EventTiming, Transparency,
    ValidEvent,
};
pub use ics::{GeneratorOptions, IcsGenerator, generate_ics};
pub use validate::validate_event;
