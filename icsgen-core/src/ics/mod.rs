//! ICS serialization: escaping, value formatting, line folding and the
//! VEVENT/VCALENDAR builders on top of them.

pub mod escape;
pub mod fold;
pub mod format;
mod generate;

pub use generate::{
    DEFAULT_PRODUCT_ID, DEFAULT_UID_DOMAIN, GeneratorOptions, IcsGenerator, generate_ics,
};
