//! iCalendar generation and parsing.
//!
//! This module reads and writes calendar documents covering the subset of
//! RFC 5545 that calport events can express: VEVENT blocks with UID,
//! DTSTAMP, DTSTART, DTEND, SUMMARY and DESCRIPTION. The two directions
//! never call each other but agree on the wire format, so encoding and
//! then decoding reproduces the original records (with fresh ids).

mod decode;
mod encode;
mod text;

pub use decode::{DecodeOptions, decode_calendar, decode_calendar_with};
pub use encode::{encode_event, encode_events};
pub use text::{escape_text, fold_line, logical_lines, unescape_text};
