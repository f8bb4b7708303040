//! iCalendar document parsing.
//!
//! Decoding never fails: blocks without a usable start boundary are
//! dropped, unrecognized properties and components are ignored, and
//! malformed input simply yields an empty list. Skipped content is
//! reported through `tracing` at debug level.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::Event;
use crate::ics::text::{logical_lines, unescape_text};
use crate::id::{IdGenerator, UuidIds};

/// Title given to decoded events without a SUMMARY.
const UNTITLED: &str = "(No title)";

/// Host-supplied metadata merged into every decoded event.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Display color to attach to each event.
    pub default_color: Option<String>,
    /// Flag each event as a holiday (used for feed imports).
    pub mark_as_holiday: bool,
}

/// Parse iCalendar text into events, assigning fresh UUID ids.
pub fn decode_calendar(content: &str, options: &DecodeOptions) -> Vec<Event> {
    decode_calendar_with(content, options, &mut UuidIds)
}

/// Parse iCalendar text into events using the supplied id generator.
///
/// Source UIDs are never reused: every decoded event gets the next id
/// from `ids`, in document order.
pub fn decode_calendar_with(
    content: &str,
    options: &DecodeOptions,
    ids: &mut dyn IdGenerator,
) -> Vec<Event> {
    let mut events = Vec::new();
    let mut block: Option<EventBlock> = None;

    for line in logical_lines(content) {
        if line.eq_ignore_ascii_case("BEGIN:VEVENT") {
            block = Some(EventBlock::default());
        } else if line.eq_ignore_ascii_case("END:VEVENT") {
            if let Some(complete) = block.take() {
                match complete.finalize(options, ids) {
                    Some(event) => events.push(event),
                    None => tracing::debug!("skipping event block without a usable start"),
                }
            }
        } else if let Some(ref mut open) = block {
            open.apply_line(&line);
        }
    }

    events
}

/// Properties collected from a single VEVENT block.
#[derive(Default)]
struct EventBlock {
    start: Option<Boundary>,
    end: Option<Boundary>,
    summary: Option<String>,
    description: Option<String>,
}

impl EventBlock {
    fn apply_line(&mut self, line: &str) {
        let Some((name, value)) = line.split_once(':') else {
            return;
        };
        // Parameters like VALUE=DATE ride after a semicolon; the bare key
        // decides what the line is, the shape of the value decides how to
        // read it.
        let key = name.split(';').next().unwrap_or(name).to_ascii_uppercase();

        match key.as_str() {
            "DTSTART" => self.start = parse_boundary(value),
            "DTEND" => self.end = parse_boundary(value),
            "SUMMARY" => self.summary = Some(unescape_text(value)),
            "DESCRIPTION" => self.description = Some(unescape_text(value)),
            _ => {}
        }
    }

    fn finalize(self, options: &DecodeOptions, ids: &mut dyn IdGenerator) -> Option<Event> {
        let start = self.start?;
        let start_date = start.date();
        let start_time = start.time();

        let (end_date, end_time) = match self.end {
            Some(end) => (end.date(), end.time()),
            None => (start_date, None),
        };

        // A date-only end boundary is exclusive; store the inclusive day.
        // Equal dates need no correction, and the result never moves
        // before the start.
        let end_date = if start_time.is_none() && end_date != start_date {
            day_before(end_date)
        } else {
            end_date
        };
        let end_date = end_date.max(start_date);

        Some(Event {
            id: ids.next_id(),
            title: self.summary.unwrap_or_else(|| UNTITLED.to_string()),
            start_date,
            end_date,
            start_time,
            end_time: if start_time.is_some() { end_time } else { None },
            description: self.description.filter(|d| !d.is_empty()),
            color: options.default_color.clone(),
            holiday: options.mark_as_holiday,
        })
    }
}

/// A DTSTART/DTEND value: a bare date or a floating local date-time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Boundary {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Boundary {
    fn date(self) -> NaiveDate {
        match self {
            Boundary::Date(d) => d,
            Boundary::DateTime(dt) => dt.date(),
        }
    }

    fn time(self) -> Option<NaiveTime> {
        match self {
            Boundary::Date(_) => None,
            Boundary::DateTime(dt) => Some(dt.time()),
        }
    }
}

/// Read a boundary value by shape: 8 characters is a date, 15 or more
/// containing `T` is a floating date-time. A trailing `Z` is dropped
/// rather than converted; anything else is unusable.
fn parse_boundary(value: &str) -> Option<Boundary> {
    let value = value.trim();

    let parsed = if value.len() == 8 {
        NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .map(Boundary::Date)
    } else if value.len() >= 15 && value.contains('T') {
        let bare = value.strip_suffix('Z').unwrap_or(value);
        bare.get(..15)
            .and_then(|v| NaiveDateTime::parse_from_str(v, "%Y%m%dT%H%M%S").ok())
            .map(Boundary::DateTime)
    } else {
        None
    };

    if parsed.is_none() {
        tracing::debug!(value, "ignoring unusable boundary value");
    }
    parsed
}

/// The calendar day before `date`.
fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}
