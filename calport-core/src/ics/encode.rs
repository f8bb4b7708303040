//! iCalendar document generation.

use chrono::{NaiveDate, NaiveTime, Timelike, Utc};

use crate::event::Event;
use crate::ics::text::{escape_text, fold_line};

/// Product identifier stamped into every generated document.
const PRODID: &str = "CALPORT";

/// All generated UIDs end with this so a record exports to the same UID
/// every time.
const UID_DOMAIN: &str = "calport";

/// Generate a complete iCalendar document for a list of events.
///
/// Every line is folded and CRLF-terminated, including the last one.
/// Any well-typed event encodes; there is no failure path.
pub fn encode_events(events: &[Event]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("BEGIN:VCALENDAR".to_string());
    lines.push(format!("PRODID:{}", PRODID));
    lines.push("VERSION:2.0".to_string());
    lines.push("CALSCALE:GREGORIAN".to_string());
    lines.push("METHOD:PUBLISH".to_string());

    for event in events {
        push_vevent(&mut lines, event);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = String::with_capacity(lines.len() * 32);
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

/// Generate a document containing a single event.
pub fn encode_event(event: &Event) -> String {
    encode_events(std::slice::from_ref(event))
}

fn push_vevent(lines: &mut Vec<String>, event: &Event) {
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}@{}", event.id, UID_DOMAIN));
    lines.push(format!("DTSTAMP:{}", Utc::now().format("%Y%m%dT000000Z")));

    match event.start_time {
        Some(start_time) => {
            lines.push(format!(
                "DTSTART:{}",
                event
                    .start_date
                    .and_time(start_time)
                    .format("%Y%m%dT%H%M%S")
            ));

            // No explicit end: one hour after the start on the same date.
            let (end_date, end_time) = match event.end_time {
                Some(end_time) => (event.end_date, end_time),
                None => (event.start_date, default_end_time(start_time)),
            };
            lines.push(format!(
                "DTEND:{}",
                end_date.and_time(end_time).format("%Y%m%dT%H%M%S")
            ));
        }
        None => {
            // Date-only DTEND is exclusive, so the wire value is the day
            // after the inclusive end date.
            lines.push(format!(
                "DTSTART;VALUE=DATE:{}",
                event.start_date.format("%Y%m%d")
            ));
            lines.push(format!(
                "DTEND;VALUE=DATE:{}",
                day_after(event.end_date).format("%Y%m%d")
            ));
        }
    }

    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
    if let Some(ref description) = event.description {
        if !description.is_empty() {
            lines.push(format!("DESCRIPTION:{}", escape_text(description)));
        }
    }

    lines.push("END:VEVENT".to_string());
}

/// The calendar day after `date`.
fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// End time for a timed event with no explicit end: one hour after the
/// start. 23:xx wraps to 0:xx without touching the date.
fn default_end_time(start: NaiveTime) -> NaiveTime {
    let hour = (start.hour() + 1) % 24;
    start.with_hour(hour).unwrap_or(start)
}
