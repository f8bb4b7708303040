//! Download artifacts for encoded calendars.

use crate::event::Event;
use crate::ics;

/// MIME type for iCalendar downloads.
pub const MIME_TYPE: &str = "text/calendar";

/// An encoded calendar ready to hand to a download boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Encode events into a named download artifact.
pub fn export_events(events: &[Event]) -> ExportArtifact {
    ExportArtifact {
        filename: export_filename(events),
        mime_type: MIME_TYPE,
        content: ics::encode_events(events),
    }
}

/// Derive the download filename: a dated slug for a single event, a
/// generic name for anything else.
pub fn export_filename(events: &[Event]) -> String {
    match events {
        [event] => {
            let date_part = match event.start_time {
                Some(time) => format!(
                    "{}T{}",
                    event.start_date.format("%Y-%m-%d"),
                    time.format("%H%M")
                ),
                None => event.start_date.format("%Y-%m-%d").to_string(),
            };
            format!("{}__{}.ics", date_part, slugify(&event.title))
        }
        _ => "calendar.ics".to_string(),
    }
}

/// Convert a title to a filename-safe slug.
fn slugify(s: &str) -> String {
    let slug: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect();

    if slug.is_empty() {
        "event".to_string()
    } else {
        slug
    }
}

// =============================================================================
// Tests
// =============================================================================
