//! The event record shared by the store, the codec and the CLI.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar event.
///
/// Dates are inclusive on both ends: a single-day event has
/// `end_date == start_date`. Times are naive local times with no zone
/// attached; an event without a `start_time` spans whole days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    /// Last day of the event, inclusive. Never before `start_date`.
    pub end_date: NaiveDate,
    /// `None` marks an all-day event.
    pub start_time: Option<NaiveTime>,
    /// Only meaningful when `start_time` is set.
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    /// Display color for frontends; never written to the wire.
    pub color: Option<String>,
    /// Marks events pulled from a holiday feed; never written to the wire.
    pub holiday: bool,
}

impl Event {
    /// True when the event has no start time and spans whole days.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    pub fn is_multi_day(&self) -> bool {
        self.end_date > self.start_date
    }
}
