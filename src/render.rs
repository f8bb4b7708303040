//! Terminal rendering helpers.

use calport_core::event::Event;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Fri Mar 20")
pub fn date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time column of an event (e.g. "  15:00" or "all-day")
pub fn time_label(event: &Event) -> String {
    match event.start_time {
        Some(t) => format!("{:>7}", t.format("%H:%M")),
        None => "all-day".to_string(),
    }
}

/// Event title with markers for multi-day spans and holidays.
pub fn title_line(event: &Event) -> String {
    let mut line = event.title.clone();

    if event.is_multi_day() {
        let until = format!("(until {})", event.end_date.format("%b %-d"));
        line = format!("{} {}", line, until.dimmed());
    }
    if event.holiday {
        line = format!("{} {}", line, "[holiday]".dimmed());
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_test_event() -> Event {
        Event {
            id: "ev-1".to_string(),
            title: "Team sync".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            start_time: Some(NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
            end_time: None,
            description: None,
            color: None,
            holiday: false,
        }
    }

    #[test]
    fn time_label_is_right_aligned_to_the_all_day_width() {
        let mut event = make_test_event();
        assert_eq!(time_label(&event), "  09:05");

        event.start_time = None;
        assert_eq!(time_label(&event), "all-day");
    }

    #[test]
    fn title_line_marks_spans_and_holidays() {
        let mut event = make_test_event();
        assert_eq!(title_line(&event), "Team sync");

        event.end_date = NaiveDate::from_ymd_opt(2026, 3, 22).unwrap();
        assert!(title_line(&event).contains("until"));

        event.holiday = true;
        assert!(title_line(&event).contains("[holiday]"));
    }
}
