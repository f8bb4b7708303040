use anyhow::Result;
use owo_colors::OwoColorize;

use super::{open_store, parse_date};
use crate::render;

pub fn run(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = from.map(parse_date).transpose()?;
    let to = to.map(parse_date).transpose()?;

    let (_config, store) = open_store()?;
    let mut events = store.load()?;

    events.retain(|e| {
        from.is_none_or(|d| e.end_date >= d) && to.is_none_or(|d| e.start_date <= d)
    });
    events.sort_by(|a, b| (a.start_date, a.start_time).cmp(&(b.start_date, b.start_time)));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = render::date_label(event.start_date);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("  {} {}", render::time_label(event), render::title_line(event));
    }

    Ok(())
}
