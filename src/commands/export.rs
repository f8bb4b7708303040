use anyhow::{Context, Result};
use calport_core::export::export_events;
use owo_colors::OwoColorize;

use super::{open_store, parse_date};

pub fn run(out: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = from.map(parse_date).transpose()?;
    let to = to.map(parse_date).transpose()?;

    let (_config, store) = open_store()?;
    let mut events = store.load()?;

    events.retain(|e| {
        from.is_none_or(|d| e.end_date >= d) && to.is_none_or(|d| e.start_date <= d)
    });

    if events.is_empty() {
        anyhow::bail!("No events to export");
    }

    events.sort_by(|a, b| (a.start_date, a.start_time).cmp(&(b.start_date, b.start_time)));

    let artifact = export_events(&events);
    let path = out.unwrap_or(&artifact.filename);

    std::fs::write(path, &artifact.content).with_context(|| format!("Failed to write {path}"))?;

    let noun = if events.len() == 1 { "event" } else { "events" };
    println!(
        "{}",
        format!("  Exported {} {} to {}", events.len(), noun, path).green()
    );

    Ok(())
}
