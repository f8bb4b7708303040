use anyhow::{Context, Result};
use calport_core::ics::{self, DecodeOptions};
use owo_colors::OwoColorize;

use super::{MAX_IMPORT_BYTES, open_store};

pub fn run(file: &str) -> Result<()> {
    let metadata = std::fs::metadata(file).with_context(|| format!("Could not open {file}"))?;
    if metadata.len() > MAX_IMPORT_BYTES {
        anyhow::bail!(
            "{} is too large to import ({} bytes, limit {})",
            file,
            metadata.len(),
            MAX_IMPORT_BYTES
        );
    }

    let content =
        std::fs::read_to_string(file).with_context(|| format!("Could not read {file}"))?;

    let (config, store) = open_store()?;
    let options = DecodeOptions {
        default_color: config.default_color.clone(),
        mark_as_holiday: false,
    };

    let events = ics::decode_calendar(&content, &options);
    tracing::debug!(count = events.len(), bytes = content.len(), "decoded import file");

    if events.is_empty() {
        println!("{}", "No events found in file".dimmed());
        return Ok(());
    }

    let count = events.len();
    store.upsert(events)?;

    let noun = if count == 1 { "event" } else { "events" };
    println!("{}", format!("  Imported {count} {noun} from {file}").green());

    Ok(())
}
