use anyhow::Result;
use calport_core::event::Event;
use calport_core::id::{IdGenerator, UuidIds};
use owo_colors::OwoColorize;

use super::{open_store, parse_date, parse_time};

pub fn run(
    title: String,
    date: String,
    end_date: Option<String>,
    time: Option<String>,
    end_time: Option<String>,
    description: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let start_date = parse_date(&date)?;
    let end_date = match end_date {
        Some(d) => parse_date(&d)?,
        None => start_date,
    };
    if end_date < start_date {
        anyhow::bail!("End date {} is before start date {}", end_date, start_date);
    }

    let start_time = time.as_deref().map(parse_time).transpose()?;
    let end_time = end_time.as_deref().map(parse_time).transpose()?;
    if start_time.is_none() && end_time.is_some() {
        anyhow::bail!("--end-time requires --time");
    }

    let (config, store) = open_store()?;

    let event = Event {
        id: UuidIds.next_id(),
        title,
        start_date,
        end_date,
        start_time,
        end_time,
        description: description.filter(|d| !d.is_empty()),
        color: color.or(config.default_color),
        holiday: false,
    };

    store.upsert(vec![event.clone()])?;

    println!("{}", format!("  Created: {}", event.title).green());

    Ok(())
}
