pub mod add;
pub mod export;
pub mod holidays;
pub mod import;
pub mod list;

use anyhow::Result;
use calport_core::calport_config::CalportConfig;
use calport_core::store::EventStore;
use chrono::{NaiveDate, NaiveTime};

/// Largest .ics file `import` will read.
pub const MAX_IMPORT_BYTES: u64 = 8 * 1024 * 1024;

/// Load the configuration and open the store it points at.
pub fn open_store() -> Result<(CalportConfig, EventStore)> {
    let config = CalportConfig::load()?;
    let store = EventStore::open(&config.data_path());
    Ok((config, store))
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{s}\" (expected YYYY-MM-DD)"))
}

pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{s}\" (expected HH:MM)"))
}
