//! Persistent event storage.
//!
//! Events live in a single JSON file under the data directory. Writes go
//! through a temp file and rename, so an interrupted save never leaves a
//! half-written store behind.

use std::path::{Path, PathBuf};

use crate::error::{CalportError, CalportResult};
use crate::event::Event;

const STORE_FILE: &str = "events.json";

pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    pub fn open(dir: &Path) -> EventStore {
        EventStore {
            dir: dir.to_path_buf(),
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    /// Load all events. A missing store file is an empty store.
    pub fn load(&self) -> CalportResult<Vec<Event>> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| CalportError::Store(format!("Could not read {}: {e}", path.display())))
    }

    pub fn save(&self, events: &[Event]) -> CalportResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let temp = self.dir.join(STORE_FILE.to_string() + ".tmp");

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| CalportError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    /// Insert or replace events by id. Returns how many were new.
    pub fn upsert(&self, incoming: Vec<Event>) -> CalportResult<usize> {
        let mut events = self.load()?;
        let mut added = 0;

        for event in incoming {
            match events.iter_mut().find(|e| e.id == event.id) {
                Some(existing) => *existing = event,
                None => {
                    events.push(event);
                    added += 1;
                }
            }
        }

        self.save(&events)?;
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_test_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "Test Event".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            start_time: None,
            end_time: None,
            description: None,
            color: None,
            holiday: false,
        }
    }

    #[test]
    fn missing_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());

        let events = vec![make_test_event("a"), make_test_event("b")];
        store.save(&events).unwrap();

        assert_eq!(store.load().unwrap(), events);
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep/data");

        let store = EventStore::open(&nested);
        store.save(&[make_test_event("a")]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn upsert_adds_then_replaces_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path());

        let added = store.upsert(vec![make_test_event("a")]).unwrap();
        assert_eq!(added, 1);

        let mut updated = make_test_event("a");
        updated.title = "Renamed".to_string();
        let added = store.upsert(vec![updated, make_test_event("b")]).unwrap();
        assert_eq!(added, 1);

        let events = store.load().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Renamed");
    }
}
