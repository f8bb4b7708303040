//! Event identifier generation.

use uuid::Uuid;

/// Source of fresh event identifiers.
///
/// Decoding assigns a new id to every event it produces, so hosts that
/// need reproducible output (tests, snapshots) can supply their own
/// generator instead of the random default.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUIDv4 identifiers, the default for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` identifiers, counting up from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> SequentialIds {
        SequentialIds {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("ev");
        assert_eq!(ids.next_id(), "ev-1");
        assert_eq!(ids.next_id(), "ev-2");
        assert_eq!(ids.next_id(), "ev-3");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }
}
