//! Core library for the calport calendar tools.
//!
//! This crate owns the event model and the iCalendar codec used to move
//! events in and out of a calport store:
//! - `event` for the `Event` record shared by every surface
//! - `ics` for RFC 5545 generation and parsing
//! - `export` for download artifacts (filename, MIME type, content)
//! - `store` for the JSON event store
//! - `id` for pluggable event id generation

pub mod calport_config;
pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod id;
pub mod store;

pub use error::{CalportError, CalportResult};
pub use event::Event;
