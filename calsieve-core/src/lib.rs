//! Core library for calsieve.
//!
//! This crate holds everything the CLI drives:
//! - `sieve` for the filter-and-annotate transformation over a parsed calendar
//! - `ics` for the wire-format round-trip via the `icalendar` crate
//! - `config` for the TOML config supplying feed URL, output, blocklist, notes
//! - `error` for the shared error type

pub mod config;
pub mod error;
pub mod ics;
pub mod sieve;

pub use error::{SieveError, SieveResult};
pub use sieve::{annotate_event, filter_and_annotate, filter_events, is_blocked, note_for};
