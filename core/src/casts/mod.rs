//! Cast correlation
//!
//! Reduces the raw `begincast`/`cast` stream to one marker per real ability
//! use. Bosses that exist as several unit instances report the same cast once
//! per instance; only the lowest instance is kept.

mod processor;

#[cfg(test)]
mod processor_tests;

pub use processor::{CastEventProcessor, DUPLICATE_WINDOW_MS, MIN_VISIBLE_CAST_MS, ability_names};
