//! Report bundle input
//!
//! An already-fetched report: the fight list plus the cast, targetability and
//! damage-taken streams, as one JSON document. Selecting a fight validates the
//! streams and restricts them to that fight's window.

mod error;
mod report;


pub use error::BundleError;
pub use report::{FightEvents, FightSelector, ReportBundle};
