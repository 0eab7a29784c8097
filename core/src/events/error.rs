//! Error types for event validation

use std::fmt;
use thiserror::Error;

/// Which input stream a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStream {
    Casts,
    Targetability,
    Damage,
    Fights,
}

impl fmt::Display for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventStream::Casts => "cast",
            EventStream::Targetability => "targetability",
            EventStream::Damage => "damage",
            EventStream::Fights => "fight",
        };
        f.write_str(name)
    }
}

/// A raw record is missing a field the engine depends on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{stream} record {index} has no timestamp")]
    MissingTimestamp { stream: EventStream, index: usize },

    #[error("cast record {index} has no ability name")]
    MissingAbilityName { index: usize },

    #[error("{stream} record {index} has no target id")]
    MissingTargetId { stream: EventStream, index: usize },

    #[error("{stream} record {index} is missing field `{field}`")]
    MissingField {
        stream: EventStream,
        index: usize,
        field: &'static str,
    },
}
