//! Timeline marker: a named, coloured interval on a display track
//!
//! Times are anchor-relative milliseconds. Each pipeline stage produces a new
//! marker value: `description` is rewritten only by the export filter and
//! `track` only by the track packer.

use serde::{Deserialize, Serialize};

pub const CAST_COLOR: &str = "#217ff5";
pub const UNTARGETABLE_COLOR: &str = "#b7b7b7";
pub const UNTARGETABLE_DESCRIPTION: &str = "untargetable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerKind {
    #[default]
    Info,
}

impl MarkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Info => "Info",
        }
    }
}

/// Where a marker came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerCategory {
    Cast,
    Untargetable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Start, ms relative to the fight anchor (negative before the pull)
    pub time: i64,
    pub kind: MarkerKind,
    /// Length in ms, never negative
    pub duration: i64,
    pub description: String,
    pub category: MarkerCategory,
    pub color: String,
    pub show_text: bool,
    pub track: u32,
}

impl Marker {
    pub fn cast(time: i64, duration: i64, description: impl Into<String>) -> Self {
        Self {
            time,
            kind: MarkerKind::Info,
            duration: duration.max(0),
            description: description.into(),
            category: MarkerCategory::Cast,
            color: CAST_COLOR.to_string(),
            show_text: true,
            track: 0,
        }
    }

    pub fn untargetable(time: i64, duration: i64) -> Self {
        Self {
            category: MarkerCategory::Untargetable,
            color: UNTARGETABLE_COLOR.to_string(),
            ..Self::cast(time, duration, UNTARGETABLE_DESCRIPTION)
        }
    }

    pub fn end_time(&self) -> i64 {
        self.time + self.duration
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_track(self, track: u32) -> Self {
        Self { track, ..self }
    }
}
