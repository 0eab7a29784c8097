//! Serialized marker timeline

use serde::{Deserialize, Serialize};

use crate::marker::Marker;

pub const COMBINED_FILE_TYPE: &str = "MarkerTracksCombined";
pub const TRACK_FILE_TYPE: &str = "MarkerTrackIndividual";

/// Fixed index of the untargetable track, ahead of the cast tracks
pub const UNTARGETABLE_TRACK_INDEX: i32 = -1;

const MS_PER_SECOND: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDocument {
    pub file_type: String,
    pub tracks: Vec<TrackDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDocument {
    pub file_type: String,
    pub track: i32,
    pub markers: Vec<MarkerEntry>,
}

/// A marker as written to the document; times in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerEntry {
    pub time: f64,
    pub marker_type: String,
    pub duration: f64,
    pub description: String,
    pub color: String,
    pub show_text: bool,
}

impl From<&Marker> for MarkerEntry {
    fn from(marker: &Marker) -> Self {
        Self {
            time: marker.time as f64 / MS_PER_SECOND,
            marker_type: marker.kind.as_str().to_string(),
            duration: marker.duration as f64 / MS_PER_SECOND,
            description: marker.description.clone(),
            color: marker.color.clone(),
            show_text: marker.show_text,
        }
    }
}

impl TrackDocument {
    pub fn new<'a>(track: i32, markers: impl IntoIterator<Item = &'a Marker>) -> Self {
        Self {
            file_type: TRACK_FILE_TYPE.to_string(),
            track,
            markers: markers.into_iter().map(MarkerEntry::from).collect(),
        }
    }
}

impl TimelineDocument {
    pub fn new(tracks: Vec<TrackDocument>) -> Self {
        Self {
            file_type: COMBINED_FILE_TYPE.to_string(),
            tracks,
        }
    }

    /// Two-space indented JSON; non-ASCII text is written as is
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn marker_count(&self) -> usize {
        self.tracks.iter().map(|t| t.markers.len()).sum()
    }
}
