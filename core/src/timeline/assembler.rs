use markergen_types::FilterConfig;

use crate::marker::Marker;
use crate::tracks::TrackPacker;

use super::document::{TimelineDocument, TrackDocument, UNTARGETABLE_TRACK_INDEX};

/// Applies the export filter and lays out the final document
#[derive(Debug, Clone, Copy)]
pub struct TimelineAssembler<'a> {
    filter: &'a FilterConfig,
}

impl<'a> TimelineAssembler<'a> {
    pub fn new(filter: &'a FilterConfig) -> Self {
        Self { filter }
    }

    /// Keep only cast markers named in the filter, under their export names
    pub fn select_exports(&self, casts: Vec<Marker>) -> Vec<Marker> {
        casts
            .into_iter()
            .filter_map(|marker| {
                let export = self.filter.export_name(&marker.description)?.to_string();
                Some(marker.with_description(export))
            })
            .collect()
    }

    pub fn assemble(&self, casts: Vec<Marker>, untargetable: &[Marker]) -> TimelineDocument {
        let total = casts.len();
        let exported = self.select_exports(casts);
        tracing::debug!(
            total,
            exported = exported.len(),
            untargetable = untargetable.len(),
            "Assembling timeline"
        );

        let packed = TrackPacker::from_filter(self.filter).pack(exported);

        let mut tracks = Vec::with_capacity(packed.len() + 1);
        tracks.push(TrackDocument::new(UNTARGETABLE_TRACK_INDEX, untargetable));
        tracks.extend(
            packed
                .iter()
                .map(|t| TrackDocument::new(t.index as i32, &t.markers)),
        );

        TimelineDocument::new(tracks)
    }
}
