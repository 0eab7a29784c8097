use markergen_types::FilterConfig;

use crate::marker::Marker;

/// One display lane and the markers placed on it, in placement order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedTrack {
    pub index: u32,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPacker {
    /// Required gap (ms) between a track's last end and the next start
    min_interval: i64,
    max_tracks: i64,
}

impl TrackPacker {
    pub fn new(min_interval: i64, max_tracks: i64) -> Self {
        Self {
            min_interval,
            max_tracks,
        }
    }

    pub fn from_filter(filter: &FilterConfig) -> Self {
        Self::new(filter.min_interval, filter.max_tracks)
    }

    /// Assign every marker a track. Markers are taken in start order; ties keep
    /// their input order. Only non-empty tracks are returned, ascending.
    pub fn pack(&self, mut markers: Vec<Marker>) -> Vec<PackedTrack> {
        markers.sort_by_key(|m| m.time);

        let mut lanes: Vec<Vec<Marker>> = Vec::new();
        let mut overflowed = 0usize;

        for marker in markers {
            let index = self.select_track(&lanes, &marker);
            if self.at_capacity(index) && self.too_close(lanes.get(index), &marker) {
                overflowed += 1;
            }
            if lanes.len() <= index {
                lanes.resize_with(index + 1, Vec::new);
            }
            lanes[index].push(marker.with_track(index as u32));
        }

        tracing::debug!(
            tracks = lanes.len(),
            overflowed,
            min_interval = self.min_interval,
            max_tracks = self.max_tracks,
            "Packed cast markers"
        );

        lanes
            .into_iter()
            .enumerate()
            .filter(|(_, markers)| !markers.is_empty())
            .map(|(index, markers)| PackedTrack {
                index: index as u32,
                markers,
            })
            .collect()
    }

    fn select_track(&self, lanes: &[Vec<Marker>], marker: &Marker) -> usize {
        let mut index = 0;
        while self.too_close(lanes.get(index), marker) && self.has_next(index) {
            index += 1;
        }
        index
    }

    /// Whether the marker starts within `min_interval` of the lane's last end.
    /// An empty lane is never too close.
    fn too_close(&self, lane: Option<&Vec<Marker>>, marker: &Marker) -> bool {
        if self.min_interval <= 0 {
            return false;
        }
        match lane.and_then(|l| l.last()) {
            Some(last) => marker.time - last.end_time() < self.min_interval,
            None => false,
        }
    }

    fn has_next(&self, index: usize) -> bool {
        (index as i64) + 1 < self.max_tracks
    }

    fn at_capacity(&self, index: usize) -> bool {
        !self.has_next(index)
    }
}
