use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::events::{CastEvent, CastKind};
use crate::marker::Marker;

/// Casts shorter than this (but not instant) are hidden (ms)
pub const MIN_VISIBLE_CAST_MS: i64 = 500;

/// Identical markers starting closer than this collapse into one (ms)
pub const DUPLICATE_WINDOW_MS: i64 = 100;

/// Per-record correlation state, indexed by stream position
#[derive(Debug)]
struct Correlation<'a> {
    timestamp: i64,
    source_instance: i64,
    ability_name: &'a str,
    kind: CastKind,
    duration: i64,
    delete: bool,
}

impl Correlation<'_> {
    fn same_caster(&self, source_instance: i64, ability_name: &str) -> bool {
        self.source_instance == source_instance && self.ability_name == ability_name
    }
}

/// Removal of the completion paired with a hidden `begincast`
#[derive(Debug)]
struct CleanupTask<'a> {
    source_instance: i64,
    ability_name: &'a str,
    /// When the hidden cast bar should have finished
    expected_end: i64,
    search_from: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct CastEventProcessor {
    min_visible_duration: i64,
    duplicate_window: i64,
}

impl Default for CastEventProcessor {
    fn default() -> Self {
        Self {
            min_visible_duration: MIN_VISIBLE_CAST_MS,
            duplicate_window: DUPLICATE_WINDOW_MS,
        }
    }
}

impl CastEventProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a time-ordered cast stream into canonical cast markers.
    pub fn process(&self, casts: &[CastEvent], anchor: i64) -> Vec<Marker> {
        let mut records: Vec<Correlation<'_>> = casts
            .iter()
            .map(|e| Correlation {
                timestamp: e.timestamp,
                source_instance: e.source_instance,
                ability_name: &e.ability_name,
                kind: e.kind,
                duration: e.duration,
                delete: false,
            })
            .collect();

        let tasks = merge_simultaneous(&mut records);
        remove_linked_completions(&mut records, &tasks);

        let markers: Vec<Marker> = records
            .iter()
            .filter(|r| !r.delete)
            .filter(|r| !self.is_negligible(r.duration))
            .map(|r| Marker::cast(r.timestamp - anchor, r.duration, r.ability_name))
            .collect();

        let candidates = markers.len();
        let kept = self.suppress_adjacent(markers);

        tracing::debug!(
            raw = casts.len(),
            hidden_casts = tasks.len(),
            candidates,
            kept = kept.len(),
            "Cast markers built"
        );
        kept
    }

    fn is_negligible(&self, duration: i64) -> bool {
        duration > 0 && duration < self.min_visible_duration
    }

    /// Drop a marker that repeats the previous kept one (same name and length)
    /// within the duplicate window.
    fn suppress_adjacent(&self, markers: Vec<Marker>) -> Vec<Marker> {
        let mut kept: Vec<Marker> = Vec::with_capacity(markers.len());
        for marker in markers {
            if let Some(last) = kept.last()
                && last.description == marker.description
                && last.duration == marker.duration
                && marker.time - last.time < self.duplicate_window
            {
                continue;
            }
            kept.push(marker);
        }
        kept
    }
}

/// Group records by (timestamp, ability). In each multi-record group the lowest
/// source instance is canonical; the other `begincast` records are deleted and
/// their completions queued for removal.
fn merge_simultaneous<'a>(records: &mut [Correlation<'a>]) -> Vec<CleanupTask<'a>> {
    let mut groups: HashMap<(i64, &'a str), Vec<usize>> = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        groups
            .entry((record.timestamp, record.ability_name))
            .or_default()
            .push(position);
    }

    let mut tasks = Vec::new();
    for positions in groups.values_mut().filter(|p| p.len() > 1) {
        positions.sort_by_key(|&p| records[p].source_instance);

        for &position in &positions[1..] {
            let hidden = &mut records[position];
            if hidden.kind != CastKind::Begin {
                continue;
            }
            hidden.delete = true;
            tasks.push(CleanupTask {
                source_instance: hidden.source_instance,
                ability_name: hidden.ability_name,
                expected_end: hidden.timestamp + hidden.duration,
                search_from: position + 1,
            });
        }
    }
    tasks
}

/// For each task, delete the first later record from the same caster and ability.
///
/// The scan is not bounded in time: a completion arbitrarily far away still pairs.
fn remove_linked_completions(records: &mut [Correlation<'_>], tasks: &[CleanupTask<'_>]) {
    for task in tasks {
        let Some(linked) = records
            .get_mut(task.search_from..)
            .and_then(|rest| {
                rest.iter_mut()
                    .find(|r| r.same_caster(task.source_instance, task.ability_name))
            })
        else {
            continue;
        };

        linked.delete = true;
        tracing::trace!(
            ability = task.ability_name,
            source_instance = task.source_instance,
            drift_ms = linked.timestamp - task.expected_end,
            "Removed completion of hidden cast"
        );
    }
}

/// Sorted, unique cast descriptions (the abilities available for export)
pub fn ability_names(markers: &[Marker]) -> Vec<String> {
    markers
        .iter()
        .map(|m| m.description.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
