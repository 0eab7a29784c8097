use hashbrown::{HashMap, HashSet};

use crate::events::{Fight, OverkillEvent, TargetabilityEvent};
use crate::marker::Marker;

use super::counter::{SelectableCounter, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeSource {
    Targetability,
    Overkill,
}

/// One signed change to the selectable count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StateChange {
    timestamp: i64,
    target_id: i64,
    delta: i64,
    source: ChangeSource,
}

#[derive(Debug, Clone, Copy)]
pub struct UntargetableWindowComputer {
    /// Units selectable at the pull; the primary target starts selectable
    initial_selectable: i64,
}

impl Default for UntargetableWindowComputer {
    fn default() -> Self {
        Self {
            initial_selectable: 1,
        }
    }
}

impl UntargetableWindowComputer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(
        &self,
        targetability: &[TargetabilityEvent],
        overkills: &[OverkillEvent],
        fight: &Fight,
        anchor: i64,
    ) -> Vec<Marker> {
        let changes = merge_streams(targetability, overkills);
        let merged = changes.len();
        let changes = pick_representatives(changes);

        tracing::debug!(
            targetability = targetability.len(),
            overkills = overkills.len(),
            merged,
            representatives = changes.len(),
            "Replaying targetability changes"
        );

        self.replay(&changes, fight, anchor)
    }

    fn replay(&self, changes: &[StateChange], fight: &Fight, anchor: i64) -> Vec<Marker> {
        let mut counter = SelectableCounter::new(self.initial_selectable);
        let mut window_start: Option<i64> = None;
        let mut markers = Vec::new();

        for change in changes {
            match counter.apply(change.delta) {
                Transition::BecameUntargetable => window_start = Some(change.timestamp),
                Transition::BecameTargetable => {
                    if let Some(start) = window_start.take() {
                        push_window(&mut markers, start, change.timestamp, anchor);
                    }
                }
                Transition::Unchanged => {}
            }
        }

        if counter.is_zero()
            && let Some(start) = window_start
        {
            tracing::debug!(start, end = fight.end_time, "Untargetable until fight end");
            push_window(&mut markers, start, fight.end_time, anchor);
        }

        markers
    }
}

fn push_window(markers: &mut Vec<Marker>, start: i64, end: i64, anchor: i64) {
    let duration = end - start;
    if duration > 0 {
        markers.push(Marker::untargetable(start - anchor, duration));
    }
}

/// Combine both streams in timestamp order. Lethal damage counts once per unit.
fn merge_streams(
    targetability: &[TargetabilityEvent],
    overkills: &[OverkillEvent],
) -> Vec<StateChange> {
    let toggles = targetability.iter().map(|e| StateChange {
        timestamp: e.timestamp,
        target_id: e.target_id,
        delta: if e.targetable { 1 } else { -1 },
        source: ChangeSource::Targetability,
    });
    let deaths = overkills.iter().map(|e| StateChange {
        timestamp: e.timestamp,
        target_id: e.target_id,
        delta: -1,
        source: ChangeSource::Overkill,
    });

    let mut changes: Vec<StateChange> = toggles.chain(deaths).collect();
    changes.sort_by_key(|c| c.timestamp);

    let mut dead: HashSet<i64> = HashSet::new();
    changes.retain(|c| c.source != ChangeSource::Overkill || dead.insert(c.target_id));
    changes
}

/// Per unit, split the changes into runs of equal delta and keep one change per
/// run: its first targetability toggle, or its first change when the run is
/// only lethal damage.
fn pick_representatives(changes: Vec<StateChange>) -> Vec<StateChange> {
    let mut order: Vec<i64> = Vec::new();
    let mut by_target: HashMap<i64, Vec<StateChange>> = HashMap::new();
    for change in changes {
        by_target
            .entry(change.target_id)
            .or_insert_with(|| {
                order.push(change.target_id);
                Vec::new()
            })
            .push(change);
    }

    let mut representatives = Vec::new();
    for target_id in order {
        let Some(group) = by_target.get(&target_id) else {
            continue;
        };
        for run in group.chunk_by(|a, b| a.delta == b.delta) {
            let pick = run
                .iter()
                .find(|c| c.source == ChangeSource::Targetability)
                .unwrap_or(&run[0]);
            representatives.push(*pick);
        }
    }

    representatives.sort_by_key(|c| c.timestamp);
    representatives
}
