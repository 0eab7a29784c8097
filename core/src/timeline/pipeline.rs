use markergen_types::FilterConfig;

use crate::bundle::FightEvents;
use crate::casts::{CastEventProcessor, ability_names};
use crate::marker::Marker;
use crate::untargetable::UntargetableWindowComputer;

use super::assembler::TimelineAssembler;
use super::document::TimelineDocument;

/// Cast and untargetable markers for one fight, before filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightMarkers {
    pub casts: Vec<Marker>,
    pub untargetable: Vec<Marker>,
}

impl FightMarkers {
    /// Runs cast correlation and untargetable detection side by side
    pub fn compute(events: &FightEvents) -> Self {
        let (casts, untargetable) = rayon::join(
            || CastEventProcessor::new().process(&events.casts, events.anchor),
            || {
                UntargetableWindowComputer::new().process(
                    &events.targetability,
                    &events.overkills,
                    &events.fight,
                    events.anchor,
                )
            },
        );

        tracing::debug!(
            fight_id = events.fight.fight_id,
            casts = casts.len(),
            untargetable = untargetable.len(),
            "Computed fight markers"
        );

        Self {
            casts,
            untargetable,
        }
    }

    pub fn ability_names(&self) -> Vec<String> {
        ability_names(&self.casts)
    }

    pub fn into_timeline(self, filter: &FilterConfig) -> TimelineDocument {
        TimelineAssembler::new(filter).assemble(self.casts, &self.untargetable)
    }
}

pub fn generate_timeline(events: &FightEvents, filter: &FilterConfig) -> TimelineDocument {
    FightMarkers::compute(events).into_timeline(filter)
}
