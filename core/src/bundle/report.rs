use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anchor::anchor_offset;
use crate::events::{
    CastEvent, CastRecord, DamageRecord, Fight, FightRecord, OverkillEvent, TargetabilityEvent,
    TargetabilityRecord, parse_casts, parse_damage, parse_fights, parse_targetability,
};

use super::error::BundleError;

/// Which fight of a report to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FightSelector {
    /// The most recent fight in the report
    #[default]
    Last,
    Id(i64),
}

impl FromStr for FightSelector {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            return Ok(FightSelector::Last);
        }
        s.parse::<i64>()
            .map(FightSelector::Id)
            .map_err(|_| BundleError::InvalidSelector {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for FightSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FightSelector::Last => f.write_str("last"),
            FightSelector::Id(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportBundle {
    pub fights: Vec<FightRecord>,
    pub casts: Vec<CastRecord>,
    pub targetability: Vec<TargetabilityRecord>,
    /// Damage taken by hostile units
    pub damage: Vec<DamageRecord>,
}

/// Validated inputs for one fight, ready for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightEvents {
    pub fight: Fight,
    /// Absolute timestamp that marker times are measured from
    pub anchor: i64,
    pub casts: Vec<CastEvent>,
    pub targetability: Vec<TargetabilityEvent>,
    pub overkills: Vec<OverkillEvent>,
}

impl ReportBundle {
    pub fn from_json(text: &str) -> Result<Self, BundleError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn fights(&self) -> Result<Vec<Fight>, BundleError> {
        Ok(parse_fights(&self.fights)?)
    }

    pub fn select(&self, selector: FightSelector) -> Result<FightEvents, BundleError> {
        let fights = self.fights()?;
        let fight = match selector {
            FightSelector::Last => fights.last(),
            FightSelector::Id(id) => fights.iter().find(|f| f.fight_id == id),
        }
        .cloned()
        .ok_or(BundleError::FightNotFound {
            selector,
            available: fights.len(),
        })?;

        let in_fight = |timestamp: i64| fight.contains(timestamp);

        let casts: Vec<CastEvent> = parse_casts(&self.casts)?
            .into_iter()
            .filter(|e| in_fight(e.timestamp))
            .collect();
        let targetability: Vec<TargetabilityEvent> = parse_targetability(&self.targetability)?
            .into_iter()
            .filter(|e| in_fight(e.timestamp))
            .collect();
        let damage = parse_damage(&self.damage)?;

        let anchor = anchor_offset(&fight, &damage);
        let overkills: Vec<OverkillEvent> = damage
            .iter()
            .filter(|e| in_fight(e.timestamp))
            .filter_map(|e| e.as_overkill())
            .collect();

        tracing::debug!(
            fight_id = fight.fight_id,
            zone_id = fight.zone_id,
            anchor,
            casts = casts.len(),
            targetability = targetability.len(),
            overkills = overkills.len(),
            "Selected fight"
        );

        Ok(FightEvents {
            fight,
            anchor,
            casts,
            targetability,
            overkills,
        })
    }
}
