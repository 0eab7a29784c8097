//! Raw record shapes from the report API.
//!
//! Every field is optional at this layer; unknown fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<i64>,
}

/// `begincast` / `cast` record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastRecord {
    pub timestamp: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<AbilityRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_instance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// Unit descriptor attached to summary events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub actor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ActorRecord {
    fn is_npc(&self) -> bool {
        self.actor_type.as_deref() == Some("NPC")
    }
}

/// `targetabilityupdate` record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetabilityRecord {
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targetable: Option<i64>,
    #[serde(rename = "sourceID", default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    #[serde(rename = "targetID", default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ActorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ActorRecord>,
    #[serde(rename = "sourceIsFriendly", default)]
    pub source_is_friendly: bool,
}

impl TargetabilityRecord {
    /// Toggles from plain NPCs or friendly units do not affect the encounter target.
    pub fn is_hostile_toggle(&self) -> bool {
        let npc_involved = self.source.as_ref().is_some_and(ActorRecord::is_npc)
            || self.target.as_ref().is_some_and(ActorRecord::is_npc);
        !npc_involved && !self.source_is_friendly
    }

    /// The toggled unit: `sourceID`, falling back to `targetID`
    pub fn unit_id(&self) -> Option<i64> {
        self.source_id.or(self.target_id)
    }
}

/// `damage` record from the damage-taken stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRecord {
    pub timestamp: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(rename = "targetID", default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overkill: Option<i64>,
}

/// Entry of the report's fight list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    pub id: Option<i64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    #[serde(rename = "zoneID", default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<i64>,
    #[serde(rename = "zoneName", default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
}
