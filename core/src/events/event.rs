use super::error::{EventStream, SchemaError};
use super::record::{CastRecord, DamageRecord, FightRecord, TargetabilityRecord};

const UNKNOWN_ZONE: &str = "Unknown Zone";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastKind {
    /// `begincast`: the cast bar started
    Begin,
    /// `cast`: the ability resolved
    #[default]
    Complete,
}

impl CastKind {
    fn from_type(event_type: Option<&str>) -> Self {
        match event_type {
            Some("begincast") => CastKind::Begin,
            _ => CastKind::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastEvent {
    pub timestamp: i64,
    pub kind: CastKind,
    pub ability_name: String,
    /// Instance number of the acting unit (several copies of a boss share one id)
    pub source_instance: i64,
    pub duration: i64,
}

impl CastEvent {
    pub fn from_record(index: usize, record: &CastRecord) -> Result<Self, SchemaError> {
        let timestamp = record.timestamp.ok_or(SchemaError::MissingTimestamp {
            stream: EventStream::Casts,
            index,
        })?;
        let ability_name = record
            .ability
            .as_ref()
            .and_then(|a| a.name.clone())
            .ok_or(SchemaError::MissingAbilityName { index })?;

        Ok(Self {
            timestamp,
            kind: CastKind::from_type(record.event_type.as_deref()),
            ability_name,
            source_instance: record.source_instance.unwrap_or(0),
            duration: record.duration.unwrap_or(0).max(0),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetabilityEvent {
    pub timestamp: i64,
    pub target_id: i64,
    pub targetable: bool,
}

impl TargetabilityEvent {
    pub fn from_record(index: usize, record: &TargetabilityRecord) -> Result<Self, SchemaError> {
        let stream = EventStream::Targetability;
        let timestamp = record
            .timestamp
            .ok_or(SchemaError::MissingTimestamp { stream, index })?;
        let target_id = record
            .unit_id()
            .ok_or(SchemaError::MissingTargetId { stream, index })?;
        let targetable = record.targetable.ok_or(SchemaError::MissingField {
            stream,
            index,
            field: "targetable",
        })?;

        Ok(Self {
            timestamp,
            target_id,
            targetable: targetable == 1,
        })
    }
}

/// Lethal damage: the target died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverkillEvent {
    pub timestamp: i64,
    pub target_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageEvent {
    pub timestamp: i64,
    /// Only `damage` typed events can anchor a fight
    pub is_damage: bool,
    pub target_id: Option<i64>,
    pub overkill: i64,
}

impl DamageEvent {
    pub fn from_record(index: usize, record: &DamageRecord) -> Result<Self, SchemaError> {
        let stream = EventStream::Damage;
        let timestamp = record
            .timestamp
            .ok_or(SchemaError::MissingTimestamp { stream, index })?;
        let overkill = record.overkill.unwrap_or(0);
        if overkill > 0 && record.target_id.is_none() {
            return Err(SchemaError::MissingTargetId { stream, index });
        }

        Ok(Self {
            timestamp,
            is_damage: record.event_type.as_deref() == Some("damage"),
            target_id: record.target_id,
            overkill,
        })
    }

    pub fn as_overkill(&self) -> Option<OverkillEvent> {
        if self.overkill <= 0 {
            return None;
        }
        self.target_id.map(|target_id| OverkillEvent {
            timestamp: self.timestamp,
            target_id,
        })
    }
}

/// A single timed encounter within a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fight {
    pub fight_id: i64,
    /// Absolute start (ms, report clock)
    pub start_time: i64,
    /// Absolute end (ms, report clock)
    pub end_time: i64,
    pub zone_id: i64,
    pub zone_name: String,
}

impl Fight {
    pub fn from_record(index: usize, record: &FightRecord) -> Result<Self, SchemaError> {
        let stream = EventStream::Fights;
        let missing = |field| SchemaError::MissingField {
            stream,
            index,
            field,
        };

        Ok(Self {
            fight_id: record.id.ok_or_else(|| missing("id"))?,
            start_time: record.start_time.ok_or_else(|| missing("start_time"))?,
            end_time: record.end_time.ok_or_else(|| missing("end_time"))?,
            zone_id: record.zone_id.unwrap_or(0),
            zone_name: record
                .zone_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_ZONE.to_string()),
        })
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        (self.start_time..=self.end_time).contains(&timestamp)
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_time - self.start_time
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Batch Validation
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_casts(records: &[CastRecord]) -> Result<Vec<CastEvent>, SchemaError> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| CastEvent::from_record(i, r))
        .collect()
}

/// Validate targetability records, skipping toggles that are not hostile.
pub fn parse_targetability(
    records: &[TargetabilityRecord],
) -> Result<Vec<TargetabilityEvent>, SchemaError> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_hostile_toggle())
        .map(|(i, r)| TargetabilityEvent::from_record(i, r))
        .collect()
}

pub fn parse_damage(records: &[DamageRecord]) -> Result<Vec<DamageEvent>, SchemaError> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| DamageEvent::from_record(i, r))
        .collect()
}

pub fn parse_fights(records: &[FightRecord]) -> Result<Vec<Fight>, SchemaError> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Fight::from_record(i, r))
        .collect()
}
