//! Combat log events as delivered by the report API
//!
//! `record` holds the loosely-typed serde shapes; `event` holds the validated
//! events the engine operates on. Validation rejects the whole batch on the
//! first record missing a field the engine depends on.

mod error;
mod event;
mod record;

#[cfg(test)]
mod event_tests;

pub use error::{EventStream, SchemaError};
pub use event::{
    CastEvent, CastKind, DamageEvent, Fight, OverkillEvent, TargetabilityEvent, parse_casts,
    parse_damage, parse_fights, parse_targetability,
};
pub use record::{
    AbilityRecord, ActorRecord, CastRecord, DamageRecord, FightRecord, TargetabilityRecord,
};
