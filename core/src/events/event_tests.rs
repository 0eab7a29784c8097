//! Tests for raw record validation

use serde_json::json;

use super::*;

fn cast_records(value: serde_json::Value) -> Vec<CastRecord> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_cast_record_defaults() {
    let records = cast_records(json!([
        { "timestamp": 1200, "type": "begincast", "ability": { "name": "Fire III", "guid": 141 },
          "sourceInstance": 2, "duration": 2800 },
        { "timestamp": 4000, "ability": { "name": "Fire III" } }
    ]));

    let events = parse_casts(&records).unwrap();
    assert_eq!(events[0].kind, CastKind::Begin);
    assert_eq!(events[0].source_instance, 2);
    assert_eq!(events[0].duration, 2800);

    // Missing type, instance and duration fall back to a resolved cast by instance 0
    assert_eq!(events[1].kind, CastKind::Complete);
    assert_eq!(events[1].source_instance, 0);
    assert_eq!(events[1].duration, 0);
}

#[test]
fn test_cast_without_ability_name_rejects_batch() {
    let records = cast_records(json!([
        { "timestamp": 100, "type": "cast", "ability": { "name": "Holy" } },
        { "timestamp": 200, "type": "cast", "ability": {} }
    ]));

    let err = parse_casts(&records).unwrap_err();
    assert_eq!(err, SchemaError::MissingAbilityName { index: 1 });
}

#[test]
fn test_cast_without_timestamp_rejects_batch() {
    let records = cast_records(json!([{ "type": "cast", "ability": { "name": "Holy" } }]));

    let err = parse_casts(&records).unwrap_err();
    assert_eq!(
        err,
        SchemaError::MissingTimestamp {
            stream: EventStream::Casts,
            index: 0
        }
    );
    assert_eq!(err.to_string(), "cast record 0 has no timestamp");
}

#[test]
fn test_targetability_prefers_source_id() {
    let records: Vec<TargetabilityRecord> = serde_json::from_value(json!([
        { "timestamp": 5000, "targetable": 0, "sourceID": 12, "targetID": 99 },
        { "timestamp": 8000, "targetable": 1, "targetID": 99 }
    ]))
    .unwrap();

    let events = parse_targetability(&records).unwrap();
    assert_eq!(events[0].target_id, 12);
    assert!(!events[0].targetable);
    assert_eq!(events[1].target_id, 99);
    assert!(events[1].targetable);
}

#[test]
fn test_targetability_skips_npc_and_friendly_toggles() {
    let records: Vec<TargetabilityRecord> = serde_json::from_value(json!([
        { "timestamp": 1, "targetable": 0, "sourceID": 1, "source": { "type": "NPC" } },
        { "timestamp": 2, "targetable": 0, "sourceID": 2, "target": { "type": "NPC" } },
        { "timestamp": 3, "targetable": 0, "sourceID": 3, "sourceIsFriendly": true },
        { "timestamp": 4, "targetable": 0, "sourceID": 4, "source": { "type": "Boss" } }
    ]))
    .unwrap();

    let events = parse_targetability(&records).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target_id, 4);
}

#[test]
fn test_targetability_without_target_id() {
    let records: Vec<TargetabilityRecord> =
        serde_json::from_value(json!([{ "timestamp": 10, "targetable": 1 }])).unwrap();

    let err = parse_targetability(&records).unwrap_err();
    assert_eq!(
        err,
        SchemaError::MissingTargetId {
            stream: EventStream::Targetability,
            index: 0
        }
    );
}

#[test]
fn test_damage_overkill_conversion() {
    let records: Vec<DamageRecord> = serde_json::from_value(json!([
        { "timestamp": 10, "type": "damage", "targetID": 5, "overkill": 0 },
        { "timestamp": 20, "type": "damage", "targetID": 5, "overkill": 1312 },
        { "timestamp": 30, "type": "absorbed", "targetID": 6 }
    ]))
    .unwrap();

    let events = parse_damage(&records).unwrap();
    assert!(events[0].is_damage);
    assert_eq!(events[0].as_overkill(), None);
    assert_eq!(
        events[1].as_overkill(),
        Some(OverkillEvent {
            timestamp: 20,
            target_id: 5
        })
    );
    assert!(!events[2].is_damage);
}

#[test]
fn test_lethal_damage_requires_target() {
    let records: Vec<DamageRecord> =
        serde_json::from_value(json!([{ "timestamp": 10, "type": "damage", "overkill": 40 }]))
            .unwrap();

    assert!(matches!(
        parse_damage(&records),
        Err(SchemaError::MissingTargetId {
            stream: EventStream::Damage,
            index: 0
        })
    ));
}

#[test]
fn test_fight_record_defaults() {
    let records: Vec<FightRecord> = serde_json::from_value(json!([
        { "id": 3, "start_time": 1000, "end_time": 61000 },
        { "id": 4, "start_time": 70000, "end_time": 90000, "zoneID": 1001, "zoneName": "The Omega Protocol" }
    ]))
    .unwrap();

    let fights = parse_fights(&records).unwrap();
    assert_eq!(fights[0].zone_id, 0);
    assert_eq!(fights[0].zone_name, "Unknown Zone");
    assert_eq!(fights[0].duration_ms(), 60000);
    assert!(fights[0].contains(61000));
    assert!(!fights[0].contains(999));
    assert_eq!(fights[1].zone_id, 1001);
}

#[test]
fn test_fight_missing_end_time() {
    let records: Vec<FightRecord> =
        serde_json::from_value(json!([{ "id": 3, "start_time": 1000 }])).unwrap();

    let err = parse_fights(&records).unwrap_err();
    assert_eq!(err.to_string(), "fight record 0 is missing field `end_time`");
}
