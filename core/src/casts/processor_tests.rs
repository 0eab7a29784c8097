//! Tests for cast correlation
//!
//! Streams are written in report order; anchor is 0 unless stated.

use crate::events::{CastEvent, CastKind};

use super::{CastEventProcessor, ability_names};

fn begin(timestamp: i64, instance: i64, name: &str, duration: i64) -> CastEvent {
    CastEvent {
        timestamp,
        kind: CastKind::Begin,
        ability_name: name.to_string(),
        source_instance: instance,
        duration,
    }
}

fn cast(timestamp: i64, instance: i64, name: &str) -> CastEvent {
    CastEvent {
        timestamp,
        kind: CastKind::Complete,
        ability_name: name.to_string(),
        source_instance: instance,
        duration: 0,
    }
}

#[test]
fn test_simultaneous_begincasts_keep_lowest_instance() {
    let stream = vec![
        begin(1000, 2, "Cosmo Memory", 2800),
        begin(1000, 1, "Cosmo Memory", 3000),
        cast(3800, 2, "Cosmo Memory"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);

    // Instance 2's cast bar and its completion are both gone
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].time, 1000);
    assert_eq!(markers[0].duration, 3000, "instance 1 should be canonical");
}

#[test]
fn test_one_marker_per_simultaneous_use() {
    let stream = vec![
        begin(5000, 3, "Flare", 4000),
        begin(5000, 1, "Flare", 4000),
        begin(5000, 2, "Flare", 4000),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    assert_eq!(markers.len(), 1);
}

#[test]
fn test_hidden_resolved_casts_are_not_deleted_by_merge() {
    // Two instants at the same time: only begincasts are hidden, and the adjacent
    // duplicate filter is what collapses identical instants.
    let stream = vec![cast(2000, 2, "Auto-attack"), cast(2000, 1, "Auto-attack")];

    let markers = CastEventProcessor::new().process(&stream, 0);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].description, "Auto-attack");
}

#[test]
fn test_linked_completion_scan_is_unbounded() {
    let stream = vec![
        begin(1000, 2, "Meteor", 500),
        begin(1000, 1, "Meteor", 500),
        cast(1500, 1, "Meteor"),
        begin(40_000, 3, "Holy", 0),
        // 60 s later, still paired with the hidden instance-2 cast bar
        cast(61_000, 2, "Meteor"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    let times: Vec<i64> = markers.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![1000, 1500, 40_000]);
}

#[test]
fn test_cleanup_only_searches_after_hidden_record() {
    // Instance 2 resolved a previous Meteor before the simultaneous cast bars;
    // that earlier record must survive.
    let stream = vec![
        cast(200, 2, "Meteor"),
        begin(1000, 1, "Meteor", 600),
        begin(1000, 2, "Meteor", 600),
        cast(1600, 1, "Meteor"),
        cast(1600, 2, "Meteor"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    let times: Vec<i64> = markers.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![200, 1000, 1600]);
}

#[test]
fn test_short_casts_are_dropped_but_instants_kept() {
    let stream = vec![
        begin(1000, 1, "Quick", 499),
        begin(2000, 1, "Threshold", 500),
        cast(3000, 1, "Instant"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    let names: Vec<&str> = markers.iter().map(|m| m.description.as_str()).collect();
    assert_eq!(names, vec!["Threshold", "Instant"]);
}

#[test]
fn test_adjacent_duplicates_within_window() {
    let stream = vec![
        cast(1000, 1, "Ruin"),
        cast(1099, 4, "Ruin"),
        // 100 ms after the kept marker, not a duplicate
        cast(1100, 5, "Ruin"),
        cast(1150, 6, "Stone"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    let times: Vec<i64> = markers.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![1000, 1100, 1150]);
}

#[test]
fn test_adjacent_duplicates_need_equal_duration() {
    let stream = vec![begin(1000, 1, "Ruin", 1000), cast(1050, 1, "Ruin")];

    let markers = CastEventProcessor::new().process(&stream, 0);
    assert_eq!(markers.len(), 2);
}

#[test]
fn test_duplicate_window_compares_against_kept_marker() {
    let stream = vec![
        cast(1000, 1, "Ruin"),
        cast(1060, 1, "Ruin"),
        cast(1120, 1, "Ruin"),
    ];

    // 1060 is dropped; 1120 is 120 ms after the kept 1000 marker
    let markers = CastEventProcessor::new().process(&stream, 0);
    let times: Vec<i64> = markers.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![1000, 1120]);
}

#[test]
fn test_times_are_anchor_relative() {
    let stream = vec![begin(9_000, 1, "Countdown", 0), begin(12_500, 1, "Opener", 2000)];

    let markers = CastEventProcessor::new().process(&stream, 10_000);
    assert_eq!(markers[0].time, -1000);
    assert_eq!(markers[1].time, 2500);
}

#[test]
fn test_reprocessing_output_is_stable() {
    let stream = vec![
        begin(1000, 2, "Meteor", 3000),
        begin(1000, 1, "Meteor", 3000),
        cast(4000, 1, "Meteor"),
        cast(4000, 2, "Meteor"),
        begin(9000, 1, "Holy", 2000),
        begin(9000, 3, "Holy", 2000),
    ];
    let processor = CastEventProcessor::new();
    let first = processor.process(&stream, 0);

    let replay: Vec<CastEvent> = first
        .iter()
        .map(|m| {
            if m.duration > 0 {
                begin(m.time, 1, &m.description, m.duration)
            } else {
                cast(m.time, 1, &m.description)
            }
        })
        .collect();

    assert_eq!(processor.process(&replay, 0), first);
}

#[test]
fn test_ability_names_sorted_unique() {
    let stream = vec![
        cast(1000, 1, "Fire III"),
        cast(5000, 1, "Blizzard III"),
        cast(9000, 1, "Fire III"),
    ];

    let markers = CastEventProcessor::new().process(&stream, 0);
    assert_eq!(ability_names(&markers), vec!["Blizzard III", "Fire III"]);
}

#[test]
fn test_empty_stream() {
    assert!(CastEventProcessor::new().process(&[], 0).is_empty());
}
