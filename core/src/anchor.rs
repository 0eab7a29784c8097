//! Fight anchor: the zero point of every marker time
//!
//! The pull is the first real damage event shortly after the fight starts;
//! countdowns and pre-pull casts then land at negative times.

use crate::events::{DamageEvent, Fight};

/// How far after the fight start to look for the first damage event (ms)
pub const ANCHOR_SEARCH_WINDOW_MS: i64 = 5000;

/// Timestamp of the first `damage` event within the search window, or the fight start.
pub fn anchor_offset(fight: &Fight, damage: &[DamageEvent]) -> i64 {
    let window = fight.start_time..=fight.start_time + ANCHOR_SEARCH_WINDOW_MS;
    damage
        .iter()
        .find(|e| e.is_damage && window.contains(&e.timestamp))
        .map(|e| e.timestamp)
        .unwrap_or(fight.start_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight() -> Fight {
        Fight {
            fight_id: 1,
            start_time: 10_000,
            end_time: 70_000,
            zone_id: 0,
            zone_name: "Test".to_string(),
        }
    }

    fn damage(timestamp: i64, is_damage: bool) -> DamageEvent {
        DamageEvent {
            timestamp,
            is_damage,
            target_id: Some(1),
            overkill: 0,
        }
    }

    #[test]
    fn test_first_damage_is_anchor() {
        let events = [damage(9_000, true), damage(11_200, false), damage(12_400, true), damage(13_000, true)];
        assert_eq!(anchor_offset(&fight(), &events), 12_400);
    }

    #[test]
    fn test_falls_back_to_fight_start() {
        assert_eq!(anchor_offset(&fight(), &[]), 10_000);

        // Damage after the search window does not count
        let late = [damage(15_001, true)];
        assert_eq!(anchor_offset(&fight(), &late), 10_000);
    }
}
