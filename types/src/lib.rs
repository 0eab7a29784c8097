//! Shared configuration types for markergen
//!
//! This crate contains the serializable settings shared between the timeline
//! engine (markergen-core) and the command-line front end.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default minimum gap between two markers on the same track (ms)
pub const DEFAULT_MIN_INTERVAL_MS: i64 = 3000;

/// Default cap on the number of cast tracks
pub const DEFAULT_MAX_TRACKS: i64 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Export Filter
// ─────────────────────────────────────────────────────────────────────────────

/// Settings consumed by the timeline assembler and track packer.
///
/// `min_interval` and `max_tracks` may be zero or negative; both collapse
/// the cast markers onto track 0 instead of raising an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum gap in ms between the end of one marker and the start of the next on a track
    pub min_interval: i64,
    /// Maximum number of cast tracks
    pub max_tracks: i64,
    /// Original ability name -> exported description. Abilities not present are dropped.
    #[serde(default)]
    pub name_map: HashMap<String, String>,
}

impl FilterConfig {
    pub fn new(settings: &GlobalSettings, name_map: HashMap<String, String>) -> Self {
        Self {
            min_interval: settings.min_interval,
            max_tracks: settings.max_tracks,
            name_map,
        }
    }

    /// Export name for an ability, or None if the ability is filtered out
    pub fn export_name(&self, description: &str) -> Option<&str> {
        self.name_map.get(description).map(String::as_str)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persistent Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Track layout settings shared by every zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub min_interval: i64,
    pub max_tracks: i64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL_MS,
            max_tracks: DEFAULT_MAX_TRACKS,
        }
    }
}

/// Per-ability export choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSelection {
    pub export: bool,
    /// Display name in the export. Empty means "keep the original name".
    pub rename: String,
}

impl Default for SkillSelection {
    fn default() -> Self {
        Self {
            export: true,
            rename: String::new(),
        }
    }
}

impl SkillSelection {
    pub fn export_name<'a>(&'a self, original: &'a str) -> Option<&'a str> {
        if !self.export {
            return None;
        }
        let rename = self.rename.trim();
        Some(if rename.is_empty() { original } else { rename })
    }
}

/// Skill selections for one zone (keyed by original ability name)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub skills: HashMap<String, SkillSelection>,
}

impl ZoneConfig {
    /// Build the export name map for the given abilities.
    ///
    /// Abilities without a stored selection are exported under their own name.
    pub fn name_map<'a, I>(&self, abilities: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fallback = SkillSelection::default();
        abilities
            .into_iter()
            .filter_map(|name| {
                let selection = self.skills.get(name).unwrap_or(&fallback);
                selection
                    .export_name(name)
                    .map(|export| (name.to_string(), export.to_string()))
            })
            .collect()
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub global: GlobalSettings,
    /// Zone id (as string, for TOML keys) -> zone settings
    #[serde(default)]
    pub zones: HashMap<String, ZoneConfig>,
}

impl AppConfig {
    pub fn zone(&self, zone_id: i64) -> Option<&ZoneConfig> {
        self.zones.get(&zone_id.to_string())
    }

    /// Filter for a zone, using the global track settings
    pub fn filter_for_zone<'a, I>(&self, zone_id: i64, abilities: I) -> FilterConfig
    where
        I: IntoIterator<Item = &'a str>,
    {
        let name_map = match self.zone(zone_id) {
            Some(zone) => zone.name_map(abilities),
            None => ZoneConfig::default().name_map(abilities),
        };
        FilterConfig::new(&self.global, name_map)
    }
}
