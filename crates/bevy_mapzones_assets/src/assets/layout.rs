use bevy::prelude::*;
use serde::Deserialize;

/// Bevy asset holding the zone definitions of one map (`*.zones.json` files).
///
/// The asset is plain data. Turning definitions into `MapZone` entities is a
/// Layer 2 concern handled by `bevy_mapzones_core`.
///
/// # Example
///
/// ```json
/// {
///   "zones": [
///     { "name": "bridge",
///       "behavior": { "type": "camera" },
///       "sections": [ { "left": 10, "right": 14, "top": 2, "bottom": 6 } ] },
///     { "name": "forest",
///       "sections": [ { "left": 0, "right": 30, "top": 0, "bottom": 20 } ],
///       "behavior": {
///         "type": "enemy",
///         "spawn_time_ms": 4000,
///         "spawn_sections": [ { "left": 2, "right": 6, "top": 2, "bottom": 6 } ],
///         "enemies": [ { "template": "slime", "count": 2 } ]
///       } }
///   ]
/// }
/// ```
#[derive(TypePath, Asset, Debug, Clone, Default, Deserialize)]
pub struct ZoneLayoutAsset {
    /// Zone definitions, in file order
    #[serde(default)]
    pub zones: Vec<ZoneDefinition>,
}

impl ZoneLayoutAsset {
    /// Parse a layout from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Parse a layout from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a zone definition by name.
    pub fn zone(&self, name: &str) -> Option<&ZoneDefinition> {
        self.zones.iter().find(|zone| zone.name == name)
    }
}

/// One rectangular section in collision grid units.
///
/// Stored as written in the file. Geometry validation happens when the
/// section is added to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SectionDefinition {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

/// A named zone made of one or more sections.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDefinition {
    /// Name used for the spawned entity and in diagnostics
    pub name: String,

    /// Sections composing the zone. The first one seeds the zone.
    pub sections: Vec<SectionDefinition>,

    /// Optional asset path of an icon drawn above the zone
    #[serde(default)]
    pub interaction_icon: Option<String>,

    /// What the zone does every tick
    #[serde(default)]
    pub behavior: ZoneBehaviorDefinition,
}

/// Behavior attached to a zone definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneBehaviorDefinition {
    /// Area only, no per-tick logic
    #[default]
    Plain,
    /// Tracks whether the camera target is inside
    Camera,
    /// Spawns and respawns enemies
    Enemy(EnemyZoneDefinition),
}

/// Spawner settings of an enemy zone.
#[derive(Debug, Clone, Deserialize)]
pub struct EnemyZoneDefinition {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub roaming_restrained: bool,

    /// Spawn cadence. Falls back to the plugin configuration when absent.
    #[serde(default)]
    pub spawn_time_ms: Option<u64>,

    /// Minimum delay after a death before the population may grow back.
    /// Falls back to the plugin configuration when absent.
    #[serde(default)]
    pub dead_time_ms: Option<u64>,

    /// -1 means unlimited
    #[serde(default = "unlimited_spawns")]
    pub spawns_left: i32,

    /// Optional stricter area where enemies appear
    #[serde(default)]
    pub spawn_sections: Vec<SectionDefinition>,

    #[serde(default)]
    pub enemies: Vec<EnemyDefinition>,
}

impl Default for EnemyZoneDefinition {
    fn default() -> Self {
        Self {
            enabled: true,
            roaming_restrained: true,
            spawn_time_ms: None,
            dead_time_ms: None,
            spawns_left: unlimited_spawns(),
            spawn_sections: Vec::new(),
            enemies: Vec::new(),
        }
    }
}

/// A roster entry: which enemy template and how many copies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnemyDefinition {
    pub template: String,
    #[serde(default = "default_count")]
    pub count: u8,
}

fn default_true() -> bool {
    true
}

fn unlimited_spawns() -> i32 {
    -1
}

fn default_count() -> u8 {
    1
}
