//! Plugin configuration.

use core::time::Duration;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::ZoneGrid;
use crate::spawn::DEFAULT_MAX_SPAWN_ATTEMPTS;

/// Configuration for `MapZonesCorePlugin`.
///
/// Missing fields take their default value, so a config file only needs the
/// settings it changes.
///
/// # Example
///
/// ```rust
/// use bevy_mapzones_core::config::MapZonesConfig;
///
/// let config = MapZonesConfig::from_json_str(r#"{ "cell_width": 32.0, "rng_seed": 7 }"#).unwrap();
/// assert_eq!(config.cell_width, 32.0);
/// assert_eq!(config.cell_height, 16.0);
/// assert_eq!(config.rng_seed, Some(7));
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapZonesConfig {
    /// Width of a collision grid cell in world units
    pub cell_width: f32,
    /// Height of a collision grid cell in world units
    pub cell_height: f32,
    /// Spawn cadence for enemy zones that don't set one
    pub default_spawn_time_ms: u64,
    /// Delay after a death for enemy zones that don't set one
    pub default_dead_time_ms: u64,
    /// Candidate positions tried per spawn
    pub max_spawn_attempts: u32,
    /// Seed for spawn positions. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    /// Draw zone outlines with gizmos
    pub debug_draw: bool,
}

impl Default for MapZonesConfig {
    fn default() -> Self {
        Self {
            cell_width: 16.0,
            cell_height: 16.0,
            default_spawn_time_ms: 1000,
            default_dead_time_ms: 5000,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
            rng_seed: None,
            debug_draw: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse map zones config: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapZonesConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn default_spawn_time(&self) -> Duration {
        Duration::from_millis(self.default_spawn_time_ms)
    }

    pub fn default_dead_time(&self) -> Duration {
        Duration::from_millis(self.default_dead_time_ms)
    }

    /// Grid with the configured cell size and the origin at world zero.
    pub fn grid(&self) -> ZoneGrid {
        ZoneGrid::new(Vec2::new(self.cell_width, self.cell_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MapZonesConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MapZonesConfig::default());
        assert_eq!(config.default_dead_time(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config() {
        let config = MapZonesConfig::from_json_str(
            r#"{ "default_spawn_time_ms": 250, "debug_draw": true, "max_spawn_attempts": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.default_spawn_time(), Duration::from_millis(250));
        assert!(config.debug_draw);
        assert_eq!(config.max_spawn_attempts, 5);
        assert_eq!(config.grid().cell_size, Vec2::splat(16.0));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            MapZonesConfig::from_json_str(r#"{ "cell_width": "wide" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            MapZonesConfig::from_json_file("does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
