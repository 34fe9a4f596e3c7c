//! Unified plugin for `bevy_mapzones`.

use bevy::prelude::*;

use bevy_mapzones_assets::MapZonesAssetsPlugin;
use bevy_mapzones_core::{MapZonesConfig, MapZonesCorePlugin};

/// Unified plugin that adds all `bevy_mapzones` functionality.
///
/// This plugin includes:
/// - Asset loading ([`MapZonesAssetsPlugin`])
/// - Zone systems ([`MapZonesCorePlugin`])
///
/// # With Custom Configuration
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapzones::prelude::*;
///
/// let config = MapZonesConfig::from_json_file("assets/mapzones.json").unwrap_or_default();
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(BevyMapZonesPlugin::default().with_config(config))
///     .run();
/// ```
#[derive(Default)]
pub struct BevyMapZonesPlugin {
    /// Zone configuration
    pub config: MapZonesConfig,
}

impl BevyMapZonesPlugin {
    pub fn with_config(mut self, config: MapZonesConfig) -> Self {
        self.config = config;
        self
    }
}

impl Plugin for BevyMapZonesPlugin {
    fn build(&self, app: &mut App) {
        // Layer 1: Assets
        app.add_plugins(MapZonesAssetsPlugin);

        // Layer 2: Zones
        app.add_plugins(MapZonesCorePlugin::new(self.config.clone()));

        info!("BevyMapZonesPlugin initialized");
    }
}
