//! Plugin for `bevy_mapzones_core`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::{
    MapZone, SpawnedEnemy, ZoneIconSprite, ZoneLayout, ZoneOf, ZoneTracker, ZonesInLayout,
};
use crate::config::MapZonesConfig;
use crate::debug::{DebugMapZones, draw_map_zones_debug};
use crate::grid::ZoneGrid;
use crate::systems::{
    on_enemy_defeated, process_loaded_layouts, sync_interaction_icons, update_camera_zones,
    update_enemy_zones,
};

/// System set of the zone update systems in `PreUpdate`.
///
/// Zones update before user systems run, so game code in `Update` sees this
/// tick's camera presence and spawned enemies.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapZonesSet {
    Update,
}

/// Random source for spawn positions.
#[derive(Resource, Debug, Clone)]
pub struct ZoneRng(pub ChaCha8Rng);

impl ZoneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

/// Plugin for zone tracking and enemy spawning.
///
/// Add this plugin after `MapZonesAssetsPlugin` so zone layouts can be loaded.
/// Zones spawned directly as [`MapZone`] components work without it.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapzones_assets::MapZonesAssetsPlugin;
/// use bevy_mapzones_core::{MapZonesConfig, MapZonesCorePlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(MapZonesAssetsPlugin)
///     .add_plugins(MapZonesCorePlugin::new(MapZonesConfig {
///         rng_seed: Some(42),
///         debug_draw: true,
///         ..default()
///     }))
///     .run();
/// ```
#[derive(Default)]
pub struct MapZonesCorePlugin {
    config: MapZonesConfig,
}

impl MapZonesCorePlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: MapZonesConfig) -> Self {
        Self { config }
    }
}

impl Plugin for MapZonesCorePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        let rng = match config.rng_seed {
            Some(seed) => ZoneRng::seeded(seed),
            None => ZoneRng::from_entropy(),
        };

        app.insert_resource(config.grid())
            .insert_resource(rng)
            .insert_resource(config.clone());

        app.register_type::<MapZone>()
            .register_type::<ZoneTracker>()
            .register_type::<SpawnedEnemy>()
            .register_type::<ZoneIconSprite>()
            .register_type::<ZoneLayout>()
            .register_type::<ZoneOf>()
            .register_type::<ZonesInLayout>()
            .register_type::<ZoneGrid>();

        // Layouts are processed first so new zones update in the same frame
        app.configure_sets(PreUpdate, MapZonesSet::Update);
        app.add_systems(
            PreUpdate,
            (process_loaded_layouts, update_camera_zones, update_enemy_zones)
                .chain()
                .in_set(MapZonesSet::Update),
        );
        app.add_systems(PostUpdate, sync_interaction_icons);
        app.add_observer(on_enemy_defeated);

        // Gizmos are only available with the gizmo plugin
        if config.debug_draw {
            app.init_resource::<DebugMapZones>();
            app.add_systems(
                PostUpdate,
                draw_map_zones_debug.run_if(resource_exists::<DebugMapZones>),
            );
        }

        info!(
            "Map zones initialized (cell size {}x{}, seed {:?})",
            config.cell_width, config.cell_height, config.rng_seed
        );
    }
}
