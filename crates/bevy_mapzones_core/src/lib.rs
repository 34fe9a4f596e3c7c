//! # `bevy_mapzones_core`
//!
//! Zone logic for `bevy_mapzones`: map areas built from collision grid
//! sections, camera zones that track whether the camera target is inside, and
//! enemy zones that spawn and respawn a roster of enemies.
//!
//! **This crate does NOT handle enemy behavior or rendering** - spawned enemies
//! only carry a `Transform` and a [`SpawnedEnemy`](components::SpawnedEnemy)
//! marker. Game code attaches sprites and AI from [`EnemySpawned`](events::EnemySpawned)
//! observers and reports deaths with [`EnemyDefeated`](events::EnemyDefeated).
//!
//! ## Architecture
//!
//! Layer 2 (this crate) builds on:
//! - **Layer 1** (`bevy_mapzones_assets`): zone layout files as assets
//!
//! The geometry ([`geometry`]), camera presence ([`camera`]) and spawner
//! ([`spawn`]) types are plain data and can be driven without an `App`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_mapzones_assets::MapZonesAssetsPlugin;
//! use bevy_mapzones_core::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(MapZonesAssetsPlugin)
//!         .add_plugins(MapZonesCorePlugin::default())
//!         .add_systems(Startup, setup)
//!         .add_observer(announce_zone)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.spawn((Camera2d, ZoneTracker));
//!     commands.spawn(ZoneLayout {
//!         handle: asset_server.load("maps/forest.zones.json"),
//!     });
//! }
//!
//! fn announce_zone(trigger: On<CameraEnteredZone>, names: Query<&Name>) {
//!     if let Ok(name) = names.get(trigger.event().zone) {
//!         info!("Entered {}", name);
//!     }
//! }
//! ```

pub mod camera;
pub mod components;
pub mod config;
pub mod debug;
pub mod error;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod plugin;
pub mod spawn;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_mapzones_core` users.

    pub use crate::camera::CameraPresence;
    pub use crate::components::{
        MapZone, SpawnedEnemy, ZoneBehavior, ZoneIconSprite, ZoneLayout, ZoneOf, ZoneTracker,
        ZonesInLayout,
    };
    pub use crate::config::{ConfigError, MapZonesConfig};
    pub use crate::debug::DebugMapZones;
    pub use crate::error::ZoneError;
    pub use crate::events::{
        CameraEnteredZone, CameraExitedZone, EnemyDefeated, EnemySpawned, ZoneLayoutSpawned,
    };
    pub use crate::geometry::{Zone, ZoneSection};
    pub use crate::grid::ZoneGrid;
    pub use crate::plugin::{MapZonesCorePlugin, MapZonesSet, ZoneRng};
    pub use crate::spawn::{EnemyTemplate, SpawnController, SpawnRequest, UNLIMITED_SPAWNS};
    pub use crate::systems::RespawnZoneLayout;
}

// Re-export plugin types at crate root for convenience
pub use config::MapZonesConfig;
pub use plugin::{MapZonesCorePlugin, MapZonesSet};
