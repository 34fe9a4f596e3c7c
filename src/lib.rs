//! # `bevy_mapzones`
//!
//! Map zones and enemy spawning for 2D tile-based games in Bevy.
//!
//! This is a meta-crate combining the `bevy_mapzones_*` sub-crates behind a
//! single plugin.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_mapzones::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BevyMapZonesPlugin::default())
//!         .add_systems(Startup, spawn_zones)
//!         .run();
//! }
//!
//! fn spawn_zones(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.spawn((Camera2d, ZoneTracker));
//!     commands.spawn(ZoneLayout {
//!         handle: asset_server.load("maps/forest.zones.json"),
//!     });
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Layer 1** ([`assets`]): zone layout files (`*.zones.json`) as Bevy assets
//! - **Layer 2** ([`core`]): zone geometry, camera zones, enemy spawners and
//!   the systems driving them
//!
//! Rendering, AI and combat of spawned enemies stay in game code, hooked in
//! through the events of [`core::events`].

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_mapzones_assets as assets;
pub use bevy_mapzones_core as core;

/// Unified prelude for `bevy_mapzones`
pub mod prelude {
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    pub use crate::plugin::BevyMapZonesPlugin;
}
