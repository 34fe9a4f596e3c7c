//! # `bevy_mapzones_assets`
//!
//! Layer 1 of `bevy_mapzones`: loads zone layout files (`*.zones.json`) as Bevy
//! assets. The assets are plain data describing zone sections, camera zones and
//! enemy spawners.

pub mod assets;
pub mod loaders;
pub mod plugin;

pub mod prelude {
    //! Common imports for `bevy_mapzones_assets` users.

    pub use crate::assets::layout::{
        EnemyDefinition, EnemyZoneDefinition, SectionDefinition, ZoneBehaviorDefinition,
        ZoneDefinition, ZoneLayoutAsset,
    };
    pub use crate::plugin::MapZonesAssetsPlugin;
}

pub use plugin::MapZonesAssetsPlugin;
