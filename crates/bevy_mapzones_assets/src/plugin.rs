use bevy::prelude::*;

use crate::assets::layout::ZoneLayoutAsset;
use crate::loaders::layout::ZoneLayoutLoader;

/// Plugin that registers the zone layout asset type and its loader
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_mapzones_assets::MapZonesAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(MapZonesAssetsPlugin)
///     .run();
/// ```
///
/// This is a **Layer 1** plugin: pure asset loading with no ECS concerns.
/// Spawning zone entities from a loaded layout is done by `bevy_mapzones_core`.
pub struct MapZonesAssetsPlugin;

impl Plugin for MapZonesAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<ZoneLayoutAsset>()
            .register_asset_loader(ZoneLayoutLoader);
    }
}
