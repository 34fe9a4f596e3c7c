//! Layout root component and layout/zone relationship components.

use bevy::prelude::*;
use bevy_mapzones_assets::prelude::ZoneLayoutAsset;

/// Root component for a zone layout file.
///
/// Spawn an entity with this component to create one [`MapZone`](super::MapZone)
/// entity per zone definition once the asset is loaded.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_mapzones_core::prelude::ZoneLayout;
/// fn spawn_layout(mut commands: Commands, asset_server: Res<AssetServer>) {
///     commands.spawn(ZoneLayout {
///         handle: asset_server.load("maps/forest.zones.json"),
///     });
/// }
/// ```
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct ZoneLayout {
    /// Handle to the loaded `ZoneLayoutAsset`.
    pub handle: Handle<ZoneLayoutAsset>,
}

/// Relationship: Zone → Layout
///
/// Points from a zone entity to the layout entity that created it.
/// Paired with `ZonesInLayout` for bidirectional traversal.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct ZoneOf(pub Entity);

/// Relationship target: Layout → Zones
///
/// Zone entities created from this layout, in file order.
/// Paired with `ZoneOf` for bidirectional traversal.
#[derive(Component, Default, Debug, Reflect)]
#[reflect(Component)]
pub struct ZonesInLayout(pub Vec<Entity>);
