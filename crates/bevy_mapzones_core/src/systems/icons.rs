use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::components::{MapZone, ZoneIconSprite};
use crate::grid::ZoneGrid;

/// Z of interaction icons, above map layers and enemies.
pub const ICON_Z: f32 = 10.0;

/// World position of the icon of a zone: centered over the top edge of its
/// bounding section, half a cell above it.
pub fn icon_position(map_zone: &MapZone, grid: &ZoneGrid) -> Option<Vec3> {
    let bounds = grid.section_rect(&map_zone.zone.bounding_section()?);
    Some(Vec3::new(
        bounds.center().x,
        bounds.max.y + grid.cell_size.y * 0.5,
        ICON_Z,
    ))
}

/// Keeps one icon sprite per zone with an interaction icon.
///
/// Icons follow icon and geometry changes and are despawned with their zone.
pub fn sync_interaction_icons(
    grid: Res<ZoneGrid>,
    zones: Query<(Entity, &MapZone)>,
    mut icons: Query<(Entity, &ZoneIconSprite, &mut Sprite, &mut Transform)>,
    mut commands: Commands,
) {
    let mut zones_with_icon: HashSet<Entity> = HashSet::default();

    for (icon_entity, icon, mut sprite, mut transform) in &mut icons {
        let target = zones.get(icon.zone).ok().and_then(|(_, map_zone)| {
            let handle = map_zone.zone.interaction_icon()?;
            Some((handle, icon_position(map_zone, &grid)?))
        });

        let Some((handle, position)) = target else {
            commands.entity(icon_entity).despawn();
            continue;
        };

        if sprite.image != *handle {
            sprite.image = handle.clone();
        }
        if transform.translation != position {
            transform.translation = position;
        }
        zones_with_icon.insert(icon.zone);
    }

    for (zone_entity, map_zone) in &zones {
        if zones_with_icon.contains(&zone_entity) {
            continue;
        }
        let Some(handle) = map_zone.zone.interaction_icon() else {
            continue;
        };
        let Some(position) = icon_position(map_zone, &grid) else {
            continue;
        };

        commands.spawn((
            Name::new("Zone Icon"),
            ZoneIconSprite { zone: zone_entity },
            Sprite::from_image(handle.clone()),
            Transform::from_translation(position),
        ));
    }
}
