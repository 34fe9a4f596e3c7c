//! Debug visualization for map zones.

use bevy::prelude::*;

use crate::components::{MapZone, ZoneBehavior};
use crate::geometry::Zone;
use crate::grid::ZoneGrid;

/// Resource to enable zone debug visualization.
///
/// Added by `MapZonesCorePlugin` when `debug_draw` is set in the config.
/// Remove it to hide the outlines.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_mapzones_core::debug::DebugMapZones;
/// fn highlight_spawns(mut debug: ResMut<DebugMapZones>) {
///     debug.spawn_color = Color::srgba(1.0, 0.0, 1.0, 0.9);
/// }
/// ```
#[derive(Resource, Debug, Clone)]
pub struct DebugMapZones {
    /// Outline of every zone section
    pub zone_color: Color,
    /// Outline of spawn sections of enemy zones
    pub spawn_color: Color,
    /// Camera zones currently holding the tracker
    pub active_color: Color,
}

impl Default for DebugMapZones {
    fn default() -> Self {
        Self {
            zone_color: Color::srgba(0.0, 1.0, 0.0, 0.8),
            spawn_color: Color::srgba(1.0, 0.5, 0.0, 0.8),
            active_color: Color::srgba(1.0, 1.0, 0.0, 1.0),
        }
    }
}

/// System that draws an outline around each zone section.
///
/// Only runs when `DebugMapZones` resource is present.
pub fn draw_map_zones_debug(
    config: Res<DebugMapZones>,
    grid: Res<ZoneGrid>,
    zones: Query<&MapZone>,
    mut gizmos: Gizmos,
) {
    for map_zone in &zones {
        let color = match &map_zone.behavior {
            ZoneBehavior::Camera(presence) if presence.is_inside() => config.active_color,
            _ => config.zone_color,
        };
        draw_zone(&mut gizmos, &grid, &map_zone.zone, color);

        if let Some(spawn_zone) = map_zone.spawner().and_then(|spawner| spawner.spawn_zone()) {
            draw_zone(&mut gizmos, &grid, spawn_zone, config.spawn_color);
        }
    }
}

fn draw_zone(gizmos: &mut Gizmos, grid: &ZoneGrid, zone: &Zone, color: Color) {
    for section in zone.sections() {
        let rect = grid.section_rect(section);
        gizmos.rect_2d(Isometry2d::from_translation(rect.center()), rect.size(), color);
    }
}
