//! Per-tick zone updates.

use bevy::ecs::query::QuerySingleError;
use bevy::log::warn_once;
use bevy::prelude::*;

use crate::components::{MapZone, SpawnedEnemy, ZoneBehavior, ZoneTracker};
use crate::events::{CameraEnteredZone, CameraExitedZone, EnemySpawned};
use crate::grid::ZoneGrid;
use crate::plugin::ZoneRng;

/// Updates plain and camera zones against the tracker position.
///
/// The tracker's world position is used, so it may be parented to another
/// entity. A missing tracker counts as outside every zone.
pub fn update_camera_zones(
    grid: Res<ZoneGrid>,
    tracker: Query<&GlobalTransform, With<ZoneTracker>>,
    mut zones: Query<(Entity, &mut MapZone)>,
    mut commands: Commands,
) {
    let tracked = match tracker.single() {
        Ok(transform) => Some(grid.world_to_grid(transform.translation().truncate())),
        Err(QuerySingleError::MultipleEntities(_)) => {
            warn_once!("More than one ZoneTracker, camera zones treat the tracker as absent");
            None
        }
        Err(_) => None,
    };

    for (zone_entity, mut map_zone) in &mut zones {
        let MapZone { zone, behavior } = &mut *map_zone;
        match behavior {
            ZoneBehavior::Plain => zone.update(),
            ZoneBehavior::Camera(presence) => {
                presence.update(tracked.is_some_and(|position| zone.contains_point(position)));

                if presence.is_entering() {
                    debug!("Tracker entered camera zone {:?}", zone_entity);
                    commands.trigger(CameraEnteredZone { zone: zone_entity });
                }
                if presence.is_exiting() {
                    debug!("Tracker left camera zone {:?}", zone_entity);
                    commands.trigger(CameraExitedZone { zone: zone_entity });
                }
            }
            ZoneBehavior::Enemy(_) => {}
        }
    }
}

/// Advances enemy zones and spawns the enemies they ask for.
///
/// Enemies appear at the center of the chosen cell. A cell already holding a
/// live enemy of the same zone is never picked.
pub fn update_enemy_zones(
    time: Res<Time>,
    grid: Res<ZoneGrid>,
    mut rng: ResMut<ZoneRng>,
    mut zones: Query<(Entity, &mut MapZone)>,
    enemies: Query<&Transform, With<SpawnedEnemy>>,
    mut commands: Commands,
) {
    let delta = time.delta();

    for (zone_entity, mut map_zone) in &mut zones {
        let MapZone { zone, behavior } = &mut *map_zone;
        let ZoneBehavior::Enemy(spawner) = behavior else {
            continue;
        };

        let released = spawner.release_vanished(|entity| enemies.contains(entity));
        if released > 0 {
            debug!(
                "Released {} vanished enemies from zone {:?}",
                released, zone_entity
            );
        }

        let occupied: Vec<Vec2> = spawner
            .live_enemies()
            .filter_map(|(_, entity)| enemies.get(entity).ok())
            .map(|transform| grid.world_to_grid(transform.translation.truncate()).floor())
            .collect();

        let Some(request) = spawner.update(zone, delta, &mut rng.0, |candidate| {
            !occupied.contains(&candidate.floor())
        }) else {
            continue;
        };

        let world_position = grid.cell_center(request.position);
        let enemy = commands
            .spawn((
                Name::new(request.template.to_string()),
                SpawnedEnemy {
                    zone: zone_entity,
                    slot: request.slot,
                },
                Transform::from_translation(world_position.extend(0.0)),
            ))
            .id();

        if let Err(error) = spawner.bind_enemy(request.slot, enemy) {
            warn!("Could not bind spawned enemy {:?}: {}", enemy, error);
        }

        debug!(
            "Zone {:?} spawned '{}' in slot {} at {:?}",
            zone_entity, request.template, request.slot, request.position
        );

        commands.trigger(EnemySpawned {
            entity: enemy,
            zone: zone_entity,
            slot: request.slot,
            template: request.template,
            grid_position: request.position,
        });
    }
}
