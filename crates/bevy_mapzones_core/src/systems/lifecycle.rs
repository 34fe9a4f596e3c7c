use bevy::prelude::*;

use crate::components::{MapZone, SpawnedEnemy};
use crate::events::EnemyDefeated;

/// Observer freeing the roster slot of a defeated enemy.
///
/// Reports for entities the zones don't know, or for a slot that has since
/// been refilled by another entity, are logged and ignored.
pub fn on_enemy_defeated(
    trigger: On<EnemyDefeated>,
    enemies: Query<&SpawnedEnemy>,
    mut zones: Query<&mut MapZone>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok(enemy) = enemies.get(entity) else {
        warn!("EnemyDefeated for {:?}, which no zone spawned", entity);
        return;
    };

    commands.entity(entity).try_remove::<SpawnedEnemy>();

    let Ok(mut map_zone) = zones.get_mut(enemy.zone) else {
        debug!("Defeated enemy {:?} outlived its zone {:?}", entity, enemy.zone);
        return;
    };
    let Some(spawner) = map_zone.spawner_mut() else {
        return;
    };

    if spawner.enemy_entity(enemy.slot) != Some(entity) {
        warn!(
            "EnemyDefeated for {:?}, but slot {} of zone {:?} holds another enemy",
            entity, enemy.slot, enemy.zone
        );
        return;
    }

    if spawner.enemy_dead(enemy.slot).is_ok() {
        debug!(
            "Enemy {:?} in slot {} of zone {:?} died, {} spawns left",
            entity,
            enemy.slot,
            enemy.zone,
            spawner.spawns_left()
        );
    }
}
