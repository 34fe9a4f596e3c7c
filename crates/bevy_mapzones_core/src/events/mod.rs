//! Observer events for zone transitions and the enemy lifecycle.
//!
//! Game code reacts to these with observers to run scripts, swap camera modes
//! or attach sprites and AI to freshly spawned enemies.

use bevy::prelude::*;

use crate::spawn::EnemyTemplate;

/// Fired when the [`ZoneTracker`](crate::components::ZoneTracker) crosses into
/// a camera zone.
///
/// # Example
///
/// ```ignore
/// app.add_observer(|trigger: On<CameraEnteredZone>, names: Query<&Name>| {
///     if let Ok(name) = names.get(trigger.event().zone) {
///         info!("Entered {}", name);
///     }
/// });
/// ```
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraEnteredZone {
    /// The camera zone entity
    pub zone: Entity,
}

/// Fired when the [`ZoneTracker`](crate::components::ZoneTracker) leaves a
/// camera zone.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraExitedZone {
    /// The camera zone entity
    pub zone: Entity,
}

/// Fired when an enemy zone spawns an enemy.
///
/// The entity only carries a `Transform` and a
/// [`SpawnedEnemy`](crate::components::SpawnedEnemy). Attach sprites, stats
/// and AI matching `template` from an observer.
///
/// # Example
///
/// ```ignore
/// fn dress_enemy(trigger: On<EnemySpawned>, mut commands: Commands, assets: Res<EnemyAssets>) {
///     let event = trigger.event();
///     commands
///         .entity(event.entity)
///         .insert(Sprite::from_image(assets.sprite(event.template.name())));
/// }
/// ```
#[derive(Event, Debug, Clone)]
pub struct EnemySpawned {
    /// The new enemy entity
    pub entity: Entity,
    /// The enemy zone that spawned it
    pub zone: Entity,
    /// Roster slot it fills
    pub slot: usize,
    pub template: EnemyTemplate,
    /// Spawn position in grid units
    pub grid_position: Vec2,
}

/// Trigger this when an enemy spawned by a zone dies.
///
/// The zone frees the enemy's slot and starts its dead timer. The entity is
/// not despawned.
///
/// # Example
///
/// ```ignore
/// fn on_enemy_killed(mut commands: Commands, enemy: Entity) {
///     commands.trigger(EnemyDefeated { entity: enemy });
///     commands.entity(enemy).despawn();
/// }
/// ```
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDefeated {
    /// The enemy entity
    pub entity: Entity,
}

/// Fired when every zone of a layout has been spawned.
///
/// This is an `EntityEvent` that can be observed on the layout entity.
#[derive(EntityEvent, Debug, Clone)]
pub struct ZoneLayoutSpawned {
    /// The layout entity
    #[event_target]
    pub entity: Entity,
}
