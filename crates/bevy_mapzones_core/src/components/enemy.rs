use bevy::prelude::*;

/// Attached to every enemy spawned by an enemy zone.
///
/// Despawning the entity without triggering
/// [`EnemyDefeated`](crate::events::EnemyDefeated) still frees the slot on the
/// next update.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct SpawnedEnemy {
    /// The enemy zone entity
    pub zone: Entity,
    /// Roster slot the enemy fills
    pub slot: usize,
}
