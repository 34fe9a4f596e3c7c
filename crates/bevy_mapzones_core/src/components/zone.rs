//! The zone component and the entity it tracks.

use bevy::prelude::*;

use crate::camera::CameraPresence;
use crate::geometry::Zone;
use crate::spawn::SpawnController;

/// What a [`MapZone`] does every tick.
#[derive(Debug, Clone, Default, Reflect)]
pub enum ZoneBehavior {
    /// Area only
    #[default]
    Plain,
    /// Tracks whether the [`ZoneTracker`] is inside
    Camera(CameraPresence),
    /// Spawns and respawns enemies inside the zone
    Enemy(SpawnController),
}

/// A zone placed on the map.
///
/// Every behavior shares the same area: containment tests and random sampling
/// go through [`MapZone::zone`] regardless of what the zone does.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use core::time::Duration;
/// # use bevy_mapzones_core::prelude::*;
/// fn spawn_zones(mut commands: Commands) {
///     commands.spawn(MapZone::camera(Zone::new(10, 14, 2, 6)));
///
///     let mut spawner = SpawnController::new(Duration::from_secs(4), Duration::from_secs(8));
///     spawner.add_enemy("slime", 2);
///     commands.spawn(MapZone::enemy(Zone::new(0, 30, 0, 20), spawner));
/// }
/// ```
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct MapZone {
    pub zone: Zone,
    pub behavior: ZoneBehavior,
}

impl MapZone {
    pub fn plain(zone: Zone) -> Self {
        Self {
            zone,
            behavior: ZoneBehavior::Plain,
        }
    }

    pub fn camera(zone: Zone) -> Self {
        Self {
            zone,
            behavior: ZoneBehavior::Camera(CameraPresence::default()),
        }
    }

    pub fn enemy(zone: Zone, spawner: SpawnController) -> Self {
        Self {
            zone,
            behavior: ZoneBehavior::Enemy(spawner),
        }
    }

    pub fn is_inside(&self, pos_x: f32, pos_y: f32) -> bool {
        self.zone.is_inside(pos_x, pos_y)
    }

    pub fn camera_presence(&self) -> Option<&CameraPresence> {
        match &self.behavior {
            ZoneBehavior::Camera(presence) => Some(presence),
            ZoneBehavior::Plain | ZoneBehavior::Enemy(_) => None,
        }
    }

    pub fn spawner(&self) -> Option<&SpawnController> {
        match &self.behavior {
            ZoneBehavior::Enemy(spawner) => Some(spawner),
            ZoneBehavior::Plain | ZoneBehavior::Camera(_) => None,
        }
    }

    pub fn spawner_mut(&mut self) -> Option<&mut SpawnController> {
        match &mut self.behavior {
            ZoneBehavior::Enemy(spawner) => Some(spawner),
            ZoneBehavior::Plain | ZoneBehavior::Camera(_) => None,
        }
    }

    /// Whether an entity roaming this zone may stand at `position` (grid
    /// units).
    ///
    /// Only restrained enemy zones forbid anything; the movement system asks
    /// before moving a [`SpawnedEnemy`](super::SpawnedEnemy).
    pub fn allows_position(&self, position: Vec2) -> bool {
        match &self.behavior {
            ZoneBehavior::Enemy(spawner) if spawner.is_roaming_restrained() => {
                self.zone.contains_point(position)
            }
            _ => true,
        }
    }
}

/// Marks the entity whose world position camera zones test: usually the
/// camera or the player avatar. Only one tracker is expected.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
#[require(Transform)]
pub struct ZoneTracker;

/// Sprite entity showing a zone's interaction icon.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ZoneIconSprite {
    /// The zone this icon belongs to
    pub zone: Entity,
}
