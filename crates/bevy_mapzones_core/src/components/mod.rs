//! Components for zone entities, trackers and spawned enemies.

pub mod enemy;
pub mod layout;
pub mod zone;

pub use enemy::SpawnedEnemy;
pub use layout::{ZoneLayout, ZoneOf, ZonesInLayout};
pub use zone::{MapZone, ZoneBehavior, ZoneIconSprite, ZoneTracker};
