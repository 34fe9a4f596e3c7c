//! Enemy spawning: roster and the spawn controller.

pub mod controller;
pub mod roster;

pub use controller::{DEFAULT_MAX_SPAWN_ATTEMPTS, SpawnController, SpawnRequest, UNLIMITED_SPAWNS};
pub use roster::{EnemyTemplate, RosterSlot, SlotState};
