use core::fmt;

use bevy::prelude::*;

/// Identifies an enemy blueprint.
///
/// The spawner only decides when and where a template appears. Game code
/// reacts to [`EnemySpawned`](crate::events::EnemySpawned) and attaches the
/// sprite, stats and AI matching the template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub struct EnemyTemplate(pub String);

impl EnemyTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EnemyTemplate {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EnemyTemplate {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for EnemyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of one roster slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum SlotState {
    /// Never spawned
    #[default]
    Unspawned,
    /// Spawned and not yet reported dead
    Alive(Entity),
    /// Reported dead, eligible for respawn
    Dead,
}

/// One unit of roster capacity: a template and what currently fills it.
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
pub struct RosterSlot {
    pub template: EnemyTemplate,
    pub state: SlotState,
}

impl RosterSlot {
    pub fn new(template: EnemyTemplate) -> Self {
        Self {
            template,
            state: SlotState::Unspawned,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.state, SlotState::Alive(_))
    }

    /// The live entity filling this slot, if any.
    pub fn entity(&self) -> Option<Entity> {
        match self.state {
            SlotState::Alive(entity) => Some(entity),
            SlotState::Unspawned | SlotState::Dead => None,
        }
    }
}
