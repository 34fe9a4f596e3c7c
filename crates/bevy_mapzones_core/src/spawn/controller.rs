//! Enemy population control for a roam zone.

use core::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use super::roster::{EnemyTemplate, RosterSlot, SlotState};
use crate::error::ZoneError;
use crate::geometry::{Zone, ZoneSection};

/// Number of `spawns_left` meaning "no limit".
pub const UNLIMITED_SPAWNS: i32 = -1;

/// Candidate positions tried per spawn before giving up until the next tick.
pub const DEFAULT_MAX_SPAWN_ATTEMPTS: u32 = 50;

/// Decision made by [`SpawnController::update`]: spawn `template` at
/// `position` (collision grid units) to fill roster `slot`.
///
/// The slot is counted as alive from the moment the request is returned. The
/// caller creates the entity and reports it with
/// [`SpawnController::bind_enemy`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct SpawnRequest {
    pub slot: usize,
    pub template: EnemyTemplate,
    pub position: Vec2,
}

/// Spawns enemies inside a roam zone and respawns them after they die.
///
/// The controller owns its roster and timers but never the enemy entities:
/// it hands out [`SpawnRequest`]s and is told about deaths through
/// [`SpawnController::enemy_dead`].
///
/// # Population cycle
///
/// Every tick while enabled, with spawns left and a free slot:
/// 1. the dead timer must have run out (it starts on each death),
/// 2. the spawn timer advances; once finished the first free slot in roster
///    order is filled at a random position and the spawn timer restarts.
///
/// When a separate spawn zone is set, positions are sampled from it only.
/// Every spawn section is enclosed by a roam section, so spawned enemies can
/// always roam.
#[derive(Debug, Clone, Reflect)]
pub struct SpawnController {
    enabled: bool,
    roaming_restrained: bool,
    spawns_left: i32,
    max_spawn_attempts: u32,
    spawn_timer: Timer,
    dead_timer: Timer,
    spawn_zone: Option<Zone>,
    roster: Vec<RosterSlot>,
}

impl SpawnController {
    /// An enabled, restrained controller with unlimited spawns and an empty
    /// roster. The spawn timer starts running immediately.
    pub fn new(spawn_time: Duration, dead_time: Duration) -> Self {
        Self {
            enabled: true,
            roaming_restrained: true,
            spawns_left: UNLIMITED_SPAWNS,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
            spawn_timer: Timer::new(spawn_time, TimerMode::Once),
            dead_timer: finished_timer(dead_time),
            spawn_zone: None,
            roster: Vec::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_roaming_restrained(&mut self, restrained: bool) {
        self.roaming_restrained = restrained;
    }

    pub fn is_roaming_restrained(&self) -> bool {
        self.roaming_restrained
    }

    /// Change the spawn cadence. Resets and restarts the spawn timer.
    pub fn set_spawn_time(&mut self, spawn_time: Duration) {
        self.spawn_timer.set_duration(spawn_time);
        self.spawn_timer.reset();
    }

    pub fn spawn_time(&self) -> Duration {
        self.spawn_timer.duration()
    }

    /// Change the delay between a death and the next possible spawn.
    pub fn set_dead_time(&mut self, dead_time: Duration) {
        self.dead_timer.set_duration(dead_time);
    }

    pub fn dead_time(&self) -> Duration {
        self.dead_timer.duration()
    }

    /// Limit how many more times enemies may spawn; [`UNLIMITED_SPAWNS`]
    /// removes the limit and 0 stops spawning for good.
    pub fn set_spawns_left(&mut self, spawns: i32) {
        self.spawns_left = spawns;
    }

    pub fn spawns_left(&self) -> i32 {
        self.spawns_left
    }

    /// Consume one spawn. Unlimited and exhausted counters are unchanged.
    pub fn decrease_spawns_left(&mut self) {
        if self.spawns_left > 0 {
            self.spawns_left -= 1;
        }
    }

    pub fn set_max_spawn_attempts(&mut self, attempts: u32) {
        self.max_spawn_attempts = attempts.max(1);
    }

    /// Append `count` slots for `template`. Nothing spawns until the next
    /// updates decide to.
    pub fn add_enemy(&mut self, template: impl Into<EnemyTemplate>, count: u8) {
        let template = template.into();
        if count == 0 {
            debug!("Ignoring zero-count roster entry for '{}'", template);
            return;
        }
        self.roster.extend((0..count).map(|_| RosterSlot::new(template.clone())));
    }

    /// Add a section where enemies may spawn.
    ///
    /// The section must be well formed and fully enclosed by one section of
    /// `roam`; otherwise a warning is logged and nothing changes. The first
    /// accepted section creates the separate spawn zone, after which enemies
    /// never spawn outside it.
    pub fn add_spawn_section(
        &mut self,
        roam: &Zone,
        left_col: u16,
        right_col: u16,
        top_row: u16,
        bottom_row: u16,
    ) -> Result<(), ZoneError> {
        let section = ZoneSection::new(left_col, right_col, top_row, bottom_row);
        if section.is_well_formed() && !roam.encloses_section(&section) {
            warn!(
                "Rejected spawn section ({}, {}, {}, {}): not enclosed by any roam section",
                left_col, right_col, top_row, bottom_row
            );
            return Err(ZoneError::SpawnSectionNotEnclosed {
                left: left_col,
                right: right_col,
                top: top_row,
                bottom: bottom_row,
            });
        }

        match &mut self.spawn_zone {
            Some(spawn_zone) => spawn_zone.add_section(left_col, right_col, top_row, bottom_row),
            None => {
                let mut spawn_zone = Zone::default();
                spawn_zone.add_section(left_col, right_col, top_row, bottom_row)?;
                self.spawn_zone = Some(spawn_zone);
                Ok(())
            }
        }
    }

    pub fn has_separate_spawn_zone(&self) -> bool {
        self.spawn_zone.is_some()
    }

    pub fn spawn_zone(&self) -> Option<&Zone> {
        self.spawn_zone.as_ref()
    }

    pub fn roster(&self) -> &[RosterSlot] {
        &self.roster
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.roster.len()
    }

    /// Number of slots currently filled by a live enemy.
    pub fn active_count(&self) -> usize {
        self.roster.iter().filter(|slot| slot.is_alive()).count()
    }

    /// Templates in roster order with their replication counts.
    pub fn roster_counts(&self) -> Vec<(EnemyTemplate, usize)> {
        let mut counts: Vec<(EnemyTemplate, usize)> = Vec::new();
        for slot in &self.roster {
            match counts.iter_mut().find(|(template, _)| *template == slot.template) {
                Some((_, count)) => *count += 1,
                None => counts.push((slot.template.clone(), 1)),
            }
        }
        counts
    }

    /// Live enemies with their slot index.
    pub fn live_enemies(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.entity().map(|entity| (index, entity)))
    }

    /// The live entity filling `slot`, if any.
    pub fn enemy_entity(&self, slot: usize) -> Option<Entity> {
        self.roster.get(slot).and_then(RosterSlot::entity)
    }

    /// Advance the timers and maybe decide on one spawn.
    ///
    /// `is_free` lets the caller veto candidate positions (e.g. occupied
    /// cells). Candidates must also lie in `roam` and, when present, in the
    /// spawn zone. If no candidate is accepted within the attempt budget the
    /// spawn is retried on the next tick.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        roam: &Zone,
        delta: Duration,
        rng: &mut R,
        mut is_free: impl FnMut(Vec2) -> bool,
    ) -> Option<SpawnRequest> {
        if !self.enabled || self.spawns_left == 0 || self.roster.is_empty() {
            return None;
        }
        if self.active_count() >= self.capacity() {
            return None;
        }

        self.dead_timer.tick(delta);
        if !self.dead_timer.is_finished() {
            return None;
        }

        self.spawn_timer.tick(delta);
        if !self.spawn_timer.is_finished() {
            return None;
        }

        let slot = self.roster.iter().position(|slot| !slot.is_alive())?;
        let source = self.spawn_zone.as_ref().unwrap_or(roam);

        let position = (0..self.max_spawn_attempts)
            .filter_map(|_| source.random_position(rng))
            .find(|&candidate| {
                roam.contains_point(candidate)
                    && self
                        .spawn_zone
                        .as_ref()
                        .is_none_or(|spawn_zone| spawn_zone.contains_point(candidate))
                    && is_free(candidate)
            });

        let Some(position) = position else {
            warn!(
                "No free spawn position found after {} attempts, retrying next tick",
                self.max_spawn_attempts
            );
            return None;
        };

        self.roster[slot].state = SlotState::Alive(Entity::PLACEHOLDER);
        self.spawn_timer.reset();

        Some(SpawnRequest {
            slot,
            template: self.roster[slot].template.clone(),
            position,
        })
    }

    /// Record the entity created for a spawn request.
    pub fn bind_enemy(&mut self, slot: usize, entity: Entity) -> Result<(), ZoneError> {
        let roster_slot = self.roster.get_mut(slot).ok_or(ZoneError::UnknownSlot(slot))?;
        if !roster_slot.is_alive() {
            return Err(ZoneError::SlotNotAlive(slot));
        }
        roster_slot.state = SlotState::Alive(entity);
        Ok(())
    }

    /// Report the death of the enemy filling `slot`.
    ///
    /// Frees the slot and consumes one spawn. When spawns run out the zone
    /// stops spawning for good; otherwise the dead timer restarts and delays
    /// the next spawn.
    pub fn enemy_dead(&mut self, slot: usize) -> Result<(), ZoneError> {
        let Some(roster_slot) = self.roster.get_mut(slot) else {
            warn!("Enemy death reported for unknown slot {}", slot);
            return Err(ZoneError::UnknownSlot(slot));
        };
        if !roster_slot.is_alive() {
            warn!("Enemy death reported for slot {} which has no live enemy", slot);
            return Err(ZoneError::SlotNotAlive(slot));
        }

        roster_slot.state = SlotState::Dead;
        self.decrease_spawns_left();

        if self.spawns_left != 0 {
            self.dead_timer.reset();
        }
        Ok(())
    }

    /// Treat live enemies whose entity no longer exists as dead.
    ///
    /// Returns how many slots were released.
    pub fn release_vanished(&mut self, mut exists: impl FnMut(Entity) -> bool) -> usize {
        let vanished: Vec<usize> = self
            .live_enemies()
            .filter(|&(_, entity)| entity != Entity::PLACEHOLDER && !exists(entity))
            .map(|(slot, _)| slot)
            .collect();

        for &slot in &vanished {
            debug!("Enemy in slot {} despawned without a death report", slot);
            // The slot was just checked to be alive.
            let _ = self.enemy_dead(slot);
        }
        vanished.len()
    }
}

/// A one-shot timer that has already run out.
fn finished_timer(duration: Duration) -> Timer {
    let mut timer = Timer::new(duration, TimerMode::Once);
    timer.tick(duration);
    timer
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn spawn_time() -> Duration {
        TICK * 5
    }

    fn controller_with(count: u8) -> SpawnController {
        let mut controller = SpawnController::new(spawn_time(), TICK * 20);
        controller.add_enemy("slime", count);
        controller
    }

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    /// Run `ticks` updates, binding every request to the next entity.
    fn run(
        controller: &mut SpawnController,
        roam: &Zone,
        rng: &mut ChaCha8Rng,
        ticks: usize,
        pool: &mut impl Iterator<Item = Entity>,
    ) -> Vec<SpawnRequest> {
        let mut requests = Vec::new();
        for _ in 0..ticks {
            if let Some(request) = controller.update(roam, TICK, rng, |_| true) {
                let entity = pool.next().unwrap();
                controller.bind_enemy(request.slot, entity).unwrap();
                requests.push(request);
            }
        }
        requests
    }

    #[test]
    fn test_fills_capacity_then_stops() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = controller_with(3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut pool = entities(10).into_iter();

        let requests = run(&mut controller, &roam, &mut rng, 15, &mut pool);
        assert_eq!(requests.len(), 3);
        assert_eq!(controller.active_count(), 3);

        let later = run(&mut controller, &roam, &mut rng, 100, &mut pool);
        assert!(later.is_empty());
        assert_eq!(controller.active_count(), 3);
    }

    #[test]
    fn test_spawns_follow_spawn_timer() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = controller_with(3);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let mut spawn_ticks = Vec::new();
        for tick in 1..=20 {
            if let Some(request) = controller.update(&roam, TICK, &mut rng, |_| true) {
                spawn_ticks.push(tick);
                controller.bind_enemy(request.slot, Entity::PLACEHOLDER).unwrap();
            }
        }
        assert_eq!(spawn_ticks, vec![5, 10, 15]);
    }

    #[test]
    fn test_slots_fill_in_roster_order() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = SpawnController::new(TICK, TICK);
        controller.add_enemy("slime", 2);
        controller.add_enemy("bat", 1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut pool = entities(3).into_iter();

        let requests = run(&mut controller, &roam, &mut rng, 3, &mut pool);
        let templates: Vec<&str> = requests.iter().map(|r| r.template.name()).collect();
        assert_eq!(templates, vec!["slime", "slime", "bat"]);
        assert_eq!(
            controller.roster_counts(),
            vec![(EnemyTemplate::from("slime"), 2), (EnemyTemplate::from("bat"), 1)]
        );
    }

    #[test]
    fn test_last_spawn_is_never_refilled() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = controller_with(1);
        controller.set_spawns_left(1);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut pool = entities(5).into_iter();

        let requests = run(&mut controller, &roam, &mut rng, 5, &mut pool);
        assert_eq!(requests.len(), 1);

        controller.enemy_dead(requests[0].slot).unwrap();
        assert_eq!(controller.spawns_left(), 0);
        assert_eq!(controller.active_count(), 0);

        let later = run(&mut controller, &roam, &mut rng, 1000, &mut pool);
        assert!(later.is_empty());
        assert_eq!(controller.active_count(), 0);
    }

    #[test]
    fn test_dead_timer_delays_respawn() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = SpawnController::new(TICK * 2, TICK * 10);
        controller.add_enemy("slime", 1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let first = controller.update(&roam, TICK, &mut rng, |_| true);
        assert!(first.is_none());
        let first = controller.update(&roam, TICK, &mut rng, |_| true).unwrap();
        controller.enemy_dead(first.slot).unwrap();
        assert_eq!(controller.spawns_left(), UNLIMITED_SPAWNS);

        // The spawn timer starts counting on the tick the dead timer runs out.
        let mut respawn_tick = None;
        for tick in 1..=20 {
            if controller.update(&roam, TICK, &mut rng, |_| true).is_some() {
                respawn_tick = Some(tick);
                break;
            }
        }
        assert_eq!(respawn_tick, Some(11));
    }

    #[test]
    fn test_disabled_controller_keeps_state() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = controller_with(2);
        controller.set_enabled(false);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut pool = entities(2).into_iter();

        assert!(run(&mut controller, &roam, &mut rng, 50, &mut pool).is_empty());

        controller.set_enabled(true);
        let requests = run(&mut controller, &roam, &mut rng, 5, &mut pool);
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_spawn_section_must_be_enclosed() {
        let strip = Zone::new(0, 10, 0, 1);
        let mut controller = controller_with(1);

        let result = controller.add_spawn_section(&strip, 2, 3, 2, 3);
        assert!(matches!(result, Err(ZoneError::SpawnSectionNotEnclosed { .. })));
        assert!(!controller.has_separate_spawn_zone());

        let malformed = controller.add_spawn_section(&strip, 3, 3, 0, 1);
        assert!(matches!(malformed, Err(ZoneError::InvalidSection { .. })));
        assert!(!controller.has_separate_spawn_zone());
    }

    #[test]
    fn test_spawns_stay_in_spawn_zone() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = SpawnController::new(Duration::ZERO, Duration::ZERO);
        controller.add_enemy("slime", 1);
        controller.add_spawn_section(&roam, 2, 3, 2, 3).unwrap();
        assert!(controller.has_separate_spawn_zone());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let request = controller.update(&roam, TICK, &mut rng, |_| true).unwrap();
            assert!((2.0..=3.0).contains(&request.position.x));
            assert!((2.0..=3.0).contains(&request.position.y));
            controller.bind_enemy(request.slot, Entity::PLACEHOLDER).unwrap();
            controller.enemy_dead(request.slot).unwrap();
        }
    }

    #[test]
    fn test_spawn_positions_respect_is_free() {
        let roam = Zone::new(0, 1, 0, 1);
        let mut controller = SpawnController::new(Duration::ZERO, Duration::ZERO);
        controller.add_enemy("slime", 1);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let blocked = Vec2::new(0.0, 0.0);
        for _ in 0..50 {
            let request = controller
                .update(&roam, TICK, &mut rng, |p| p != blocked)
                .unwrap();
            assert_ne!(request.position, blocked);
            controller.bind_enemy(request.slot, Entity::PLACEHOLDER).unwrap();
            controller.enemy_dead(request.slot).unwrap();
        }
    }

    #[test]
    fn test_no_free_position_retries_next_tick() {
        let roam = Zone::new(0, 1, 0, 1);
        let mut controller = SpawnController::new(Duration::ZERO, Duration::ZERO);
        controller.add_enemy("slime", 1);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        assert!(controller.update(&roam, TICK, &mut rng, |_| false).is_none());
        assert_eq!(controller.active_count(), 0);
        assert!(controller.update(&roam, TICK, &mut rng, |_| true).is_some());
    }

    #[test]
    fn test_bad_death_reports_are_ignored() {
        let mut controller = controller_with(1);
        assert_eq!(controller.enemy_dead(0), Err(ZoneError::SlotNotAlive(0)));
        assert_eq!(controller.enemy_dead(4), Err(ZoneError::UnknownSlot(4)));
        assert_eq!(controller.active_count(), 0);
        assert_eq!(controller.spawns_left(), UNLIMITED_SPAWNS);
    }

    #[test]
    fn test_release_vanished() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = SpawnController::new(Duration::ZERO, Duration::ZERO);
        controller.add_enemy("slime", 2);
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let ids = entities(2);
        let mut pool = ids.clone().into_iter();

        run(&mut controller, &roam, &mut rng, 2, &mut pool);
        assert_eq!(controller.active_count(), 2);

        let released = controller.release_vanished(|entity| entity == ids[1]);
        assert_eq!(released, 1);
        assert_eq!(controller.active_count(), 1);
        assert_eq!(controller.enemy_entity(1), Some(ids[1]));
        assert_eq!(controller.enemy_entity(0), None);
    }

    #[test]
    fn test_add_enemy_zero_count() {
        let mut controller = controller_with(0);
        assert_eq!(controller.capacity(), 0);
        controller.add_enemy(EnemyTemplate::new("bat"), 2);
        assert_eq!(controller.capacity(), 2);
    }

    #[test]
    fn test_set_spawn_time_restarts_countdown() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = controller_with(1);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..3 {
            assert!(controller.update(&roam, TICK, &mut rng, |_| true).is_none());
        }
        controller.set_spawn_time(TICK * 2);
        assert_eq!(controller.spawn_time(), TICK * 2);

        // The three ticks already counted do not carry over.
        assert!(controller.update(&roam, TICK, &mut rng, |_| true).is_none());
        assert!(controller.update(&roam, TICK, &mut rng, |_| true).is_some());
    }

    #[test]
    fn test_set_dead_time_applies_to_next_death() {
        let roam = Zone::new(0, 10, 0, 10);
        let mut controller = SpawnController::new(TICK, TICK * 10);
        controller.add_enemy("slime", 1);
        controller.set_dead_time(TICK * 3);
        assert_eq!(controller.dead_time(), TICK * 3);
        let mut rng = ChaCha8Rng::seed_from_u64(12);

        let first = controller.update(&roam, TICK, &mut rng, |_| true).unwrap();
        controller.bind_enemy(first.slot, Entity::PLACEHOLDER).unwrap();
        controller.enemy_dead(first.slot).unwrap();

        let respawn_tick = (1..=20)
            .find(|_| controller.update(&roam, TICK, &mut rng, |_| true).is_some());
        assert_eq!(respawn_tick, Some(3));
    }

    #[test]
    fn test_decrease_spawns_left_stops_at_zero() {
        let mut controller = controller_with(1);
        controller.decrease_spawns_left();
        assert_eq!(controller.spawns_left(), UNLIMITED_SPAWNS);

        controller.set_spawns_left(2);
        controller.decrease_spawns_left();
        assert_eq!(controller.spawns_left(), 1);
        controller.decrease_spawns_left();
        assert_eq!(controller.spawns_left(), 0);
        controller.decrease_spawns_left();
        assert_eq!(controller.spawns_left(), 0);
    }
}
