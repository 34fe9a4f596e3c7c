//! Camera presence tracking for camera zones.

use bevy::prelude::*;

/// Inside/outside state of the tracked camera target relative to one zone.
///
/// Updated once per tick with the result of the zone containment test. Edge
/// flags compare the current tick against the previous one, so `entering` and
/// `exiting` each hold for exactly one tick per transition.
///
/// Both flags start out `false`: a target that starts outside produces no
/// transition on the first update.
///
/// # Example
///
/// ```rust
/// use bevy_mapzones_core::camera::CameraPresence;
///
/// let mut presence = CameraPresence::default();
/// presence.update(false);
/// presence.update(true);
/// assert!(presence.is_entering());
/// presence.update(true);
/// assert!(!presence.is_entering());
/// assert!(presence.is_inside());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct CameraPresence {
    inside: bool,
    was_inside: bool,
}

impl CameraPresence {
    /// Record this tick's containment result.
    pub fn update(&mut self, inside_now: bool) {
        self.was_inside = self.inside;
        self.inside = inside_now;
    }

    /// The camera target is inside the zone this tick.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// The camera target was inside the zone on the previous tick.
    pub fn was_inside(&self) -> bool {
        self.was_inside
    }

    /// The camera target crossed into the zone on this tick.
    pub fn is_entering(&self) -> bool {
        self.inside && !self.was_inside
    }

    /// The camera target left the zone on this tick.
    pub fn is_exiting(&self) -> bool {
        !self.inside && self.was_inside
    }
}
