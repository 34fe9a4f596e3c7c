//! Error types for zone construction and enemy bookkeeping.
//!
//! None of these are fatal: the operation that detects them logs a warning,
//! leaves its state untouched and returns the error so callers can react.

use thiserror::Error;

/// Non-fatal zone errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The section is empty or inverted (`left >= right` or `top >= bottom`).
    #[error("invalid zone section (left {left}, right {right}, top {top}, bottom {bottom})")]
    InvalidSection {
        left: u16,
        right: u16,
        top: u16,
        bottom: u16,
    },

    /// The spawn section is not fully inside any section of the roam zone.
    #[error(
        "spawn section (left {left}, right {right}, top {top}, bottom {bottom}) is not enclosed by the roam zone"
    )]
    SpawnSectionNotEnclosed {
        left: u16,
        right: u16,
        top: u16,
        bottom: u16,
    },

    /// A death was reported for a roster slot that is not alive.
    #[error("enemy slot {0} is not alive")]
    SlotNotAlive(usize),

    /// A roster slot index is out of range.
    #[error("enemy slot {0} does not exist")]
    UnknownSlot(usize),

    /// A zone definition produced no valid section.
    #[error("zone '{0}' has no valid section")]
    EmptyZone(String),
}
