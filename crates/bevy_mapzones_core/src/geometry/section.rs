//! Rectangular collision grid sections.

use bevy::prelude::*;

/// An axis-aligned rectangle of collision grid cells.
///
/// Bounds are inclusive and expressed in collision grid units (not pixels and
/// not fractional map coordinates). A section is a value: once built it never
/// changes. Validation of the bounds is left to [`Zone`](super::Zone), which
/// rejects malformed sections at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct ZoneSection {
    left_col: u16,
    right_col: u16,
    top_row: u16,
    bottom_row: u16,
}

impl ZoneSection {
    /// Store the four bounds verbatim.
    pub const fn new(left_col: u16, right_col: u16, top_row: u16, bottom_row: u16) -> Self {
        Self {
            left_col,
            right_col,
            top_row,
            bottom_row,
        }
    }

    pub const fn left_col(&self) -> u16 {
        self.left_col
    }

    pub const fn right_col(&self) -> u16 {
        self.right_col
    }

    pub const fn top_row(&self) -> u16 {
        self.top_row
    }

    pub const fn bottom_row(&self) -> u16 {
        self.bottom_row
    }

    /// True iff `left <= col <= right` and `top <= row <= bottom`.
    pub const fn contains(&self, col: u16, row: u16) -> bool {
        self.left_col <= col && col <= self.right_col && self.top_row <= row && row <= self.bottom_row
    }

    /// True iff `other` lies entirely within this section.
    pub const fn encloses(&self, other: &ZoneSection) -> bool {
        self.left_col <= other.left_col
            && other.right_col <= self.right_col
            && self.top_row <= other.top_row
            && other.bottom_row <= self.bottom_row
    }

    /// The rule zones apply before accepting a section: strictly increasing
    /// columns and rows.
    pub const fn is_well_formed(&self) -> bool {
        self.left_col < self.right_col && self.top_row < self.bottom_row
    }

    /// Number of columns covered (bounds inclusive).
    pub fn width(&self) -> u32 {
        u32::from(self.right_col.saturating_sub(self.left_col)) + 1
    }

    /// Number of rows covered (bounds inclusive).
    pub fn height(&self) -> u32 {
        u32::from(self.bottom_row.saturating_sub(self.top_row)) + 1
    }

    /// Smallest section covering both `self` and `other`.
    pub fn union(&self, other: &ZoneSection) -> ZoneSection {
        ZoneSection {
            left_col: self.left_col.min(other.left_col),
            right_col: self.right_col.max(other.right_col),
            top_row: self.top_row.min(other.top_row),
            bottom_row: self.bottom_row.max(other.bottom_row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let section = ZoneSection::new(2, 5, 10, 12);
        for col in 0..8u16 {
            for row in 8..15u16 {
                let expected = (2..=5).contains(&col) && (10..=12).contains(&row);
                assert_eq!(section.contains(col, row), expected, "cell ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_encloses() {
        let roam = ZoneSection::new(0, 10, 0, 10);
        assert!(roam.encloses(&ZoneSection::new(2, 3, 2, 3)));
        assert!(roam.encloses(&roam));
        assert!(!roam.encloses(&ZoneSection::new(9, 11, 2, 3)));

        let strip = ZoneSection::new(0, 10, 0, 1);
        assert!(!strip.encloses(&ZoneSection::new(2, 3, 2, 3)));
    }

    #[test]
    fn test_well_formed() {
        assert!(ZoneSection::new(0, 1, 0, 1).is_well_formed());
        assert!(!ZoneSection::new(5, 5, 0, 3).is_well_formed());
        assert!(!ZoneSection::new(0, 3, 4, 2).is_well_formed());
    }

    #[test]
    fn test_size_and_union() {
        let a = ZoneSection::new(0, 3, 0, 1);
        let b = ZoneSection::new(5, 6, 4, 8);
        assert_eq!(a.width(), 4);
        assert_eq!(a.height(), 2);
        assert_eq!(a.union(&b), ZoneSection::new(0, 6, 0, 8));
    }
}
