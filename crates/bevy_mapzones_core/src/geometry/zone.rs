//! Zones: arbitrary areas built from rectangular sections.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use super::section::ZoneSection;
use crate::error::ZoneError;

/// An area of the map made of one or more [`ZoneSection`]s.
///
/// Sections may overlap. The section order is preserved so random sampling is
/// reproducible for a given RNG seed.
///
/// # Coordinates
///
/// Zones work in collision grid units. Fractional positions are truncated to
/// their cell before testing, so `5.9` falls in column `5`.
///
/// # Example
///
/// ```rust
/// use bevy_mapzones_core::geometry::Zone;
///
/// let mut zone = Zone::new(0, 4, 0, 4);
/// zone.add_section(4, 10, 2, 3).unwrap();
///
/// assert!(zone.is_inside(9.5, 2.0));
/// assert!(!zone.is_inside(9.5, 4.0));
/// ```
#[derive(Debug, Clone, Default, Reflect)]
pub struct Zone {
    sections: Vec<ZoneSection>,
    interaction_icon: Option<Handle<Image>>,
}

impl Zone {
    /// Create a zone seeded with one section.
    ///
    /// The section goes through [`Zone::add_section`], so a malformed one
    /// leaves the zone empty and logs a warning.
    pub fn new(left_col: u16, right_col: u16, top_row: u16, bottom_row: u16) -> Self {
        let mut zone = Self::default();
        // Rejection is already reported by add_section.
        let _ = zone.add_section(left_col, right_col, top_row, bottom_row);
        zone
    }

    /// Append a section.
    ///
    /// Sections with `left_col >= right_col` or `top_row >= bottom_row` are
    /// rejected: a warning is logged and the zone is left unchanged.
    pub fn add_section(
        &mut self,
        left_col: u16,
        right_col: u16,
        top_row: u16,
        bottom_row: u16,
    ) -> Result<(), ZoneError> {
        let section = ZoneSection::new(left_col, right_col, top_row, bottom_row);
        if !section.is_well_formed() {
            warn!(
                "Rejected zone section: left {} must be < right {} and top {} must be < bottom {}",
                left_col, right_col, top_row, bottom_row
            );
            return Err(ZoneError::InvalidSection {
                left: left_col,
                right: right_col,
                top: top_row,
                bottom: bottom_row,
            });
        }

        self.sections.push(section);
        Ok(())
    }

    pub fn sections(&self) -> &[ZoneSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether the cell containing `(pos_x, pos_y)` belongs to any section.
    ///
    /// Coordinates are truncated, not rounded. Negative, non-finite or
    /// out-of-grid coordinates are never inside.
    pub fn is_inside(&self, pos_x: f32, pos_y: f32) -> bool {
        let (Some(col), Some(row)) = (to_cell(pos_x), to_cell(pos_y)) else {
            return false;
        };
        self.contains_cell(col, row)
    }

    /// [`Zone::is_inside`] for a `Vec2`.
    pub fn contains_point(&self, position: Vec2) -> bool {
        self.is_inside(position.x, position.y)
    }

    /// Whether any section contains the cell.
    pub fn contains_cell(&self, col: u16, row: u16) -> bool {
        self.sections.iter().any(|section| section.contains(col, row))
    }

    /// Random cell position inside the zone, as float grid coordinates.
    ///
    /// A section is picked uniformly by index, then a cell uniformly within
    /// it. Small sections therefore get a higher density than large ones;
    /// existing spawn distributions depend on this.
    ///
    /// Returns `None` for an empty zone.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec2> {
        let section = self.sections.choose(rng)?;
        let col = rng.gen_range(section.left_col()..=section.right_col());
        let row = rng.gen_range(section.top_row()..=section.bottom_row());
        Some(Vec2::new(f32::from(col), f32::from(row)))
    }

    /// Whether some section of this zone fully encloses `section`.
    pub fn encloses_section(&self, section: &ZoneSection) -> bool {
        self.sections.iter().any(|own| own.encloses(section))
    }

    /// Smallest section covering the whole zone.
    pub fn bounding_section(&self) -> Option<ZoneSection> {
        let (first, rest) = self.sections.split_first()?;
        Some(rest.iter().fold(*first, |bounds, section| bounds.union(section)))
    }

    pub fn interaction_icon(&self) -> Option<&Handle<Image>> {
        self.interaction_icon.as_ref()
    }

    /// Set the icon drawn above the zone. `None` removes it.
    pub fn set_interaction_icon(&mut self, icon: Option<Handle<Image>>) {
        self.interaction_icon = icon;
    }

    /// Per-tick hook of a plain zone. Plain zones have no state to advance.
    pub fn update(&mut self) {}
}

/// Whether every section of `inner` is enclosed by a section of `outer`.
pub fn encloses(outer: &Zone, inner: &Zone) -> bool {
    inner
        .sections()
        .iter()
        .all(|section| outer.encloses_section(section))
}

fn to_cell(value: f32) -> Option<u16> {
    (0.0..65536.0).contains(&value).then_some(value as u16)
}
