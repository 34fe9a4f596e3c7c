//! Conversion between the collision grid and Bevy world space.

use bevy::prelude::*;

use crate::geometry::ZoneSection;

/// Collision grid placement in world space.
///
/// # Coordinate System
///
/// - Grid `(0, 0)` is the top-left corner of the map, rows grow downward
/// - World Y grows upward (standard Bevy convention)
/// - `origin` is the world position of the grid's top-left corner
///
/// Integer grid coordinates name a cell's top-left corner, so `(2.5, 3.5)` is
/// the center of cell `(2, 3)`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ZoneGrid {
    /// Size of one cell in world units
    pub cell_size: Vec2,
    /// World position of grid `(0, 0)`
    pub origin: Vec2,
}

impl Default for ZoneGrid {
    fn default() -> Self {
        Self::new(Vec2::splat(16.0))
    }
}

impl ZoneGrid {
    pub fn new(cell_size: Vec2) -> Self {
        Self {
            cell_size,
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Grid coordinates to a world position.
    pub fn grid_to_world(&self, grid: Vec2) -> Vec2 {
        self.origin + Vec2::new(grid.x * self.cell_size.x, -grid.y * self.cell_size.y)
    }

    /// World position to grid coordinates. The result is fractional; zones
    /// truncate it to a cell.
    pub fn world_to_grid(&self, world: Vec2) -> Vec2 {
        let offset = world - self.origin;
        Vec2::new(offset.x / self.cell_size.x, -offset.y / self.cell_size.y)
    }

    /// World position of the center of the cell containing `grid`.
    pub fn cell_center(&self, grid: Vec2) -> Vec2 {
        self.grid_to_world(grid.floor() + Vec2::splat(0.5))
    }

    /// World-space rectangle covering every cell of `section`.
    pub fn section_rect(&self, section: &ZoneSection) -> Rect {
        let top_left = Vec2::new(f32::from(section.left_col()), f32::from(section.top_row()));
        let bottom_right = Vec2::new(
            f32::from(section.right_col()) + 1.0,
            f32::from(section.bottom_row()) + 1.0,
        );
        Rect::from_corners(self.grid_to_world(top_left), self.grid_to_world(bottom_right))
    }
}
