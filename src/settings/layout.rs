//! Placement of cell highlight sprites

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cell::CellBoundaries;

/// Geometry used to place a cell highlight relative to its editor entity
///
/// The editor's origin is its top-left corner; rows grow downwards.
#[derive(Clone, Debug, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct CellHighlightLayout {
    /// Line height in pixels
    pub line_height: f32,

    /// Top margin (pixels) before the first line
    pub margin_top: f32,

    /// Left margin (pixels) before the highlight starts
    pub margin_left: f32,

    /// Highlight width in pixels (whole-line highlights span the text area)
    pub width: f32,

    /// Z-index for rendering, behind the text
    pub z_index: f32,
}

impl Default for CellHighlightLayout {
    fn default() -> Self {
        let font_size = 14.0;
        Self {
            line_height: font_size * 1.5,
            margin_top: 10.0,
            margin_left: 10.0,
            width: 1200.0,
            z_index: 0.2,
        }
    }
}

impl CellHighlightLayout {
    /// Size of the sprite covering `cell`
    pub fn size(&self, cell: &CellBoundaries) -> Vec2 {
        Vec2::new(self.width, cell.line_count() as f32 * self.line_height)
    }

    /// Center of the sprite covering `cell`, in the editor's local space
    pub fn translation(&self, cell: &CellBoundaries) -> Vec3 {
        let size = self.size(cell);
        let top = self.margin_top + cell.start_line as f32 * self.line_height;
        Vec3::new(
            self.margin_left + size.x / 2.0,
            -(top + size.y / 2.0),
            self.z_index,
        )
    }
}
