//! Handle identities and positions.

use serde::{Deserialize, Serialize};

use printarea_geometry::{rotate_point_from_rect_with_offset, Corner, Rectangle, Vec2};

/// What a pointer can grab on the print rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleKind {
    Body,
    Rotate,
    ScaleCorner(Corner),
}

/// The five grab points derived from the rectangle: one scale handle per
/// corner and the rotate handle above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handles {
    pub scale: [Vec2; 4],
    pub rotate: Vec2,
}

impl Handles {
    /// Places the handles for `rect` at rotation `angle`.
    ///
    /// `resolution` is map units per pixel; the rotate handle keeps
    /// `rotate_offset_px` screen pixels from the top edge.
    pub fn from_rect(rect: &Rectangle, resolution: f64, angle: f64, rotate_offset_px: f64) -> Self {
        Self {
            scale: *rect.corners(),
            rotate: rotate_point_from_rect_with_offset(rect, resolution, Some(angle), rotate_offset_px),
        }
    }

    pub fn scale_corner(&self, corner: Corner) -> Vec2 {
        self.scale[corner.index()]
    }

    /// Position of a point handle; the body has none.
    pub fn position(&self, kind: HandleKind) -> Option<Vec2> {
        match kind {
            HandleKind::Body => None,
            HandleKind::Rotate => Some(self.rotate),
            HandleKind::ScaleCorner(corner) => Some(self.scale_corner(corner)),
        }
    }

    /// All point handles, rotate handle first.
    pub fn iter(&self) -> impl Iterator<Item = (HandleKind, Vec2)> + '_ {
        std::iter::once((HandleKind::Rotate, self.rotate)).chain(
            Corner::ALL
                .iter()
                .map(move |&corner| (HandleKind::ScaleCorner(corner), self.scale_corner(corner))),
        )
    }
}

/// Snapshot of everything the host renders and hit-tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintFeatures {
    pub body: Rectangle,
    pub handles: Handles,
}
