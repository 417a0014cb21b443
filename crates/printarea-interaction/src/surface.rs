//! The host map surface and the pointer events it delivers.

use serde::{Deserialize, Serialize};

use printarea_geometry::Vec2;

use crate::handles::{HandleKind, PrintFeatures};
use crate::mode::Cursor;

/// Capabilities the state machine needs from the map it lives on.
pub trait MapSurface {
    /// The handle drawn under screen position `pixel`, if any.
    fn hit_test(&self, pixel: Vec2, features: &PrintFeatures) -> Option<HandleKind>;

    /// Current view resolution in map units per pixel.
    fn resolution(&self) -> f64;

    /// Shows a cursor affordance.
    fn set_cursor(&mut self, _cursor: Cursor) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Screen position in pixels.
    pub pixel: Vec2,
    /// Map position.
    pub coordinate: Vec2,
    /// Whether a button is held during a move.
    #[serde(default)]
    pub dragging: bool,
}

impl PointerEvent {
    pub fn down(pixel: Vec2, coordinate: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Down,
            pixel,
            coordinate,
            dragging: false,
        }
    }

    pub fn hover(pixel: Vec2, coordinate: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pixel,
            coordinate,
            dragging: false,
        }
    }

    pub fn drag(pixel: Vec2, coordinate: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pixel,
            coordinate,
            dragging: true,
        }
    }

    pub fn up(pixel: Vec2, coordinate: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Up,
            pixel,
            coordinate,
            dragging: false,
        }
    }
}
