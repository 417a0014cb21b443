//! Per-gesture state.
//!
//! A session exists from press to release. Only the machine's angle outlives
//! it.

use printarea_geometry::{relative_angle, Rectangle, Vec2};

use crate::mode::TransformMode;

/// Rectangle metrics captured on press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStart {
    pub coordinates: Rectangle,
    pub width: f64,
    pub height: f64,
    pub center: Vec2,
    /// Press position in map coordinates.
    pub point: Vec2,
}

impl GestureStart {
    pub fn capture(rect: &Rectangle, point: Vec2) -> Self {
        Self {
            coordinates: *rect,
            width: rect.width(),
            height: rect.height(),
            center: rect.center(),
            point,
        }
    }
}

/// Mode-specific gesture progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Cumulative translation already applied to the rectangle.
    Translate { applied: Vec2 },
    /// Pointer angle around the start centre at the last applied frame.
    Rotate { applied_angle: f64 },
    /// Fixed corner opposite the dragged one.
    Scale { anchor: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    pub start: GestureStart,
    pub gesture: Gesture,
}

impl InteractionSession {
    /// Starts a session for `mode`, or `None` when the mode is idle.
    pub fn begin(mode: TransformMode, rect: &Rectangle, point: Vec2) -> Option<Self> {
        let start = GestureStart::capture(rect, point);
        let gesture = match mode {
            TransformMode::Idle => return None,
            TransformMode::Translate => Gesture::Translate {
                applied: Vec2::ZERO,
            },
            TransformMode::Rotate => Gesture::Rotate {
                applied_angle: relative_angle(point, start.center),
            },
            TransformMode::Scale => Gesture::Scale {
                anchor: point.rotate_about(start.center, std::f64::consts::PI),
            },
        };
        Some(Self { start, gesture })
    }

    pub fn mode(&self) -> TransformMode {
        match self.gesture {
            Gesture::Translate { .. } => TransformMode::Translate,
            Gesture::Rotate { .. } => TransformMode::Rotate,
            Gesture::Scale { .. } => TransformMode::Scale,
        }
    }

    /// The scale anchor, used as the solver's anchor hint on release.
    pub fn anchor(&self) -> Option<Vec2> {
        match self.gesture {
            Gesture::Scale { anchor } => Some(anchor),
            Gesture::Translate { .. } | Gesture::Rotate { .. } => None,
        }
    }
}
