//! Transform modes and cursor hints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::handles::HandleKind;

/// The gesture kind selected by the handle under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    Idle,
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    /// Body translates, the rotate handle rotates, a corner scales; nothing
    /// under the pointer leaves the machine idle.
    pub fn from_hit(hit: Option<HandleKind>) -> Self {
        match hit {
            None => TransformMode::Idle,
            Some(HandleKind::Body) => TransformMode::Translate,
            Some(HandleKind::Rotate) => TransformMode::Rotate,
            Some(HandleKind::ScaleCorner(_)) => TransformMode::Scale,
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            TransformMode::Idle => Cursor::Default,
            TransformMode::Translate => Cursor::Move,
            TransformMode::Rotate => Cursor::Rotate,
            TransformMode::Scale => Cursor::Pointer,
        }
    }

    pub fn is_idle(self) -> bool {
        matches!(self, TransformMode::Idle)
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Translate => write!(f, "translate"),
            Self::Rotate => write!(f, "rotate"),
            Self::Scale => write!(f, "scale"),
        }
    }
}

/// Cursor affordance the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Move,
    Rotate,
    Pointer,
}

impl fmt::Display for Cursor {
    /// CSS cursor name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Move => write!(f, "move"),
            Self::Rotate => write!(f, "grab"),
            Self::Pointer => write!(f, "pointer"),
        }
    }
}
