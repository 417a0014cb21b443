//! Shared fixtures for the interaction tests.

use printarea_core::{shared, Shared};
use printarea_geometry::{Rectangle, Vec2};
use printarea_interaction::{Cursor, HandleKind, MapSurface, PrintAreaInteraction, PrintFeatures};

pub const EPS: f64 = 1e-9;

/// Surface whose hit test returns whatever the test scripted.
pub struct ScriptedSurface {
    pub hit: Option<HandleKind>,
    pub resolution: f64,
    pub cursors: Vec<Cursor>,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self {
            hit: None,
            resolution: 1.0,
            cursors: Vec::new(),
        }
    }
}

impl MapSurface for ScriptedSurface {
    fn hit_test(&self, _pixel: Vec2, _features: &PrintFeatures) -> Option<HandleKind> {
        self.hit
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursors.push(cursor);
    }
}

pub type Completions = Shared<Vec<(Rectangle, f64)>>;

pub fn machine(rect: Rectangle) -> (PrintAreaInteraction<ScriptedSurface>, Completions) {
    let mut machine = PrintAreaInteraction::new(ScriptedSurface::new(), rect);
    let completions: Completions = shared(Vec::new());
    let sink = completions.clone();
    machine.set_on_done(move |rect, degrees| sink.borrow_mut().push((rect, degrees)));
    (machine, completions)
}

/// Runs a full press, drag, release gesture on `hit`.
///
/// Returns whether the press was consumed.
pub fn gesture(
    machine: &mut PrintAreaInteraction<ScriptedSurface>,
    hit: HandleKind,
    press: Vec2,
    drags: &[Vec2],
) -> bool {
    machine.surface_mut().hit = Some(hit);
    let consumed = machine.handle_down(Vec2::ZERO, press);
    for &point in drags {
        assert!(machine.handle_drag(point));
    }
    assert!(!machine.handle_up());
    consumed
}
