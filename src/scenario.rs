//! Scenario replay.
//!
//! A scenario is a JSON description of an initial rectangle, a boundary, a
//! viewport and a list of steps in map coordinates. Replaying it runs the
//! steps through a [`PrintAreaInteraction`] on a [`ViewportSurface`] and
//! collects every completed gesture.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use printarea_core::shared;
use printarea_geometry::{BoundaryPolygon, Extent, Rectangle, Vec2};
use printarea_interaction::{PointerEvent, PrintAreaInteraction, Viewport, ViewportSurface};
use printarea_settings::InteractionSettings;

/// Where the boundary comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySource {
    /// Four explicit corners.
    Polygon(BoundaryPolygon),
    /// Bounding box of the union of overlay extents.
    Extents(Vec<Extent>),
}

impl BoundarySource {
    pub fn to_polygon(&self) -> Result<BoundaryPolygon> {
        match self {
            BoundarySource::Polygon(polygon) => Ok(*polygon),
            BoundarySource::Extents(extents) => match BoundaryPolygon::from_extents(extents) {
                Some(polygon) => Ok(polygon),
                None => bail!("boundary needs at least one extent"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSetup {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    /// Map coordinate to centre on; the default keeps the origin near the
    /// bottom-left corner.
    pub center: Option<Vec2>,
}

impl Default for ViewportSetup {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            zoom: 1.0,
            center: None,
        }
    }
}

impl ViewportSetup {
    pub fn build(&self) -> Viewport {
        let mut viewport = Viewport::new(self.width, self.height);
        viewport.set_zoom(self.zoom);
        if let Some(center) = self.center {
            viewport.center_on(center);
        }
        viewport
    }
}

/// One replayed step. Pointer positions are map coordinates; pixels are
/// derived from the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Down { at: Vec2 },
    Hover { at: Vec2 },
    Drag { at: Vec2 },
    Up { at: Vec2 },
    SetBoundary { boundary: BoundarySource },
    ClearBoundary,
    Zoom { zoom: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub rectangle: Rectangle,
    #[serde(default)]
    pub boundary: Option<BoundarySource>,
    #[serde(default)]
    pub viewport: ViewportSetup,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in scenario {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("invalid scenario JSON")
    }
}

/// A gesture reported through the completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub rectangle: Rectangle,
    pub degrees: f64,
}

/// Runs `scenario` and returns the completions in order.
pub fn replay(scenario: &Scenario, settings: &InteractionSettings) -> Result<Vec<Completion>> {
    let surface =
        ViewportSurface::with_tolerance(scenario.viewport.build(), settings.hit_tolerance_px);
    let mut machine =
        PrintAreaInteraction::with_options(surface, scenario.rectangle, settings.into());

    if let Some(boundary) = &scenario.boundary {
        machine.set_boundary(boundary.to_polygon()?);
    }

    let completions = shared(Vec::new());
    let sink = completions.clone();
    machine.set_on_done(move |rectangle, degrees| {
        sink.borrow_mut().push(Completion { rectangle, degrees });
    });

    for (index, step) in scenario.steps.iter().enumerate() {
        let consumed = match step {
            ScenarioStep::Down { at } => pointer(&mut machine, PointerEvent::down, *at),
            ScenarioStep::Hover { at } => pointer(&mut machine, PointerEvent::hover, *at),
            ScenarioStep::Drag { at } => pointer(&mut machine, PointerEvent::drag, *at),
            ScenarioStep::Up { at } => pointer(&mut machine, PointerEvent::up, *at),
            ScenarioStep::SetBoundary { boundary } => {
                machine.set_boundary(boundary.to_polygon()?);
                false
            }
            ScenarioStep::ClearBoundary => {
                machine.clear_boundary();
                false
            }
            ScenarioStep::Zoom { zoom } => {
                machine.surface_mut().viewport_mut().set_zoom(*zoom);
                machine.refresh_handles();
                false
            }
        };
        debug!(index, consumed, mode = %machine.mode(), "step replayed");
    }

    let completions = std::mem::take(&mut *completions.borrow_mut());
    info!(count = completions.len(), "scenario replayed");
    Ok(completions)
}

fn pointer(
    machine: &mut PrintAreaInteraction<ViewportSurface>,
    event: fn(Vec2, Vec2) -> PointerEvent,
    at: Vec2,
) -> bool {
    let pixel = machine.surface().viewport().world_to_pixel(at);
    machine.handle_event(&event(pixel, at))
}
