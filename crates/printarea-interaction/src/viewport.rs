//! Viewport and a hit-testing map surface built on it.
//!
//! Converts between pixel coordinates (screen space, origin top-left, Y down)
//! and map coordinates (origin bottom-left, Y up) under a zoom and pan.

use std::fmt;

use printarea_core::constants::HIT_TOLERANCE_PX;
use printarea_geometry::{Corner, Extent, Vec2};

use crate::handles::{HandleKind, PrintFeatures};
use crate::mode::Cursor;
use crate::surface::MapSurface;

const MIN_ZOOM: f64 = 0.001;
const MAX_ZOOM: f64 = 1000.0;

/// Viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport with the map origin near the bottom-left corner.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        const MARGIN: f64 = 5.0; // pixels from edge
        Self {
            zoom: 1.0,
            pan_x: MARGIN,
            pan_y: MARGIN,
            canvas_width,
            canvas_height,
        }
    }

    /// Pixels per map unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Map units per pixel.
    pub fn resolution(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Sets the zoom level; values outside the supported range are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    /// Converts a pixel position to map coordinates.
    ///
    /// ```text
    /// map_x = (pixel_x - pan_x) / zoom
    /// map_y = (canvas_height - pixel_y - pan_y) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.pan_x) / self.zoom,
            (self.canvas_height - pixel.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts map coordinates to a pixel position.
    ///
    /// ```text
    /// pixel_x = map_x * zoom + pan_x
    /// pixel_y = canvas_height - (map_y * zoom + pan_y)
    /// ```
    pub fn world_to_pixel(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            world.x * self.zoom + self.pan_x,
            self.canvas_height - (world.y * self.zoom + self.pan_y),
        )
    }

    /// Fits `extent` into the canvas, reserving `padding` (0.0 - 0.5) of
    /// each dimension, and centres it.
    pub fn fit_to_extent(&mut self, extent: &Extent, padding: f64) {
        if extent.width() <= 0.0 || extent.height() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / extent.width();
        let zoom_y = (self.canvas_height * padding_factor) / extent.height();
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = new_zoom;
        self.center_on(extent.center());
    }

    /// Zooms while keeping `world_point` at the same pixel position.
    pub fn zoom_to_point(&mut self, world_point: Vec2, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }

        let pixel = self.world_to_pixel(world_point);

        // pan_x = pixel_x - map_x * zoom; pan_y = canvas_height - pixel_y - map_y * zoom
        self.zoom = new_zoom;
        self.pan_x = pixel.x - world_point.x * new_zoom;
        self.pan_y = self.canvas_height - pixel.y - world_point.y * new_zoom;
    }

    /// Centres the viewport on a map coordinate.
    pub fn center_on(&mut self, world: Vec2) {
        self.pan_x = self.canvas_width / 2.0 - world.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - world.y * self.zoom;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// A [`MapSurface`] that hit-tests handles geometrically in screen space.
///
/// Point handles are hit within `tolerance_px` pixels; the rotate handle wins
/// over corners and corners win over the body.
#[derive(Debug, Clone)]
pub struct ViewportSurface {
    viewport: Viewport,
    tolerance_px: f64,
    cursor: Cursor,
}

impl ViewportSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_tolerance(viewport, HIT_TOLERANCE_PX)
    }

    pub fn with_tolerance(viewport: Viewport, tolerance_px: f64) -> Self {
        Self {
            viewport,
            tolerance_px,
            cursor: Cursor::Default,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tolerance_px(&self) -> f64 {
        self.tolerance_px
    }

    /// The last cursor the machine asked for.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn near(&self, pixel: Vec2, world: Vec2) -> bool {
        self.viewport.world_to_pixel(world).distance_to(pixel) <= self.tolerance_px
    }
}

impl MapSurface for ViewportSurface {
    fn hit_test(&self, pixel: Vec2, features: &PrintFeatures) -> Option<HandleKind> {
        if self.near(pixel, features.handles.rotate) {
            return Some(HandleKind::Rotate);
        }

        if let Some(corner) = Corner::ALL
            .into_iter()
            .find(|&corner| self.near(pixel, features.handles.scale_corner(corner)))
        {
            return Some(HandleKind::ScaleCorner(corner));
        }

        features
            .body
            .contains_point(self.viewport.pixel_to_world(pixel))
            .then_some(HandleKind::Body)
    }

    fn resolution(&self) -> f64 {
        self.viewport.resolution()
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
