//! The print-area gesture state machine.

use std::f64::consts::{PI, TAU};

use tracing::{debug, info, warn};

use printarea_core::constants::{MIN_SCALE_RATIO, ROTATE_HANDLE_OFFSET_PX};
use printarea_core::DataCallback2;
use printarea_geometry::{
    canonicalize, max_allowed_rect, rect_angle, relative_angle, scale_ratio_with_min, scale_rect,
    BoundaryPolygon, Rectangle, Vec2,
};

use crate::handles::{Handles, PrintFeatures};
use crate::mode::{Cursor, TransformMode};
use crate::session::{Gesture, InteractionSession};
use crate::surface::{MapSurface, PointerEvent, PointerEventKind};

/// Completion callback: final rectangle and rotation in degrees.
pub type DoneCallback = DataCallback2<Rectangle, f64>;

/// Tuning for a [`PrintAreaInteraction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionOptions {
    /// Screen distance between the top edge and the rotate handle.
    pub rotate_handle_offset_px: f64,
    /// Lower bound for either scale factor during a Scale gesture.
    pub min_scale_ratio: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_handle_offset_px: ROTATE_HANDLE_OFFSET_PX,
            min_scale_ratio: MIN_SCALE_RATIO,
        }
    }
}

/// Owns the live print rectangle and turns pointer gestures into
/// translate, rotate and scale operations.
///
/// Every gesture runs `Idle → {Translate, Rotate, Scale} → Idle`. The
/// rectangle and its handles are updated on each drag frame; on release the
/// result is fitted into the boundary (if one is set) and reported once
/// through the completion callback.
pub struct PrintAreaInteraction<S: MapSurface> {
    surface: S,
    options: InteractionOptions,
    rectangle: Rectangle,
    handles: Handles,
    /// Clockwise rotation in radians; survives across gestures.
    angle: f64,
    mode: TransformMode,
    boundary: Option<BoundaryPolygon>,
    session: Option<InteractionSession>,
    on_done: Option<DoneCallback>,
}

impl<S: MapSurface> PrintAreaInteraction<S> {
    pub fn new(surface: S, rectangle: Rectangle) -> Self {
        Self::with_options(surface, rectangle, InteractionOptions::default())
    }

    pub fn with_options(surface: S, rectangle: Rectangle, options: InteractionOptions) -> Self {
        let angle = rect_angle(&rectangle);
        let handles = Handles::from_rect(
            &rectangle,
            surface.resolution(),
            angle,
            options.rotate_handle_offset_px,
        );
        Self {
            surface,
            options,
            rectangle,
            handles,
            angle,
            mode: TransformMode::Idle,
            boundary: None,
            session: None,
            on_done: None,
        }
    }

    /// Replaces the rectangle, re-reads its angle and drops any gesture in
    /// progress.
    pub fn set_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangle = rectangle;
        self.angle = rect_angle(&rectangle);
        self.session = None;
        self.mode = TransformMode::Idle;
        self.refresh_handles();
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    pub fn features(&self) -> PrintFeatures {
        PrintFeatures {
            body: self.rectangle,
            handles: self.handles,
        }
    }

    /// Rotation in radians, clockwise from north.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    pub fn cursor(&self) -> Cursor {
        self.mode.cursor()
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    pub fn boundary(&self) -> Option<&BoundaryPolygon> {
        self.boundary.as_ref()
    }

    /// Replaces the boundary. A gesture in progress sees it on release.
    pub fn set_boundary(&mut self, boundary: BoundaryPolygon) {
        debug!(center = %boundary.center(), "boundary replaced");
        self.boundary = Some(boundary);
    }

    pub fn clear_boundary(&mut self) {
        self.boundary = None;
    }

    pub fn set_on_done<F>(&mut self, callback: F)
    where
        F: FnMut(Rectangle, f64) + 'static,
    {
        self.on_done = Some(Box::new(callback));
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface; call [`Self::refresh_handles`] after
    /// changing the view resolution.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Recomputes handle positions from the rectangle, angle and current
    /// view resolution.
    pub fn refresh_handles(&mut self) {
        self.handles = Handles::from_rect(
            &self.rectangle,
            self.surface.resolution(),
            self.angle,
            self.options.rotate_handle_offset_px,
        );
    }

    /// Dispatches a host pointer event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.handle_down(event.pixel, event.coordinate),
            PointerEventKind::Move if event.dragging => self.handle_drag(event.coordinate),
            PointerEventKind::Move => self.handle_move(event.pixel),
            PointerEventKind::Up => self.handle_up(),
        }
    }

    /// Starts a gesture from the handle under `pixel`.
    ///
    /// Returns `false` when nothing was hit so the host can pan the map.
    pub fn handle_down(&mut self, pixel: Vec2, coordinate: Vec2) -> bool {
        let mode = self.classify(pixel);
        self.session = InteractionSession::begin(mode, &self.rectangle, coordinate);

        match &self.session {
            Some(session) => {
                debug!(%mode, point = %coordinate, anchor = ?session.anchor(), "gesture started");
                true
            }
            None => false,
        }
    }

    /// Pointer moved without a button held: only the cursor hint changes.
    pub fn handle_move(&mut self, pixel: Vec2) -> bool {
        if self.session.is_none() {
            self.classify(pixel);
        }
        false
    }

    /// Applies one drag frame of the active gesture.
    pub fn handle_drag(&mut self, coordinate: Vec2) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let start = session.start;

        match &mut session.gesture {
            Gesture::Translate { applied } => {
                let delta = coordinate - start.point;
                self.rectangle.translate(delta - *applied);
                *applied = delta;
            }
            Gesture::Rotate { applied_angle } => {
                let current = relative_angle(coordinate, start.center);
                let delta = current - *applied_angle;
                self.rectangle.rotate_about(start.center, -delta);
                self.angle = normalize_angle(self.angle + delta);
                *applied_angle = current;
            }
            Gesture::Scale { anchor } => {
                let (scale_x, scale_y) = scale_ratio_with_min(
                    start.point,
                    coordinate,
                    self.angle,
                    start.center,
                    start.width,
                    start.height,
                    self.options.min_scale_ratio,
                );
                self.rectangle =
                    scale_rect(&start.coordinates, *anchor, self.angle, scale_x, scale_y);
            }
        }

        self.refresh_handles();
        true
    }

    /// Finishes the active gesture.
    ///
    /// Fits the rectangle into the boundary, restores its corner order,
    /// reports it and returns to idle. A rectangle that cannot be fitted
    /// reverts to its state at press. Never consumes the event.
    pub fn handle_up(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.mode = TransformMode::Idle;

        let current = self.rectangle;
        let changed = current != session.start.coordinates;
        let needs_fit = changed || matches!(session.gesture, Gesture::Scale { .. });

        if let Some(boundary) = self.boundary.filter(|_| needs_fit) {
            match max_allowed_rect(&current, &boundary, session.anchor()) {
                None => {
                    debug!("rectangle left the boundary; reverting");
                    self.revert(&session);
                }
                // Unreachable while the solver starts its result on a corner
                // of `current`.
                Some(solved) => match canonicalize(&solved, &current) {
                    Ok(rect) => self.rectangle = rect,
                    Err(err) => {
                        warn!(error = %err, "could not restore corner order; reverting");
                        self.revert(&session);
                    }
                },
            }
        }

        self.refresh_handles();

        let degrees = self.angle_degrees();
        info!(
            mode = %session.mode(),
            rectangle = ?self.rectangle.to_array(),
            degrees,
            "gesture complete"
        );
        if let Some(on_done) = self.on_done.as_mut() {
            on_done(self.rectangle, degrees);
        }

        false
    }

    fn revert(&mut self, session: &InteractionSession) {
        self.rectangle = session.start.coordinates;
        self.angle = rect_angle(&self.rectangle);
    }

    fn classify(&mut self, pixel: Vec2) -> TransformMode {
        let hit = self.surface.hit_test(pixel, &self.features());
        let mode = TransformMode::from_hit(hit);
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "mode changed");
        }
        self.mode = mode;
        self.surface.set_cursor(mode.cursor());
        mode
    }
}

/// Wraps an angle into `(-π, π]`.
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
