//! # PrintArea Interaction
//!
//! Drives the print rectangle from low-level pointer gestures.
//!
//! A press classifies the gesture from the handle under the pointer
//! ([`TransformMode`]), drag frames mutate the live rectangle and its
//! [`Handles`], and the release fits the result into the boundary with the
//! solver, restores the corner order and reports it through the completion
//! callback.
//!
//! The host map is injected as a [`MapSurface`]; [`ViewportSurface`] is a
//! ready-made implementation over a zoom/pan [`Viewport`].
//!
//! ```rust
//! use printarea_geometry::{Extent, Rectangle, Vec2};
//! use printarea_interaction::{PointerEvent, PrintAreaInteraction, Viewport, ViewportSurface};
//!
//! let surface = ViewportSurface::new(Viewport::new(800.0, 600.0));
//! let rect = Rectangle::from([[100.0, 200.0], [300.0, 200.0], [300.0, 100.0], [100.0, 100.0]]);
//! let mut machine = PrintAreaInteraction::new(surface, rect);
//! machine.set_boundary(Extent::new(0.0, 0.0, 500.0, 500.0).into());
//!
//! let press = Vec2::new(200.0, 150.0);
//! let pixel = machine.surface().viewport().world_to_pixel(press);
//! assert!(machine.handle_event(&PointerEvent::down(pixel, press)));
//! ```

pub mod handles;
pub mod machine;
pub mod mode;
pub mod session;
pub mod surface;
pub mod viewport;

pub use handles::{HandleKind, Handles, PrintFeatures};
pub use machine::{DoneCallback, InteractionOptions, PrintAreaInteraction};
pub use mode::{Cursor, TransformMode};
pub use session::{Gesture, GestureStart, InteractionSession};
pub use surface::{MapSurface, PointerEvent, PointerEventKind};
pub use viewport::{Viewport, ViewportSurface};
