//! # PrintArea
//!
//! An interactive print-area rectangle that can be translated, rotated and
//! scaled over a map while never leaving a boundary polygon.
//!
//! ## Architecture
//!
//! PrintArea is organized as a workspace with multiple crates:
//!
//! 1. **printarea-core** - Error types, constants, shared aliases
//! 2. **printarea-geometry** - Vector primitives, constraint solver, corner
//!    canonicalizer, affine helpers
//! 3. **printarea-interaction** - Gesture state machine, handles, viewport
//!    surface
//! 4. **printarea-settings** - JSON/TOML configuration
//! 5. **printarea** - Logging setup and the scenario replay binary

pub mod scenario;

pub use printarea_core::GeometryError;
pub use printarea_geometry::{
    canonicalize, max_allowed_rect, BoundaryPolygon, Corner, Extent, Rectangle, Vec2,
};
pub use printarea_interaction::{
    Cursor, HandleKind, Handles, InteractionOptions, MapSurface, PointerEvent, PointerEventKind,
    PrintAreaInteraction, TransformMode, Viewport, ViewportSurface,
};
pub use printarea_settings::{Config, InteractionSettings, LoggingSettings};
pub use scenario::{replay, BoundarySource, Completion, Scenario, ScenarioStep, ViewportSetup};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty human-readable output, or JSON lines when `settings.json` is set
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level: tracing::Level = settings
        .level
        .parse()
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let json_layer = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false)
    });

    let pretty_layer = (!settings.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .context("logging already initialised")?;

    Ok(())
}
