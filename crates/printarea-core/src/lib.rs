//! # PrintArea Core
//!
//! Core types shared by every PrintArea crate.
//! Provides the error taxonomy, tuning constants and the callback/shared-state
//! aliases used by the geometry engine and the interaction state machine.

pub mod constants;
pub mod error;
pub mod types;

pub use error::GeometryError;

// Re-export type aliases for convenience
pub use types::{shared, DataCallback, DataCallback2, Shared};
