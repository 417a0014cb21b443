//! PrintArea Settings Crate
//!
//! Loads, validates and saves the interaction tuning and logging settings.

pub mod config;
pub mod error;

pub use config::{Config, InteractionSettings, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
