//! # praxis-core
//!
//! Core library for the Praxis CLI providing:
//! - Environment-resolved application settings with defaults
//! - A fixed-delay retry execution engine with observable attempts
//! - Timing helpers for measuring operation duration

pub mod error;
pub mod retry;
pub mod settings;
pub mod timing;

pub use error::{Error, Result};
pub use settings::Settings;
