//! CLI command implementations

pub mod hello;
pub mod info;
pub mod settings;
