//! Configuration
//!
//! Typed configuration sections and the figment-based loader that merges
//! defaults, an optional TOML file and `CAPSULE__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
