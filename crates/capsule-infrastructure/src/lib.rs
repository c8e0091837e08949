//! Infrastructure Layer - Capsule
//!
//! Cross-cutting technical concerns for the container:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber bootstrap
//! - [`error_ext`]: context helpers mapping foreign errors into the domain error
//!
//! The container engine lives in the `capsule` crate and only consumes the
//! configuration types defined here.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
