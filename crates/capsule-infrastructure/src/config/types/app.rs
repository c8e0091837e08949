//! Main application configuration

use serde::{Deserialize, Serialize};

use super::container::ContainerConfig;
use super::logging::LoggingConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Container behavior
    #[serde(default)]
    pub container: ContainerConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
