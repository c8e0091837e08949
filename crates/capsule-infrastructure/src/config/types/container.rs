//! Container configuration types

use crate::constants::DEFAULT_DETECT_CYCLES;
use serde::{Deserialize, Serialize};

/// Container configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Fail with a cyclic dependency error when a binding or type re-enters
    /// its own resolution. When disabled, such graphs recurse until the
    /// stack is exhausted.
    pub detect_cycles: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            detect_cycles: DEFAULT_DETECT_CYCLES,
        }
    }
}
