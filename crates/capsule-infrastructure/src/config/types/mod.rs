//! Configuration types module

pub mod app;
pub mod container;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use container::ContainerConfig;
pub use logging::LoggingConfig;
