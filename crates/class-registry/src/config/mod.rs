//! Registry configuration
//!
//! Configuration is layered with Figment: built-in defaults, then an
//! optional TOML file, then `CLASS_REGISTRY__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, RegistryConfig};
