//! Configuration module for capreq
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CAPREQ_*)
//! 3. Project config (./capreq.toml)
//! 4. User config (~/.config/capreq/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, ReaderConfig, Verbosity};
