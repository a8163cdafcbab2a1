//! Configuration file loading for kb-console
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./kb-console.toml` or `./.kb-console.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/kb-console/config.toml`
//! 4. Fallback: `~/.config/kb-console/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBackendConfig, FileConfig, FileReplConfig, FileUiConfig};
pub use loader::ConfigLoader;
