//! Rendering configuration from TOML (`[ui]` section)

use kb_domain::Theme;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw rendering configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Chart/graph theme: "light" or "dark"
    pub theme: String,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
        }
    }
}

impl FileUiConfig {
    /// Resolved theme; unknown values warn and fall back to light.
    pub fn theme(&self) -> Theme {
        self.theme.parse().unwrap_or_else(|_| {
            warn!("ui.theme: unknown value '{}', falling back to light", self.theme);
            Theme::Light
        })
    }
}
