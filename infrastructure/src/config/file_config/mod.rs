//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod backend;
mod repl;
mod ui;

pub use backend::FileBackendConfig;
pub use repl::FileReplConfig;
pub use ui::FileUiConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// Rendering settings
    pub ui: FileUiConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_domain::Theme;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.ui.theme(), Theme::Light);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn sections_parse_independently() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            base_url = "https://kb.example.org"

            [ui]
            theme = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://kb.example.org");
        assert_eq!(config.ui.theme(), Theme::Dark);
        assert!(config.repl.history_file.is_none());
    }
}
