//! CLI command definitions

use clap::{Parser, ValueEnum};
use kb_domain::Theme;
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Streamed plain text
    Text,
    /// The answer rendered through the markdown-lite pass
    Html,
    /// The full assistant message as JSON
    Json,
}

/// Chart/graph theme override
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// CLI arguments for kb-console
#[derive(Parser, Debug)]
#[command(name = "kb-console")]
#[command(author, version, about = "Console client for a knowledge-base/RAG backend")]
#[command(long_about = r#"
kb-console talks to a knowledge-base backend over HTTP: ask questions and
stream the answers, browse chat sessions, rate answers, and pull dashboard
chart and knowledge-graph specs.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./kb-console.toml   Project-level config
3. ~/.config/kb-console/config.toml   Global config

Example:
  kb-console "What does the retention policy say about backups?"
  kb-console --chat
  kb-console --dashboard --theme dark
  kb-console --graph "Ada Lovelace"
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Continue an existing session
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Print dashboard chart specs and exit
    #[arg(long)]
    pub dashboard: bool,

    /// Print the graph spec for an entity's neighborhood and exit
    #[arg(long, value_name = "ENTITY")]
    pub graph: Option<String>,

    /// Print the entity graph of a single document and exit
    #[arg(long, value_name = "DOC_ID")]
    pub doc_graph: Option<String>,

    /// Chart/graph theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_question() {
        let cli = Cli::parse_from(["kb-console", "What is Rust?"]);
        assert_eq!(cli.question.as_deref(), Some("What is Rust?"));
        assert!(!cli.chat);
    }

    #[test]
    fn parses_dashboard_with_theme() {
        let cli = Cli::parse_from(["kb-console", "--dashboard", "--theme", "dark"]);
        assert!(cli.dashboard);
        assert_eq!(Theme::from(cli.theme.unwrap()), Theme::Dark);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["kb-console", "-vv", "--chat"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.chat);
    }
}
