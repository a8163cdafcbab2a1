//! Presentation layer for kb-console
//!
//! This crate contains CLI definitions, toast notifications, the
//! markdown-lite renderer, chart and graph spec builders, and the
//! interactive chat interface.

pub mod chat;
pub mod cli;
pub mod render;
pub mod toast;

// Re-export commonly used types
pub use chat::{ChatRepl, ConsoleView};
pub use cli::commands::{Cli, OutputFormat};
pub use render::charts::{platform_chart, timeline_chart};
pub use render::graph::{build_graph, GraphView, NodeAction};
pub use render::markdown::render_markdown;
pub use toast::{ConsoleNotifier, Toast, ToastQueue};
