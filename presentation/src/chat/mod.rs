//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the
//! knowledge base, plus the console view subscriber that renders
//! controller events.

mod repl;
mod view;

pub use repl::ChatRepl;
pub use view::ConsoleView;
