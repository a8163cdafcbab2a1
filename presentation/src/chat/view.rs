//! Console renderer for chat controller events.
//!
//! Subscribes to [`ViewEvent`]s and writes them to the terminal as they
//! arrive: answer deltas print incrementally, a spinner covers the wait
//! for the first chunk. Scroll-to-bottom is a flush here; a terminal is
//! already pinned to its latest line.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kb_application::{ViewEvent, ViewSink};
use kb_domain::{ChatMessage, Role};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Renders chat events to stdout.
pub struct ConsoleView {
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show a spinner while waiting for the first chunk.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn start_spinner(&self) {
        if !self.show_progress {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn print_message(message: &ChatMessage) {
        match message.role {
            Role::User => println!("{} {}", "You:".cyan().bold(), message.content),
            Role::Assistant => {
                println!("{} {}", "KB: ".green().bold(), message.content);
                if !message.sources.is_empty() {
                    println!("{}", format!("    [{} sources]", message.sources.len()).dimmed());
                }
            }
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSink for ConsoleView {
    fn on_event(&self, event: ViewEvent) {
        match event {
            ViewEvent::SessionsReloaded(_) => {}
            ViewEvent::SessionOpened { id, messages } => {
                println!();
                println!("{}", format!("── session {} ──", id).dimmed());
                for message in &messages {
                    Self::print_message(message);
                }
            }
            ViewEvent::SessionClosed => {
                println!("{}", "(session closed)".dimmed());
            }
            // the user just typed it; nothing to echo
            ViewEvent::UserMessage(_) => {}
            ViewEvent::AnswerStarted => self.start_spinner(),
            ViewEvent::AnswerSources(sources) => {
                self.clear_spinner();
                if !sources.is_empty() {
                    println!("{}", format!("[{} sources]", sources.len()).dimmed());
                }
            }
            ViewEvent::AnswerDelta(chunk) => {
                self.clear_spinner();
                print!("{}", chunk);
                let _ = std::io::stdout().flush();
            }
            ViewEvent::AnswerCompleted => {
                self.clear_spinner();
                println!();
            }
            ViewEvent::ScrollToBottom => {
                let _ = std::io::stdout().flush();
            }
        }
    }
}
