//! REPL (Read-Eval-Print Loop) for interactive chat

use kb_application::ChatController;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatController,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl around a wired controller.
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            history_file: None,
        }
    }

    /// Override the readline history file location.
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("kb-console").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.controller.load_sessions().await;
        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Ask the knowledge base
                    println!();
                    self.controller.ask(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          kb-console - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Sessions: {}", self.controller.state().sessions().len());
        println!();
        println!("Commands:");
        println!("  /help       - Show this help");
        println!("  /sessions   - List sessions");
        println!("  /new        - Start a new session");
        println!("  /open <id>  - Open a session");
        println!("  /quit       - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let command = parts.next().unwrap_or(cmd);
        let arg = parts.next();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /sessions        - List sessions");
                println!("  /new             - Start a new session");
                println!("  /open <id>       - Open a session and show its history");
                println!("  /delete <id>     - Delete a session");
                println!("  /good, /bad      - Rate the last answer");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
            }
            "/sessions" => {
                self.controller.load_sessions().await;
                println!();
                if self.controller.state().sessions().is_empty() {
                    println!("No sessions yet.");
                } else {
                    let current = self
                        .controller
                        .state()
                        .current_session()
                        .map(str::to_string);
                    for session in self.controller.state().sessions() {
                        let marker = if current.as_deref() == Some(session.id.as_str()) {
                            "*"
                        } else {
                            " "
                        };
                        println!("  {} {}  {}", marker, session.id, session.title);
                    }
                }
                println!();
            }
            "/new" => {
                self.controller.new_session().await;
                if let Some(id) = self.controller.state().current_session() {
                    println!("Started session {}", id);
                }
            }
            "/open" => match arg {
                Some(id) => self.controller.load_session(id).await,
                None => println!("Usage: /open <session-id>"),
            },
            "/delete" => match arg {
                Some(id) => {
                    let id = id.to_string();
                    self.controller.delete_session(&id).await;
                    println!("Deleted session {}", id);
                }
                None => println!("Usage: /delete <session-id>"),
            },
            "/good" | "/bad" => {
                let rating: i8 = if command == "/good" { 1 } else { -1 };
                match self.controller.state().last_answer().cloned() {
                    Some(message) => self.controller.send_feedback(&message, rating).await,
                    None => println!("No answer to rate yet."),
                }
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
            }
        }
        false
    }
}
