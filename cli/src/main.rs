//! CLI entrypoint for kb-console
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use kb_application::{ChatController, KnowledgeBackend};
use kb_domain::Theme;
use kb_infrastructure::{ApiClient, ConfigLoader, HttpKnowledgeBackend};
use kb_presentation::{
    build_graph, platform_chart, render_markdown, timeline_chart, ChatRepl, Cli, ConsoleNotifier,
    ConsoleView, OutputFormat,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.backend.base_url.clone());
    let theme = cli.theme.map(Theme::from).unwrap_or_else(|| config.ui.theme());

    info!("Using backend at {}", base_url);

    // === Dependency Injection ===
    let client = ApiClient::new(base_url)?;
    let backend: Arc<dyn KnowledgeBackend> = Arc::new(HttpKnowledgeBackend::new(client));

    // Dashboard mode: print chart specs and exit
    if cli.dashboard {
        let stats = backend.stats().await?;
        println!("Documents: {}  Vectors: {}", stats.documents, stats.vectors);
        match platform_chart(&stats.platform_counts(), theme) {
            Some(chart) => println!("{}", serde_json::to_string_pretty(&chart)?),
            None => println!("No platform data."),
        }
        if !stats.timeline.is_empty() {
            println!(
                "{}",
                serde_json::to_string_pretty(&timeline_chart(&stats.timeline, theme))?
            );
        }
        return Ok(());
    }

    // Graph mode: print the network spec for an entity neighborhood or a
    // single document's entity graph
    if cli.graph.is_some() || cli.doc_graph.is_some() {
        let (data, subject) = match (&cli.graph, &cli.doc_graph) {
            (Some(entity), _) => (backend.entity_neighborhood(entity).await?, entity),
            (None, Some(doc_id)) => (backend.document_graph(doc_id).await?, doc_id),
            (None, None) => unreachable!(),
        };
        match build_graph(&data) {
            Some(view) => println!("{}", serde_json::to_string_pretty(view.spec())?),
            None => println!("No graph data for '{}'.", subject),
        }
        return Ok(());
    }

    let notifier = Arc::new(ConsoleNotifier::new());
    let mut controller = ChatController::new(backend).with_notifier(notifier);

    // html/json one-shot output buffers the answer; only text streams live
    let streams_to_console = cli.chat || matches!(cli.output, OutputFormat::Text);
    if streams_to_console {
        let show_progress = !cli.quiet && config.repl.show_progress;
        controller =
            controller.with_view(Arc::new(ConsoleView::new().with_progress(show_progress)));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(controller)
            .with_history_file(config.repl.history_file.clone().map(PathBuf::from));
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    if let Some(id) = &cli.session {
        controller.load_session(id).await;
    }

    controller.ask(&question).await;

    match cli.output {
        // already streamed by the console view
        OutputFormat::Text => {}
        OutputFormat::Html => {
            if let Some(message) = controller.state().last_answer() {
                println!("{}", render_markdown(&message.content));
            }
        }
        OutputFormat::Json => {
            if let Some(message) = controller.state().last_answer() {
                println!("{}", serde_json::to_string_pretty(message)?);
            }
        }
    }

    Ok(())
}
