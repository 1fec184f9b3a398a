use std::sync::Arc;

use clap::Parser;
use obhidhan_config::Config;
use obhidhan_lookup::LookupService;
use obhidhan_speech::Speaker;
use obhidhan_types::{DictionaryEntry, LookupRequest, ProviderKind};
use tokio::signal;

mod controller;
mod events;
mod io;
mod state;
mod store;
mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(
    name = "obhidhan",
    version,
    about = "LLM-backed English → Bangla dictionary"
)]
struct Cli {
    /// Word or phrase to look up; reads stdin when piped, otherwise starts
    /// interactive mode
    phrase: Option<String>,

    /// Backend to ask for this session (openai or gemini)
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// Look up the current clipboard selection (bind this to a desktop
    /// hotkey for shortcut-style lookups)
    #[arg(long)]
    selection: bool,

    /// Read the result aloud after rendering it
    #[arg(long)]
    speak: bool,

    /// Keep running and look up every new clipboard selection
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let state = Arc::new(AppState::new(Config::new()));

    if let Some(kind) = cli.provider {
        state.session.set_preferred_provider(kind).await;
    }

    // Phrase precedence: explicit argument, then captured selection, then
    // piped stdin. Anything else starts an interactive loop.
    let phrase = match cli.phrase {
        Some(phrase) => Some(phrase),
        None if cli.selection => {
            let captured = obhidhan_io::read_selection()?;
            let captured = captured.trim().to_string();
            if captured.is_empty() {
                ui::render_failure("No text selected.");
                std::process::exit(1);
            }
            // Shortcut-captured selections auto-run.
            state.session.set_auto_lookup(true).await;
            Some(captured)
        }
        None if !cli.watch && !atty::is(atty::Stream::Stdin) => {
            let piped = std::io::read_to_string(std::io::stdin())?;
            let piped = piped.trim().to_string();
            (!piped.is_empty()).then_some(piped)
        }
        None => None,
    };

    match phrase {
        Some(phrase) => run_once(state, phrase, cli.speak).await,
        None => run_loop(state, cli.watch).await,
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One lookup, one rendered entry, exit code 1 on failure.
async fn run_once(state: Arc<AppState>, phrase: String, speak: bool) -> anyhow::Result<()> {
    let (service, speech_config) = {
        let config = state.config.read().await;
        (LookupService::new(&config.lookup), config.speech.clone())
    };

    state.session.set_last_selection(phrase.clone()).await;
    if state.session.take_auto_lookup().await {
        tracing::debug!("auto-running captured selection");
    }
    let request = LookupRequest {
        phrase,
        provider: state.active_provider().await,
    };

    match service.perform_lookup(&request).await {
        Ok(entry) => {
            ui::render_entry(&entry);
            if speak {
                speak_entry(&entry, Speaker::new(speech_config)).await;
            }
            Ok(())
        }
        Err(err) => {
            ui::render_failure(&err.to_string());
            std::process::exit(1);
        }
    }
}

async fn speak_entry(entry: &DictionaryEntry, speaker: Speaker) {
    let Some(text) = entry.speech_text() else {
        ui::render_failure("Nothing to read aloud for this entry.");
        return;
    };

    // Let the utterance finish before the process exits.
    let result = match speaker.speak(&text).await {
        Ok(()) => speaker.wait().await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        ui::render_failure(&err.to_string());
    }
}

/// Interactive/watch mode: input, lookup and render loops wired through
/// channels, shut down on Ctrl+C or the first task exit.
async fn run_loop(state: Arc<AppState>, watch: bool) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(watch);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("a task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}
