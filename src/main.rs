//! Terminal runtime for shelfwise.
//!
//! Owns the event loop: command lines from stdin and worker completions arrive
//! on one channel, go through [`handle_event`], and the resulting actions are
//! handed to the [`Worker`]. The screen is redrawn whenever the handler asks
//! for it.

use clap::Parser;
use shelfwise::app::{parse_command, AppState};
use shelfwise::catalog::{Catalog, HttpCatalog};
use shelfwise::observability::init_tracing;
use shelfwise::storage::{JsonStorage, Storage};
use shelfwise::ui::helpers::clear_screen;
use shelfwise::ui::render;
use shelfwise::worker::Worker;
use shelfwise::{handle_event, initialize, Config, Event};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Browse a public-domain book catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "shelfwise", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tracing filter for the log file (e.g. `debug`, `shelfwise=trace`).
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Catalog endpoint to browse.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shelfwise: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> shelfwise::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    init_tracing(&config);
    tracing::info!(
        api_url = %config.api_url,
        data_dir = %config.data_dir().display(),
        "shelfwise starting"
    );

    let mut state = initialize(&config);
    let storage = JsonStorage::new(config.storage_path())?;
    let catalog = Arc::new(HttpCatalog::from_config(&config)?);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut worker = Worker::new(catalog, storage, tx.clone());

    if !start_session(&worker, tx, BufReader::new(std::io::stdin())) {
        return Ok(());
    }

    while let Some(event) = rx.recv().await {
        let (should_render, actions) = handle_event(&mut state, &event)?;

        if !worker.execute(actions) {
            break;
        }

        if should_render {
            draw(&state)?;
        }
    }

    clear_screen();
    std::io::stdout().flush()?;
    tracing::info!("shelfwise exiting");
    Ok(())
}

/// Queues the startup event, then starts reading commands from `input`.
///
/// Init goes on the channel first so persisted preferences are applied before
/// any typed command is handled. Returns `false` if the loop is already gone.
fn start_session<C, S, R>(worker: &Worker<C, S>, events: UnboundedSender<Event>, input: R) -> bool
where
    C: Catalog,
    S: Storage,
    R: BufRead + Send + 'static,
{
    if events.send(worker.initial_event()).is_err() {
        return false;
    }
    spawn_input_reader(input, events);
    true
}

/// Reads command lines on a dedicated thread and forwards them as events.
///
/// End of input is treated as a quit command.
fn spawn_input_reader<R: BufRead + Send + 'static>(input: R, events: UnboundedSender<Event>) {
    std::thread::spawn(move || {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            };

            let event =
                parse_command(&line).unwrap_or_else(|e| Event::InvalidCommand(e.to_string()));
            if events.send(event).is_err() {
                return;
            }
        }
        let _ = events.send(Event::Quit);
    });
}

fn draw(state: &AppState) -> std::io::Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
    render(state, usize::from(rows), usize::from(cols));
    std::io::stdout().flush()
}
