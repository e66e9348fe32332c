//! tagbox - interactive tag input demo.
//!
//! Hosts a single tag input in the terminal and prints the resulting tags as
//! JSON on exit.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use tagbox::app::App;
use tagbox::config::Config;
use tagbox::error::AppError;
use tagbox::events::{Event, EventHandler};
use tagbox::logging;
use tagbox::tasks::{create_task_channel, LookupMessage, SuggestionSource};
use tagbox::{Suggestion, Tag};

/// Suggestions offered when no catalogue file is given.
const DEFAULT_CATALOGUE: &[&str] = &[
    "bug", "build", "ci", "cli", "config", "docs", "feature", "frontend", "backend", "network",
    "parser", "performance", "refactor", "release", "security", "storage", "testing", "tui",
];

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "tagbox", version, about = "Edit a list of tags in the terminal")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of suggestions: names or {"name", "disabled"} objects
    #[arg(long)]
    suggestions: Option<PathBuf>,

    /// Fetch suggestions in the background as you type
    #[arg(long)]
    lookup: bool,

    /// Simulated latency for background lookups
    #[arg(long, value_name = "MS")]
    lookup_delay_ms: Option<u64>,

    /// Initial tags, comma separated
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    // A broken config still gets its error logged, to the default location
    let log_settings = config
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = logging::init(&log_settings) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(describe(AppError::from(e))),
    };
    if let Err(e) = &result {
        error!(error = %e, "tagbox exited with an error");
    }
    logging::shutdown();
    result
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let input_config = config
        .input
        .to_input_config()
        .map_err(|e| describe(AppError::from(e)))?;

    let suggestions_file = cli.suggestions.or(config.demo.suggestions_file);
    let catalogue = match suggestions_file.as_deref() {
        Some(path) => load_catalogue(path).map_err(describe)?,
        None => DEFAULT_CATALOGUE.iter().copied().map(Suggestion::new).collect(),
    };
    let tags: Vec<Tag> = cli
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(Tag::new)
        .collect();

    let (rx, mut app) = if cli.lookup || config.demo.lookup {
        let delay = cli.lookup_delay_ms.unwrap_or(config.demo.lookup_delay_ms);
        let (rx, spawner) = create_task_channel();
        let source = SuggestionSource::new(catalogue, Duration::from_millis(delay));
        info!(delay_ms = delay, "Using background suggestion lookups");
        (Some(rx), App::with_lookup(input_config, source, spawner, tags))
    } else {
        (None, App::new(input_config, catalogue, tags))
    };

    let mut terminal = setup_terminal()
        .map_err(|e| describe(AppError::terminal(format!("setup failed: {e}"))))?;
    let outcome = event_loop(&mut terminal, &mut app, rx);
    restore_terminal(&mut terminal)
        .map_err(|e| describe(AppError::terminal(format!("restore failed: {e}"))))?;
    outcome?;

    println!("{}", serde_json::to_string_pretty(app.tags())?);
    Ok(())
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    mut rx: Option<UnboundedReceiver<LookupMessage>>,
) -> anyhow::Result<()> {
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;

        let event: Event = events.next()?;
        app.update(event);

        if let Some(rx) = rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                app.handle_lookup(message);
            }
        }
    }

    Ok(())
}

/// Read a JSON suggestion catalogue.
fn load_catalogue(path: &Path) -> tagbox::error::Result<Vec<Suggestion>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| AppError::Suggestions {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn an application error into a message fit for the command line.
fn describe(error: AppError) -> anyhow::Error {
    let mut message = error.user_message();
    if let Some(hint) = error.suggested_action() {
        message.push('\n');
        message.push_str(hint);
    }
    anyhow::Error::new(error).context(message)
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    // Leave the terminal usable if we panic mid-frame.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        default_hook(info);
    }));

    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}
