mod app;
mod config;
mod domain;
mod input;
mod persistence;
mod store;
mod sync;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use config::{open_log_file, Settings, DEFAULT_TICK_MS};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Intent, RandomIds, Task, TaskId};
use persistence::{encode_state, ensure_dir, init_local_dir, FileStorage, StorageWatcher, DEFAULT_QUOTA_BYTES};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use store::Store;
use sync::SyncPolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A small terminal to-do list that stays in sync across sessions", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .todo directory, then ~/.todo
    #[arg(long, global = true, env = "TODO_DIR")]
    dir: Option<PathBuf>,

    /// How to detect changes made by other sessions
    #[arg(long, global = true, value_enum, default_value_t = SyncPolicy::Count)]
    sync: SyncPolicy,

    /// Event loop tick in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Maximum size of the persisted task list in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_QUOTA_BYTES)]
    quota_bytes: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todo directory in the current directory
    Init,
    /// Print the persisted tasks
    List {
        /// Print the raw persisted JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a task without opening the UI
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Delete a task by id without opening the UI
    Delete { id: TaskId },
    /// Dispatch a raw JSON intent, e.g. '{"type":"add","payload":{...}}'
    Apply { intent: String },
}

/// Where tracing output goes
enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.dir, cli.sync, cli.tick_ms, cli.quota_bytes)?;

    match cli.command {
        Some(Commands::Init) => {
            init_logging(LogTarget::Stderr);
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_dir(&current_dir)?;
            println!("Initialized todo directory: {}", dir.display());
            Ok(())
        }
        Some(Commands::List { json }) => {
            init_logging(LogTarget::Stderr);
            let store = open_store(&settings)?;
            let state = store.read_persisted()?.unwrap_or_default();
            if json {
                println!("{}", encode_state(&state)?);
            } else if state.is_empty() {
                println!("No tasks.");
            } else {
                for task in &state.tasks {
                    let id = task.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
                    println!("{:>16}  {}  {}", id, task.date, task.description);
                }
            }
            Ok(())
        }
        Some(Commands::Add { description }) => {
            init_logging(LogTarget::Stderr);
            let mut store = open_store(&settings)?;
            let task = Task::draft(&description.join(" "), chrono::Utc::now())?;
            store.dispatch(Intent::add(task)).context("Failed to persist new task")?;
            if let Some(added) = store.state().tasks.last() {
                println!("Added {}: {}", added.id.unwrap_or_default(), added.description);
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            init_logging(LogTarget::Stderr);
            let mut store = open_store(&settings)?;
            let removed = store.delete_by_id(id).context("Failed to persist deletion")?;
            if removed {
                println!("Deleted {}", id);
            } else {
                println!("No task with id {}", id);
            }
            Ok(())
        }
        Some(Commands::Apply { intent }) => {
            init_logging(LogTarget::Stderr);
            let intent: Intent = serde_json::from_str(&intent).context("Invalid intent JSON")?;
            let mut store = open_store(&settings)?;
            store.dispatch(intent).context("Failed to apply intent")?;
            println!("{} task(s)", store.state().len());
            Ok(())
        }
        None => {
            ensure_dir(&settings.data_dir)?;
            init_logging(LogTarget::File(settings.log_path()));
            run_tui(&settings)
        }
    }
}

/// Tracing is opt-in via RUST_LOG; invalid filters leave logging off.
fn init_logging(target: LogTarget) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        });
    let Some(filter) = filter else {
        return;
    };

    let (stderr_layer, file_layer) = match target {
        LogTarget::Stderr => (Some(fmt::layer().with_writer(io::stderr)), None),
        LogTarget::File(path) => {
            // The TUI owns the terminal, so logs go to a file
            match open_log_file(&path) {
                Ok(file) => (None, Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))),
                Err(e) => {
                    eprintln!("Warning: logging disabled, cannot open {}: {}", path.display(), e);
                    return;
                }
            }
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

/// Store over the data directory, hydrated from whatever is persisted
fn open_store(settings: &Settings) -> Result<Store<FileStorage>> {
    let storage = FileStorage::new(&settings.data_dir).with_quota(settings.quota_bytes);
    let mut store = Store::new(storage, Box::new(RandomIds));
    if let Some(persisted) = store.read_persisted()? {
        store.dispatch(Intent::reload(persisted))?;
    }
    Ok(store)
}

fn run_tui(settings: &Settings) -> Result<()> {
    tracing::info!(dir = %settings.data_dir.display(), sync = ?settings.sync_policy, "starting");

    let storage = FileStorage::new(&settings.data_dir).with_quota(settings.quota_bytes);
    let store = Store::new(storage, Box::new(RandomIds));
    let mut app = App::new(store, settings.sync_policy);

    // Subscribe before the first read so no change slips between them
    let watcher = StorageWatcher::subscribe(&settings.tasks_path())?;
    app.handle_storage_change()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &watcher, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(watcher);
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<FileStorage>,
    watcher: &StorageWatcher,
    settings: &Settings,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so storage changes are picked up
        if event::poll(settings.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        if watcher.poll_changed() {
            app.handle_storage_change()?;
        }
    }
}
