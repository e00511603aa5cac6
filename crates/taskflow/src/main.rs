//! CLI entry point for taskflow.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use taskflow_app::AppConfig;
use taskflow_core::{Category, FilterCategory, SortOption};
use taskflow_storage::FileStore;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod commands;

const DATA_DIR_NAME: &str = "taskflow";
const FALLBACK_DATA_DIR: &str = ".taskflow";

/// Local task list with categories, search and sorting.
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "taskflow: a local task list with categories, search and sorting"
)]
struct Cli {
    /// Directory holding task data and config.toml.
    #[arg(long, env = "TASKFLOW_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task.
    Add {
        /// Task text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Category (defaults to the configured one).
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Replace the text of a task.
    Edit {
        /// Task id or unique prefix.
        id: String,
        /// New text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a task.
    Rm {
        /// Task id or unique prefix.
        id: String,
    },

    /// Mark a task completed, or reopen it.
    Toggle {
        /// Task id or unique prefix.
        id: String,
    },

    /// List tasks.
    Ls {
        /// Category filter ("All" or a category).
        #[arg(short, long)]
        category: Option<FilterCategory>,
        /// Case-insensitive text search.
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order: newest, oldest, a-z or z-a.
        #[arg(long)]
        sort: Option<SortOption>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = LsFormat::Table)]
        format: LsFormat,
    },

    /// Show pending/completed/total counts.
    Stats,

    /// Show or switch the colour theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LsFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

fn main() -> Result<()> {
    let Cli { data_dir, cmd } = Cli::parse();
    install_tracing();

    let base = resolve_data_dir(data_dir);
    let config = AppConfig::from_dir(&base)?;
    let store = FileStore::open(config.data_dir(&base))?;
    let stdout = std::io::stdout();
    commands::run(cmd, store, &config, &mut stdout.lock())
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

fn install_tracing() {
    // RUST_LOG overrides; stay quiet by default so command output is clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::default().add_directive(Level::WARN.into())
}
