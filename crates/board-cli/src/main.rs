mod cmd;
mod output;
mod root;

use board_core::stats::{PriorityFilter, SortKey};
use board_core::types::{Locale, ViewMode};
use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, Selection};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "board",
    about = "Character asset production board: stage progress by priority",
    version,
    propagate_version = true
)]
struct Cli {
    /// Board root (default: auto-detect from .board/ or .git/)
    #[arg(long, global = true, env = "BOARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Priority filter: all, p0, p1 or p2 (default from config)
    #[arg(long, short = 'p', global = true)]
    priority: Option<PriorityFilter>,

    /// Label language: en or zh (default from config)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary cards, status distribution and per-stage backlog
    Dashboard,

    /// Detailed per-character table
    List {
        /// Sort by: roster, id, name, priority or progress
        #[arg(long, default_value = "roster")]
        sort: SortKey,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
    },

    /// Show every stage of one character
    Show {
        /// Character id, e.g. 1002
        id: String,
    },

    /// Write a default .board/config.yaml
    Init {
        /// Project name shown in the header
        #[arg(long)]
        name: Option<String>,
    },

    /// Inspect and validate the board configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Launch the read-only web view
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Some(Commands::Ui { .. }) => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Some(Commands::Init { name }) => cmd::init::run(&root, name.as_deref()),
        Some(Commands::Config { subcommand }) => cmd::config::run(&root, subcommand, cli.json),
        Some(Commands::Ui { port, no_open }) => cmd::ui::run(&root, port, no_open),
        command => Selection::resolve(&root, cli.priority, cli.locale).and_then(|selection| {
            match command {
                Some(Commands::Dashboard) => cmd::dashboard::run(&selection, cli.json),
                Some(Commands::List { sort, reverse }) => {
                    cmd::list::run(&selection, sort, reverse, cli.json)
                }
                Some(Commands::Show { id }) => cmd::show::run(&selection, &id, cli.json),
                _ => match selection.config.display.default_view {
                    ViewMode::Dashboard => cmd::dashboard::run(&selection, cli.json),
                    ViewMode::List => {
                        cmd::list::run(&selection, SortKey::default(), false, cli.json)
                    }
                },
            }
        }),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
