//! gradebook CLI — the user-facing command-line interface.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use gradebook_core::config::{load_config_from, OutputFormat};
use gradebook_core::Store;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Flat-file student record manager")]
struct Cli {
    /// Student records file (overrides the config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: table, json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and an empty records file
    Init,

    /// List all students
    List,

    /// Show one student in detail
    Show {
        /// Student code
        code: String,
    },

    /// Add a student
    Add {
        /// Student code (must be unique)
        #[arg(long)]
        code: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// Coursework 1 mark (0-20)
        #[arg(long)]
        cw1: u32,

        /// Coursework 2 mark (0-20)
        #[arg(long)]
        cw2: u32,

        /// Coursework 3 mark (0-20)
        #[arg(long)]
        cw3: u32,

        /// Exam mark (0-100)
        #[arg(long)]
        exam: u32,
    },

    /// Update a student's name or marks; omitted fields keep their value
    Update {
        /// Student code
        code: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        cw1: Option<u32>,

        #[arg(long)]
        cw2: Option<u32>,

        #[arg(long)]
        cw3: Option<u32>,

        #[arg(long)]
        exam: Option<u32>,
    },

    /// Delete a student
    Delete {
        /// Student code
        code: String,
    },

    /// Search by name (substring) or code (exact), case-insensitive
    Search {
        /// Search text; empty lists everyone
        #[arg(default_value = "")]
        query: String,
    },

    /// Sort records by percentage and save the new order
    Sort {
        /// Highest percentage first
        #[arg(long)]
        descending: bool,
    },

    /// Show the student with the highest percentage
    Highest,

    /// Show the student with the lowest percentage
    Lowest,

    /// Show class statistics
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?;
    let data_file = cli.file.unwrap_or(config.data_file);
    let format = cli.format.unwrap_or(config.default_format);
    tracing::debug!("using records file {}", data_file.display());

    match cli.command {
        Commands::Init => commands::init::execute(&data_file),
        Commands::List => commands::list::execute(&open_store(&data_file)?, format),
        Commands::Show { code } => {
            commands::show::execute(&open_store(&data_file)?, &code, format)
        }
        Commands::Add {
            code,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => commands::add::execute(
            &mut open_store(&data_file)?,
            code,
            name,
            [cw1, cw2, cw3],
            exam,
        ),
        Commands::Update {
            code,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => commands::update::execute(
            &mut open_store(&data_file)?,
            &code,
            name,
            [cw1, cw2, cw3],
            exam,
        ),
        Commands::Delete { code } => commands::delete::execute(&mut open_store(&data_file)?, &code),
        Commands::Search { query } => {
            commands::search::execute(&open_store(&data_file)?, &query, format)
        }
        Commands::Sort { descending } => {
            commands::sort::execute(&mut open_store(&data_file)?, descending, format)
        }
        Commands::Highest => commands::stats::highest(&open_store(&data_file)?, format),
        Commands::Lowest => commands::stats::lowest(&open_store(&data_file)?, format),
        Commands::Stats => commands::stats::summary(&open_store(&data_file)?, format),
    }
}

fn open_store(data_file: &Path) -> Result<Store> {
    Store::open(data_file)
        .with_context(|| format!("failed to open records file {}", data_file.display()))
}
