//! CLI frontend for the Redwood Bar behavior engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use rw_engine::DEFAULT_SEED;

#[derive(Parser)]
#[command(
    name = "redwood",
    about = "Redwood Bar — a deterministic behavior-tree bar simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new content directory from the builtin template
    Init {
        /// Name of the content directory to create
        name: String,
    },

    /// Validate a content directory without starting a session
    Check {
        /// Content directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Play an interactive session
    Play {
        /// Content directory (default: builtin content)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// RNG seed for deterministic replay
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,

        /// Save file for the session snapshot
        #[arg(long, default_value = "redwood-save.json")]
        save: PathBuf,

        /// Ignore an existing save and start from the initial state
        #[arg(long)]
        fresh: bool,
    },

    /// Run a scripted sequence of choices and print the transcript
    Run {
        /// Content directory (default: builtin content)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// RNG seed for deterministic replay
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,

        /// Comma-separated choice ids, one tick each
        choices: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::Play {
            dir,
            seed,
            save,
            fresh,
        } => commands::play::run(dir.as_deref(), seed, &save, fresh),
        Commands::Run { dir, seed, choices } => {
            commands::run::run(dir.as_deref(), seed, &choices)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
