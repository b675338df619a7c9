//! CLI frontend for the Adventure Quest text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aq",
    about = "Adventure Quest: a text adventure of exploration and danger",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure interactively
    Play {
        /// World file to play (default: the built-in Oakvale world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// RNG seed for reproducible combat
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Name of your character
        #[arg(short, long, default_value = "Adventurer")]
        name: String,
    },

    /// Write the built-in world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a world and report problems
    Check {
        /// World file to check (default: the built-in Oakvale world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("AQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world, seed, name } => commands::play::run(world.as_deref(), seed, &name),
        Commands::Export { output } => commands::export::run(output.as_deref()),
        Commands::Check { world } => commands::check::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
