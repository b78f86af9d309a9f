//! Ember CLI - headless runs of the particle sandbox

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{init, random, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "2D particle sandbox: emitters, effects and a recycling random system", long_about = None)]
#[command(version)]
struct Cli {
    /// Log editing operations and per-run details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter scene file
    Init {
        /// Path of the scene file to create
        path: String,
    },

    /// Simulate a scene file headless and report what happened
    Run {
        /// Path to scene file
        scene: String,

        /// Number of frames to simulate
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Seconds per frame
        #[arg(long, default_value = "0.016666")]
        dt: f64,

        /// Override the scene's seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate the recycling random system headless
    Random {
        /// Number of particles
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Number of frames to simulate
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Seconds per frame
        #[arg(long, default_value = "0.016666")]
        dt: f64,

        /// Simulation speed factor (0 freezes, negative runs the drift backwards)
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        speed: f32,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { path } => init::run(&path),
        Commands::Run {
            scene,
            frames,
            dt,
            seed,
        } => run::run(run::RunArgs {
            scene,
            frames,
            dt,
            seed,
        }),
        Commands::Random {
            count,
            frames,
            dt,
            speed,
            seed,
        } => random::run(random::RandomArgs {
            count,
            frames,
            dt,
            speed,
            seed,
        }),
    }
}
