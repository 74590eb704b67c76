//! weft CLI: run, list and validate cloth scenes.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "weft: mass-spring cloth simulation")]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "weft_cloth=debug").
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the preset scenes.
    List,

    /// Run a preset scene or a scene config for a number of ticks.
    Run {
        /// Preset to run (flag, rising_cloth, tapestry, tethered_cloth, trampoline, all).
        #[arg(short, long, conflicts_with = "config")]
        scene: Option<String>,

        /// Scene config file (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Number of ticks to simulate.
        #[arg(short, long, default_value_t = 300)]
        ticks: u64,

        /// First clock tick fed to the wind.
        #[arg(long, default_value_t = 0)]
        start_tick: u64,

        /// Write metrics as CSV to this file.
        #[arg(long)]
        csv: Option<String>,

        /// Write every exported frame to this JSON file (single scene only).
        #[arg(long)]
        frames: Option<String>,

        /// Log per-tick telemetry events.
        #[arg(long)]
        telemetry: bool,
    },

    /// Validate a scene config.
    Validate {
        /// Path to a scene config (TOML).
        path: String,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let result = match cli.command {
        Commands::List => commands::list(),
        Commands::Run {
            scene,
            config,
            ticks,
            start_tick,
            csv,
            frames,
            telemetry,
        } => commands::run(commands::RunOptions {
            scene: scene.as_deref(),
            config: config.as_deref(),
            ticks,
            start_tick,
            csv: csv.as_deref(),
            frames: frames.as_deref(),
            telemetry,
        }),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
