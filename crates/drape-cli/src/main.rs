//! drape CLI — headless simulation, snapshot inspection, validation.

use clap::{Parser, Subcommand};

mod commands;
mod params;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "drape — position-based cloth surface simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation.
    Simulate {
        /// Path to scenario parameters (TOML). Defaults are used when
        /// omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Write every frame's vertex data to a JSON file.
        #[arg(long)]
        frames_out: Option<String>,

        /// Write the final state snapshot to a binary file.
        #[arg(long)]
        snapshot_out: Option<String>,

        /// Oscillate the anchored row sideways each frame.
        #[arg(long)]
        wave: bool,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a scenario parameter file.
    Validate {
        /// Path to parameter file (TOML).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames_out,
            snapshot_out,
            wave,
        } => commands::simulate(
            config.as_deref(),
            frames_out.as_deref(),
            snapshot_out.as_deref(),
            wave,
        ),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
