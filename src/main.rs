use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use markergen::commands::{self, GenerateOptions};
use markergen::config::AppConfigExt;
use markergen::logging;
use markergen_core::{AppConfig, FightSelector};

#[derive(Parser)]
#[command(version, about = "Build marker timelines from fetched combat reports")]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the marker timeline for one fight
    Generate {
        #[arg(short, long)]
        input: PathBuf,
        /// `last` or a fight id
        #[arg(short, long, default_value = "last")]
        fight: FightSelector,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        min_interval: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        max_tracks: Option<i64>,
    },
    /// List the abilities cast during a fight
    Abilities {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, default_value = "last")]
        fight: FightSelector,
    },
    /// Show the configuration file location and settings
    Config,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            fight,
            output,
            min_interval,
            max_tracks,
        } => {
            let config = AppConfig::load(cli.config_file.as_deref());
            let options = GenerateOptions {
                input,
                fight,
                output,
                min_interval,
                max_tracks,
            };
            commands::generate(options, config).await
        }
        Commands::Abilities { input, fight } => commands::abilities(&input, fight).await,
        Commands::Config => commands::show_config(cli.config_file.as_deref()).await,
    };

    result.map_err(|e| {
        tracing::error!(error = %e, "Command failed");
        error_chain(&e)
    })
}

fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
