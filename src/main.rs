use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mohtion::{transcript, util, App, Config};

/// Terminal replay of the Mohtion worker demo
#[derive(Debug, Parser)]
#[command(name = "mohtion", version, about)]
struct Cli {
    /// Config file (defaults to ~/.mohtion/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory for config and logs (defaults to ~/.mohtion)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Milliseconds between log lines, overriding the config file
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the interactive demo (default)
    Play,
    /// Print the log playback as plain text frames
    Print {
        /// Number of ticks to play after the initial frame
        #[arg(long, default_value_t = 7)]
        ticks: usize,
    },
    /// List the lifecycle stages
    Stages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.mohtion/logs/mohtion.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(ms) = cli.tick_ms {
        config = config.with_tick_interval(Duration::from_millis(ms));
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let mut app = App::new(config);
            app.run().await
        }
        Command::Print { ticks } => {
            print!("{}", transcript::render_transcript(config.script, ticks));
            Ok(())
        }
        Command::Stages => {
            print!("{}", transcript::render_stages());
            Ok(())
        }
    }
}
