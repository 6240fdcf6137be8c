mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Commands};
use ytmp3_core::DownloadMode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let filter = match cli.verbose {
        0 => "ytmp3=info,ytmp3_core=info",
        1 => "ytmp3=debug,ytmp3_core=debug",
        2 => "ytmp3=trace,ytmp3_core=trace",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Playlist { url, options }) => {
            commands::download::run(DownloadMode::Playlist, url, &options, config_path).await
        }
        Some(Commands::Video { url, options }) => {
            commands::download::run(DownloadMode::Single, url, &options, config_path).await
        }
        Some(Commands::Doctor) => commands::doctor::run(config_path).await,
        Some(Commands::Config) => commands::config::run(config_path).await,
        None => {
            // Bare invocation downloads a playlist
            commands::download::run(DownloadMode::Playlist, cli.url, &cli.options, config_path)
                .await
        }
    }
}
