use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crate::args::DownloadArgs;
use ytmp3_core::{
    config::Config,
    handle_errors,
    input::{FixedUrl, Prompt, UrlSource},
    report::write_report,
    ytdlp::YtDlp,
    DownloadError, DownloadMode, DownloadRequest, Orchestrator,
};

pub async fn run(
    mode: DownloadMode,
    url: Option<String>,
    options: &DownloadArgs,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let mut config = Config::load(config_path)?;

    if let Some(ref dir) = options.output {
        match mode {
            DownloadMode::Playlist => config.output.playlist_directory = dir.clone(),
            DownloadMode::Single => config.output.video_directory = dir.clone(),
        }
    }

    let mut source: Box<dyn UrlSource> = match url {
        Some(url) => Box::new(FixedUrl(url)),
        None => Box::new(Prompt::stdin(mode.prompt())),
    };
    let request = DownloadRequest::new(
        source.read_url().context("Failed to read URL")?,
        mode,
    );

    let command = match config.yt_dlp_command() {
        Ok(command) => command,
        Err(e) => {
            tracing::debug!("yt-dlp lookup failed: {}", e);
            handle_errors(&DownloadError::YtDlpNotFound);
            return Ok(ExitCode::FAILURE);
        }
    };

    let orchestrator = Orchestrator::new(YtDlp::new(command), config.output);
    let result = orchestrator.download(&request).await;

    if write_report(&mut io::stdout().lock(), &result)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
