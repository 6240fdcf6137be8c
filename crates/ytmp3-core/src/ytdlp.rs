//! Media delegate backed by the yt-dlp command line tool

use crate::delegate::MediaDelegate;
use crate::error::DownloadError;
use crate::options::DownloadOptions;
use crate::report::{DownloadReport, ItemFailure};
use async_trait::async_trait;
use regex::Regex;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::OnceLock;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// How to launch yt-dlp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpCommand {
    program: PathBuf,
    prefix_args: Vec<String>,
}

impl YtDlpCommand {
    /// A standalone `yt-dlp` executable
    pub fn binary(path: PathBuf) -> Self {
        Self {
            program: path,
            prefix_args: Vec::new(),
        }
    }

    /// `python -m yt_dlp`
    pub fn python_module(python: PathBuf) -> Self {
        Self {
            program: python,
            prefix_args: vec!["-m".to_string(), "yt_dlp".to_string()],
        }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.prefix_args);
        cmd
    }

    /// Version string reported by `yt-dlp --version`
    pub async fn version(&self) -> Result<String, DownloadError> {
        let output = self
            .command()
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DownloadError::YtDlpNotFound,
                _ => DownloadError::Io(e),
            })?;

        if !output.status.success() {
            return Err(DownloadError::YtDlpFailed(output.status.code()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl std::fmt::Display for YtDlpCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.prefix_args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct YtDlp {
    command: YtDlpCommand,
}

impl YtDlp {
    pub fn new(command: YtDlpCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl MediaDelegate for YtDlp {
    async fn download(
        &self,
        options: &DownloadOptions,
        url: &str,
    ) -> Result<DownloadReport, DownloadError> {
        info!("Downloading audio from: {}", url);
        debug!("Running {} {:?}", self.command, options.to_args());

        let mut child = self
            .command
            .command()
            .args(options.to_args())
            .arg("--")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DownloadError::YtDlpNotFound,
                _ => DownloadError::Io(e),
            })?;

        let mut report = DownloadReport::new(url);

        // Reap the child even when reading its stderr fails
        let read = match child.stderr.take() {
            Some(stderr) => collect_stderr(BufReader::new(stderr), &mut report).await,
            None => Ok(()),
        };
        let status = child.wait().await?;
        read?;

        if status.success() {
            return Ok(report);
        }

        debug!("yt-dlp exited with {:?}", status.code());

        match report.failures.first() {
            Some(_) if options.ignore_errors => Ok(report),
            Some(first) => Err(DownloadError::Backend(first.to_string())),
            None => Err(DownloadError::YtDlpFailed(status.code())),
        }
    }
}

/// Sort yt-dlp's stderr into item failures and log lines.
///
/// Lines are decoded lossily; titles are not guaranteed to be UTF-8.
async fn collect_stderr<R>(mut reader: R, report: &mut DownloadReport) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(&['\n', '\r'][..]);
        if let Some(failure) = parse_error_line(line) {
            warn!("Skipped {}", failure);
            report.failures.push(failure);
        } else if let Some(warning) = line.strip_prefix("WARNING: ") {
            warn!("yt-dlp: {}", warning);
        } else {
            debug!("yt-dlp: {}", line);
        }
    }
}

/// Parse a yt-dlp `ERROR:` line, e.g. `ERROR: [youtube] abc123: Video unavailable`
pub fn parse_error_line(line: &str) -> Option<ItemFailure> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^ERROR: (?:\[(?P<extractor>[^\]]+)\] (?:(?P<id>[\w-]+): )?)?(?P<message>.+)$")
            .expect("valid regex")
    });

    let caps = pattern.captures(line.trim_end())?;
    Some(ItemFailure {
        extractor: caps.name("extractor").map(|m| m.as_str().to_string()),
        id: caps.name("id").map(|m| m.as_str().to_string()),
        message: caps["message"].to_string(),
    })
}
