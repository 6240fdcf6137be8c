//! Configuration management for ytmp3

use crate::error::ConfigError;
use crate::ytdlp::YtDlpCommand;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
    /// Python with the yt_dlp module, used when no yt-dlp binary is found
    pub python: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for playlist downloads
    pub playlist_directory: PathBuf,
    /// Template for playlist items, relative to `playlist_directory`
    pub playlist_template: String,
    /// Directory for single-video downloads
    pub video_directory: PathBuf,
    /// Template for single videos, relative to `video_directory`
    pub video_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            playlist_directory: default_music_dir(),
            playlist_template: "%(playlist)s/%(playlist_index)s - %(title)s.%(ext)s".to_string(),
            video_directory: PathBuf::from("."),
            video_template: "%(title)s.%(ext)s".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full output template for playlist downloads
    pub fn playlist_output(&self) -> String {
        join_template(&self.playlist_directory, &self.playlist_template)
    }

    /// Full output template for single-video downloads
    pub fn video_output(&self) -> String {
        join_template(&self.video_directory, &self.video_template)
    }
}

fn join_template(dir: &Path, template: &str) -> String {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        template.to_string()
    } else {
        dir.join(template).to_string_lossy().into_owned()
    }
}

fn default_music_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|d| d.join("Music")))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Load from default config directory
        if let Some(default_config) = Self::default_path() {
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        // Load from specified config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::LoadError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        // YTMP3_OUTPUT__VIDEO_TEMPLATE -> output.video_template
        figment = figment.merge(Env::prefixed("YTMP3_").split("__"));

        figment.extract().map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Location of the per-user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ytmp3/config.toml"))
    }

    /// Work out how to launch yt-dlp.
    ///
    /// Order: configured binary, `yt-dlp` on PATH, then a Python that can
    /// import `yt_dlp`.
    pub fn yt_dlp_command(&self) -> Result<YtDlpCommand, ConfigError> {
        if let Some(ref path) = self.paths.yt_dlp {
            return Ok(YtDlpCommand::binary(path.clone()));
        }

        if let Ok(path) = which::which("yt-dlp") {
            return Ok(YtDlpCommand::binary(path));
        }

        let python = match self.paths.python {
            Some(ref path) => path.clone(),
            None => which::which("python3").map_err(|_| {
                ConfigError::InvalidValue("yt-dlp not found in PATH".to_string())
            })?,
        };

        if python_has_yt_dlp(&python) {
            debug!("Using yt_dlp module from {}", python.display());
            Ok(YtDlpCommand::python_module(python))
        } else {
            Err(ConfigError::InvalidValue(format!(
                "yt-dlp not found in PATH and {} cannot import yt_dlp",
                python.display()
            )))
        }
    }
}

/// Check whether a Python interpreter can import yt_dlp
pub fn python_has_yt_dlp(python: &Path) -> bool {
    Command::new(python)
        .args(["-c", "import yt_dlp"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
