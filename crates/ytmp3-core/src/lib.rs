//! ytmp3-core: download YouTube audio and playlists as MP3 through yt-dlp

pub mod config;
pub mod delegate;
pub mod error;
pub mod input;
pub mod options;
pub mod orchestrator;
pub mod report;
pub mod request;
pub mod ytdlp;

pub use config::Config;
pub use delegate::MediaDelegate;
pub use error::{ConfigError, DownloadError};
pub use orchestrator::Orchestrator;
pub use report::{handle_errors, DownloadReport};
pub use request::{DownloadMode, DownloadRequest};
