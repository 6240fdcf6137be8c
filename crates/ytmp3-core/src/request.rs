//! What the user asked to download

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode {
    Single,
    Playlist,
}

impl DownloadMode {
    /// Prompt shown when the URL is read interactively
    pub fn prompt(&self) -> &'static str {
        match self {
            DownloadMode::Single => "Enter the YouTube video URL: ",
            DownloadMode::Playlist => "Enter the YouTube playlist URL: ",
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Single => write!(f, "single"),
            DownloadMode::Playlist => write!(f, "playlist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    mode: DownloadMode,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, mode: DownloadMode) -> Self {
        Self {
            url: url.into(),
            mode,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> DownloadMode {
        self.mode
    }
}

/// Whether a string looks like a YouTube URL
pub fn looks_like_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/watch")
        || url.contains("youtu.be/")
        || url.contains("youtube.com/playlist")
        || url.contains("youtube.com/shorts")
        || url.contains("music.youtube.com")
}

/// Whether a URL carries a playlist id
pub fn has_playlist_id(url: &str) -> bool {
    url.contains("list=")
}
