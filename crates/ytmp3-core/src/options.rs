//! Download options handed to the media delegate

use serde::Serialize;

/// Format selector: best audio-only stream, falling back to best combined
pub const BEST_AUDIO: &str = "bestaudio/best";

/// Codec every download is transcoded to
pub const TARGET_CODEC: &str = "mp3";

/// Target bitrate in kbps
pub const TARGET_BITRATE_KBPS: u32 = 192;

/// A step applied after the raw media has been retrieved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "key")]
pub enum PostProcessor {
    #[serde(rename = "FFmpegExtractAudio")]
    ExtractAudio {
        preferred_codec: String,
        preferred_quality_kbps: u32,
    },
}

impl PostProcessor {
    /// Extract audio and transcode to MP3 at 192 kbps
    pub fn extract_audio() -> Self {
        PostProcessor::ExtractAudio {
            preferred_codec: TARGET_CODEC.to_string(),
            preferred_quality_kbps: TARGET_BITRATE_KBPS,
        }
    }

    fn args(&self) -> Vec<String> {
        match self {
            PostProcessor::ExtractAudio {
                preferred_codec,
                preferred_quality_kbps,
            } => vec![
                "--extract-audio".to_string(),
                "--audio-format".to_string(),
                preferred_codec.clone(),
                "--audio-quality".to_string(),
                format!("{}K", preferred_quality_kbps),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadOptions {
    pub output_template: String,
    pub format: String,
    /// `Some(false)` walks playlists, `Some(true)` refuses to, `None` leaves the delegate default
    pub no_playlist: Option<bool>,
    pub post_processors: Vec<PostProcessor>,
    pub geo_bypass: bool,
    pub ignore_errors: bool,
}

impl DownloadOptions {
    fn audio(output_template: impl Into<String>) -> Self {
        Self {
            output_template: output_template.into(),
            format: BEST_AUDIO.to_string(),
            no_playlist: None,
            post_processors: vec![PostProcessor::extract_audio()],
            geo_bypass: true,
            ignore_errors: true,
        }
    }

    pub fn playlist(output_template: impl Into<String>) -> Self {
        Self {
            no_playlist: Some(false),
            ..Self::audio(output_template)
        }
    }

    pub fn single(output_template: impl Into<String>) -> Self {
        Self {
            no_playlist: Some(true),
            ..Self::audio(output_template)
        }
    }

    /// Render as yt-dlp command line arguments (the URL is not included)
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            self.output_template.clone(),
            "-f".to_string(),
            self.format.clone(),
        ];

        match self.no_playlist {
            Some(true) => args.push("--no-playlist".to_string()),
            Some(false) => args.push("--yes-playlist".to_string()),
            None => {}
        }

        for step in &self.post_processors {
            args.extend(step.args());
        }

        if self.geo_bypass {
            args.push("--geo-bypass".to_string());
        }
        if self.ignore_errors {
            args.push("--ignore-errors".to_string());
        }

        args
    }
}
