use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytmp3")]
#[command(author, version, about = "Download YouTube audio and playlists as MP3")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Playlist URL (shorthand for `playlist <URL>`; prompted for if omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub options: DownloadArgs,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download every video of a playlist as MP3
    Playlist {
        /// Playlist URL (prompted for if omitted)
        url: Option<String>,

        #[command(flatten)]
        options: DownloadArgs,
    },

    /// Download a single video as MP3
    Video {
        /// Video URL (prompted for if omitted)
        url: Option<String>,

        #[command(flatten)]
        options: DownloadArgs,
    },

    /// Check that yt-dlp and ffmpeg are available
    Doctor,

    /// Show configuration
    Config,
}

#[derive(clap::Args, Clone)]
pub struct DownloadArgs {
    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
