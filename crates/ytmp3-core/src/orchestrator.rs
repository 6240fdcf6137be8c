//! Builds download options and hands them to the delegate

use crate::config::OutputConfig;
use crate::delegate::MediaDelegate;
use crate::error::DownloadError;
use crate::options::DownloadOptions;
use crate::report::DownloadReport;
use crate::request::{has_playlist_id, looks_like_youtube_url, DownloadMode, DownloadRequest};
use tracing::{debug, info, warn};

pub struct Orchestrator<D> {
    delegate: D,
    output: OutputConfig,
}

impl<D: MediaDelegate> Orchestrator<D> {
    pub fn new(delegate: D, output: OutputConfig) -> Self {
        Self { delegate, output }
    }

    /// Options used for a given mode
    pub fn options_for(&self, mode: DownloadMode) -> DownloadOptions {
        match mode {
            DownloadMode::Single => DownloadOptions::single(self.output.video_output()),
            DownloadMode::Playlist => DownloadOptions::playlist(self.output.playlist_output()),
        }
    }

    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadReport, DownloadError> {
        let url = request.url();
        if !looks_like_youtube_url(url) {
            debug!("Not a recognized YouTube URL, passing through: {}", url);
        }
        if request.mode() == DownloadMode::Playlist && !has_playlist_id(url) {
            debug!("Playlist URL has no list id: {}", url);
        }

        let options = self.options_for(request.mode());
        debug!(
            "{} download options: {}",
            request.mode(),
            serde_json::to_string(&options).unwrap_or_default()
        );

        let report = self.delegate.download(&options, url).await?;

        if report.is_clean() {
            info!("Finished {} download: {}", request.mode(), url);
        } else {
            warn!(
                "Finished {} download with {} skipped item(s): {}",
                request.mode(),
                report.failures.len(),
                url
            );
        }

        Ok(report)
    }

    /// Download every item of a playlist, skipping items that fail
    pub async fn download_playlist(&self, playlist_url: &str) -> Result<DownloadReport, DownloadError> {
        self.download(&DownloadRequest::new(playlist_url, DownloadMode::Playlist))
            .await
    }

    /// Download a single video
    pub async fn download_video(&self, video_url: &str) -> Result<DownloadReport, DownloadError> {
        self.download(&DownloadRequest::new(video_url, DownloadMode::Single))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PostProcessor, BEST_AUDIO};
    use crate::report::write_report;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeDelegate {
        calls: Mutex<Vec<(DownloadOptions, String)>>,
        fail_with: Option<String>,
    }

    impl FakeDelegate {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(DownloadOptions, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MediaDelegate for FakeDelegate {
        async fn download(
            &self,
            options: &DownloadOptions,
            url: &str,
        ) -> Result<DownloadReport, DownloadError> {
            self.calls
                .lock()
                .unwrap()
                .push((options.clone(), url.to_string()));
            match self.fail_with {
                Some(ref message) => Err(DownloadError::Backend(message.clone())),
                None => Ok(DownloadReport::new(url)),
            }
        }
    }

    fn output() -> OutputConfig {
        OutputConfig {
            playlist_directory: PathBuf::from("/music"),
            ..OutputConfig::default()
        }
    }

    #[tokio::test]
    async fn test_download_video() {
        let orchestrator = Orchestrator::new(FakeDelegate::default(), output());

        let report = orchestrator
            .download_video("https://example.com/watch?v=abc")
            .await
            .unwrap();
        assert!(report.is_clean());

        let calls = orchestrator.delegate.calls();
        assert_eq!(calls.len(), 1);
        let (options, url) = &calls[0];
        assert_eq!(url, "https://example.com/watch?v=abc");
        assert_eq!(options.format, BEST_AUDIO);
        assert_eq!(options.output_template, "%(title)s.%(ext)s");
        assert_eq!(options.no_playlist, Some(true));
        assert_eq!(options.post_processors, vec![PostProcessor::extract_audio()]);
        assert_eq!(
            options.post_processors[0],
            PostProcessor::ExtractAudio {
                preferred_codec: "mp3".to_string(),
                preferred_quality_kbps: 192,
            }
        );
        assert!(options.geo_bypass);
        assert!(options.ignore_errors);
    }

    #[tokio::test]
    async fn test_download_playlist() {
        let orchestrator = Orchestrator::new(FakeDelegate::default(), output());

        orchestrator
            .download_playlist("https://youtube.com/playlist?list=PL1")
            .await
            .unwrap();

        let calls = orchestrator.delegate.calls();
        assert_eq!(calls.len(), 1);
        let (options, _) = &calls[0];
        assert_eq!(options.no_playlist, Some(false));
        assert_eq!(
            options.output_template,
            "/music/%(playlist)s/%(playlist_index)s - %(title)s.%(ext)s"
        );
        assert_eq!(options.post_processors.len(), 1);
    }

    #[tokio::test]
    async fn test_delegate_failure_is_returned_not_raised() {
        let orchestrator = Orchestrator::new(FakeDelegate::failing("network down"), output());

        let result = orchestrator
            .download_playlist("https://youtube.com/playlist?list=PL1")
            .await;
        assert_eq!(orchestrator.delegate.calls().len(), 1);

        let mut out = Vec::new();
        let ok = write_report(&mut out, &result).unwrap();
        assert!(!ok);
        assert_eq!(String::from_utf8(out).unwrap(), "An error occurred: network down\n");
    }

    #[tokio::test]
    async fn test_request_mode_dispatch() {
        let orchestrator = Orchestrator::new(FakeDelegate::default(), output());

        let request = DownloadRequest::new("https://youtu.be/abc", DownloadMode::Single);
        orchestrator.download(&request).await.unwrap();

        let calls = orchestrator.delegate.calls();
        assert_eq!(calls[0].0, orchestrator.options_for(DownloadMode::Single));
    }
}
