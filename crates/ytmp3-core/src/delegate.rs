//! Boundary to whatever actually fetches and transcodes media

use async_trait::async_trait;

use crate::error::DownloadError;
use crate::options::DownloadOptions;
use crate::report::DownloadReport;

/// Fetches the media behind a URL and materializes transcoded audio locally.
///
/// Implementations honor `options.ignore_errors` by recording per-item
/// failures in the report instead of failing the whole call.
#[async_trait]
pub trait MediaDelegate: Send + Sync {
    async fn download(
        &self,
        options: &DownloadOptions,
        url: &str,
    ) -> Result<DownloadReport, DownloadError>;
}
