//! Download outcomes and how they are shown to the user

use std::fmt;
use std::io::{self, Write};

use crate::error::DownloadError;

/// One playlist item the delegate skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub extractor: Option<String>,
    pub id: Option<String>,
    pub message: String,
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref extractor) = self.extractor {
            write!(f, "[{}] ", extractor)?;
        }
        if let Some(ref id) = self.id {
            write!(f, "{}: ", id)?;
        }
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub url: String,
    pub failures: Vec<ItemFailure>,
}

impl DownloadReport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Print a download failure to stdout
pub fn handle_errors(error: &DownloadError) {
    let stdout = io::stdout();
    let _ = write_error(&mut stdout.lock(), error);
}

pub fn write_error<W: Write>(out: &mut W, error: &dyn fmt::Display) -> io::Result<()> {
    writeln!(out, "An error occurred: {}", error)
}

/// Report the outcome of one download, returning whether it succeeded.
///
/// A failed download goes through the error handler once. Items skipped
/// inside a successful batch are listed but don't count as failure.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &Result<DownloadReport, DownloadError>,
) -> io::Result<bool> {
    match result {
        Ok(report) => {
            if !report.is_clean() {
                writeln!(out, "{} item(s) could not be downloaded:", report.failures.len())?;
                for failure in &report.failures {
                    writeln!(out, "  {}", failure)?;
                }
            }
            Ok(true)
        }
        Err(e) => {
            write_error(out, e)?;
            Ok(false)
        }
    }
}
