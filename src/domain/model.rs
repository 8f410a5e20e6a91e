use crate::utils::error::DownloadError;
use chrono::NaiveDate;
use std::path::PathBuf;

/// One month-end archive: where it is published and where it gets unpacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub date: NaiveDate,
    pub url: String,
    pub destination: PathBuf,
}

#[derive(Debug)]
pub enum DownloadStatus {
    /// Archive fetched and every entry written.
    Extracted { files: usize },
    /// Server answered with a non-success status.
    NotAvailable,
    /// Network, archive or filesystem failure.
    Failed(DownloadError),
}

impl DownloadStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadStatus::Extracted { .. })
    }
}

#[derive(Debug)]
pub struct DateOutcome {
    pub target: DownloadTarget,
    pub status: DownloadStatus,
}
