use crate::config::DownloadConfig;
use crate::core::url_builder::plan;
use crate::core::{DateOutcome, DownloadStatus, DownloadTarget, Extractor, Fetcher};
use crate::utils::error::Result;
use std::fs;

/// Runs the month-end download plan one date at a time.
///
/// Each date is its own failure boundary: whatever goes wrong while fetching or
/// unpacking one archive is recorded for that date and the loop moves on.
pub struct Downloader<F: Fetcher, E: Extractor> {
    fetcher: F,
    extractor: E,
    config: DownloadConfig,
}

impl<F: Fetcher, E: Extractor> Downloader<F, E> {
    pub fn new(fetcher: F, extractor: E, config: DownloadConfig) -> Self {
        Self {
            fetcher,
            extractor,
            config,
        }
    }

    /// 建立 raw 與 clean 根目錄，失敗時中止整個流程
    pub fn prepare_directories(&self) -> Result<()> {
        fs::create_dir_all(self.config.raw_data_path())?;
        fs::create_dir_all(self.config.clean_data_path())?;
        tracing::debug!(
            "Data directories ready: {}, {}",
            self.config.raw_data_path().display(),
            self.config.clean_data_path().display()
        );
        Ok(())
    }

    pub async fn run(&self) -> Vec<DateOutcome> {
        let targets = plan(&self.config);
        tracing::info!("Processing {} month-end archives", targets.len());

        let mut outcomes = Vec::with_capacity(targets.len());
        for target in targets {
            let status = match self.process(&target).await {
                Ok(Some(files)) => {
                    tracing::info!(
                        "📦 {}: {} files extracted to {}",
                        target.date,
                        files,
                        target.destination.display()
                    );
                    DownloadStatus::Extracted { files }
                }
                Ok(None) => {
                    tracing::warn!("{}: no archive published at {}", target.date, target.url);
                    DownloadStatus::NotAvailable
                }
                Err(e) => {
                    tracing::warn!("{}: {} ({})", target.date, e, e.recovery_suggestion());
                    DownloadStatus::Failed(e)
                }
            };

            if !status.is_success() {
                println!("Download of {} not successful", target.date);
            }

            outcomes.push(DateOutcome { target, status });
        }

        tracing::info!("Finished processing {} dates", outcomes.len());
        outcomes
    }

    /// `Ok(None)` when the server had no archive for this date.
    async fn process(&self, target: &DownloadTarget) -> Result<Option<usize>> {
        let Some(payload) = self.fetcher.fetch(&target.url).await? else {
            return Ok(None);
        };

        let files = self.extractor.extract(&payload, &target.destination)?;
        Ok(Some(files))
    }
}
